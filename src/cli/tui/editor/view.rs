//! Catalog page: add form, book table, status and help lines

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::catalog::Field;
use super::state::{BookForm, CatalogView, Focus};
use super::theme::Theme;

pub fn render(frame: &mut Frame, view: &CatalogView, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Title
            Constraint::Length(6),      // Add form
            Constraint::Min(5),         // Book table
            Constraint::Length(1),      // Status
            Constraint::Length(1),      // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" Book Management ", theme.title),
        Span::styled(
            format!("({} books)", view.session.store().len()),
            theme.muted,
        ),
    ]));
    frame.render_widget(title, chunks[0]);

    render_form(frame, chunks[1], view, theme);
    render_table(frame, chunks[2], view, theme);
    render_status(frame, chunks[3], view, theme);
    render_help(frame, chunks[4], view, theme);
}

fn render_form(frame: &mut Frame, area: Rect, view: &CatalogView, theme: &Theme) {
    let block = Block::default()
        .title(" Add New Book ")
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Inputs
            Constraint::Length(1),      // Button
        ])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(rows[0]);

    for field in Field::ALL {
        let focused = !view.is_editing() && view.focus == Focus::Field(field);
        render_input(frame, columns[field.index()], &view.new_form, field, focused, theme);
    }

    let disabled = view.session.add_disabled();
    let button_style = if disabled {
        theme.muted
    } else if view.focus == Focus::AddButton {
        theme.focused
    } else {
        theme.highlight
    };
    let mut spans = vec![Span::styled("[ ➕ Add Book ]", button_style)];
    if view.focus == Focus::AddButton && !view.is_editing() {
        spans.insert(0, Span::styled("▶ ", theme.focused));
    }
    if disabled {
        spans.push(Span::styled("  all fields required", theme.muted));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    form: &BookForm,
    field: Field,
    focused: bool,
    theme: &Theme,
) {
    let input = form.input(field);
    let border_style = if focused { theme.focused } else { Style::default() };

    // Keep the cursor visible in narrow boxes
    let width = area.width.saturating_sub(2) as usize;
    let scroll = input.visual_scroll(width.max(1));

    let paragraph = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .title(field.label())
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);

    if focused {
        let cursor = input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position((area.x + 1 + cursor, area.y + 1));
    }
}

fn render_table(frame: &mut Frame, area: Rect, view: &CatalogView, theme: &Theme) {
    let store = view.session.store();

    let mut header_cells = vec![Cell::from("S.No")];
    header_cells.extend(Field::ALL.iter().map(|f| Cell::from(f.label())));
    header_cells.push(Cell::from("Actions"));
    let header = Row::new(header_cells).style(theme.header);

    let rows = store.records().iter().enumerate().map(|(index, record)| {
        let mut cells = vec![Cell::from(record.sequence_number().to_string())];
        if store.is_editing(index) {
            cells.extend(Field::ALL.iter().map(|&field| {
                edit_cell(&view.edit_form, field, theme)
            }));
            let save_style = if view.session.save_disabled() { theme.muted } else { theme.success };
            cells.push(Cell::from(Span::styled("⏎ Save  Esc Cancel", save_style)));
        } else {
            cells.extend(Field::ALL.iter().map(|&field| Cell::from(record.get(field).to_string())));
            cells.push(Cell::from(Span::styled("e Edit  d Delete", theme.muted)));
        }
        Row::new(cells)
    });

    let widths = [
        Constraint::Length(5),
        Constraint::Percentage(22),
        Constraint::Percentage(16),
        Constraint::Percentage(12),
        Constraint::Length(18),
        Constraint::Percentage(16),
        Constraint::Min(18),
    ];

    let table_focused = view.focus == Focus::Table || view.is_editing();
    let border_style = if table_focused { theme.focused } else { Style::default() };
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(" Books ")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .row_highlight_style(theme.selected);

    let mut table_state = TableState::default();
    if table_focused && !store.is_empty() {
        table_state.select(Some(view.selected_row));
    }
    frame.render_stateful_widget(table, area, &mut table_state);

    if store.is_empty() {
        let hint = Paragraph::new(Span::styled("  No books yet. Fill in the form above and press Enter.", theme.muted));
        let hint_area = Rect {
            x: area.x + 1,
            y: area.y + 2,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        if area.height > 3 {
            frame.render_widget(hint, hint_area);
        }
    }
}

fn edit_cell<'a>(form: &'a BookForm, field: Field, theme: &Theme) -> Cell<'a> {
    let value = form.value(field);
    if form.current_field == field {
        Cell::from(Line::from(vec![
            Span::styled(value, theme.editing),
            Span::styled("█", theme.focused),
        ]))
    } else {
        Cell::from(Span::styled(value, theme.focused))
    }
}

fn render_status(frame: &mut Frame, area: Rect, view: &CatalogView, theme: &Theme) {
    if let Some(status) = &view.status {
        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(Theme::status_icon(status.kind), theme.status_style(status.kind)),
            Span::raw(" "),
            Span::styled(status.text.as_str(), theme.status_style(status.kind)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn render_help(frame: &mut Frame, area: Rect, view: &CatalogView, theme: &Theme) {
    let keys: &[(&str, &str)] = if view.is_editing() {
        &[("Tab", "Next field"), ("Enter", "Save"), ("Esc", "Cancel"), ("↑↓", "Move"), ("Ctrl+D", "Delete")]
    } else if view.focus == Focus::Table {
        &[("↑↓", "Move"), ("e", "Edit"), ("d", "Delete"), ("Tab", "Focus"), ("Esc", "Quit")]
    } else {
        &[("Tab", "Next"), ("Enter", "Add Book"), ("Esc", "Quit")]
    };

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, action)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  •  ", theme.muted));
        }
        spans.push(Span::styled(*key, theme.highlight));
        spans.push(Span::raw(format!(" {}", action)));
    }

    let help = Paragraph::new(Line::from(spans)).style(theme.muted);
    frame.render_widget(help, area);
}
