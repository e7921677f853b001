use ratatui::style::{Color, Modifier, Style};

use super::state::StatusKind;

/// Consistent theme for the TUI
pub struct Theme {
    pub title: Style,
    pub selected: Style,
    pub focused: Style,
    pub editing: Style,
    pub success: Style,
    pub warning: Style,
    pub info: Style,
    pub muted: Style,
    pub highlight: Style,
    pub header: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            selected: Style::default()
                .bg(Color::Rgb(50, 50, 80))
                .add_modifier(Modifier::BOLD),
            focused: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            editing: Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            warning: Style::default()
                .fg(Color::Yellow),
            info: Style::default()
                .fg(Color::Blue),
            muted: Style::default()
                .fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header: Style::default()
                .bg(Color::Rgb(40, 40, 40))
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Get style for a status message
    pub fn status_style(&self, kind: StatusKind) -> Style {
        match kind {
            StatusKind::Info => self.info,
            StatusKind::Success => self.success,
            StatusKind::Warning => self.warning,
        }
    }

    /// Get icon for a status message
    pub fn status_icon(kind: StatusKind) -> &'static str {
        match kind {
            StatusKind::Info => "ℹ",
            StatusKind::Success => "✓",
            StatusKind::Warning => "⚠",
        }
    }
}
