use std::time::{Duration, Instant};
use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info};

use crate::catalog::SubmitGuard;
use crate::Result;
use super::events::AppEvent;
use super::state::*;
use super::theme::Theme;

/// How often the input task checks whether the app has gone away
const INPUT_POLL: Duration = Duration::from_millis(100);
/// Tick interval when no input arrives
const TICK: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App {
    /// Page state
    view: CatalogView,
    /// Whether the app should quit
    should_quit: bool,
    /// Theme for styling
    theme: Theme,
    /// Last time Ctrl+C was pressed
    last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new app instance
    pub fn new(guard: SubmitGuard) -> Self {
        Self {
            view: CatalogView::new(guard),
            should_quit: false,
            theme: Theme::default(),
            last_ctrl_c: None,
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();
        tokio::task::spawn_blocking(move || read_terminal_events(event_tx));

        info!(guard = ?self.view.session.store().guard(), "catalog editor started");
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup; dropping the receiver stops the input task
        ratatui::restore();
        drop(event_rx);
        info!(records = self.view.session.store().len(), "catalog editor closed");
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| super::view::render(frame, &self.view, &self.theme))?;

            match time::timeout(TICK, event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Handle an event
    pub fn handle_event(&mut self, event: AppEvent) {
        // Handle global keys first
        if let AppEvent::Key(key) = &event {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('q') => {
                        self.should_quit = true;
                        return;
                    }
                    KeyCode::Char('c') => {
                        // Exit on double Ctrl+C within a second
                        let now = Instant::now();
                        if let Some(last) = self.last_ctrl_c {
                            if now.duration_since(last) < Duration::from_secs(1) {
                                self.should_quit = true;
                                return;
                            }
                        }
                        self.last_ctrl_c = Some(now);
                        self.view
                            .set_status(StatusKind::Info, "Press Ctrl+C again to quit");
                        return;
                    }
                    _ => {}
                }
            }
        }

        if Self::handle_catalog_event(&mut self.view, event) == Transition::Quit {
            self.should_quit = true;
        }
    }

    /// Route an event to the page
    pub fn handle_catalog_event(view: &mut CatalogView, event: AppEvent) -> Transition {
        match event {
            AppEvent::Key(key) => {
                if view.is_editing() {
                    Self::handle_edit_key(view, key);
                    Transition::Stay
                } else {
                    Self::handle_page_key(view, key)
                }
            }
            AppEvent::Tick => {
                view.tick();
                Transition::Stay
            }
            AppEvent::Resize(..) => Transition::Stay,
        }
    }

    /// Keys while a row is being edited inline
    ///
    /// The other rows stay live: Up/Down move the selection and Ctrl+D
    /// deletes the selected row, even the one being edited.
    fn handle_edit_key(view: &mut CatalogView, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('d') {
            Self::delete_selected(view);
            return;
        }

        match key.code {
            KeyCode::Up => Self::select_prev(view),
            KeyCode::Down => Self::select_next(view),
            KeyCode::Esc => {
                view.session.cancel();
                view.set_status(StatusKind::Info, "Edit cancelled");
            }
            KeyCode::Enter => {
                let row = view.session.store().editing().map(|i| i + 1).unwrap_or_default();
                if view.session.save() {
                    view.set_status(StatusKind::Success, format!("Saved book #{}", row));
                } else if view.is_editing() {
                    view.set_status(StatusKind::Warning, "All fields are required to save");
                }
            }
            KeyCode::Tab => {
                view.edit_form.current_field = view.edit_form.current_field.next();
            }
            KeyCode::BackTab => {
                view.edit_form.current_field = view.edit_form.current_field.prev();
            }
            _ => {
                if let Some((field, value)) = view.edit_form.handle_key(key) {
                    view.session.input_edit(field, value);
                }
            }
        }
    }

    /// Keys on the form and table when nothing is being edited
    fn handle_page_key(view: &mut CatalogView, key: KeyEvent) -> Transition {
        match key.code {
            KeyCode::Esc => return Transition::Quit,
            KeyCode::Tab => {
                view.focus = view.focus.next();
                return Transition::Stay;
            }
            KeyCode::BackTab => {
                view.focus = view.focus.prev();
                return Transition::Stay;
            }
            _ => {}
        }

        match view.focus {
            Focus::Field(field) => match key.code {
                KeyCode::Enter => Self::press_add(view),
                _ => {
                    view.new_form.current_field = field;
                    if let Some((field, value)) = view.new_form.handle_key(key) {
                        view.session.input_new(field, value);
                    }
                }
            },
            Focus::AddButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    Self::press_add(view);
                }
            }
            Focus::Table => match key.code {
                KeyCode::Up => Self::select_prev(view),
                KeyCode::Down => Self::select_next(view),
                KeyCode::Char('e') | KeyCode::Enter => {
                    if view.session.edit(view.selected_row) {
                        view.edit_form.load(view.session.edit_draft());
                        view.edit_form.current_field = Default::default();
                    }
                }
                KeyCode::Char('d') | KeyCode::Delete => Self::delete_selected(view),
                _ => {}
            },
        }
        Transition::Stay
    }

    fn select_prev(view: &mut CatalogView) {
        view.selected_row = view.selected_row.saturating_sub(1);
    }

    fn select_next(view: &mut CatalogView) {
        if view.selected_row + 1 < view.session.store().len() {
            view.selected_row += 1;
        }
    }

    // Leaves any active edit pointing at its old index
    fn delete_selected(view: &mut CatalogView) {
        if let Some(removed) = view.session.delete(view.selected_row) {
            view.clamp_selection();
            view.set_status(
                StatusKind::Success,
                format!("Deleted \"{}\"", removed.title),
            );
        }
    }

    fn press_add(view: &mut CatalogView) {
        if view.session.add_disabled() {
            view.set_status(StatusKind::Warning, "Fill in every field to add a book");
            return;
        }
        if let Some(sequence_number) = view.session.add() {
            view.new_form.reset();
            view.focus = Focus::Field(Default::default());
            view.set_status(StatusKind::Success, format!("Added book #{}", sequence_number));
        }
    }
}

/// Blocking input reader; exits once the receiver is dropped
fn read_terminal_events(event_tx: UnboundedSender<AppEvent>) {
    while !event_tx.is_closed() {
        match event::poll(INPUT_POLL) {
            Ok(true) => {}
            Ok(false) => continue,
            Err(e) => {
                debug!(error = %e, "terminal poll failed");
                break;
            }
        }

        let app_event = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            Ok(Event::Resize(width, height)) => AppEvent::Resize(width, height),
            Ok(_) => continue,
            Err(e) => {
                debug!(error = %e, "terminal read failed");
                break;
            }
        };

        if event_tx.send(app_event).is_err() {
            break;
        }
    }
}
