use ratatui::crossterm::event::{Event, KeyEvent};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use crate::catalog::{Draft, Field, Session, SubmitGuard};

/// Which element of the page has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// An input of the add form
    Field(Field),
    AddButton,
    Table,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::Title)
    }
}

impl Focus {
    /// Tab order: form fields, add button, table
    pub fn next(&self) -> Focus {
        match self {
            Focus::Field(Field::Isbn) => Focus::AddButton,
            Focus::Field(field) => Focus::Field(field.next()),
            Focus::AddButton => Focus::Table,
            Focus::Table => Focus::Field(Field::Title),
        }
    }

    pub fn prev(&self) -> Focus {
        match self {
            Focus::Field(Field::Title) => Focus::Table,
            Focus::Field(field) => Focus::Field(field.prev()),
            Focus::AddButton => Focus::Field(Field::Isbn),
            Focus::Table => Focus::AddButton,
        }
    }
}

/// Text inputs for the five book fields
#[derive(Debug, Default)]
pub struct BookForm {
    inputs: [Input; 5],
    pub current_field: Field,
}

impl BookForm {
    pub fn input(&self, field: Field) -> &Input {
        &self.inputs[field.index()]
    }

    pub fn value(&self, field: Field) -> &str {
        self.input(field).value()
    }

    /// Replace every input with the draft's values, cursor at the end
    pub fn load(&mut self, draft: &Draft) {
        for field in Field::ALL {
            self.inputs[field.index()] = Input::new(draft.get(field).to_string());
        }
    }

    pub fn reset(&mut self) {
        for input in &mut self.inputs {
            input.reset();
        }
        self.current_field = Field::default();
    }

    /// Feed a key to the current input
    ///
    /// Returns the field and its new value when the text changed; cursor
    /// movement alone returns `None`.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<(Field, String)> {
        let field = self.current_field;
        let input = &mut self.inputs[field.index()];
        let before = input.value().to_string();
        input.handle_event(&Event::Key(key));
        if input.value() != before {
            Some((field, input.value().to_string()))
        } else {
            None
        }
    }
}

/// Severity of a status-line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
}

/// Transient message shown under the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    /// Ticks remaining before the message disappears
    pub ticks_left: u16,
}

/// Ticks a status message stays visible
pub const STATUS_TICKS: u16 = 12;

/// Outcome of handling a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Quit,
}

/// Full state of the catalog page
#[derive(Debug)]
pub struct CatalogView {
    pub session: Session,
    pub new_form: BookForm,
    pub edit_form: BookForm,
    pub focus: Focus,
    pub selected_row: usize,
    pub status: Option<StatusMessage>,
}

impl CatalogView {
    pub fn new(guard: SubmitGuard) -> Self {
        Self {
            session: Session::new(guard),
            new_form: BookForm::default(),
            edit_form: BookForm::default(),
            focus: Focus::default(),
            selected_row: 0,
            status: None,
        }
    }

    /// True while a row is being edited inline
    pub fn is_editing(&self) -> bool {
        self.session.store().editing().is_some()
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            ticks_left: STATUS_TICKS,
        });
    }

    /// Age the status message by one tick
    pub fn tick(&mut self) {
        if let Some(status) = &mut self.status {
            status.ticks_left = status.ticks_left.saturating_sub(1);
            if status.ticks_left == 0 {
                self.status = None;
            }
        }
    }

    /// Keep the selection inside the table
    pub fn clamp_selection(&mut self) {
        let len = self.session.store().len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }
}
