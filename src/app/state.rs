//! Application state definitions
//!
//! View-only state of the terminal UI: which pane has focus, which form slot
//! or entry is selected, and the status line. Form data itself lives in the
//! [`crate::engine::FormEngine`].

use crate::theme::StatusKind;
use crate::types::Field;
use strum::EnumCount;

/// Pane that currently receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pane {
    /// The feedback form
    #[default]
    Form,
    /// The list of submitted feedbacks
    Entries,
}

impl Pane {
    pub fn toggled(self) -> Self {
        match self {
            Self::Form => Self::Entries,
            Self::Entries => Self::Form,
        }
    }
}

/// Focusable slot in the form: the five fields then the two buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormSlot {
    Field(Field),
    SubmitButton,
    ResetButton,
}

impl Default for FormSlot {
    fn default() -> Self {
        Self::Field(Field::Name)
    }
}

impl FormSlot {
    /// Number of focusable slots
    pub const COUNT: usize = Field::COUNT + 2;

    pub fn index(self) -> usize {
        match self {
            Self::Field(field) => field.position(),
            Self::SubmitButton => Field::COUNT,
            Self::ResetButton => Field::COUNT + 1,
        }
    }

    pub fn from_index(index: usize) -> Self {
        let index = index % Self::COUNT;
        match Field::from_position(index) {
            Some(field) => Self::Field(field),
            None if index == Field::COUNT => Self::SubmitButton,
            None => Self::ResetButton,
        }
    }

    /// Next slot, wrapping from the Reset button back to the first field
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous slot, wrapping from the first field to the Reset button
    pub fn previous(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Self::Field(field) => Some(field),
            _ => None,
        }
    }
}

/// Status line message
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Main UI state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Pane receiving key presses
    pub pane: Pane,
    /// Focused slot in the form pane
    pub focus: FormSlot,
    /// Selected row in the entries pane
    pub selected_entry: usize,
    /// Status message for user feedback
    pub status: StatusMessage,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Set when the user asked to leave
    pub should_quit: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            pane: Pane::Form,
            focus: FormSlot::default(),
            selected_entry: 0,
            status: StatusMessage::new(StatusKind::Info, "Welcome! Tell us what you think."),
            help_visible: false,
            should_quit: false,
        }
    }
}

impl UiState {
    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = StatusMessage::new(kind, text);
    }

    /// Keep the entry selection inside a list of `len` entries
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected_entry = self.selected_entry.min(len.saturating_sub(1));
    }
}
