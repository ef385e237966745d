//! Read-only views of engine state handed to the view layer

use crate::record::{Draft, Record};
use crate::validation::ErrorSet;
use serde::Serialize;
use std::fmt;

/// Submission mode of the form.
///
/// ```text
/// Creating --edit(i)--> Editing(i)
/// Editing(i) --edit(j)--> Editing(j)
/// Editing(i) --accepted submit--> Creating
/// Creating --accepted submit--> Creating
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "mode", content = "index", rename_all = "snake_case")]
pub enum Mode {
    /// Next accepted submit appends a new entry
    #[default]
    Creating,
    /// Next accepted submit overwrites the entry at this index
    Editing(usize),
}

impl Mode {
    pub fn from_editing_index(index: Option<usize>) -> Self {
        match index {
            Some(i) => Self::Editing(i),
            None => Self::Creating,
        }
    }

    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Label for the submit button in this mode
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Creating => "Submit",
            Self::Editing(_) => "Update",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Creating => write!(f, "Creating"),
            Self::Editing(i) => write!(f, "Editing({i})"),
        }
    }
}

/// Result of a submit attempt.
///
/// A rejected submit is an expected outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// The draft was stored at `index`; `updated` is true for an overwrite
    Accepted { index: usize, updated: bool },
    /// The draft failed validation; these errors are now displayed
    Rejected { errors: ErrorSet },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Full engine state after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub draft: Draft,
    pub errors: ErrorSet,
    pub records: Vec<Record>,
    pub editing_index: Option<usize>,
    pub is_editing: bool,
    pub progress: u8,
}

impl Snapshot {
    pub fn mode(&self) -> Mode {
        Mode::from_editing_index(self.editing_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_editing_index() {
        assert_eq!(Mode::from_editing_index(None), Mode::Creating);
        assert_eq!(Mode::from_editing_index(Some(3)), Mode::Editing(3));
        assert!(Mode::Editing(0).is_editing());
        assert!(!Mode::default().is_editing());
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(Mode::Creating.submit_label(), "Submit");
        assert_eq!(Mode::Editing(1).submit_label(), "Update");
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::Creating.to_string(), "Creating");
        assert_eq!(Mode::Editing(2).to_string(), "Editing(2)");
    }
}
