//! Type-safe field and option types for the feedback form
//!
//! The form has a fixed set of fields and two closed option sets. These are
//! Rust enums rather than strings so that the view layer and the engine agree
//! on names at compile time. The wire names (`ageGroup`, `18-24`, `YES`, ...)
//! are what the view layer and replay scripts use.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

/// A form field, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter, EnumCount)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    AgeGroup,
    Feedback,
    ContactPermission,
}

impl Field {
    /// Human-readable label used by the view layer
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::AgeGroup => "Age Group",
            Self::Feedback => "Feedback",
            Self::ContactPermission => "Contact Permission",
        }
    }

    /// Placeholder shown while the field is empty
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Enter your name",
            Self::Email => "Enter your email",
            Self::AgeGroup => "Select your age group",
            Self::Feedback => "Write your feedback here...",
            Self::ContactPermission => "May we contact you?",
        }
    }

    /// Whether the field takes one of a closed set of values
    pub fn is_choice(self) -> bool {
        matches!(self, Self::AgeGroup | Self::ContactPermission)
    }

    /// Wire values accepted by a choice field, empty for free-text fields
    pub fn options(self) -> Vec<String> {
        match self {
            Self::AgeGroup => AgeGroup::iter().map(|a| a.to_string()).collect(),
            Self::ContactPermission => ContactPermission::iter().map(|c| c.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    /// Position of the field in form order (0-based)
    pub fn position(self) -> usize {
        self as usize
    }

    /// Field at a form-order position
    pub fn from_position(position: usize) -> Option<Self> {
        Self::iter().nth(position)
    }
}

/// Age bracket offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum AgeGroup {
    #[serde(rename = "18-24")]
    #[strum(serialize = "18-24")]
    From18To24,
    #[serde(rename = "25-34")]
    #[strum(serialize = "25-34")]
    From25To34,
    #[serde(rename = "35-44")]
    #[strum(serialize = "35-44")]
    From35To44,
    #[serde(rename = "45-54")]
    #[strum(serialize = "45-54")]
    From45To54,
    #[serde(rename = "55+")]
    #[strum(serialize = "55+")]
    Over55,
}

impl AgeGroup {
    /// Display label with a typographic range dash
    pub fn label(self) -> &'static str {
        match self {
            Self::From18To24 => "18 – 24",
            Self::From25To34 => "25 – 34",
            Self::From35To44 => "35 – 44",
            Self::From45To54 => "45 – 54",
            Self::Over55 => "55+",
        }
    }
}

/// Whether the submitter agreed to be contacted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum ContactPermission {
    Yes,
    No,
}

impl ContactPermission {
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}
