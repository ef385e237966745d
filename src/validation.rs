//! Field validation rules and form progress
//!
//! Every rule is a predicate over a single field of a [`Draft`]. Rules never
//! look at other fields, so a field's verdict is the same whether the rest
//! of the form is filled in or not. Both [`validate`] and [`progress`] are
//! built from the same [`check_field`] so they can never disagree.

use crate::record::Draft;
use crate::types::{AgeGroup, ContactPermission, Field};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;
use strum::{EnumCount, IntoEnumIterator};

/// Loose `token@token.token` shape, unanchored
static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const AGE_GROUP_REQUIRED: &str = "Select an age group";
pub const FEEDBACK_REQUIRED: &str = "Feedback is required";
pub const CONTACT_PERMISSION_REQUIRED: &str = "Select yes or no";

/// Field name to message map, ordered by field order.
///
/// A field is present only while its value fails validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    errors: BTreeMap<Field, String>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a field, if it is currently flagged
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    /// Flagged fields in form order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub(crate) fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Hide a single field's message without re-validating
    pub(crate) fn clear_field(&mut self, field: Field) -> Option<String> {
        self.errors.remove(&field)
    }

    pub(crate) fn clear(&mut self) {
        self.errors.clear();
    }
}

impl fmt::Display for ErrorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Whether `email` has the loose `token@token.token` shape
pub fn is_email_shaped(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Check one field of the draft, returning the message if it fails
pub fn check_field(draft: &Draft, field: Field) -> Option<&'static str> {
    let value = draft.get(field);
    match field {
        Field::Name if value.trim().is_empty() => Some(NAME_REQUIRED),
        Field::Email if value.trim().is_empty() => Some(EMAIL_REQUIRED),
        Field::Email if !is_email_shaped(value) => Some(EMAIL_INVALID),
        Field::AgeGroup if value.parse::<AgeGroup>().is_err() => Some(AGE_GROUP_REQUIRED),
        Field::Feedback if value.trim().is_empty() => Some(FEEDBACK_REQUIRED),
        Field::ContactPermission if value.parse::<ContactPermission>().is_err() => {
            Some(CONTACT_PERMISSION_REQUIRED)
        }
        _ => None,
    }
}

/// Recompute the full error set for a draft
pub fn validate(draft: &Draft) -> ErrorSet {
    let mut errors = ErrorSet::new();
    for field in Field::iter() {
        if let Some(message) = check_field(draft, field) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Number of fields whose value currently passes its rule
pub fn completed_fields(draft: &Draft) -> usize {
    Field::iter()
        .filter(|field| check_field(draft, *field).is_none())
        .count()
}

/// Completion percentage, `round(completed / 5 * 100)`
pub fn progress(draft: &Draft) -> u8 {
    let completed = completed_fields(draft) as f64;
    ((completed / Field::COUNT as f64) * 100.0).round() as u8
}
