//! Draft and submitted record types

use crate::types::{AgeGroup, ContactPermission, Field};
use crate::validation::{self, ErrorSet};
use serde::{Deserialize, Serialize};

/// Raw form values currently being edited.
///
/// Every field is the text the user entered (or the wire value of the chosen
/// option); nothing is trimmed or normalized here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub age_group: String,
    pub feedback: String,
    pub contact_permission: String,
}

impl Draft {
    /// Current raw value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::AgeGroup => &self.age_group,
            Field::Feedback => &self.feedback,
            Field::ContactPermission => &self.contact_permission,
        }
    }

    /// Mutable access to a field's raw value
    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::AgeGroup => &mut self.age_group,
            Field::Feedback => &mut self.feedback,
            Field::ContactPermission => &mut self.contact_permission,
        }
    }

    /// Overwrite a field's raw value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// True when no field holds any text
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A validated feedback submission.
///
/// Only constructible from a [`Draft`] that passes every field rule, so every
/// element of the submitted list satisfies the form's constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub name: String,
    pub email: String,
    pub age_group: AgeGroup,
    pub feedback: String,
    pub contact_permission: ContactPermission,
}

impl Record {
    /// Validate a draft and convert it, or return the full error set
    pub fn from_draft(draft: &Draft) -> Result<Self, ErrorSet> {
        let errors = validation::validate(draft);
        if !errors.is_empty() {
            return Err(errors);
        }
        match (
            draft.age_group.parse::<AgeGroup>(),
            draft.contact_permission.parse::<ContactPermission>(),
        ) {
            (Ok(age_group), Ok(contact_permission)) => Ok(Self {
                name: draft.name.clone(),
                email: draft.email.clone(),
                age_group,
                feedback: draft.feedback.clone(),
                contact_permission,
            }),
            _ => Err(errors),
        }
    }
}

impl TryFrom<&Draft> for Record {
    type Error = ErrorSet;

    fn try_from(draft: &Draft) -> Result<Self, Self::Error> {
        Self::from_draft(draft)
    }
}

impl From<&Record> for Draft {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            age_group: record.age_group.to_string(),
            feedback: record.feedback.clone(),
            contact_permission: record.contact_permission.to_string(),
        }
    }
}
