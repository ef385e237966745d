//! Events the view layer dispatches into the engine
//!
//! Serialized as internally tagged JSON so a session can be scripted:
//!
//! ```json
//! [
//!   { "type": "set_field", "field": "name", "value": "Amy" },
//!   { "type": "submit" },
//!   { "type": "edit", "index": 0 }
//! ]
//! ```

use crate::types::Field;
use serde::{Deserialize, Serialize};

/// One user action against the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// Field name is kept as raw text so unknown names reach the engine
    SetField { field: String, value: String },
    Submit,
    Reset,
    Edit { index: usize },
    Delete { index: usize },
}

impl FormEvent {
    /// Convenience constructor for a typed field
    pub fn set(field: Field, value: impl Into<String>) -> Self {
        Self::SetField {
            field: field.to_string(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let events: Vec<FormEvent> = serde_json::from_str(
            r#"[
                {"type":"set_field","field":"ageGroup","value":"55+"},
                {"type":"submit"},
                {"type":"reset"},
                {"type":"edit","index":2},
                {"type":"delete","index":0}
            ]"#,
        )
        .expect("parse events");

        assert_eq!(
            events,
            vec![
                FormEvent::set(Field::AgeGroup, "55+"),
                FormEvent::Submit,
                FormEvent::Reset,
                FormEvent::Edit { index: 2 },
                FormEvent::Delete { index: 0 },
            ]
        );
    }

    #[test]
    fn test_unknown_event_type_rejected() {
        let result: Result<FormEvent, _> = serde_json::from_str(r#"{"type":"undo"}"#);
        assert!(result.is_err());
    }
}
