//! Engine modules: the form state machine and the views it hands out.
//!
//! The engine sits between the view layer (terminal UI or replay script) and
//! the form data. It performs no I/O; every operation completes immediately.

pub mod form;
pub mod snapshot;

pub use form::FormEngine;
pub use snapshot::{Mode, Snapshot, SubmitOutcome};
