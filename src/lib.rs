//! Customer Feedback Form Library
//!
//! This library provides the form engine (draft, validation, progress and
//! the submitted-entry list) and the terminal view layer that drives it.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod record;
pub mod replay;
pub mod theme;
pub mod types;
pub mod ui;
pub mod validation;

// Re-export main types for convenience
pub use app::App;
pub use config::EngineOptions;
pub use engine::{FormEngine, Mode, Snapshot, SubmitOutcome};
pub use error::FormError;
pub use event::FormEvent;
pub use record::{Draft, Record};
pub use types::{AgeGroup, ContactPermission, Field};
pub use validation::ErrorSet;
