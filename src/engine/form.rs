//! Form engine
//!
//! Owns the draft, the displayed errors, the submitted entries and the
//! editing index, and is the only thing that mutates them. The view layer
//! calls one operation per user action and re-renders from [`FormEngine::snapshot`].
//!
//! # Invariants
//!
//! - Every stored [`Record`] passed validation when it was stored
//! - The error set is only ever replaced wholesale by a submit, or shrunk by
//!   clearing a single field when that field's value changes
//! - With `rebase_editing_on_delete`, the editing index always refers to the
//!   entry the user chose to edit

use super::snapshot::{Mode, Snapshot, SubmitOutcome};
use crate::config::EngineOptions;
use crate::error::{FormError, Result};
use crate::event::FormEvent;
use crate::record::{Draft, Record};
use crate::types::Field;
use crate::validation::{self, ErrorSet};
use tracing::{debug, info, warn};

/// Feedback form state machine
#[derive(Debug, Clone, Default)]
pub struct FormEngine {
    options: EngineOptions,
    draft: Draft,
    errors: ErrorSet,
    records: Vec<Record>,
    editing_index: Option<usize>,
}

impl FormEngine {
    /// Create an engine with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit policy options
    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> EngineOptions {
        self.options
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Errors currently displayed (as of the last submit, minus cleared fields)
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn editing_index(&self) -> Option<usize> {
        self.editing_index
    }

    pub fn mode(&self) -> Mode {
        Mode::from_editing_index(self.editing_index)
    }

    pub fn is_editing(&self) -> bool {
        self.editing_index.is_some()
    }

    /// Set a field by its wire name (`name`, `email`, `ageGroup`, ...)
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field: Field = name.parse().map_err(|_| {
            warn!("set_field called with unknown field {:?}", name);
            FormError::invalid_field(name)
        })?;
        self.set(field, value);
        Ok(())
    }

    /// Set a field and hide its error message.
    ///
    /// Does not re-validate: the message comes back only on the next submit.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        if self.errors.clear_field(field).is_some() {
            debug!("Cleared error for {}", field);
        }
    }

    /// Validate the current draft without touching stored state
    pub fn validate(&self) -> ErrorSet {
        validation::validate(&self.draft)
    }

    /// Percentage of fields that currently pass their rule
    pub fn compute_progress(&self) -> u8 {
        validation::progress(&self.draft)
    }

    /// Store the draft as a new or updated entry if it is valid
    pub fn submit(&mut self) -> SubmitOutcome {
        let record = match Record::from_draft(&self.draft) {
            Ok(record) => record,
            Err(errors) => {
                debug!("Submit rejected: {}", errors);
                self.errors = errors.clone();
                return SubmitOutcome::Rejected { errors };
            }
        };

        let outcome = match self.editing_index.take() {
            Some(index) if index < self.records.len() => {
                self.records[index] = record;
                info!("Updated feedback entry {}", index);
                SubmitOutcome::Accepted {
                    index,
                    updated: true,
                }
            }
            stale => {
                if let Some(index) = stale {
                    warn!(
                        "Editing index {} is stale ({} entries), appending instead",
                        index,
                        self.records.len()
                    );
                }
                self.records.push(record);
                let index = self.records.len() - 1;
                info!("Added feedback entry {}", index);
                SubmitOutcome::Accepted {
                    index,
                    updated: false,
                }
            }
        };

        self.draft = Draft::default();
        self.errors.clear();
        outcome
    }

    /// Empty the draft and the displayed errors
    pub fn reset(&mut self) {
        self.draft = Draft::default();
        self.errors.clear();
        if self.options.reset_clears_editing_index {
            self.editing_index = None;
        }
        debug!("Form reset (mode now {})", self.mode());
    }

    /// Load an existing entry into the draft for editing
    pub fn edit(&mut self, index: usize) -> Result<()> {
        let record = self.records.get(index).ok_or_else(|| {
            warn!("edit({}) out of range ({} entries)", index, self.records.len());
            FormError::index_out_of_range(index, self.records.len())
        })?;
        self.draft = Draft::from(record);
        self.editing_index = Some(index);
        debug!("Editing feedback entry {}", index);
        Ok(())
    }

    /// Remove an entry, returning it
    pub fn delete(&mut self, index: usize) -> Result<Record> {
        if index >= self.records.len() {
            warn!("delete({}) out of range ({} entries)", index, self.records.len());
            return Err(FormError::index_out_of_range(index, self.records.len()));
        }
        let removed = self.records.remove(index);
        info!("Deleted feedback entry {}", index);

        if self.options.rebase_editing_on_delete {
            match self.editing_index {
                Some(editing) if editing == index => {
                    self.editing_index = None;
                    self.draft = Draft::default();
                    self.errors.clear();
                    debug!("Deleted the entry being edited, edit abandoned");
                }
                Some(editing) if editing > index => {
                    self.editing_index = Some(editing - 1);
                }
                _ => {}
            }
        }

        Ok(removed)
    }

    /// Current state for rendering
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            draft: self.draft.clone(),
            errors: self.errors.clone(),
            records: self.records.clone(),
            editing_index: self.editing_index,
            is_editing: self.is_editing(),
            progress: self.compute_progress(),
        }
    }

    /// Apply one event and return the resulting snapshot
    pub fn dispatch(&mut self, event: FormEvent) -> Result<Snapshot> {
        match event {
            FormEvent::SetField { field, value } => self.set_field(&field, value)?,
            FormEvent::Submit => {
                self.submit();
            }
            FormEvent::Reset => self.reset(),
            FormEvent::Edit { index } => self.edit(index)?,
            FormEvent::Delete { index } => {
                self.delete(index)?;
            }
        }
        Ok(self.snapshot())
    }
}
