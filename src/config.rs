//! Engine configuration
//!
//! Two behaviors of the form engine are policy choices rather than fixed
//! rules. They are collected in [`EngineOptions`], which can be loaded from a
//! JSON file and then overridden from the command line.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Policy switches for [`crate::engine::FormEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOptions {
    /// When true, `reset()` also drops a pending overwrite of an edited entry.
    ///
    /// Off by default: resetting mid-edit keeps the editing index, so the
    /// next accepted submit still overwrites that entry.
    pub reset_clears_editing_index: bool,

    /// When true, `delete()` keeps the editing index pointing at the same
    /// entry (decrementing it when an earlier row is removed) and abandons
    /// the edit when the edited row itself is removed.
    pub rebase_editing_on_delete: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            reset_clears_editing_index: false,
            rebase_editing_on_delete: true,
        }
    }
}

impl EngineOptions {
    /// Load options from a JSON file; missing keys take their defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read engine options from {:?}", path.as_ref()))?;

        let options: Self =
            serde_json::from_str(&content).context("Failed to parse engine options JSON")?;

        Ok(options)
    }

    /// Save options to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize engine options to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write engine options to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Apply command-line switches on top of file or default values.
    ///
    /// Flags only ever turn a policy away from its default.
    pub fn with_overrides(mut self, reset_clears_editing: bool, no_rebase_on_delete: bool) -> Self {
        if reset_clears_editing {
            self.reset_clears_editing_index = true;
        }
        if no_rebase_on_delete {
            self.rebase_editing_on_delete = false;
        }
        self
    }
}
