//! User interface rendering module
//!
//! This module is organized into submodules:
//! - `header` - Title, progress bar, status line, and navigation bar
//! - `form` - The feedback form with inline validation messages
//! - `entries` - Submitted feedback cards

mod entries;
mod form;
mod header;

pub use entries::entry_lines;
pub use form::form_lines;
pub use header::HeaderRenderer;

use crate::app::{Pane, UiState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::engine::FormEngine;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// UI renderer for the application
///
/// This is the main entry point for UI rendering. It delegates to specialized
/// submodules for different parts of the UI.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI from the engine and view state
    pub fn render(
        &self,
        f: &mut Frame,
        engine: &FormEngine,
        ui: &UiState,
        keybinding_ctx: &KeybindingContext,
    ) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(3), // Progress
                Constraint::Min(8),    // Form + entries
                Constraint::Length(1), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        self.header.render_title(f, main_chunks[0], engine.mode());
        header::render_progress_bar(f, main_chunks[1], engine.compute_progress());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[2]);

        form::render_form(f, body[0], engine, ui);
        entries::render_entries(f, body[1], engine, ui);

        header::render_status(f, main_chunks[3], &ui.status);
        header::render_nav_bar(f, main_chunks[4], &keybinding_ctx.get_nav_items(ui.pane));

        // Help overlay goes on top of everything
        if ui.help_visible {
            HelpOverlay::new(ui.pane, keybinding_ctx).render(f, f.area());
        }
    }
}

/// Whether a pane currently has keyboard focus
fn is_active(ui: &UiState, pane: Pane) -> bool {
    ui.pane == pane && !ui.help_visible
}
