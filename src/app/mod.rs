//! Application module
//!
//! Contains the terminal view layer: it turns key presses into engine
//! operations and renders the engine's state after each one.
//!
//! # Module Structure
//! - `state` - UI state types (UiState, Pane, FormSlot, StatusMessage)
//! - Main module - App struct, key handling and event loop

mod state;

pub use state::{FormSlot, Pane, StatusMessage, UiState};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::EngineOptions;
use crate::engine::{FormEngine, SubmitOutcome};
use crate::error::Result;
use crate::theme::StatusKind;
use crate::types::{ContactPermission, Field};
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, info};

/// Main application struct
pub struct App {
    engine: FormEngine,
    ui: UiState,
    ui_renderer: UiRenderer,
    /// Keybinding context for key resolution and navigation hints
    keybindings: KeybindingContext,
}

impl App {
    /// Create a new application instance
    pub fn new(options: EngineOptions) -> Self {
        info!("Creating new App instance with {:?}", options);
        Self {
            engine: FormEngine::with_options(options),
            ui: UiState::default(),
            ui_renderer: UiRenderer::new(),
            keybindings: KeybindingContext::new(),
        }
    }

    pub fn engine(&self) -> &FormEngine {
        &self.engine
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui
    }

    /// Draw one frame
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            self.ui_renderer
                .render(f, &self.engine, &self.ui, &self.keybindings)
        })?;
        Ok(())
    }

    /// Run the main loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        while !self.ui.should_quit {
            self.draw(terminal)?;

            if crossterm::event::poll(Duration::from_millis(250))? {
                if let Event::Key(key_event) = crossterm::event::read()? {
                    // Windows terminals also report releases
                    if key_event.kind == KeyEventKind::Press {
                        self.handle_key(key_event)?;
                    }
                }
            }
        }

        info!(
            "Leaving with {} submitted entries",
            self.engine.records().len()
        );
        Ok(())
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.ui.help_visible {
            let action = self.keybindings.resolve(self.ui.pane, &key);
            if action == Some(KeyAction::Quit) && key.modifiers.contains(KeyModifiers::CONTROL) {
                self.ui.should_quit = true;
            }
            self.ui.help_visible = false;
            return Ok(());
        }

        match self.keybindings.resolve(self.ui.pane, &key) {
            Some(action) => self.perform(action),
            None if self.ui.pane == Pane::Form => {
                self.type_key(key);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn perform(&mut self, action: KeyAction) -> Result<()> {
        debug!("Key action {:?} in {:?}", action, self.ui.pane);
        match action {
            KeyAction::NextField => self.ui.focus = self.ui.focus.next(),
            KeyAction::PrevField => self.ui.focus = self.ui.focus.previous(),
            KeyAction::NextOption => self.cycle_option(true),
            KeyAction::PrevOption => self.cycle_option(false),
            KeyAction::Backspace => self.backspace(),
            KeyAction::Activate => match self.ui.focus {
                FormSlot::Field(_) => self.ui.focus = self.ui.focus.next(),
                FormSlot::SubmitButton => self.submit(),
                FormSlot::ResetButton => self.reset(),
            },
            KeyAction::Submit => self.submit(),
            KeyAction::Reset => self.reset(),
            KeyAction::SwitchPane => {
                self.ui.pane = self.ui.pane.toggled();
                self.ui.clamp_selection(self.engine.records().len());
            }
            KeyAction::NavigateUp => {
                self.ui.selected_entry = self.ui.selected_entry.saturating_sub(1);
            }
            KeyAction::NavigateDown => {
                self.ui.selected_entry += 1;
                self.ui.clamp_selection(self.engine.records().len());
            }
            KeyAction::Edit => self.edit_selected()?,
            KeyAction::Delete => self.delete_selected()?,
            KeyAction::Help => self.ui.help_visible = true,
            KeyAction::Quit => self.ui.should_quit = true,
        }
        Ok(())
    }

    /// Printable input for the focused field
    fn type_key(&mut self, key: KeyEvent) {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }
        let (KeyCode::Char(c), Some(field)) = (key.code, self.ui.focus.field()) else {
            return;
        };

        match field {
            Field::ContactPermission => match c.to_ascii_lowercase() {
                'y' => self.engine.set(field, ContactPermission::Yes.to_string()),
                'n' => self.engine.set(field, ContactPermission::No.to_string()),
                ' ' => self.cycle_option(true),
                _ => {}
            },
            Field::AgeGroup => {
                if c == ' ' {
                    self.cycle_option(true);
                }
            }
            _ => {
                let mut value = self.engine.draft().get(field).to_string();
                value.push(c);
                self.engine.set(field, value);
            }
        }
    }

    fn backspace(&mut self) {
        let Some(field) = self.ui.focus.field() else {
            return;
        };
        if field.is_choice() {
            self.engine.set(field, "");
            return;
        }
        let mut value = self.engine.draft().get(field).to_string();
        if value.pop().is_some() {
            self.engine.set(field, value);
        }
    }

    /// Step a choice field through its options
    fn cycle_option(&mut self, forward: bool) {
        let Some(field) = self.ui.focus.field().filter(|f| f.is_choice()) else {
            return;
        };
        let options = field.options();
        let len = options.len();
        let current = self.engine.draft().get(field);
        let next = match (options.iter().position(|o| o == current), forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        self.engine.set(field, options[next].clone());
    }

    fn submit(&mut self) {
        match self.engine.submit() {
            SubmitOutcome::Accepted { index, updated } => {
                let verb = if updated { "updated" } else { "submitted" };
                self.ui
                    .set_status(StatusKind::Success, format!("Feedback #{} {}", index + 1, verb));
                self.ui.selected_entry = index;
                self.ui.focus = FormSlot::default();
            }
            SubmitOutcome::Rejected { errors } => {
                let count = errors.len();
                let noun = if count == 1 { "field" } else { "fields" };
                self.ui
                    .set_status(StatusKind::Error, format!("Please fix {} {}", count, noun));
                if let Some(first) = errors.fields().next() {
                    self.ui.focus = FormSlot::Field(first);
                }
            }
        }
    }

    fn reset(&mut self) {
        self.engine.reset();
        self.ui.focus = FormSlot::default();
        match self.engine.editing_index() {
            Some(index) => self.ui.set_status(
                StatusKind::Warning,
                format!("Form cleared; Update will still replace feedback #{}", index + 1),
            ),
            None => self.ui.set_status(StatusKind::Info, "Form cleared"),
        }
    }

    fn edit_selected(&mut self) -> Result<()> {
        if self.engine.records().is_empty() {
            self.ui.set_status(StatusKind::Warning, "No feedback to edit");
            return Ok(());
        }
        let index = self.ui.selected_entry;
        self.engine.edit(index)?;
        self.ui.pane = Pane::Form;
        self.ui.focus = FormSlot::default();
        self.ui
            .set_status(StatusKind::Info, format!("Editing feedback #{}", index + 1));
        Ok(())
    }

    fn delete_selected(&mut self) -> Result<()> {
        if self.engine.records().is_empty() {
            self.ui.set_status(StatusKind::Warning, "No feedback to delete");
            return Ok(());
        }
        let index = self.ui.selected_entry;
        let removed = self.engine.delete(index)?;
        self.ui.clamp_selection(self.engine.records().len());
        self.ui.set_status(
            StatusKind::Success,
            format!("Deleted feedback #{} from {}", index + 1, removed.name.trim()),
        );
        Ok(())
    }
}
