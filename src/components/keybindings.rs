//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on which pane has
//! focus. Keys that resolve to no action in the form pane are treated as
//! text input by the app.

use crate::app::Pane;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NextField,
    PrevField,
    NextOption,
    PrevOption,
    Backspace,
    Activate,
    Submit,
    Reset,
    SwitchPane,
    NavigateUp,
    NavigateDown,
    Edit,
    Delete,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Whether a key event triggers this binding.
    ///
    /// Unmodified bindings tolerate SHIFT (terminals report it for `?` and
    /// BackTab) but not CONTROL or ALT.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if self.key != event.code {
            return false;
        }
        if self.modifiers.is_empty() {
            !event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        } else {
            event.modifiers.contains(self.modifiers)
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Pane-specific keybindings
    pane_bindings: HashMap<Pane, Vec<Keybinding>>,
    /// Global keybindings (available in both panes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            pane_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::with_modifiers(
                KeyCode::Char('s'),
                KeyModifiers::CONTROL,
                KeyAction::Submit,
                "Ctrl+S",
                "Submit / update",
            ),
            Keybinding::with_modifiers(
                KeyCode::Char('r'),
                KeyModifiers::CONTROL,
                KeyAction::Reset,
                "Ctrl+R",
                "Reset form",
            ),
            Keybinding::new(KeyCode::F(1), KeyAction::Help, "F1", "Help"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        // Printable keys are left unbound here so they reach the text fields
        self.pane_bindings.insert(
            Pane::Form,
            vec![
                Keybinding::new(KeyCode::Tab, KeyAction::NextField, "Tab", "Next field"),
                Keybinding::new(KeyCode::Down, KeyAction::NextField, "Down", "Next field"),
                Keybinding::new(KeyCode::BackTab, KeyAction::PrevField, "S-Tab", "Previous field"),
                Keybinding::new(KeyCode::Up, KeyAction::PrevField, "Up", "Previous field"),
                Keybinding::new(KeyCode::Right, KeyAction::NextOption, "Right", "Next option"),
                Keybinding::new(KeyCode::Left, KeyAction::PrevOption, "Left", "Previous option"),
                Keybinding::new(KeyCode::Backspace, KeyAction::Backspace, "Bksp", "Delete character"),
                Keybinding::new(KeyCode::Enter, KeyAction::Activate, "Enter", "Next / press button"),
                Keybinding::new(KeyCode::Esc, KeyAction::SwitchPane, "Esc", "Go to entries"),
                Keybinding::new(KeyCode::F(2), KeyAction::SwitchPane, "F2", "Go to entries"),
            ],
        );

        self.pane_bindings.insert(
            Pane::Entries,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous entry"),
                Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next entry"),
                Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Previous entry"),
                Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Next entry"),
                Keybinding::new(KeyCode::Char('e'), KeyAction::Edit, "E", "Edit entry"),
                Keybinding::new(KeyCode::Enter, KeyAction::Edit, "Enter", "Edit entry"),
                Keybinding::new(KeyCode::Char('d'), KeyAction::Delete, "D", "Delete entry"),
                Keybinding::new(KeyCode::Delete, KeyAction::Delete, "Del", "Delete entry"),
                Keybinding::new(KeyCode::Esc, KeyAction::SwitchPane, "Esc", "Back to form"),
                Keybinding::new(KeyCode::F(2), KeyAction::SwitchPane, "F2", "Back to form"),
                Keybinding::new(KeyCode::Tab, KeyAction::SwitchPane, "Tab", "Back to form"),
                Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
                Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            ],
        );
    }

    /// Get keybindings for a pane (pane bindings first, then global)
    pub fn get_bindings(&self, pane: Pane) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();
        if let Some(pane_bindings) = self.pane_bindings.get(&pane) {
            bindings.extend(pane_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());
        bindings
    }

    /// Resolve a key event to an action in the given pane
    pub fn resolve(&self, pane: Pane, event: &KeyEvent) -> Option<KeyAction> {
        self.get_bindings(pane)
            .into_iter()
            .find(|b| b.matches(event))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, pane: Pane) -> Vec<NavBarItem> {
        let priority_actions = match pane {
            Pane::Form => vec![
                KeyAction::NextField,
                KeyAction::NextOption,
                KeyAction::Submit,
                KeyAction::Reset,
                KeyAction::SwitchPane,
                KeyAction::Help,
                KeyAction::Quit,
            ],
            Pane::Entries => vec![
                KeyAction::NavigateUp,
                KeyAction::Edit,
                KeyAction::Delete,
                KeyAction::SwitchPane,
                KeyAction::Help,
                KeyAction::Quit,
            ],
        };

        let bindings = self.get_bindings(pane);
        priority_actions
            .into_iter()
            .filter_map(|action| {
                let binding = bindings.iter().find(|b| b.action == action)?;
                let item = match action {
                    KeyAction::NavigateUp => NavBarItem {
                        key_display: "Up/Dn".to_string(),
                        action_label: "Select".to_string(),
                    },
                    KeyAction::NextOption => NavBarItem {
                        key_display: "Left/Right".to_string(),
                        action_label: "Choose".to_string(),
                    },
                    _ => NavBarItem {
                        key_display: binding.display.clone(),
                        action_label: binding.description.clone(),
                    },
                };
                Some(item)
            })
            .collect()
    }

    /// Get full help content for a pane (for help overlay)
    pub fn get_help_content(&self, pane: Pane) -> Vec<HelpSection> {
        let groups: [(&str, &[KeyAction]); 3] = [
            (
                "Navigation",
                &[
                    KeyAction::NextField,
                    KeyAction::PrevField,
                    KeyAction::NavigateUp,
                    KeyAction::NavigateDown,
                    KeyAction::SwitchPane,
                ],
            ),
            (
                "Editing",
                &[
                    KeyAction::NextOption,
                    KeyAction::PrevOption,
                    KeyAction::Backspace,
                    KeyAction::Activate,
                    KeyAction::Submit,
                    KeyAction::Reset,
                    KeyAction::Edit,
                    KeyAction::Delete,
                ],
            ),
            ("General", &[KeyAction::Help, KeyAction::Quit]),
        ];

        let bindings = self.get_bindings(pane);
        groups
            .iter()
            .filter_map(|(title, actions)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| actions.contains(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_printable_keys_unbound_in_form() {
        let ctx = KeybindingContext::new();
        for c in ['a', 'q', '?', 'e', 'd', ' ', '@'] {
            assert_eq!(ctx.resolve(Pane::Form, &key(KeyCode::Char(c))), None);
        }
    }

    #[test]
    fn test_control_keys_are_global() {
        let ctx = KeybindingContext::new();
        for pane in [Pane::Form, Pane::Entries] {
            assert_eq!(ctx.resolve(pane, &ctrl('s')), Some(KeyAction::Submit));
            assert_eq!(ctx.resolve(pane, &ctrl('r')), Some(KeyAction::Reset));
            assert_eq!(ctx.resolve(pane, &ctrl('c')), Some(KeyAction::Quit));
        }
    }

    #[test]
    fn test_entries_bindings() {
        let ctx = KeybindingContext::new();
        assert_eq!(
            ctx.resolve(Pane::Entries, &key(KeyCode::Char('d'))),
            Some(KeyAction::Delete)
        );
        assert_eq!(
            ctx.resolve(Pane::Entries, &key(KeyCode::Enter)),
            Some(KeyAction::Edit)
        );
        assert_eq!(
            ctx.resolve(Pane::Entries, &key(KeyCode::Char('q'))),
            Some(KeyAction::Quit)
        );
    }

    #[test]
    fn test_shifted_question_mark_opens_help_in_entries() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(ctx.resolve(Pane::Entries, &event), Some(KeyAction::Help));
    }

    #[test]
    fn test_backtab_with_shift() {
        let ctx = KeybindingContext::new();
        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(ctx.resolve(Pane::Form, &event), Some(KeyAction::PrevField));
    }

    #[test]
    fn test_ctrl_letter_does_not_match_plain_binding() {
        let ctx = KeybindingContext::new();
        assert_eq!(ctx.resolve(Pane::Entries, &ctrl('d')), None);
    }

    #[test]
    fn test_nav_items_per_pane() {
        let ctx = KeybindingContext::new();
        let form: Vec<String> = ctx
            .get_nav_items(Pane::Form)
            .into_iter()
            .map(|i| i.key_display)
            .collect();
        assert!(form.contains(&"Ctrl+S".to_string()));
        assert!(form.contains(&"Left/Right".to_string()));

        let entries: Vec<String> = ctx
            .get_nav_items(Pane::Entries)
            .into_iter()
            .map(|i| i.action_label)
            .collect();
        assert!(entries.contains(&"Delete entry".to_string()));
    }

    #[test]
    fn test_help_content_sections() {
        let ctx = KeybindingContext::new();
        let sections = ctx.get_help_content(Pane::Entries);
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Navigation", "Editing", "General"]);
    }
}
