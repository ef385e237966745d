//! Reusable TUI components
//!
//! - `keybindings` - Pane-aware key registry, nav bar items and help content
//! - `help_overlay` - Floating help window

pub mod help_overlay;
pub mod keybindings;
