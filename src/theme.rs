//! Centralized theme and styling for the TUI
//!
//! This module provides a single source of truth for all colors and styles
//! used by the form and entry list renderers.
//!
//! # Usage
//! ```rust
//! use feedback_form::theme::{Colors, StatusKind, Styles, Theme};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let error_style = Theme::status_style(StatusKind::Error);
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors
    // -------------------------------------------------------------------------

    /// Gauge/progress bar background
    pub const BG_GAUGE: Color = Color::Rgb(40, 40, 50);

    /// Help overlay background
    pub const BG_OVERLAY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Placeholder and disabled text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - borders, titles, focused labels
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - the entry being edited
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Selected item highlight
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Progress bar fill
    pub const PROGRESS: Color = Color::Green;

    /// Navigation hint color
    pub const NAV_HINT: Color = Color::DarkGray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Pane border, depending on whether the pane has focus
    pub fn border(active: bool) -> Style {
        if active {
            Style::default().fg(Colors::BORDER_ACTIVE)
        } else {
            Style::default().fg(Colors::BORDER_INACTIVE)
        }
    }

    /// Selected/highlighted list item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Focused form label
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Inline validation message
    pub fn field_error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Marker on the entry being edited
    pub fn editing_marker() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Focused button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button_inactive() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Progress bar style
    pub fn progress() -> Style {
        Style::default().fg(Colors::PROGRESS).bg(Colors::BG_GAUGE)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Kind of status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

/// Theme context providing semantic style lookups
pub struct Theme;

impl Theme {
    /// Get style for a status line message
    pub fn status_style(kind: StatusKind) -> Style {
        match kind {
            StatusKind::Info => Style::default().fg(Colors::INFO),
            StatusKind::Success => Style::default().fg(Colors::SUCCESS),
            StatusKind::Warning => Style::default().fg(Colors::WARNING),
            StatusKind::Error => Style::default()
                .fg(Colors::ERROR)
                .add_modifier(Modifier::BOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_styles_are_distinct() {
        let styles = [
            Theme::status_style(StatusKind::Info),
            Theme::status_style(StatusKind::Success),
            Theme::status_style(StatusKind::Warning),
            Theme::status_style(StatusKind::Error),
        ];
        assert_ne!(styles[0], styles[1]);
        assert_ne!(styles[1], styles[3]);
        assert_eq!(styles[3].fg, Some(Colors::ERROR));
    }

    #[test]
    fn test_border_follows_focus() {
        assert_eq!(Styles::border(true).fg, Some(Colors::BORDER_ACTIVE));
        assert_eq!(Styles::border(false).fg, Some(Colors::BORDER_INACTIVE));
    }
}
