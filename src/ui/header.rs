//! Header and common widget rendering
//!
//! Title, progress bar, status line and navigation bar.

use crate::app::StatusMessage;
use crate::components::keybindings::NavBarItem;
use crate::engine::Mode;
use crate::theme::{Styles, Theme};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Header renderer
pub struct HeaderRenderer {
    title: &'static str,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            title: "Customer Feedback",
        }
    }

    /// Render the title with the current submission mode
    pub fn render_title(&self, f: &mut Frame, area: Rect, mode: Mode) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let subtitle = match mode {
            Mode::Creating => "new entry".to_string(),
            Mode::Editing(i) => format!("updating feedback #{}", i + 1),
        };
        let line = Line::from(vec![
            Span::styled(self.title, Styles::title()),
            Span::styled(format!("  ({subtitle})"), Styles::text_secondary()),
        ]);
        let title_widget = Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(title_widget, area);
    }
}

/// Render the form completion gauge
pub fn render_progress_bar(f: &mut Frame, area: Rect, progress: u8) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Styles::progress())
        .percent(u16::from(progress.min(100)))
        .label(format!("{}% Completed", progress));
    f.render_widget(gauge, area);
}

/// Render the status line
pub fn render_status(f: &mut Frame, area: Rect, status: &StatusMessage) {
    let widget = Paragraph::new(Span::styled(
        status.text.clone(),
        Theme::status_style(status.kind),
    ));
    f.render_widget(widget, area);
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, area: Rect, items: &[NavBarItem]) {
    let mut spans = Vec::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Styles::nav_hint()));
        }
        spans.push(Span::styled(item.key_display.clone(), Styles::focused()));
        spans.push(Span::styled(
            format!(" {}", item.action_label),
            Styles::nav_hint(),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
