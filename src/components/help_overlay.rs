//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::Pane;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given pane
    pub fn new(pane: Pane, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(pane);
        Self {
            content: Self::build_content(&sections, pane),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], pane: Pane) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Customer Feedback Help  ",
            Styles::title(),
        )]));
        lines.push(Line::from(""));

        let pane_name = match pane {
            Pane::Form => "Feedback form",
            Pane::Entries => "Submitted feedbacks",
        };
        lines.push(Line::from(vec![
            Span::styled("Current: ", Styles::text_muted()),
            Span::styled(pane_name.to_string(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<10}", key), Styles::focused()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Press F1, ? or Esc to close",
            Styles::text_muted(),
        )]));

        lines
    }

    /// Number of content lines (for sizing and tests)
    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Render the help overlay centered on `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = centered_rect(parent, 60, 70, 50, 15);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title("Help")
            .border_style(Styles::border(true))
            .style(Style::default().bg(Colors::BG_OVERLAY));

        let paragraph = Paragraph::new(self.content.clone())
            .block(block)
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }
}

/// Centered rectangle sized as a percentage of `parent`, with minimums
fn centered_rect(parent: Rect, width_percent: u16, height_percent: u16, min_w: u16, min_h: u16) -> Rect {
    let width = (parent.width * width_percent / 100)
        .max(min_w)
        .min(parent.width);
    let height = (parent.height * height_percent / 100)
        .max(min_h)
        .min(parent.height);
    Rect::new(
        parent.x + (parent.width - width) / 2,
        parent.y + (parent.height - height) / 2,
        width,
        height,
    )
}
