//! Submitted feedback list rendering

use super::is_active;
use crate::app::{Pane, UiState};
use crate::engine::FormEngine;
use crate::record::Record;
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the entries pane
pub fn render_entries(f: &mut Frame, area: Rect, engine: &FormEngine, ui: &UiState) {
    let active = is_active(ui, Pane::Entries);
    let records = engine.records();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Submitted Feedbacks ({})", records.len()))
        .border_style(Styles::border(active));

    if records.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No feedback submitted yet",
            Styles::text_muted(),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(i, record)| ListItem::new(entry_lines(i, record, engine.editing_index() == Some(i))))
        .collect();

    let mut list = List::new(items).block(block);
    if active {
        list = list.highlight_style(Styles::selected());
    }

    let mut list_state = ListState::default();
    list_state.select(Some(ui.selected_entry.min(records.len() - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}

/// Card lines for one submitted entry
pub fn entry_lines(index: usize, record: &Record, editing: bool) -> Vec<Line<'static>> {
    let mut heading = vec![Span::styled(format!("#{}", index + 1), Styles::title())];
    if editing {
        heading.push(Span::styled("  ✎ editing", Styles::editing_marker()));
    }

    let row = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {label}: "), Styles::text_secondary()),
            Span::styled(value, Styles::text()),
        ])
    };

    vec![
        Line::from(heading),
        row("Name", record.name.clone()),
        row("Email", record.email.clone()),
        row("Age Group", record.age_group.label().to_string()),
        row("Feedback", record.feedback.clone()),
        row("Contact Permission", record.contact_permission.label().to_string()),
        Line::from(""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgeGroup, ContactPermission};

    fn record() -> Record {
        Record {
            name: "Amy".to_string(),
            email: "a@b.com".to_string(),
            age_group: AgeGroup::Over55,
            feedback: "Great".to_string(),
            contact_permission: ContactPermission::No,
        }
    }

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_card_lists_every_field() {
        let text = text(&entry_lines(0, &record(), false));
        assert_eq!(text[0], "#1");
        assert_eq!(text[1], "  Name: Amy");
        assert_eq!(text[2], "  Email: a@b.com");
        assert_eq!(text[3], "  Age Group: 55+");
        assert_eq!(text[4], "  Feedback: Great");
        assert_eq!(text[5], "  Contact Permission: No");
    }

    #[test]
    fn test_card_marks_entry_being_edited() {
        let text = text(&entry_lines(2, &record(), true));
        assert!(text[0].starts_with("#3"));
        assert!(text[0].contains("editing"));
    }
}
