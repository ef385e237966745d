//! Feedback form rendering
//!
//! Each field renders as a label line, a value line and, when the field is
//! flagged, a red message line underneath.

use super::is_active;
use crate::app::{FormSlot, Pane, UiState};
use crate::engine::{FormEngine, Mode};
use crate::record::Draft;
use crate::theme::Styles;
use crate::types::{AgeGroup, ContactPermission, Field};
use crate::validation::ErrorSet;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

/// Render the form pane
pub fn render_form(f: &mut Frame, area: Rect, engine: &FormEngine, ui: &UiState) {
    let active = is_active(ui, Pane::Form);
    let lines = form_lines(engine.draft(), engine.errors(), ui.focus, active, engine.mode());

    let title = match engine.mode() {
        Mode::Creating => "Customer Feedback".to_string(),
        Mode::Editing(i) => format!("Update Feedback #{}", i + 1),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Styles::border(active));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Build the form's text lines
pub fn form_lines(
    draft: &Draft,
    errors: &ErrorSet,
    focus: FormSlot,
    active: bool,
    mode: Mode,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for field in Field::iter() {
        let focused = active && focus == FormSlot::Field(field);
        let marker = if focused { "› " } else { "  " };
        let label_style = if focused {
            Styles::focused()
        } else {
            Styles::text()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker}{}", field.label()),
            label_style,
        )));

        lines.push(value_line(field, draft.get(field), focused));

        if let Some(message) = errors.get(field) {
            lines.push(Line::from(Span::styled(
                format!("    {message}"),
                Styles::field_error(),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.push(button_line(focus, active, mode));
    lines
}

fn value_line(field: Field, value: &str, focused: bool) -> Line<'static> {
    match field {
        Field::AgeGroup => {
            let label = value
                .parse::<AgeGroup>()
                .map(|a| a.label().to_string())
                .unwrap_or_else(|_| field.placeholder().to_string());
            let style = if value.is_empty() {
                Styles::text_muted()
            } else {
                Styles::text()
            };
            if focused {
                Line::from(vec![
                    Span::styled("    ◀ ", Styles::focused()),
                    Span::styled(label, style),
                    Span::styled(" ▶", Styles::focused()),
                ])
            } else {
                Line::from(Span::styled(format!("    {label}"), style))
            }
        }
        Field::ContactPermission => {
            let chosen = value.parse::<ContactPermission>().ok();
            let mut spans = vec![Span::raw("    ")];
            for option in ContactPermission::iter() {
                let mark = if chosen == Some(option) { "(•)" } else { "( )" };
                let style = if chosen == Some(option) {
                    Styles::focused()
                } else {
                    Styles::text_secondary()
                };
                spans.push(Span::styled(format!("{mark} {}  ", option.label()), style));
            }
            Line::from(spans)
        }
        _ => {
            let cursor = if focused { "▏" } else { "" };
            if value.is_empty() {
                Line::from(vec![
                    Span::raw("    "),
                    Span::styled(cursor, Styles::focused()),
                    Span::styled(field.placeholder(), Styles::text_muted()),
                ])
            } else {
                Line::from(vec![
                    Span::styled(format!("    {value}"), Styles::text()),
                    Span::styled(cursor, Styles::focused()),
                ])
            }
        }
    }
}

fn button_line(focus: FormSlot, active: bool, mode: Mode) -> Line<'static> {
    let style_for = |slot: FormSlot| {
        if active && focus == slot {
            Styles::button_active()
        } else {
            Styles::button_inactive()
        }
    };
    Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("[ {} ]", mode.submit_label()),
            style_for(FormSlot::SubmitButton),
        ),
        Span::raw("  "),
        Span::styled("[ Reset ]", style_for(FormSlot::ResetButton)),
    ])
}
