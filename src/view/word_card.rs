//! Word card widget.
//!
//! Draws the headword, the current meaning and the current definition inside a bordered
//! card, with a status line at the bottom. The animation frame from the browse machine
//! displaces and fades the part of the card that is changing.

use super::constants::{HEADER_HEIGHT, STATUS_BAR_HEIGHT, VERTICAL_TRAVEL_ROWS};
use super::styles::{faded, CardStyles};
use crate::model::{Axis, WordEntry};
use crate::state::{AnimationFrame, AppState, BrowseState, EntryOrigin, LoadStatus};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the whole card for the current state.
pub fn render_word_card(
    frame: &mut Frame,
    state: &AppState,
    animation: AnimationFrame,
    styles: &CardStyles,
) {
    let area = frame.area();

    let title = match state.entry() {
        Some(entry) => format!(" Word of the Day · {} ", entry.produced_for),
        None => " Word of the Day ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(styles.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match state.status() {
        LoadStatus::Loading => render_loading(frame, inner, styles),
        LoadStatus::Ready { entry, origin } => {
            let [header, _, sense, status] = Layout::vertical([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(inner);

            render_header(frame, header, entry, styles);
            render_sense(frame, sense, entry, state.browse().state(), animation, styles);
            render_status(frame, status, *origin, styles);
        }
    }
}

fn render_loading(frame: &mut Frame, area: Rect, styles: &CardStyles) {
    let middle = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    let loading = Paragraph::new(Line::from(Span::styled("Loading…", styles.muted)))
        .alignment(Alignment::Center);
    frame.render_widget(loading, middle);
}

fn render_header(frame: &mut Frame, area: Rect, entry: &WordEntry, styles: &CardStyles) {
    let mut lines = vec![Line::from(Span::styled(entry.word.clone(), styles.word))];
    if !entry.phonetic.is_empty() {
        lines.push(Line::from(Span::styled(
            entry.phonetic.clone(),
            styles.phonetic,
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Meaning label and definition body for the current position.
///
/// Rendered as two pieces so a horizontal swipe can move the definition while the
/// meaning label stays put.
fn sense_lines(
    entry: &WordEntry,
    position: BrowseState,
    styles: &CardStyles,
) -> (Line<'static>, Vec<Line<'static>>) {
    let Some(meaning) = entry.meaning(position.meaning_index) else {
        let empty = Line::from(Span::styled("No definitions available.", styles.muted));
        return (empty, Vec::new());
    };

    let label = Line::from(vec![
        Span::styled(meaning.part_of_speech.clone(), styles.part_of_speech),
        Span::styled(
            format!(
                "  meaning {}/{}",
                position.meaning_index + 1,
                entry.meanings.len()
            ),
            styles.muted,
        ),
    ]);

    let Some(definition) = meaning.definitions.get(position.definition_index) else {
        return (label, Vec::new());
    };

    let mut body = vec![
        Line::from(Span::styled(
            format!(
                "definition {}/{}",
                position.definition_index + 1,
                meaning.definitions.len()
            ),
            styles.muted,
        )),
        Line::from(Span::styled(definition.text.clone(), styles.definition)),
    ];
    if let Some(example) = &definition.example {
        body.push(Line::from(""));
        body.push(Line::from(Span::styled(
            format!("“{example}”"),
            styles.example,
        )));
    }
    if !definition.synonyms.is_empty() {
        body.push(Line::from(""));
        body.push(Line::from(Span::styled(
            format!("synonyms: {}", definition.synonyms.join(", ")),
            styles.muted,
        )));
    }
    if !definition.antonyms.is_empty() {
        body.push(Line::from(Span::styled(
            format!("antonyms: {}", definition.antonyms.join(", ")),
            styles.muted,
        )));
    }

    (label, body)
}

fn render_sense(
    frame: &mut Frame,
    area: Rect,
    entry: &WordEntry,
    position: BrowseState,
    animation: AnimationFrame,
    styles: &CardStyles,
) {
    let (label, body) = sense_lines(entry, position, styles);

    match animation.axis {
        Some(Axis::Vertical) => {
            let Some(fade) = faded(Style::default(), animation.opacity) else {
                return;
            };
            let rows = (animation.offset * VERTICAL_TRAVEL_ROWS).round() as i32;
            let (area, scroll) = shift_vertical(area, rows);

            let mut lines = vec![label, Line::from("")];
            lines.extend(body);
            let sense = Paragraph::new(lines)
                .style(fade)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0));
            frame.render_widget(sense, area);
        }
        axis => {
            let [label_area, _, body_area] = Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(area);
            frame.render_widget(Paragraph::new(label), label_area);

            let (body_area, fade) = if axis == Some(Axis::Horizontal) {
                let columns = (animation.offset * f32::from(body_area.width)).round() as i32;
                (
                    shift_horizontal(body_area, columns),
                    faded(Style::default(), animation.opacity),
                )
            } else {
                (body_area, Some(Style::default()))
            };

            if let Some(fade) = fade {
                let definition = Paragraph::new(body)
                    .style(fade)
                    .wrap(Wrap { trim: false });
                frame.render_widget(definition, body_area);
            }
        }
    }
}

fn render_status(frame: &mut Frame, area: Rect, origin: EntryOrigin, styles: &CardStyles) {
    let origin = match origin {
        EntryOrigin::Cache => "saved today".to_string(),
        EntryOrigin::Network { attempts: 1 } => "fetched in 1 attempt".to_string(),
        EntryOrigin::Network { attempts } => format!("fetched in {attempts} attempts"),
        EntryOrigin::Fallback => "offline fallback".to_string(),
        EntryOrigin::Unavailable => "word service unavailable".to_string(),
    };
    let status = Line::from(vec![
        Span::styled(origin, styles.muted),
        Span::styled("  ·  r new word  ? help  q quit", styles.muted),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

/// Move `area` right by `columns` (left when negative), cropping to the original bounds.
///
/// Moving left cannot go past the card edge, so the area narrows instead.
fn shift_horizontal(area: Rect, columns: i32) -> Rect {
    let shift = u16::try_from(columns.unsigned_abs())
        .unwrap_or(u16::MAX)
        .min(area.width);
    if columns >= 0 {
        Rect {
            x: area.x + shift,
            width: area.width - shift,
            ..area
        }
    } else {
        Rect {
            width: area.width - shift,
            ..area
        }
    }
}

/// Move `area` down by `rows`, or scroll its content up when negative.
///
/// Returns the area to draw into and the paragraph scroll offset.
fn shift_vertical(area: Rect, rows: i32) -> (Rect, u16) {
    let shift = u16::try_from(rows.unsigned_abs())
        .unwrap_or(u16::MAX)
        .min(area.height);
    if rows >= 0 {
        let moved = Rect {
            y: area.y + shift,
            height: area.height - shift,
            ..area
        };
        (moved, 0)
    } else {
        (area, shift)
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "word_card_tests.rs"]
mod tests;
