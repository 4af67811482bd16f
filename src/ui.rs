//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to draw the schedule card and the full
//! schedule screen using `ratatui`. The card's rows come pre-painted from the
//! renderer's cache; nothing here formats meeting text for the card.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap},
};
use std::{collections::BTreeMap, sync::LazyLock};

use crate::app::{App, Screen};
use crate::config::{CardSettings, UiSettings};
use crate::render::{HierarchicalScheduleRenderer, RowKey};
use crate::schedule::{DayKey, MeetingRecord, day_label, meeting_lines, meeting_summary};

static CONTROLS_MAP: LazyLock<BTreeMap<String, String>> = LazyLock::new(|| {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    map.insert("j/k".to_string(), "up/down".to_string());
    map.insert("gg/G".to_string(), "top/bottom".to_string());
    map.insert("w".to_string(), "walk there".to_string());
    map.insert("f/enter".to_string(), "full schedule".to_string());
    map.insert("esc/b".to_string(), "back".to_string());
    map.insert("r".to_string(), "reload".to_string());
    map.insert("q".to_string(), "quit".to_string());
    map
});

/// Render the controls help text.
fn controls_text() -> String {
    // Keep the rendered order stable and human-friendly.
    let order = ["j/k", "gg/G", "w", "f/enter", "esc/b", "r", "q"];
    order
        .iter()
        .filter_map(|k| CONTROLS_MAP.get(*k).map(|v| format!("[{}] {}", k, v)))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// The meeting currently selected on the card, with its key.
pub fn selected_meeting<'a>(
    app: &App,
    renderer: &'a HierarchicalScheduleRenderer,
) -> Option<(RowKey, &'a MeetingRecord)> {
    let key = *renderer.meeting_keys().get(app.selected)?;
    match key {
        RowKey::Meeting(day, idx) => renderer.meeting(day, idx).map(|m| (key, m)),
        RowKey::Day(_) => None,
    }
}

/// Text of the walking affordance for the selected meeting.
fn walk_text(meeting: Option<&MeetingRecord>, ui: &UiSettings) -> (String, bool) {
    match meeting {
        Some(m) if m.coordinates.is_some() => {
            let [title, _, _, place] = meeting_lines(m);
            let target = if place.is_empty() { title } else { place };
            (format!("[w] {} walk to {}", ui.walk_symbol, target), true)
        }
        Some(_) => ("[w] no walking directions for this class".to_string(), false),
        None => ("[w] no class selected".to_string(), false),
    }
}

/// Lines of the full schedule screen: every day, every meeting.
fn full_schedule_lines(app: &App, card: &CardSettings) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (day, meetings) in app.schedule.iter() {
        lines.push(Line::from(Span::styled(
            day_label(day, card.day_labels).to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        if meetings.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  {}", card.empty_day_text),
                Style::default().add_modifier(Modifier::DIM),
            )));
        }
        for m in meetings {
            lines.push(Line::from(format!("  {}", meeting_summary(m))));
        }
        if day != DayKey::Su {
            lines.push(Line::from(""));
        }
    }
    lines
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Draw the card's nested list into `area`.
fn draw_card(frame: &mut Frame, area: Rect, app: &App, renderer: &HierarchicalScheduleRenderer) {
    let selected_key = selected_meeting(app, renderer).map(|(key, _)| key);

    let mut selected_pos = None;
    let items: Vec<ListItem> = renderer
        .rows()
        .enumerate()
        .map(|(pos, (key, text))| {
            if Some(key) == selected_key {
                selected_pos = Some(pos);
            }
            ListItem::new(text.clone())
        })
        .collect();

    let title = format!(" {} ", renderer.card_settings().title);
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(selected_pos);
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the entire UI into the provided `frame`.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    renderer: &HierarchicalScheduleRenderer,
    ui_settings: &UiSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" schedcard ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Body + footer
    match app.screen {
        Screen::Card => {
            draw_card(frame, chunks[1], app, renderer);

            let selected = selected_meeting(app, renderer).map(|(_, m)| m);
            let (walk, enabled) = walk_text(selected, ui_settings);
            let walk_style = if enabled {
                Style::default()
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };
            let footer = Paragraph::new(Line::from(vec![
                Span::styled(
                    format!("[f] {}", ui_settings.full_schedule_label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(walk, walk_style),
            ]))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
            frame.render_widget(footer, chunks[2]);
        }
        Screen::FullSchedule => {
            let body = Paragraph::new(full_schedule_lines(app, renderer.card_settings()))
                .block(padded(" full schedule "))
                .wrap(Wrap { trim: false });
            frame.render_widget(body, chunks[1]);

            let footer = Paragraph::new("[esc/b] back to the card")
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(footer, chunks[2]);
        }
    }

    // Status + controls
    let mut parts: Vec<String> = Vec::new();
    if let Some(status) = &app.status {
        parts.push(status.clone());
    }
    if let Some(stats) = &app.last_stats {
        parts.push(stats.to_string());
    }
    if let Some(source) = &app.source {
        parts.push(format!("Source: {}", source));
    }
    parts.push(controls_text());

    let status = Paragraph::new(parts.join(" • "))
        .block(padded(" status "))
        .wrap(Wrap { trim: true });
    frame.render_widget(status, chunks[3]);
}
