use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::config::CardSettings;
use crate::schedule::{MeetingRecord, day_label, meeting_lines};

use super::bucket::DayBucket;

/// The fixed set of row kinds the card draws.
#[derive(Debug, Copy, Clone)]
pub enum ScheduleRow<'a> {
    /// A day label, plus the empty-state line when the day has no meetings.
    DayBlock(&'a DayBucket),
    /// One meeting inside a day block.
    MeetingRow(&'a MeetingRecord),
}

impl ScheduleRow<'_> {
    /// Paint the row into owned text so it can be cached across passes.
    pub fn paint(&self, card: &CardSettings) -> Text<'static> {
        match self {
            ScheduleRow::DayBlock(bucket) => {
                let mut lines = vec![Line::from(Span::styled(
                    day_label(bucket.day, card.day_labels),
                    Style::default().add_modifier(Modifier::BOLD),
                ))];
                if bucket.meetings.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", card.empty_day_text),
                        Style::default().add_modifier(Modifier::ITALIC | Modifier::DIM),
                    )));
                }
                Text::from(lines)
            }
            ScheduleRow::MeetingRow(record) => {
                let [title, when, instructor, place] = meeting_lines(record);
                let sub = Style::default().add_modifier(Modifier::DIM);
                Text::from(vec![
                    Line::from(Span::styled(
                        format!("  {title}"),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(format!("    {when}"), sub)),
                    Line::from(Span::styled(format!("    {instructor}"), sub)),
                    Line::from(Span::styled(format!("    {place}"), sub)),
                ])
            }
        }
    }
}
