use crate::config::DayLabelStyle;

use super::model::{DayKey, MeetingRecord};

/// Number of text lines a meeting row occupies. Fixed, so a day block's
/// height depends only on how many meetings it holds.
pub const MEETING_ROW_LINES: usize = 4;

/// Label shown above a day block.
pub fn day_label(day: DayKey, style: DayLabelStyle) -> &'static str {
    match style {
        DayLabelStyle::Code => day.code(),
        DayLabelStyle::Full => day.full_name(),
    }
}

/// Join the non-blank, trimmed `parts` with `sep`. Blank input yields `""`.
fn join_present(parts: &[&str], sep: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Text lines of a meeting row: the course title, then
/// `"<type> <time>"`, the instructor and `"<building><room>"`.
///
/// Missing fields produce blank segments; the row always has
/// `MEETING_ROW_LINES` lines.
pub fn meeting_lines(record: &MeetingRecord) -> [String; MEETING_ROW_LINES] {
    [
        record.course_title.trim().to_string(),
        join_present(&[&record.meeting_type, &record.time_string], " "),
        record.instructor_name.trim().to_string(),
        join_present(&[&record.building, &record.room], ""),
    ]
}

/// One-line summary used by the full schedule screen.
pub fn meeting_summary(record: &MeetingRecord) -> String {
    let place = join_present(&[&record.building, &record.room], "");
    join_present(
        &[
            &record.time_string,
            &record.course_title,
            &record.meeting_type,
            &record.instructor_name,
            &place,
        ],
        " · ",
    )
}
