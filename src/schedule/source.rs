//! Schedule sources: where the host gets its already-resolved week from.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ScheduleError, ScheduleResult};

use super::model::{DayKey, MeetingRecord, ScheduleByDay, TaggedMeeting};

/// Supplies the week to render. Fetching, caching and retries all live behind
/// this trait; the renderer only ever sees a finished `ScheduleByDay`.
pub trait ScheduleSource {
    fn get_schedule(&self) -> ScheduleResult<ScheduleByDay>;
}

/// An in-memory week, handed out as-is.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub ScheduleByDay);

impl ScheduleSource for StaticSource {
    fn get_schedule(&self) -> ScheduleResult<ScheduleByDay> {
        Ok(self.0.clone())
    }
}

/// Payload file layout. Both shapes may appear in the same file:
///
/// ```toml
/// [[meeting]]
/// day = "MO"
/// course_title = "Algorithms"
///
/// [days]
/// WE = [{ course_title = "Systems" }]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Payload {
    meeting: Vec<TaggedMeeting>,
    days: BTreeMap<String, Vec<MeetingRecord>>,
}

/// Parse a TOML schedule payload.
///
/// Day tables are applied first, then `[[meeting]]` entries are appended in
/// file order.
pub fn parse_schedule(text: &str) -> ScheduleResult<ScheduleByDay> {
    let payload: Payload = toml::from_str(text)?;

    let mut days = BTreeMap::new();
    for (key, meetings) in payload.days {
        let day = DayKey::from_code(&key).ok_or(ScheduleError::UnknownDay(key))?;
        days.insert(day, meetings);
    }

    let mut schedule = ScheduleByDay::from_days(days);
    for m in payload.meeting {
        schedule.push(m.day, m.record);
    }
    Ok(schedule)
}

/// Reads the week from a TOML file on every `get_schedule` call.
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    path: PathBuf,
}

impl TomlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleSource for TomlFileSource {
    fn get_schedule(&self) -> ScheduleResult<ScheduleByDay> {
        let text = std::fs::read_to_string(&self.path)?;
        parse_schedule(&text)
    }
}
