//! Schedule model types: `MeetingRecord`, `DayKey` and `ScheduleByDay`.

use std::collections::BTreeMap;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// One of the seven canonical day codes, declared Monday-first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum DayKey {
    #[serde(rename = "MO", alias = "mo", alias = "monday")]
    Mo,
    #[serde(rename = "TU", alias = "tu", alias = "tuesday")]
    Tu,
    #[serde(rename = "WE", alias = "we", alias = "wednesday")]
    We,
    #[serde(rename = "TH", alias = "th", alias = "thursday")]
    Th,
    #[serde(rename = "FR", alias = "fr", alias = "friday")]
    Fr,
    #[serde(rename = "SA", alias = "sa", alias = "saturday")]
    Sa,
    #[serde(rename = "SU", alias = "su", alias = "sunday")]
    Su,
}

impl DayKey {
    /// Calendar week order. Iteration never depends on the current date.
    pub const ALL: [DayKey; 7] = [
        DayKey::Mo,
        DayKey::Tu,
        DayKey::We,
        DayKey::Th,
        DayKey::Fr,
        DayKey::Sa,
        DayKey::Su,
    ];

    /// Position of the day within `DayKey::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// The two-letter code used by the schedule payload (`MO`..`SU`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Mo => "MO",
            Self::Tu => "TU",
            Self::We => "WE",
            Self::Th => "TH",
            Self::Fr => "FR",
            Self::Sa => "SA",
            Self::Su => "SU",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            Self::Mo => "Monday",
            Self::Tu => "Tuesday",
            Self::We => "Wednesday",
            Self::Th => "Thursday",
            Self::Fr => "Friday",
            Self::Sa => "Saturday",
            Self::Su => "Sunday",
        }
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, Self::Sa | Self::Su)
    }

    /// Parse a day code (`MO`) or English day name, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|day| {
            day.code() == code || day.full_name().to_ascii_uppercase() == code
        })
    }
}

/// A walkable destination attached to a meeting.
#[derive(Debug, Copy, Clone, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

// Bitwise, so a record compares equal to an identical copy even when a
// coordinate is NaN.
impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits() && self.lon.to_bits() == other.lon.to_bits()
    }
}

/// One class meeting instance.
///
/// Every text field defaults to an empty string so a record with missing
/// fields still renders (as blank text) instead of failing to load.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MeetingRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub course_title: String,
    #[serde(deserialize_with = "lenient_text")]
    pub meeting_type: String,
    #[serde(deserialize_with = "lenient_text")]
    pub time_string: String,
    #[serde(deserialize_with = "lenient_text")]
    pub instructor_name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub building: String,
    /// Often written as a bare number (`room = 2005`).
    #[serde(deserialize_with = "lenient_text")]
    pub room: String,
    /// Present only on records offering a walkable destination.
    #[serde(deserialize_with = "walkable_coordinates")]
    pub coordinates: Option<Coordinates>,
}

/// Text fields take any scalar; tables and arrays degrade to blank text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
        Bool(bool),
        Other(IgnoredAny),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Int(n) => n.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
        Scalar::Other(_) => String::new(),
    })
}

/// Malformed or non-finite coordinates leave the meeting without a
/// walkable destination.
fn walkable_coordinates<'de, D>(deserializer: D) -> Result<Option<Coordinates>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Point(Coordinates),
        Other(IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Point(c) if c.is_finite() => Some(c),
        _ => None,
    })
}

/// A meeting record tagged (upstream) with the day it belongs to.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaggedMeeting {
    pub day: DayKey,
    #[serde(flatten)]
    pub record: MeetingRecord,
}

impl TaggedMeeting {
    pub fn new(day: DayKey, record: MeetingRecord) -> Self {
        Self { day, record }
    }
}

/// Meetings grouped by weekday.
///
/// Always carries exactly seven days in Monday-first order. A day without
/// meetings is an empty sequence, never a missing key. Within a day, records
/// keep the order they were given in (upstream provides chronological order).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleByDay {
    days: [Vec<MeetingRecord>; 7],
}

impl ScheduleByDay {
    /// An empty week.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group a flat tagged sequence. Grouping is stable: records sharing a day
    /// keep their relative input order.
    pub fn from_tagged<I>(meetings: I) -> Self
    where
        I: IntoIterator<Item = TaggedMeeting>,
    {
        let mut schedule = Self::new();
        for m in meetings {
            schedule.push(m.day, m.record);
        }
        schedule
    }

    /// Build from a day-keyed map. Days absent from the map become empty.
    pub fn from_days(days: BTreeMap<DayKey, Vec<MeetingRecord>>) -> Self {
        let mut schedule = Self::new();
        for (day, meetings) in days {
            schedule.days[day.index()] = meetings;
        }
        schedule
    }

    /// Append a record at the end of `day`.
    pub fn push(&mut self, day: DayKey, record: MeetingRecord) {
        self.days[day.index()].push(record);
    }

    pub fn get(&self, day: DayKey) -> &[MeetingRecord] {
        &self.days[day.index()]
    }

    /// Days in Monday-first order, regardless of which ones have data.
    pub fn keys(&self) -> impl Iterator<Item = DayKey> + '_ {
        DayKey::ALL.into_iter()
    }

    /// `(day, meetings)` pairs in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = (DayKey, &[MeetingRecord])> + '_ {
        DayKey::ALL
            .into_iter()
            .map(move |day| (day, self.days[day.index()].as_slice()))
    }

    pub fn total_meetings(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }

    /// True when no day has any meeting.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }
}

impl FromIterator<TaggedMeeting> for ScheduleByDay {
    fn from_iter<I: IntoIterator<Item = TaggedMeeting>>(iter: I) -> Self {
        Self::from_tagged(iter)
    }
}
