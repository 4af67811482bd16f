use crate::rows::RowChangeDetector;
use crate::schedule::{DayKey, MeetingRecord, ScheduleByDay};

/// All meetings sharing a weekday: one outer row.
#[derive(Debug, Clone, PartialEq)]
pub struct DayBucket {
    pub day: DayKey,
    pub meetings: Vec<MeetingRecord>,
}

/// Day buckets in Monday-first order. Weekend days are skipped when
/// `show_weekends` is false; empty days are always kept.
pub fn day_buckets(schedule: &ScheduleByDay, show_weekends: bool) -> Vec<DayBucket> {
    schedule
        .iter()
        .filter(|(day, _)| show_weekends || !day.is_weekend())
        .map(|(day, meetings)| DayBucket {
            day,
            meetings: meetings.to_vec(),
        })
        .collect()
}

/// Outer-level detector: a day block needs a new layout when it now stands
/// for another day or holds a different number of meetings. Row contents are
/// left to the inner level.
#[derive(Debug, Default, Copy, Clone)]
pub struct DayLayoutChange;

impl RowChangeDetector<DayBucket> for DayLayoutChange {
    fn changed(&self, old: &DayBucket, new: &DayBucket) -> bool {
        old.day != new.day || old.meetings.len() != new.meetings.len()
    }
}
