use std::fmt;
use std::rc::Rc;

use ratatui::text::Text;

use crate::config::CardSettings;
use crate::rows::{RowMark, RowView, StructuralChange};
use crate::schedule::{DayKey, MeetingRecord, ScheduleByDay};

use super::bucket::{DayBucket, DayLayoutChange, day_buckets};
use super::row::ScheduleRow;

/// What a render pass actually touched.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RenderStats {
    /// 1-based pass counter for this renderer.
    pub pass: u64,
    pub days_relaid: usize,
    pub days_removed: usize,
    pub rows_painted: usize,
    pub rows_removed: usize,
}

impl RenderStats {
    /// True when the pass repainted and removed nothing.
    pub fn is_noop(&self) -> bool {
        self.days_relaid == 0
            && self.days_removed == 0
            && self.rows_painted == 0
            && self.rows_removed == 0
    }
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pass {}: {} day(s) relaid, {} day(s) removed, {} row(s) painted, {} row(s) removed",
            self.pass, self.days_relaid, self.days_removed, self.rows_painted, self.rows_removed
        )
    }
}

/// Identifies a painted row on the card.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Day(DayKey),
    Meeting(DayKey, usize),
}

#[derive(Debug)]
struct PaintedBlock {
    day: DayKey,
    header: Text<'static>,
    rows: Vec<Text<'static>>,
}

/// Owns the view chains of one card: the outer chain of day buckets and one
/// inner chain of meetings per weekday.
///
/// Each `render` call diffs against the last completed pass and repaints only
/// what the detectors flag. Superseded views are dropped at the end of the
/// pass.
#[derive(Debug)]
pub struct HierarchicalScheduleRenderer {
    card: CardSettings,
    days: Option<Rc<RowView<DayBucket>>>,
    meetings: [Option<Rc<RowView<MeetingRecord>>>; 7],
    blocks: Vec<PaintedBlock>,
    passes: u64,
}

impl HierarchicalScheduleRenderer {
    pub fn new(card: CardSettings) -> Self {
        Self {
            card,
            days: None,
            meetings: Default::default(),
            blocks: Vec::new(),
            passes: 0,
        }
    }

    pub fn card_settings(&self) -> &CardSettings {
        &self.card
    }

    /// Run one render pass over `schedule`.
    pub fn render(&mut self, schedule: &ScheduleByDay) -> RenderStats {
        let buckets = day_buckets(schedule, self.card.show_weekends);
        let outer = match &self.days {
            Some(current) => RowView::update(current, buckets),
            None => RowView::create(buckets),
        };
        let outer_diff = outer.diff(&DayLayoutChange);

        self.passes += 1;
        let mut stats = RenderStats {
            pass: self.passes,
            days_removed: outer_diff.removed().len(),
            ..RenderStats::default()
        };
        self.blocks.truncate(outer.len());

        for (i, bucket) in outer.rows().iter().enumerate() {
            let slot = &mut self.meetings[bucket.day.index()];
            let inner = match slot.as_ref() {
                Some(current) => RowView::update(current, bucket.meetings.iter().cloned()),
                None => RowView::create(bucket.meetings.iter().cloned()),
            };
            let inner_diff = inner.diff(&StructuralChange);

            let relayout = i >= self.blocks.len() || outer_diff.mark(i) != Some(RowMark::Unchanged);
            if relayout {
                let header = ScheduleRow::DayBlock(bucket).paint(&self.card);
                match self.blocks.get_mut(i) {
                    Some(block) => block.header = header,
                    None => self.blocks.push(PaintedBlock {
                        day: bucket.day,
                        header,
                        rows: Vec::new(),
                    }),
                }
                stats.days_relaid += 1;
            }

            let block = &mut self.blocks[i];
            // A block that now stands for another day has nothing worth keeping.
            let fresh = block.day != bucket.day;
            if fresh {
                block.day = bucket.day;
                block.rows.clear();
            }

            stats.rows_removed += block.rows.len().saturating_sub(inner.len());
            block.rows.truncate(inner.len());

            for (idx, record) in inner.rows().iter().enumerate() {
                let needs_paint = fresh
                    || idx >= block.rows.len()
                    || inner_diff.mark(idx).is_some_and(RowMark::needs_paint);
                if !needs_paint {
                    continue;
                }
                let painted = ScheduleRow::MeetingRow(record).paint(&self.card);
                if idx < block.rows.len() {
                    block.rows[idx] = painted;
                } else {
                    block.rows.push(painted);
                }
                stats.rows_painted += 1;
            }

            *slot = Some(inner);
        }

        self.days = Some(outer);

        log::debug!("schedule card {}: {stats}", self.card.id);
        stats
    }

    /// The current outer view, once a pass has run.
    pub fn day_view(&self) -> Option<&Rc<RowView<DayBucket>>> {
        self.days.as_ref()
    }

    /// The current inner view of `day`, once a pass has covered it.
    pub fn meeting_view(&self, day: DayKey) -> Option<&Rc<RowView<MeetingRecord>>> {
        self.meetings[day.index()].as_ref()
    }

    pub fn meeting(&self, day: DayKey, index: usize) -> Option<&MeetingRecord> {
        self.meeting_view(day)?.get(index)
    }

    /// Painted rows in display order: each day block followed by its meetings.
    pub fn rows(&self) -> impl Iterator<Item = (RowKey, &Text<'static>)> + '_ {
        self.blocks.iter().flat_map(|block| {
            std::iter::once((RowKey::Day(block.day), &block.header)).chain(
                block
                    .rows
                    .iter()
                    .enumerate()
                    .map(move |(i, text)| (RowKey::Meeting(block.day, i), text)),
            )
        })
    }

    /// Keys of the meeting rows only, in display order.
    pub fn meeting_keys(&self) -> Vec<RowKey> {
        self.rows()
            .map(|(key, _)| key)
            .filter(|key| matches!(key, RowKey::Meeting(..)))
            .collect()
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }
}
