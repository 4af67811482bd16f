//! Application model types: `App` and `Screen`.

use crate::render::RenderStats;
use crate::schedule::ScheduleByDay;

/// Which screen the host is showing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// The compact schedule card.
    Card,
    /// Every day and meeting, one line each.
    FullSchedule,
}

impl Default for Screen {
    fn default() -> Self {
        Self::Card
    }
}

/// The main application model.
pub struct App {
    pub schedule: ScheduleByDay,
    pub screen: Screen,
    /// Position in the card's meeting rows (day headers are not selectable).
    pub selected: usize,
    meeting_count: usize,
    pub status: Option<String>,
    pub last_stats: Option<RenderStats>,
    pub source: Option<String>,
}

impl App {
    /// Create a new `App` showing `schedule` on the card screen.
    pub fn new(schedule: ScheduleByDay) -> Self {
        Self {
            schedule,
            screen: Screen::Card,
            selected: 0,
            meeting_count: 0,
            status: None,
            last_stats: None,
            source: None,
        }
    }

    /// Record where the week was loaded from.
    pub fn set_source(&mut self, source: String) {
        self.source = Some(source);
    }

    /// Replace the week (a reload). The card renders it on the next pass.
    pub fn set_schedule(&mut self, schedule: ScheduleByDay) {
        self.schedule = schedule;
    }

    /// Record the outcome of a render pass and how many meeting rows the card
    /// now shows, keeping the selection in range.
    pub fn record_render(&mut self, stats: RenderStats, meeting_count: usize) {
        self.last_stats = Some(stats);
        self.meeting_count = meeting_count;
        if meeting_count == 0 {
            self.selected = 0;
        } else if self.selected >= meeting_count {
            self.selected = meeting_count - 1;
        }
    }

    pub fn has_meetings(&self) -> bool {
        self.meeting_count > 0
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = Some(msg.into());
    }

    pub fn show_full_schedule(&mut self) {
        self.screen = Screen::FullSchedule;
    }

    pub fn back_to_card(&mut self) {
        self.screen = Screen::Card;
    }

    /// Move selection to the next meeting. Wraps around to the first one.
    pub fn next(&mut self) {
        if self.meeting_count > 0 {
            self.selected = (self.selected + 1) % self.meeting_count;
        }
    }

    /// Move selection to the previous meeting. Wraps around to the last one.
    pub fn prev(&mut self) {
        if self.meeting_count > 0 {
            self.selected = match self.selected {
                0 => self.meeting_count - 1,
                n => n - 1,
            };
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.meeting_count.saturating_sub(1);
    }
}
