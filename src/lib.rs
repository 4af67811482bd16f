//! `schedcard`: a weekly class schedule card with incremental row diffing.
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`schedule`] | `MeetingRecord`, `DayKey`, `ScheduleByDay`, sources        |
//! | [`rows`]     | `RowView`, `RowChangeDetector`, `RowDiff`                  |
//! | [`render`]   | `HierarchicalScheduleRenderer`, `ScheduleRow`, `DayBucket` |
//! | [`card`]     | `ScheduleCard`, `Lifecycle`, collaborator traits           |
//! | [`config`]   | `Settings` and its loader                                  |
//! | [`app`], [`ui`], [`runtime`] | the terminal host                          |

pub mod app;
pub mod card;
pub mod config;
pub mod error;
pub mod render;
pub mod rows;
pub mod runtime;
pub mod schedule;
pub mod ui;

pub use error::{ScheduleError, ScheduleResult};
