//! Schedule data: meeting records, day keys and the seven-day grouping.
//!
//! Records arrive from a `ScheduleSource` already resolved; this module only
//! shapes them into `ScheduleByDay` and never mutates what it was given.

mod display;
mod model;
mod source;

pub use display::*;
pub use model::*;
pub use source::*;
