//! Incremental row sources.
//!
//! A `RowView` is an immutable snapshot of an ordered row sequence. Each
//! update produces a new view that weakly points at the one it supersedes, so
//! a renderer can diff the two and repaint only the rows a
//! `RowChangeDetector` reports as changed.

mod detector;
mod diff;
mod view;

pub use detector::*;
pub use diff::*;
pub use view::*;
