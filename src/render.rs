//! Hierarchical schedule rendering.
//!
//! Two nested row sources: the outer one carries one `DayBucket` per shown
//! weekday, and each day owns an inner one over its meetings. The outer diff
//! decides whether a day block is re-laid-out; the inner diff decides which
//! meeting rows repaint. Painted rows are cached between passes.

mod bucket;
mod renderer;
mod row;

pub use bucket::*;
pub use renderer::*;
pub use row::*;
