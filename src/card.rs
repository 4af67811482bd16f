//! The schedule card: mounts the renderer once, fires the one-shot mount
//! analytics event and forwards press intents to its collaborators.

mod collaborators;
mod container;

pub use collaborators::*;
pub use container::*;
