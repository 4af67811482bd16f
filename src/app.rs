//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the current week, the
//! active screen, the meeting selection and the status line.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
