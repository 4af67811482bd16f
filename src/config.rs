//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive the card and
//! the terminal host, plus helpers to load it from disk and the environment.

mod load;
mod schema;

pub use load::*;
pub use schema::*;
