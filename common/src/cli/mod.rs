//! CLI-related shared utilities.
//!
//! This module centralizes CLI policy so binaries don't duplicate behavior.

mod color;

pub use color::{ColorWhen, ParseColorWhenError};
