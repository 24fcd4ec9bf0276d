//! Shared CLI policy for script-helper binaries.
//!
//! Holds the color policy and tracing setup so every entry point that uses
//! the helper library behaves the same on the terminal.

pub mod cli;
pub mod observability;

pub use cli::ColorWhen;
pub use observability::init_tracing;
