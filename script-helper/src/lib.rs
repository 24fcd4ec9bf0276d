//! Helpers for command-line scripts.
//!
//! Resolves mutually-exclusive long/short flag pairs to a single value and
//! writes color-coded ERROR/SUCCESS/WARNING lines to a diagnostic sink.
//! Fatal conditions come back as [`Fatal`] values; only the command entry
//! point decides to terminate the process.

pub mod error;
pub mod flag;
pub mod report;

pub use error::{Fatal, FlagError};
pub use flag::{get_flag, resolve, DEFAULT_LABEL};
pub use report::{format_line, paint, Reporter, Severity, RESET};
pub use script_helper_common::{init_tracing, ColorWhen};
