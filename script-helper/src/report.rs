//! Color-coded ERROR/SUCCESS/WARNING lines.
//!
//! Each line has the form `<LEVEL>: <colored message>\n`. Coloring is plain
//! concatenation of a start escape, the message and a reset escape.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use script_helper_common::ColorWhen;
use tracing::warn;

use crate::error::{Fatal, FlagError};

/// Escape sequence that restores the terminal's default color.
pub const RESET: &str = "\x1b[0m";

/// Severity of a reported message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Red, may be fatal.
    Error,

    /// Green.
    Success,

    /// Yellow.
    Warning,
}

impl Severity {
    // ---
    /// Line prefix without the trailing colon.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Success => "SUCCESS",
            Severity::Warning => "WARNING",
        }
    }

    /// Foreground color escape for this severity.
    pub fn ansi_code(self) -> &'static str {
        match self {
            Severity::Error => "\x1b[31m",
            Severity::Success => "\x1b[32m",
            Severity::Warning => "\x1b[33m",
        }
    }
}

/// Wrap `message` in the severity's color.
pub fn paint(severity: Severity, message: &str) -> String {
    format!("{}{}{}", severity.ansi_code(), message, RESET)
}

/// Build one complete output line, newline included.
pub fn format_line(severity: Severity, message: &str, color: bool) -> String {
    // ---
    if color {
        format!("{}: {}\n", severity.label(), paint(severity, message))
    } else {
        format!("{}: {}\n", severity.label(), message)
    }
}

/// Writes report lines to a shared sink.
///
/// The sink sits behind a mutex so a reporter shared between threads never
/// interleaves partial lines. Write failures are traced and dropped.
pub struct Reporter<W> {
    sink: Mutex<W>,
    color: bool,
}

impl Reporter<io::Stderr> {
    /// Reporter on the process diagnostic stream.
    pub fn stderr(color: ColorWhen) -> Self {
        // ---
        Self::new(io::stderr()).with_color(color.should_color_stderr())
    }
}

impl<W: Write> Reporter<W> {
    // ---
    /// Reporter on an arbitrary sink, with color enabled.
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
            color: true,
        }
    }

    /// Enable or disable the ANSI color around messages.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn is_colored(&self) -> bool {
        self.color
    }

    /// Give back the sink, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Report a non-fatal error. Execution continues.
    pub fn error(&self, message: &str) {
        self.emit(Severity::Error, message);
    }

    /// Report an error, turning it into a [`Fatal`] when `fatal` is set.
    ///
    /// The line is written exactly once either way.
    pub fn report_error(&self, message: &str, fatal: bool) -> Result<(), Fatal> {
        // ---
        self.emit(Severity::Error, message);
        if fatal {
            return Err(Fatal::new(message));
        }
        Ok(())
    }

    /// Report an error on the fatal path.
    ///
    /// Returns the [`Fatal`] for the caller to propagate to its entry point.
    pub fn fatal(&self, message: &str) -> Fatal {
        self.emit(Severity::Error, message);
        Fatal::new(message)
    }

    pub(crate) fn fatal_flag(&self, err: FlagError) -> Fatal {
        // ---
        let fatal = Fatal::from_flag(err);
        self.emit(Severity::Error, fatal.message());
        fatal
    }

    /// Report a success. Never fatal.
    pub fn success(&self, message: &str) {
        self.emit(Severity::Success, message);
    }

    /// Report a warning. Never fatal.
    pub fn warning(&self, message: &str) {
        self.emit(Severity::Warning, message);
    }

    fn emit(&self, severity: Severity, message: &str) {
        // ---
        let line = format_line(severity, message, self.color);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);

        if let Err(e) = sink.write_all(line.as_bytes()).and_then(|()| sink.flush()) {
            warn!(severity = severity.label(), "failed to write report line: {e}");
        }
    }
}
