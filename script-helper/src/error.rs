//! Error types for flag resolution and the fatal reporting path.

use thiserror::Error;

/// Why a long/short flag pair could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlagError {
    /// Neither form was set; both still hold the sentinel.
    #[error("Missing values for {label}. Please provide one.")]
    MissingValue { label: String },

    /// Both forms were set.
    #[error("Both {label} are set. Please provide only one.")]
    ConflictingValues { label: String },
}

impl FlagError {
    /// The human-readable name of the flag pair.
    pub fn label(&self) -> &str {
        match self {
            FlagError::MissingValue { label } | FlagError::ConflictingValues { label } => label,
        }
    }
}

/// A condition that has already been reported on the fatal path.
///
/// The ERROR line is written by the time this value exists. Callers bubble
/// it up to the command entry point, which calls [`Fatal::exit`].
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Fatal {
    message: String,
    #[source]
    cause: Option<FlagError>,
}

impl Fatal {
    /// Exit status used when a fatal condition terminates the process.
    pub const EXIT_CODE: i32 = 1;

    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    pub(crate) fn from_flag(err: FlagError) -> Self {
        Self {
            message: err.to_string(),
            cause: Some(err),
        }
    }

    /// The uncolored message that was reported.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The flag resolution failure behind this condition, if any.
    pub fn flag_error(&self) -> Option<&FlagError> {
        self.cause.as_ref()
    }

    /// Terminate the process with [`Fatal::EXIT_CODE`].
    pub fn exit(self) -> ! {
        // ---
        tracing::debug!(message = %self.message, "terminating on fatal condition");
        std::process::exit(Self::EXIT_CODE)
    }
}
