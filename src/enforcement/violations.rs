//! Payload violations and how to react to them.

use thiserror::Error;

/// A payload that is well-typed but inconsistent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PayloadViolation {
    #[error("Progress {progress}% exceeds the maximum of {max}%")]
    ProgressOutOfRange { progress: u8, max: u8 },

    #[error("Loaded bytes ({loaded}) exceed the total ({total})")]
    BytesExceedTotal { loaded: u64, total: u64 },

    #[error("Completed download has an empty file path")]
    EmptyFilePath,

    #[error("Failed download has an empty error message")]
    EmptyErrorMessage,

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

/// Strategy for handling payload violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViolationStrategy {
    /// Refuse the state and hand the violations back
    #[default]
    Reject,

    /// Keep the state as given, logging each violation
    Accept,
}
