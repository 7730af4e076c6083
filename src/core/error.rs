//! Errors raised at the serialization boundary of the state model.

use thiserror::Error;

/// Errors that can occur when moving states in or out of their JSON form.
///
/// Constructing or describing a state never fails; only foreign data can.
#[derive(Debug, Error)]
pub enum StateError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// The input was not a well-formed state: unknown `kind`, missing
    /// payload field, or a field of the wrong type
    #[error("Deserialization failed: {0}")]
    Deserialization(String),
}
