//! The download state: a closed set of four variants with per-variant data.
//!
//! ```text
//! Idle            (no payload)
//! Downloading     progress, bytesLoaded, bytesTotal
//! Done            filePath
//! Failed          error
//! ```
//!
//! Values are immutable. Moving to another state means building a new
//! value; this module defines the legal shapes only, never which move is
//! allowed.

use super::error::StateError;
use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload of the `Downloading` variant.
///
/// `bytes_loaded <= bytes_total` and `progress <= 100` are expected but not
/// enforced here; see [`crate::enforcement::PayloadRules`] for the opt-in
/// checks.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Integer percentage, nominally 0 to 100
    pub progress: u8,
    /// Bytes received so far
    pub bytes_loaded: u64,
    /// Expected size of the download in bytes
    pub bytes_total: u64,
}

impl Transfer {
    pub fn new(progress: u8, bytes_loaded: u64, bytes_total: u64) -> Self {
        Self {
            progress,
            bytes_loaded,
            bytes_total,
        }
    }
}

/// State of a single download.
///
/// The set of variants is closed. Every dispatcher in this crate matches
/// without a wildcard arm, and callers are expected to do the same, so a new
/// variant cannot be added without the compiler pointing at each place that
/// has to handle it.
///
/// A `match` that forgets a variant does not compile:
///
/// ```compile_fail
/// use tagstate::core::DownloadState;
///
/// fn label(state: &DownloadState) -> &'static str {
///     match state {
///         DownloadState::Idle => "idle",
///         DownloadState::Downloading(_) => "downloading",
///         DownloadState::Done { .. } => "done",
///     }
/// }
/// ```
///
/// There is no `Default`; the starting value is built explicitly:
///
/// ```rust
/// use tagstate::core::DownloadState;
///
/// let start = DownloadState::idle();
/// assert_eq!(start.describe(), "Waiting to start.");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DownloadState {
    Idle,
    Downloading(Transfer),
    Done {
        #[serde(rename = "filePath")]
        file_path: String,
    },
    Failed {
        error: String,
    },
}

/// Discriminant of a [`DownloadState`], without its payload.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum StateKind {
    Idle,
    Downloading,
    Done,
    Failed,
}

impl StateKind {
    /// Every kind, in declaration order.
    pub const ALL: [StateKind; 4] = [
        StateKind::Idle,
        StateKind::Downloading,
        StateKind::Done,
        StateKind::Failed,
    ];

    /// The tag used for this kind on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            StateKind::Idle => "idle",
            StateKind::Downloading => "downloading",
            StateKind::Done => "done",
            StateKind::Failed => "failed",
        }
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DownloadState {
    pub fn idle() -> Self {
        Self::Idle
    }

    pub fn downloading(progress: u8, bytes_loaded: u64, bytes_total: u64) -> Self {
        Self::Downloading(Transfer::new(progress, bytes_loaded, bytes_total))
    }

    pub fn done(file_path: impl Into<String>) -> Self {
        Self::Done {
            file_path: file_path.into(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self::Failed {
            error: error.into(),
        }
    }

    /// The discriminant of the active variant.
    pub fn kind(&self) -> StateKind {
        match self {
            Self::Idle => StateKind::Idle,
            Self::Downloading(_) => StateKind::Downloading,
            Self::Done { .. } => StateKind::Done,
            Self::Failed { .. } => StateKind::Failed,
        }
    }

    /// Human-readable rendering of the state.
    ///
    /// Payload values are interpolated as stored, without clamping or
    /// recomputation. Calling this twice on the same value yields the same
    /// string.
    ///
    /// ```rust
    /// use tagstate::core::DownloadState;
    ///
    /// let state = DownloadState::downloading(42, 4200, 10000);
    /// assert_eq!(state.describe(), "Downloading… 42% (4200 / 10000 bytes)");
    /// ```
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// True iff the active variant is `Downloading`.
    pub fn is_downloading(&self) -> bool {
        matches!(self, Self::Downloading(_))
    }

    /// Narrow to the `Downloading` payload.
    ///
    /// Returns `Some` exactly when [`is_downloading`](Self::is_downloading)
    /// is true, so the check and the field access happen in one expression:
    ///
    /// ```rust
    /// use tagstate::core::DownloadState;
    ///
    /// let state = DownloadState::downloading(42, 4200, 10000);
    /// if let Some(transfer) = state.as_downloading() {
    ///     assert_eq!(transfer.progress, 42);
    ///     assert_eq!(transfer.bytes_loaded, 4200);
    ///     assert_eq!(transfer.bytes_total, 10000);
    /// }
    /// assert!(DownloadState::idle().as_downloading().is_none());
    /// ```
    pub fn as_downloading(&self) -> Option<&Transfer> {
        match self {
            Self::Downloading(transfer) => Some(transfer),
            Self::Idle | Self::Done { .. } | Self::Failed { .. } => None,
        }
    }

    /// Narrow to the file path of a `Done` state.
    pub fn as_done(&self) -> Option<&str> {
        match self {
            Self::Done { file_path } => Some(file_path.as_str()),
            Self::Idle | Self::Downloading(_) | Self::Failed { .. } => None,
        }
    }

    /// Narrow to the error message of a `Failed` state.
    pub fn as_failed(&self) -> Option<&str> {
        match self {
            Self::Failed { error } => Some(error.as_str()),
            Self::Idle | Self::Downloading(_) | Self::Done { .. } => None,
        }
    }

    /// Encode as a `kind`-tagged JSON object.
    ///
    /// ```rust
    /// use tagstate::core::DownloadState;
    ///
    /// let json = DownloadState::done("/tmp/file.zip").to_json().unwrap();
    /// assert_eq!(json, r#"{"kind":"done","filePath":"/tmp/file.zip"}"#);
    /// ```
    pub fn to_json(&self) -> Result<String, StateError> {
        serde_json::to_string(self).map_err(|e| StateError::Serialization(e.to_string()))
    }

    /// Decode a `kind`-tagged JSON object.
    ///
    /// Anything outside the four known shapes is rejected here, before a
    /// `DownloadState` exists.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        serde_json::from_str(json).map_err(|e| {
            tracing::debug!(error = %e, "rejected download state input");
            StateError::Deserialization(e.to_string())
        })
    }
}

impl fmt::Display for DownloadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("Waiting to start."),
            Self::Downloading(Transfer {
                progress,
                bytes_loaded,
                bytes_total,
            }) => write!(
                f,
                "Downloading… {progress}% ({bytes_loaded} / {bytes_total} bytes)"
            ),
            Self::Done { file_path } => write!(f, "Download complete: {file_path}"),
            Self::Failed { error } => write!(f, "Download failed: {error}"),
        }
    }
}

impl State for DownloadState {
    fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Downloading(_) => "Downloading",
            Self::Done { .. } => "Done",
            Self::Failed { .. } => "Failed",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Done { .. } | Self::Failed { .. })
    }

    fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> [DownloadState; 4] {
        [
            DownloadState::idle(),
            DownloadState::downloading(42, 4200, 10000),
            DownloadState::done("/tmp/file.zip"),
            DownloadState::failed("Network timeout"),
        ]
    }

    #[test]
    fn describe_renders_each_variant() {
        let described: Vec<String> = samples().iter().map(DownloadState::describe).collect();
        assert_eq!(
            described,
            vec![
                "Waiting to start.",
                "Downloading… 42% (4200 / 10000 bytes)",
                "Download complete: /tmp/file.zip",
                "Download failed: Network timeout",
            ]
        );
    }

    #[test]
    fn describe_does_not_clamp_inconsistent_payloads() {
        let state = DownloadState::downloading(250, 9000, 10);
        let text = state.describe();
        assert!(text.contains("250"));
        assert!(text.contains("9000"));
        assert!(text.contains("10 bytes"));
    }

    #[test]
    fn display_and_describe_agree() {
        for state in samples() {
            assert_eq!(format!("{state}"), state.describe());
        }
    }

    #[test]
    fn is_downloading_only_for_downloading() {
        let flags: Vec<bool> = samples().iter().map(DownloadState::is_downloading).collect();
        assert_eq!(flags, vec![false, true, false, false]);
    }

    #[test]
    fn as_downloading_exposes_stored_payload() {
        let state = DownloadState::downloading(7, 70, 1000);
        let transfer = state.as_downloading().expect("downloading state narrows");
        assert_eq!(*transfer, Transfer::new(7, 70, 1000));
    }

    #[test]
    fn narrowers_agree_with_kind() {
        for state in samples() {
            assert_eq!(state.as_downloading().is_some(), state.kind() == StateKind::Downloading);
            assert_eq!(state.as_done().is_some(), state.kind() == StateKind::Done);
            assert_eq!(state.as_failed().is_some(), state.kind() == StateKind::Failed);
        }
    }

    #[test]
    fn as_done_and_as_failed_return_payload_text() {
        assert_eq!(DownloadState::done("/a/b").as_done(), Some("/a/b"));
        assert_eq!(DownloadState::failed("boom").as_failed(), Some("boom"));
        assert_eq!(DownloadState::failed("boom").as_done(), None);
    }

    #[test]
    fn kind_covers_every_variant_once() {
        let kinds: Vec<StateKind> = samples().iter().map(DownloadState::kind).collect();
        assert_eq!(kinds, StateKind::ALL.to_vec());
    }

    #[test]
    fn kind_tag_matches_wire_tag() {
        for state in samples() {
            let value: serde_json::Value = serde_json::from_str(&state.to_json().unwrap()).unwrap();
            assert_eq!(value["kind"], state.kind().as_str());
        }
    }

    #[test]
    fn downloading_serializes_with_camel_case_fields() {
        let json = DownloadState::downloading(42, 4200, 10000).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "downloading",
                "progress": 42,
                "bytesLoaded": 4200,
                "bytesTotal": 10000,
            })
        );
    }

    #[test]
    fn idle_serializes_to_bare_tag() {
        assert_eq!(DownloadState::idle().to_json().unwrap(), r#"{"kind":"idle"}"#);
    }

    #[test]
    fn from_json_reads_failed_state() {
        let state = DownloadState::from_json(r#"{"kind":"failed","error":"disk full"}"#).unwrap();
        assert_eq!(state, DownloadState::failed("disk full"));
    }

    #[test]
    fn from_json_rejects_unknown_kind() {
        let err = DownloadState::from_json(r#"{"kind":"paused"}"#).unwrap_err();
        assert!(matches!(err, StateError::Deserialization(_)));
    }

    #[test]
    fn from_json_rejects_missing_payload_field() {
        let err =
            DownloadState::from_json(r#"{"kind":"downloading","progress":1,"bytesLoaded":2}"#)
                .unwrap_err();
        assert!(matches!(err, StateError::Deserialization(_)));
    }

    #[test]
    fn same_inputs_build_identical_states() {
        let first = DownloadState::downloading(42, 4200, 10000);
        let second = DownloadState::downloading(42, 4200, 10000);

        assert_eq!(first, second);
        assert_eq!(first.describe(), second.describe());
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }

    #[test]
    fn clone_is_independent_and_equal() {
        let original = DownloadState::done("/tmp/x");
        let copy = original.clone();
        assert_eq!(original, copy);
        assert_ne!(original, DownloadState::done("/tmp/y"));
    }
}
