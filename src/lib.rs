//! Tagstate: a closed download state model with exhaustive dispatch
//!
//! A download is always in exactly one of four states, and each state
//! carries its own data. The state is a Rust `enum`, so every `match` over it
//! must name all four variants; forgetting one is a compile error rather than
//! a runtime fallback.
//!
//! # Core Concepts
//!
//! - **DownloadState**: `Idle`, `Downloading`, `Done` or `Failed`, each with its own payload
//! - **Describe**: total rendering of any state as text
//! - **Narrowing**: `as_downloading()` hands out the transfer fields only for `Downloading`
//! - **Payload rules**: opt-in checks for inconsistent but well-typed payloads
//! - **Collections**: `head`, `tail`, `zip` and `group_by` over any element type
//!
//! # Example
//!
//! ```rust
//! use tagstate::core::DownloadState;
//! use tagstate::collections::group_by;
//!
//! let states = vec![
//!     DownloadState::idle(),
//!     DownloadState::downloading(42, 4200, 10000),
//!     DownloadState::done("/tmp/file.zip"),
//!     DownloadState::failed("Network timeout"),
//! ];
//!
//! for state in &states {
//!     println!("{}", state.describe());
//!     if let Some(transfer) = state.as_downloading() {
//!         println!("  Progress: {}%", transfer.progress);
//!     }
//! }
//!
//! let by_kind = group_by(&states, |s| s.kind());
//! assert_eq!(by_kind["downloading"].len(), 1);
//! ```

pub mod collections;
pub mod core;
pub mod enforcement;

// Re-export commonly used types
pub use collections::{group_by, head, tail, zip};
pub use core::{DownloadState, State, StateError, StateKind, Transfer};
pub use enforcement::{PayloadRules, PayloadRulesBuilder, PayloadViolation, ViolationStrategy};
