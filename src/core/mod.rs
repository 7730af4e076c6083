//! The variant state model.
//!
//! - [`DownloadState`]: the closed set of download states and their payloads
//! - [`State`]: facts shared by any closed state type
//!
//! Everything here is pure. Nothing in this module decides when a state
//! changes.

mod download;
mod error;
mod state;

pub use download::{DownloadState, StateKind, Transfer};
pub use error::StateError;
pub use state::State;
