//! The `State` trait shared by every state type in the crate.
//!
//! A state type is a closed set of immutable values. The trait exposes the
//! few facts about a state that generic code (grouping, logging) needs
//! without knowing the concrete variants.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for closed state types.
///
/// All methods are pure. Implementors are expected to be enums whose
/// `match` arms cover every variant, so that adding a variant forces each
/// method to be revisited.
///
/// # Required Traits
///
/// - `Clone`: collection helpers hand out owned copies of states
/// - `PartialEq`: states are compared in tests and by callers
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `Deserialize`: states cross the JSON boundary
/// - `Send` + `Sync`: immutable states are shared across threads freely
///
/// # Example
///
/// ```rust
/// use tagstate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Upload {
///     Queued,
///     Sending { sent: u64 },
///     Sent,
///     Rejected { reason: String },
/// }
///
/// impl State for Upload {
///     fn name(&self) -> &str {
///         match self {
///             Self::Queued => "Queued",
///             Self::Sending { .. } => "Sending",
///             Self::Sent => "Sent",
///             Self::Rejected { .. } => "Rejected",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Sent | Self::Rejected { .. })
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Rejected { .. })
///     }
/// }
///
/// assert_eq!(Upload::Sending { sent: 10 }.name(), "Sending");
/// assert!(Upload::Rejected { reason: "quota".into() }.is_error());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the active variant, for display and logging.
    fn name(&self) -> &str;

    /// Whether the active variant is terminal.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Whether the active variant represents a failure.
    ///
    /// Error states are usually final too, but this is not enforced.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}
