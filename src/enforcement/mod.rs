//! Opt-in consistency rules for state payloads.
//!
//! Building a [`DownloadState`](crate::core::DownloadState) accepts any
//! well-typed payload, including `bytes_loaded > bytes_total`. Callers that
//! want those values refused run them through [`PayloadRules`], which uses
//! Stillwater's `Validation` to report every broken rule in a single pass.
//!
//! # Example
//!
//! ```rust
//! use tagstate::core::DownloadState;
//! use tagstate::enforcement::{PayloadRulesBuilder, PayloadViolation, ViolationStrategy};
//!
//! let rules = PayloadRulesBuilder::new()
//!     .max_progress(100)
//!     .bytes_within_total(true)
//!     .on_violation(ViolationStrategy::Reject)
//!     .build();
//!
//! let err = rules.admit(DownloadState::downloading(42, 11, 10)).unwrap_err();
//! let found: Vec<PayloadViolation> = err.iter().cloned().collect();
//! assert_eq!(found, vec![PayloadViolation::BytesExceedTotal { loaded: 11, total: 10 }]);
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::PayloadRulesBuilder;
pub use rules::PayloadRules;
pub use violations::{PayloadViolation, ViolationStrategy};
