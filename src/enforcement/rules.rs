//! Payload rules for download states, checked with `Validation`.

use crate::core::{DownloadState, State};
use crate::enforcement::violations::{PayloadViolation, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for custom payload checks
pub type PayloadCheck =
    Box<dyn Fn(&DownloadState) -> Validation<(), NonEmptyVec<PayloadViolation>> + Send + Sync>;

/// Consistency rules for state payloads.
///
/// Construction of a [`DownloadState`] never validates anything; these rules
/// are applied only where a caller asks for them. Every violated rule is
/// reported, not just the first.
pub struct PayloadRules {
    pub(crate) max_progress: Option<u8>,
    pub(crate) bytes_within_total: bool,
    pub(crate) require_file_path: bool,
    pub(crate) require_error_message: bool,
    pub(crate) custom_checks: Vec<PayloadCheck>,
    pub(crate) on_violation: ViolationStrategy,
}

impl Default for PayloadRules {
    fn default() -> Self {
        crate::enforcement::PayloadRulesBuilder::new().build()
    }
}

impl PayloadRules {
    /// Check all rules against `state`, accumulating every violation.
    pub fn check(&self, state: &DownloadState) -> Validation<(), NonEmptyVec<PayloadViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<PayloadViolation>>> = Vec::new();

        match state {
            DownloadState::Idle => {}
            DownloadState::Downloading(transfer) => {
                if let Some(max) = self.max_progress {
                    checks.push(if transfer.progress > max {
                        Validation::fail(PayloadViolation::ProgressOutOfRange {
                            progress: transfer.progress,
                            max,
                        })
                    } else {
                        Validation::success(())
                    });
                }
                if self.bytes_within_total {
                    checks.push(if transfer.bytes_loaded > transfer.bytes_total {
                        Validation::fail(PayloadViolation::BytesExceedTotal {
                            loaded: transfer.bytes_loaded,
                            total: transfer.bytes_total,
                        })
                    } else {
                        Validation::success(())
                    });
                }
            }
            DownloadState::Done { file_path } => {
                if self.require_file_path && file_path.is_empty() {
                    checks.push(Validation::fail(PayloadViolation::EmptyFilePath));
                }
            }
            DownloadState::Failed { error } => {
                if self.require_error_message && error.is_empty() {
                    checks.push(Validation::fail(PayloadViolation::EmptyErrorMessage));
                }
            }
        }

        for check_fn in &self.custom_checks {
            checks.push(check_fn(state));
        }

        if checks.is_empty() {
            return Validation::success(());
        }
        Validation::all_vec(checks).map(|_| ())
    }

    /// Check `state` and apply the configured [`ViolationStrategy`].
    ///
    /// Under `Reject`, a state with violations comes back as `Err` holding
    /// every violation. Under `Accept`, the state is returned unchanged and
    /// the violations are only logged.
    pub fn admit(
        &self,
        state: DownloadState,
    ) -> Result<DownloadState, NonEmptyVec<PayloadViolation>> {
        let violations = match self.check(&state) {
            Validation::Success(_) => return Ok(state),
            Validation::Failure(errors) => errors,
        };

        match self.on_violation {
            ViolationStrategy::Reject => {
                tracing::warn!(
                    state = state.name(),
                    violations = violations.len(),
                    "rejected inconsistent state payload"
                );
                Err(violations)
            }
            ViolationStrategy::Accept => {
                for violation in violations.iter() {
                    tracing::debug!(state = state.name(), %violation, "accepted payload violation");
                }
                Ok(state)
            }
        }
    }

    pub fn violation_strategy(&self) -> ViolationStrategy {
        self.on_violation
    }
}
