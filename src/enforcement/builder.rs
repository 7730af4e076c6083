//! Builder API for creating payload rules.

use crate::core::DownloadState;
use crate::enforcement::rules::{PayloadCheck, PayloadRules};
use crate::enforcement::violations::{PayloadViolation, ViolationStrategy};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Percentage ceiling applied unless overridden
pub const DEFAULT_MAX_PROGRESS: u8 = 100;

/// Builder for creating payload rules
pub struct PayloadRulesBuilder {
    max_progress: Option<u8>,
    bytes_within_total: bool,
    require_file_path: bool,
    require_error_message: bool,
    custom_checks: Vec<PayloadCheck>,
    on_violation: ViolationStrategy,
}

impl PayloadRulesBuilder {
    pub fn new() -> Self {
        Self {
            max_progress: Some(DEFAULT_MAX_PROGRESS),
            bytes_within_total: true,
            require_file_path: true,
            require_error_message: false,
            custom_checks: Vec::new(),
            on_violation: ViolationStrategy::Reject,
        }
    }

    /// Set the highest accepted progress percentage
    pub fn max_progress(mut self, max: u8) -> Self {
        self.max_progress = Some(max);
        self
    }

    /// Accept any progress value
    pub fn allow_any_progress(mut self) -> Self {
        self.max_progress = None;
        self
    }

    /// Require `bytes_loaded <= bytes_total`
    pub fn bytes_within_total(mut self, enabled: bool) -> Self {
        self.bytes_within_total = enabled;
        self
    }

    /// Require a non-empty path on `Done`
    pub fn require_file_path(mut self, enabled: bool) -> Self {
        self.require_file_path = enabled;
        self
    }

    /// Require a non-empty message on `Failed`
    pub fn require_error_message(mut self, enabled: bool) -> Self {
        self.require_error_message = enabled;
        self
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&DownloadState) -> Validation<(), NonEmptyVec<PayloadViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.custom_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&DownloadState) -> bool + Send + Sync + 'static,
    {
        let check = move |state: &DownloadState| {
            if predicate(state) {
                Validation::success(())
            } else {
                Validation::fail(PayloadViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.custom_checks.push(Box::new(check));
        self
    }

    /// Set violation handling strategy
    pub fn on_violation(mut self, strategy: ViolationStrategy) -> Self {
        self.on_violation = strategy;
        self
    }

    pub fn build(self) -> PayloadRules {
        PayloadRules {
            max_progress: self.max_progress,
            bytes_within_total: self.bytes_within_total,
            require_file_path: self.require_file_path,
            require_error_message: self.require_error_message,
            custom_checks: self.custom_checks,
            on_violation: self.on_violation,
        }
    }
}

impl Default for PayloadRulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
