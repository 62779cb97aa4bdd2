//! Submission effect and navigation boundaries

mod effect;
mod redirect;
mod traits;

pub use effect::{DelaySubmitter, DEFAULT_SUBMIT_DELAY};
pub use redirect::{schedule, RedirectGuard, DEFAULT_REDIRECT_DELAY};
pub use traits::{Navigate, Submit};

#[cfg(test)]
pub use traits::{MockNavigate, MockSubmit};

use thiserror::Error;

/// Failure modes a real submission backend can report.
///
/// The stand-in [`DelaySubmitter`] never fails; these exist so replacing it
/// with a network client does not change the state machine's contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Retryable failure; the form returns to Idle with its values intact
    #[error("submission failed, please try again: {0}")]
    Transient(String),
    /// Non-retryable rejection
    #[error("submission rejected: {0}")]
    Permanent(String),
}

impl SubmitError {
    /// Whether resubmitting the same snapshot can reasonably succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmitError::Transient(_))
    }
}
