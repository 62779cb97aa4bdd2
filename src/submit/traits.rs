//! Trait abstractions for the submission and navigation boundaries,
//! enabling mocking in tests

use super::SubmitError;
use async_trait::async_trait;

/// Backend boundary for one submission.
///
/// Receives the validated snapshot payload. The prototype implementation is
/// [`DelaySubmitter`](super::DelaySubmitter); a real deployment substitutes a
/// network client here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submit: Send + Sync {
    /// Deliver one validated submission payload
    async fn submit(&self, payload: serde_json::Value) -> Result<(), SubmitError>;
}

/// Navigation boundary for the post-success redirect
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Navigate: Send + Sync {
    /// Request navigation to the given route
    async fn navigate(&self, route: &str);
}
