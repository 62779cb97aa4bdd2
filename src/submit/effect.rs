//! Stand-in submission effect

use super::{Submit, SubmitError};
use async_trait::async_trait;
use std::time::Duration;

/// Default stand-in for the backend round trip (1 second)
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Submission effect that logs the payload and resolves after a fixed delay.
///
/// Stands in for a real backend call; it cannot fail.
#[derive(Debug, Clone)]
pub struct DelaySubmitter {
    delay: Duration,
}

impl DelaySubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for DelaySubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl Submit for DelaySubmitter {
    async fn submit(&self, payload: serde_json::Value) -> Result<(), SubmitError> {
        tokio::time::sleep(self.delay).await;
        tracing::info!(%payload, "submission accepted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_resolves_ok_after_delay() {
        let submitter = DelaySubmitter::default();
        let started = tokio::time::Instant::now();
        let result = submitter.submit(serde_json::json!({"name": "Jo"})).await;
        assert!(result.is_ok());
        assert_eq!(started.elapsed(), DEFAULT_SUBMIT_DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_delay() {
        let submitter = DelaySubmitter::new(Duration::from_millis(50));
        let started = tokio::time::Instant::now();
        submitter.submit(serde_json::json!({})).await.unwrap();
        assert_eq!(started.elapsed(), Duration::from_millis(50));
    }
}
