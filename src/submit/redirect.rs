//! Cancellable post-success redirect timer

use super::Navigate;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default wait between success and the redirect home (3 seconds)
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(3000);

/// Handle to a scheduled redirect.
///
/// Dropping the guard cancels the navigation, so a torn-down form instance
/// never redirects a shell that already moved on.
#[derive(Debug)]
pub struct RedirectGuard {
    handle: JoinHandle<()>,
}

impl RedirectGuard {
    /// Cancel the pending navigation
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the navigation already ran (or was cancelled)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RedirectGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Schedule a navigation to `route` after `delay`
pub fn schedule(navigator: Arc<dyn Navigate>, route: String, delay: Duration) -> RedirectGuard {
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        tracing::debug!(%route, "redirecting after success");
        navigator.navigate(&route).await;
    });
    RedirectGuard { handle }
}
