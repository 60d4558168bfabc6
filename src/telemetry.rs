//! Failure telemetry for the preview pipeline.
//!
//! Fallbacks are silent in the displayed state — end users only ever see a
//! degraded-format image. Operators still need to detect systemic backend
//! outages, so every absorbed failure is pushed through this side channel.

use std::sync::Arc;
use thiserror::Error;

/// Why a base64 fetch fell back to the direct SVG URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("service responded with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("malformed image payload: {0}")]
    MalformedBody(String),
}

impl From<reqwest::Error> for FetchFailure {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchFailure::Timeout
        } else {
            FetchFailure::Transport(e.to_string())
        }
    }
}

/// Callback invoked once per absorbed failure.
pub type FailureHook = Arc<dyn Fn(&FetchFailure) + Send + Sync>;

/// Side-channel sink for absorbed failures. Cheap to clone; cloning shares
/// the registered hook.
#[derive(Clone, Default)]
pub struct Telemetry {
    hook: Option<FailureHook>,
}

impl Telemetry {
    pub fn with_hook(hook: FailureHook) -> Self {
        Self { hook: Some(hook) }
    }

    /// Record a failure that the state machine is about to absorb.
    pub fn report(&self, failure: &FetchFailure) {
        tracing::warn!(%failure, "preview fetch fell back to SVG");
        if let Some(hook) = &self.hook {
            hook(failure);
        }
    }
}

impl std::fmt::Debug for Telemetry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Telemetry")
            .field("hook", &self.hook.is_some())
            .finish()
    }
}
