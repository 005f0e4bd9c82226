//! Platform share sheet

use async_trait::async_trait;
use supper_common::ClientState;
use thiserror::Error;

/// Shown when the platform has no share capability
pub const UNSUPPORTED_NOTICE: &str = "Sharing is not supported on this device.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShareError {
    #[error("share cancelled")]
    Cancelled,
    #[error("share failed: {0}")]
    Failed(String),
}

/// The platform's native share capability
#[async_trait(?Send)]
pub trait ShareTarget {
    fn is_supported(&self) -> bool;

    async fn share(&self, title: &str, text: &str) -> Result<(), ShareError>;
}

/// How a share attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Unsupported,
    Cancelled,
    Failed(String),
}

impl ShareOutcome {
    /// Only the unsupported case is surfaced to the user
    pub fn apply(&self, state: ClientState) -> ClientState {
        match self {
            ShareOutcome::Unsupported => state.with_notice(UNSUPPORTED_NOTICE),
            _ => state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_sets_notice() {
        let state = ShareOutcome::Unsupported.apply(ClientState::new());
        assert_eq!(state.notice.as_deref(), Some(UNSUPPORTED_NOTICE));
    }

    #[test]
    fn test_cancel_and_failure_are_silent() {
        for outcome in [
            ShareOutcome::Shared,
            ShareOutcome::Cancelled,
            ShareOutcome::Failed("x".into()),
        ] {
            assert_eq!(outcome.apply(ClientState::new()).notice, None);
        }
    }
}
