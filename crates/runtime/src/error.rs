use schemeview_core::manager::ManagerError;
use thiserror::Error;

/// Errors raised while wiring a tree provider to its build manager.
///
/// Request-time failures never surface here; they degrade to an empty tree.
#[derive(Debug, Error)]
pub enum TreeProviderError {
    #[error("failed to subscribe to build manager events: {0}")]
    Subscribe(#[source] ManagerError),
}
