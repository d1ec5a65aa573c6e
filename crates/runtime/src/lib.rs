mod dispatch;
mod error;
mod gate;
mod node;
pub mod provider;

#[cfg(test)]
mod test_support;

pub use dispatch::TreeChangeDispatcher;
pub use error::TreeProviderError;
pub use gate::{RefreshGate, RefreshState, WaitOutcome};
pub use node::{BUILD_DEFAULT_BADGE, TESTING_DEFAULT_BADGE, TreeNode};
pub use provider::{REFRESH_WAIT_CEILING, RootResolution, SchemeTreeProvider};
