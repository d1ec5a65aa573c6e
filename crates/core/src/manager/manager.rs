use std::future::Future;
use std::sync::Arc;

use super::{ManagerError, ManagerEventListener};
use crate::scheme::Scheme;

/// Build manager as seen from the tree view.
///
/// Scheme discovery and running detection happen behind this trait. Only
/// `schemes` suspends; the default and running lookups answer from the
/// manager's current state.
pub trait BuildManager: Send + Sync {
    /// Current scheme list in manager order.
    fn schemes(&self) -> impl Future<Output = Result<Vec<Scheme>, ManagerError>> + Send;

    fn default_scheme_for_build(&self) -> Option<String>;

    fn default_scheme_for_testing(&self) -> Option<String>;

    fn is_scheme_running(&self, name: &str) -> bool;

    /// Registers a listener for the manager's lifecycle events.
    fn subscribe_events(&self, listener: Arc<dyn ManagerEventListener>) -> Result<(), ManagerError>;
}
