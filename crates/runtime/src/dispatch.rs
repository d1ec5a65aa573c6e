use schemeview_core::host::{TreeChange, TreeChangeListener};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Fans tree invalidations out to every registered host listener.
#[derive(Default)]
pub struct TreeChangeDispatcher {
    listeners: Mutex<Vec<Arc<dyn TreeChangeListener>>>,
}

impl TreeChangeDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, listener: Arc<dyn TreeChangeListener>) {
        self.listeners().push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners().len()
    }

    pub fn notify(&self, change: TreeChange) {
        // Snapshot first so a listener may register others while being notified.
        let listeners: Vec<_> = self.listeners().iter().cloned().collect();
        tracing::debug!(?change, listeners = listeners.len(), "emitting tree invalidation");
        for listener in listeners {
            listener.tree_changed(change);
        }
    }

    /// Drops all listeners; later notifications go nowhere.
    pub fn shutdown(&self) {
        self.listeners().clear();
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<Arc<dyn TreeChangeListener>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
