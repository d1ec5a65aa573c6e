use schemeview_core::host::{TreeChange, TreeChangeListener, UiContext};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Host side of the terminal view: keeps context flags and counts invalidations.
#[derive(Debug, Default)]
pub struct TerminalHost {
    flags: Mutex<HashMap<String, bool>>,
    invalidations: AtomicUsize,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(&self, key: &str) -> bool {
        self.flags.lock().unwrap_or_else(PoisonError::into_inner).get(key).copied().unwrap_or(false)
    }

    pub fn invalidations(&self) -> usize {
        self.invalidations.load(Ordering::SeqCst)
    }
}

impl UiContext for TerminalHost {
    fn set_flag(&self, key: &str, value: bool) {
        tracing::debug!(key, value, "context flag updated");
        self.flags.lock().unwrap_or_else(PoisonError::into_inner).insert(key.to_owned(), value);
    }
}

impl TreeChangeListener for TerminalHost {
    fn tree_changed(&self, change: TreeChange) {
        let count = self.invalidations.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(?change, count, "tree invalidated");
    }
}
