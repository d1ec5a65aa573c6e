use schemeview_core::host::{TreeChange, TreeChangeListener};
use std::sync::Mutex;

/// Collects tree invalidations in arrival order.
#[derive(Debug, Default)]
pub struct RecordingTreeListener {
    changes: Mutex<Vec<TreeChange>>,
}

impl RecordingTreeListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes(&self) -> Vec<TreeChange> {
        self.changes.lock().expect("change log poisoned").clone()
    }

    pub fn change_count(&self) -> usize {
        self.changes.lock().expect("change log poisoned").len()
    }

    pub fn take_changes(&self) -> Vec<TreeChange> {
        self.changes.lock().expect("change log poisoned").drain(..).collect()
    }
}

impl TreeChangeListener for RecordingTreeListener {
    fn tree_changed(&self, change: TreeChange) {
        tracing::trace!(?change, "recording tree change");
        self.changes.lock().expect("change log poisoned").push(change);
    }
}
