/// Invalidation sent to the host view.
///
/// The only shape is a root-level invalidation: the host re-queries the whole
/// tree instead of patching a subtree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreeChange {
    Root,
}

/// Host-side receiver of tree invalidations.
pub trait TreeChangeListener: Send + Sync {
    fn tree_changed(&self, change: TreeChange);
}
