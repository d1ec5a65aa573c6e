use std::sync::Arc;
use std::time::Duration;

use schemeview_core::host::{
    BUILD_VIEW, TreeChange, TreeChangeListener, TreeDataProvider, UiContext, ViewDescriptor,
};
use schemeview_core::manager::{BuildManager, ManagerEvent, ManagerEventKind, ManagerEventListener};

use crate::dispatch::TreeChangeDispatcher;
use crate::error::TreeProviderError;
use crate::gate::{RefreshGate, WaitOutcome};
use crate::node::TreeNode;

/// Longest a root request waits for an in-flight refresh before answering anyway.
pub const REFRESH_WAIT_CEILING: Duration = Duration::from_secs(10);

/// State written by manager events and observed by root requests.
struct ViewState {
    gate: RefreshGate,
    changes: TreeChangeDispatcher,
}

impl ManagerEventListener for ViewState {
    fn on_event(&self, event: ManagerEvent) {
        let state = match event.kind {
            ManagerEventKind::RefreshStarted => self.gate.open(),
            kind if kind.ends_refresh() => self.gate.close(),
            _ => self.gate.state(),
        };
        tracing::debug!(
            event = %event.kind,
            loading = state.loading,
            generation = state.generation,
            "build manager event"
        );
        self.changes.notify(TreeChange::Root);
    }
}

/// Root-level nodes together with how the wait for an in-flight refresh ended.
#[derive(Debug)]
pub struct RootResolution {
    pub wait: WaitOutcome,
    pub nodes: Vec<TreeNode>,
}

/// Presents a build manager's schemes as a single-level host tree.
///
/// Nothing is cached: every root request reads the manager afresh and builds
/// new nodes. Manager events only move the refresh gate and tell the host to
/// re-query the whole tree.
pub struct SchemeTreeProvider<M: BuildManager> {
    manager: Arc<M>,
    context: Arc<dyn UiContext>,
    descriptor: &'static ViewDescriptor,
    state: Arc<ViewState>,
}

impl<M: BuildManager> SchemeTreeProvider<M> {
    /// Creates the provider for the build view and subscribes to `manager`'s events.
    pub fn new(manager: Arc<M>, context: Arc<dyn UiContext>) -> Result<Self, TreeProviderError> {
        Self::with_descriptor(manager, context, &BUILD_VIEW)
    }

    pub fn with_descriptor(
        manager: Arc<M>,
        context: Arc<dyn UiContext>,
        descriptor: &'static ViewDescriptor,
    ) -> Result<Self, TreeProviderError> {
        let state =
            Arc::new(ViewState { gate: RefreshGate::new(), changes: TreeChangeDispatcher::new() });
        manager.subscribe_events(state.clone()).map_err(TreeProviderError::Subscribe)?;
        tracing::debug!(view = descriptor.id, "scheme tree provider subscribed");
        Ok(Self { manager, context, descriptor, state })
    }

    pub fn descriptor(&self) -> &'static ViewDescriptor {
        self.descriptor
    }

    /// Registers a host listener for tree invalidations.
    pub fn register_change_listener(&self, listener: Arc<dyn TreeChangeListener>) {
        self.state.changes.register(listener);
    }

    /// Read-only view of the refresh gate.
    pub fn refresh_gate(&self) -> &RefreshGate {
        &self.state.gate
    }

    pub fn is_loading(&self) -> bool {
        self.state.gate.is_loading()
    }

    /// Children of `node`, or the scheme list when `node` is `None`.
    pub async fn children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        match node {
            Some(_) => Vec::new(),
            None => self.resolve_root().await.nodes,
        }
    }

    pub fn tree_item<'a>(&self, node: &'a TreeNode) -> &'a TreeNode {
        node
    }

    /// Detaches host listeners. Manager events still move the gate.
    pub fn shutdown(&self) {
        self.state.changes.shutdown();
    }

    /// Resolves the root level, reporting the refresh wait alongside the nodes.
    pub async fn resolve_root(&self) -> RootResolution {
        let wait = self.state.gate.wait_idle(REFRESH_WAIT_CEILING).await;
        match wait {
            WaitOutcome::Idle => {}
            WaitOutcome::Settled { waited } => {
                tracing::debug!(
                    view = self.descriptor.id,
                    waited_ms = waited.as_millis() as u64,
                    "refresh settled before resolving schemes"
                );
            }
            WaitOutcome::TimedOut { waited } => {
                tracing::warn!(
                    view = self.descriptor.id,
                    waited_ms = waited.as_millis() as u64,
                    "refresh still running at wait ceiling; resolving schemes anyway"
                );
            }
        }

        let schemes = match self.manager.schemes().await {
            Ok(schemes) => schemes,
            Err(err) => {
                tracing::warn!(
                    view = self.descriptor.id,
                    %err,
                    kind = ?err.kind,
                    "failed to fetch schemes; showing empty tree"
                );
                Vec::new()
            }
        };

        let nodes: Vec<TreeNode> = if schemes.is_empty() {
            Vec::new()
        } else {
            let build_default = self.manager.default_scheme_for_build();
            let testing_default = self.manager.default_scheme_for_testing();
            schemes
                .iter()
                .map(|scheme| {
                    TreeNode::for_scheme(
                        scheme,
                        build_default.as_deref(),
                        testing_default.as_deref(),
                        self.manager.is_scheme_running(scheme.name()),
                    )
                })
                .collect()
        };

        self.context.set_flag(self.descriptor.empty_context_key, nodes.is_empty());
        tracing::debug!(view = self.descriptor.id, schemes = nodes.len(), "resolved scheme nodes");
        RootResolution { wait, nodes }
    }
}

impl<M: BuildManager> TreeDataProvider for SchemeTreeProvider<M> {
    type Node = TreeNode;

    async fn children(&self, node: Option<&TreeNode>) -> Vec<TreeNode> {
        SchemeTreeProvider::children(self, node).await
    }

    fn tree_item<'a>(&self, node: &'a TreeNode) -> &'a TreeNode {
        SchemeTreeProvider::tree_item(self, node)
    }
}
