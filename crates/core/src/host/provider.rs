use std::future::Future;

/// Data source for a host tree view.
///
/// `children(None)` asks for the root level. Implementations answer every
/// request; failures degrade to an empty list rather than reaching the host.
pub trait TreeDataProvider {
    type Node;

    fn children(&self, node: Option<&Self::Node>) -> impl Future<Output = Vec<Self::Node>>;

    fn tree_item<'a>(&self, node: &'a Self::Node) -> &'a Self::Node;
}
