/// Metadata describing a tree view contributed to the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub id: &'static str,
    pub display_name: &'static str,
    /// UI context key set to `true` while the view has no items.
    pub empty_context_key: &'static str,
}

impl ViewDescriptor {
    pub const fn new(
        id: &'static str,
        display_name: &'static str,
        empty_context_key: &'static str,
    ) -> Self {
        Self { id, display_name, empty_context_key }
    }
}

/// The build scheme view.
pub const BUILD_VIEW: ViewDescriptor =
    ViewDescriptor::new("schemeview.build", "Build", "schemeview.build.noSchemes");
