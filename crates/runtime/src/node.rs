use schemeview_core::host::{Collapsible, ContextValue, TreeIcon};
use schemeview_core::{Scheme, SchemeStatus};

/// Badge shown on the scheme used for builds when none is given explicitly.
pub const BUILD_DEFAULT_BADGE: &str = "✓";
/// Badge shown on the scheme used for tests when none is given explicitly.
pub const TESTING_DEFAULT_BADGE: &str = "(t)";

/// Presentation record for one scheme.
///
/// Built fresh on every root resolution and never updated afterwards; the
/// display attributes are fixed by the inputs given at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeNode {
    scheme_name: String,
    is_default_for_build: bool,
    is_default_for_testing: bool,
    is_running: bool,
    description: Option<String>,
}

impl TreeNode {
    pub fn new(
        scheme_name: impl Into<String>,
        is_default_for_build: bool,
        is_default_for_testing: bool,
        is_running: bool,
    ) -> Self {
        let scheme_name = scheme_name.into();
        let description = describe(is_default_for_build, is_default_for_testing);
        tracing::trace!(
            scheme = %scheme_name,
            build_default = is_default_for_build,
            testing_default = is_default_for_testing,
            running = is_running,
            "built scheme node"
        );
        Self { scheme_name, is_default_for_build, is_default_for_testing, is_running, description }
    }

    /// Derives the node for `scheme` from the manager's defaults and running check.
    pub fn for_scheme(
        scheme: &Scheme,
        build_default: Option<&str>,
        testing_default: Option<&str>,
        is_running: bool,
    ) -> Self {
        let name = scheme.name();
        Self::new(name, build_default == Some(name), testing_default == Some(name), is_running)
    }

    pub fn label(&self) -> &str {
        &self.scheme_name
    }

    pub fn tooltip(&self) -> &str {
        &self.scheme_name
    }

    /// Badge text, absent when the scheme is neither default.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_default_for_build(&self) -> bool {
        self.is_default_for_build
    }

    pub fn is_default_for_testing(&self) -> bool {
        self.is_default_for_testing
    }

    pub fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn status(&self) -> SchemeStatus {
        SchemeStatus::from_running(self.is_running)
    }

    /// Scheme nodes are leaves; the view has exactly one level.
    pub fn expandable(&self) -> bool {
        false
    }

    pub fn collapsible(&self) -> Collapsible {
        Collapsible::None
    }

    pub fn context_value(&self) -> ContextValue {
        ContextValue::build(self.status())
    }

    pub fn icon(&self) -> TreeIcon {
        TreeIcon::for_status(self.status())
    }
}

fn describe(is_default_for_build: bool, is_default_for_testing: bool) -> Option<String> {
    let mut badges = Vec::with_capacity(2);
    if is_default_for_build {
        badges.push(BUILD_DEFAULT_BADGE);
    }
    if is_default_for_testing {
        badges.push(TESTING_DEFAULT_BADGE);
    }
    if badges.is_empty() { None } else { Some(badges.join(" ")) }
}
