use serde::Serialize;
use std::fmt::{Display, Formatter};

use crate::scheme::SchemeStatus;

/// Expansion state requested from the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collapsible {
    #[default]
    None,
    Collapsed,
    Expanded,
}

/// Reference to a host theme icon; the host resolves and paints it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TreeIcon {
    pub id: &'static str,
    pub color: Option<&'static str>,
}

impl TreeIcon {
    pub const fn new(id: &'static str) -> Self {
        Self { id, color: None }
    }

    pub const fn with_color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }

    pub fn for_status(status: SchemeStatus) -> Self {
        match status {
            SchemeStatus::Running => TreeIcon::new("sync~spin").with_color("debugIcon.startForeground"),
            SchemeStatus::Idle => TreeIcon::new("symbol-method"),
        }
    }
}

/// Two-part tag the host uses to filter menus and styling by item kind and status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContextValue {
    pub kind: &'static str,
    pub status: SchemeStatus,
}

impl ContextValue {
    pub const BUILD: &'static str = "build";

    pub fn build(status: SchemeStatus) -> Self {
        Self { kind: Self::BUILD, status }
    }
}

impl Display for ContextValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}&status={}", self.kind, self.status)
    }
}

impl Serialize for ContextValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(SchemeStatus::Running, "build&status=running")]
    #[case(SchemeStatus::Idle, "build&status=idle")]
    fn context_value_renders_kind_and_status(#[case] status: SchemeStatus, #[case] expected: &str) {
        assert_eq!(ContextValue::build(status).to_string(), expected);
        assert_eq!(
            serde_json::to_value(ContextValue::build(status)).expect("serializes"),
            serde_json::Value::String(expected.into())
        );
    }

    #[rstest]
    fn running_icon_spins() {
        let icon = TreeIcon::for_status(SchemeStatus::Running);
        assert_eq!(icon.id, "sync~spin");
        assert_eq!(icon.color, Some("debugIcon.startForeground"));
        assert_eq!(TreeIcon::for_status(SchemeStatus::Idle).color, None);
    }
}
