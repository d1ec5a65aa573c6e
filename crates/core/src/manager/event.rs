use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Lifecycle notifications emitted by a build manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ManagerEventKind {
    /// A scheme refresh window opened; scheme data may be incomplete until it closes.
    RefreshStarted,
    RefreshCompleted,
    RefreshFailed,
    DefaultBuildSchemeUpdated,
    DefaultTestingSchemeUpdated,
}

impl ManagerEventKind {
    pub const ALL: [ManagerEventKind; 5] = [
        ManagerEventKind::RefreshStarted,
        ManagerEventKind::RefreshCompleted,
        ManagerEventKind::RefreshFailed,
        ManagerEventKind::DefaultBuildSchemeUpdated,
        ManagerEventKind::DefaultTestingSchemeUpdated,
    ];

    /// Stable event name as used by the manager's event surface.
    pub fn as_str(self) -> &'static str {
        match self {
            ManagerEventKind::RefreshStarted => "refresh-started",
            ManagerEventKind::RefreshCompleted => "refresh-completed",
            ManagerEventKind::RefreshFailed => "refresh-failed",
            ManagerEventKind::DefaultBuildSchemeUpdated => "default-build-scheme-updated",
            ManagerEventKind::DefaultTestingSchemeUpdated => "default-testing-scheme-updated",
        }
    }

    /// True for the two events that close a refresh window.
    pub fn ends_refresh(self) -> bool {
        matches!(self, ManagerEventKind::RefreshCompleted | ManagerEventKind::RefreshFailed)
    }
}

impl Display for ManagerEventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEventName(pub String);

impl Display for UnknownEventName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown build manager event: {}", self.0)
    }
}

impl Error for UnknownEventName {}

impl FromStr for ManagerEventKind {
    type Err = UnknownEventName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ManagerEventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventName(s.to_owned()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagerEvent {
    pub kind: ManagerEventKind,
}

impl ManagerEvent {
    pub fn new(kind: ManagerEventKind) -> Self {
        Self { kind }
    }
}

impl From<ManagerEventKind> for ManagerEvent {
    fn from(kind: ManagerEventKind) -> Self {
        ManagerEvent::new(kind)
    }
}

/// Receives events in the order the manager delivers them.
pub trait ManagerEventListener: Send + Sync {
    fn on_event(&self, event: ManagerEvent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("refresh-started", ManagerEventKind::RefreshStarted)]
    #[case("refresh-completed", ManagerEventKind::RefreshCompleted)]
    #[case("refresh-failed", ManagerEventKind::RefreshFailed)]
    #[case("default-build-scheme-updated", ManagerEventKind::DefaultBuildSchemeUpdated)]
    #[case("default-testing-scheme-updated", ManagerEventKind::DefaultTestingSchemeUpdated)]
    fn event_names_parse(#[case] name: &str, #[case] expected: ManagerEventKind) {
        assert_eq!(name.parse::<ManagerEventKind>(), Ok(expected));
        assert_eq!(expected.as_str(), name);
    }

    #[rstest]
    fn unknown_event_name_is_rejected() {
        let err = "schemes-changed".parse::<ManagerEventKind>().unwrap_err();
        assert_eq!(err, UnknownEventName("schemes-changed".into()));
    }

    #[rstest]
    fn only_completion_events_end_refresh() {
        let ending: Vec<_> =
            ManagerEventKind::ALL.into_iter().filter(|kind| kind.ends_refresh()).collect();
        assert_eq!(ending, vec![ManagerEventKind::RefreshCompleted, ManagerEventKind::RefreshFailed]);
    }
}
