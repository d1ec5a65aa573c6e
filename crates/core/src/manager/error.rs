use std::error::Error;
use std::fmt::{Display, Formatter};

/// General error reported by build managers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerError {
    pub kind: ManagerErrorKind,
    pub message: Option<String>,
}

impl ManagerError {
    pub fn new(kind: ManagerErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: Some(message.into()) }
    }

    pub fn simple(kind: ManagerErrorKind) -> Self {
        Self { kind, message: None }
    }
}

impl Display for ManagerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {msg}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Error for ManagerError {}

/// Categorises build manager failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerErrorKind {
    FetchFailed,
    Unavailable,
    SubscriptionFailed,
    InvalidArgument,
}

impl Display for ManagerErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ManagerErrorKind::FetchFailed => "scheme fetch failed",
            ManagerErrorKind::Unavailable => "build manager unavailable",
            ManagerErrorKind::SubscriptionFailed => "event subscription refused",
            ManagerErrorKind::InvalidArgument => "invalid argument",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn display_prefixes_message_with_kind() {
        let err = ManagerError::new(ManagerErrorKind::FetchFailed, "xcodebuild -list exited with 65");
        assert_eq!(err.to_string(), "scheme fetch failed: xcodebuild -list exited with 65");
    }

    #[rstest]
    #[case(ManagerErrorKind::Unavailable, "build manager unavailable")]
    #[case(ManagerErrorKind::SubscriptionFailed, "event subscription refused")]
    #[case(ManagerErrorKind::InvalidArgument, "invalid argument")]
    fn display_without_message_names_kind(#[case] kind: ManagerErrorKind, #[case] expected: &str) {
        assert_eq!(ManagerError::simple(kind).to_string(), expected);
    }
}
