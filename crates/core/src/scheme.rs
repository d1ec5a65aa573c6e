use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Named build configuration reported by the build manager.
///
/// The tree treats schemes as read-only input; the name doubles as the
/// identity key of the rendered node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scheme {
    name: String,
}

impl Scheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Scheme {
    fn from(value: &str) -> Self {
        Scheme::new(value)
    }
}

impl From<String> for Scheme {
    fn from(value: String) -> Self {
        Scheme::new(value)
    }
}

/// Liveness of the process associated with a scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemeStatus {
    Running,
    Idle,
}

impl SchemeStatus {
    pub fn from_running(is_running: bool) -> Self {
        if is_running { SchemeStatus::Running } else { SchemeStatus::Idle }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SchemeStatus::Running => "running",
            SchemeStatus::Idle => "idle",
        }
    }
}

impl Display for SchemeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn scheme_deserializes_from_name_object() {
        let scheme: Scheme = serde_json::from_str(r#"{"name":"App"}"#).expect("valid scheme");
        assert_eq!(scheme.name(), "App");
        assert_eq!(scheme, Scheme::from("App"));
    }

    #[rstest]
    #[case(true, SchemeStatus::Running, "running")]
    #[case(false, SchemeStatus::Idle, "idle")]
    fn status_follows_running_flag(
        #[case] running: bool,
        #[case] expected: SchemeStatus,
        #[case] text: &str,
    ) {
        let status = SchemeStatus::from_running(running);
        assert_eq!(status, expected);
        assert_eq!(status.to_string(), text);
    }
}
