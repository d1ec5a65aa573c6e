use schemeview_core::Scheme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Serialized manager state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeFixture {
    pub schemes: Vec<Scheme>,
    pub default_build: Option<String>,
    pub default_testing: Option<String>,
    pub running: Vec<String>,
    pub fail_fetch: bool,
    pub fetch_latency_ms: u64,
}

impl SchemeFixture {
    pub fn from_json(text: &str) -> Result<Self, FixtureError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| FixtureError::Io { path: path.to_path_buf(), source })?;
        Self::from_json(&text)
    }

    pub fn fetch_latency(&self) -> Duration {
        Duration::from_millis(self.fetch_latency_ms)
    }
}
