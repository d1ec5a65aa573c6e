use anyhow::Context;
use schemeview_manager_mock::{MockBuildManager, SchemeFixture};
use schemeview_runtime::SchemeTreeProvider;
use std::path::Path;
use std::sync::Arc;

use crate::host::TerminalHost;

pub type CliResult<T> = anyhow::Result<T>;

/// Provider, manager and host wired together for one CLI invocation.
pub struct Session {
    pub manager: Arc<MockBuildManager>,
    pub host: Arc<TerminalHost>,
    pub provider: SchemeTreeProvider<MockBuildManager>,
}

impl Session {
    pub fn from_fixture(fixture: &SchemeFixture) -> CliResult<Self> {
        let manager = Arc::new(MockBuildManager::from_fixture(fixture));
        let host = Arc::new(TerminalHost::new());
        let provider = SchemeTreeProvider::new(Arc::clone(&manager), host.clone())
            .context("failed to attach scheme tree to build manager")?;
        provider.register_change_listener(host.clone());
        Ok(Self { manager, host, provider })
    }

    pub fn load(path: &Path) -> CliResult<Self> {
        let fixture = SchemeFixture::load(path)
            .with_context(|| format!("failed to load fixture {}", path.display()))?;
        Self::from_fixture(&fixture)
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
