use std::sync::Arc;

use rstest::fixture;
use schemeview_host_mock::{RecordingTreeListener, RecordingUiContext};
use schemeview_manager_mock::MockBuildManager;

use crate::provider::SchemeTreeProvider;

/// Provider wired to a mock manager and recording host doubles.
pub struct ProviderHarness {
    pub manager: Arc<MockBuildManager>,
    pub context: Arc<RecordingUiContext>,
    pub changes: Arc<RecordingTreeListener>,
    pub provider: SchemeTreeProvider<MockBuildManager>,
}

/// rstest fixture: empty mock manager, provider subscribed, one change listener attached
#[fixture]
pub fn harness() -> ProviderHarness {
    let manager = Arc::new(MockBuildManager::new());
    let context = Arc::new(RecordingUiContext::new());
    let changes = Arc::new(RecordingTreeListener::new());
    let provider =
        SchemeTreeProvider::new(Arc::clone(&manager), context.clone()).expect("provider subscribes");
    provider.register_change_listener(changes.clone());
    ProviderHarness { manager, context, changes, provider }
}
