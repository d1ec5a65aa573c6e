use schemeview_core::Scheme;
use schemeview_core::manager::{
    BuildManager, ManagerError, ManagerErrorKind, ManagerEvent, ManagerEventKind,
    ManagerEventListener,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use crate::fixture::SchemeFixture;

#[derive(Debug, Default)]
struct MockState {
    schemes: Vec<Scheme>,
    default_build: Option<String>,
    default_testing: Option<String>,
    running: HashSet<String>,
    fetch_failure: Option<ManagerError>,
    fetch_latency: Duration,
    refuse_subscriptions: bool,
}

/// In-memory build manager whose state is set directly by the caller.
///
/// Events are delivered synchronously from [`MockBuildManager::emit`] to every
/// subscribed listener, in subscription order.
#[derive(Default)]
pub struct MockBuildManager {
    state: Mutex<MockState>,
    listeners: Mutex<Vec<Arc<dyn ManagerEventListener>>>,
    fetch_count: AtomicUsize,
}

impl MockBuildManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: &SchemeFixture) -> Self {
        let manager = Self::new();
        {
            let mut state = manager.state();
            state.schemes = fixture.schemes.clone();
            state.default_build = fixture.default_build.clone();
            state.default_testing = fixture.default_testing.clone();
            state.running = fixture.running.iter().cloned().collect();
            state.fetch_latency = fixture.fetch_latency();
            if fixture.fail_fetch {
                state.fetch_failure = Some(ManagerError::new(
                    ManagerErrorKind::FetchFailed,
                    "fixture requested a failing scheme fetch",
                ));
            }
        }
        manager
    }

    pub fn set_schemes<I, S>(&self, schemes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Scheme>,
    {
        self.state().schemes = schemes.into_iter().map(Into::into).collect();
    }

    /// Appends `schemes` to the current list without going through a fetch.
    pub fn add_schemes<I, S>(&self, schemes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Scheme>,
    {
        self.state().schemes.extend(schemes.into_iter().map(Into::into));
    }

    /// Current scheme list, regardless of any injected fetch failure.
    pub fn scheme_list(&self) -> Vec<Scheme> {
        self.state().schemes.clone()
    }

    pub fn set_default_build(&self, name: Option<&str>) {
        self.state().default_build = name.map(str::to_owned);
    }

    pub fn set_default_testing(&self, name: Option<&str>) {
        self.state().default_testing = name.map(str::to_owned);
    }

    /// Sets the build default and announces it.
    pub fn update_default_build(&self, name: Option<&str>) {
        self.set_default_build(name);
        self.emit(ManagerEventKind::DefaultBuildSchemeUpdated);
    }

    /// Sets the testing default and announces it.
    pub fn update_default_testing(&self, name: Option<&str>) {
        self.set_default_testing(name);
        self.emit(ManagerEventKind::DefaultTestingSchemeUpdated);
    }

    pub fn set_running(&self, name: &str, running: bool) {
        let mut state = self.state();
        if running {
            state.running.insert(name.to_owned());
        } else {
            state.running.remove(name);
        }
    }

    /// Makes every following fetch fail with `error` until cleared with `None`.
    pub fn fail_fetch(&self, error: Option<ManagerError>) {
        self.state().fetch_failure = error;
    }

    /// Delay applied to every fetch before it answers.
    pub fn set_fetch_latency(&self, latency: Duration) {
        self.state().fetch_latency = latency;
    }

    pub fn refuse_subscriptions(&self, refuse: bool) {
        self.state().refuse_subscriptions = refuse;
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners().len()
    }

    /// Delivers `kind` to all listeners.
    pub fn emit(&self, kind: ManagerEventKind) {
        let listeners: Vec<_> = self.listeners().iter().cloned().collect();
        tracing::debug!(event = %kind, listeners = listeners.len(), "mock manager emitting event");
        for listener in listeners {
            listener.on_event(ManagerEvent::new(kind));
        }
    }

    /// Opens a refresh window.
    pub fn begin_refresh(&self) {
        self.emit(ManagerEventKind::RefreshStarted);
    }

    /// Replaces the scheme list and closes the refresh window.
    pub fn complete_refresh<I, S>(&self, schemes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Scheme>,
    {
        self.set_schemes(schemes);
        self.emit(ManagerEventKind::RefreshCompleted);
    }

    /// Appends `schemes` and closes the refresh window.
    pub fn complete_refresh_adding<I, S>(&self, schemes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<Scheme>,
    {
        self.add_schemes(schemes);
        self.emit(ManagerEventKind::RefreshCompleted);
    }

    /// Closes the refresh window without touching the scheme list.
    pub fn fail_refresh(&self) {
        self.emit(ManagerEventKind::RefreshFailed);
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<Arc<dyn ManagerEventListener>>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl BuildManager for MockBuildManager {
    async fn schemes(&self) -> Result<Vec<Scheme>, ManagerError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        let latency = self.state().fetch_latency;
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }

        let state = self.state();
        match &state.fetch_failure {
            Some(error) => Err(error.clone()),
            None => Ok(state.schemes.clone()),
        }
    }

    fn default_scheme_for_build(&self) -> Option<String> {
        self.state().default_build.clone()
    }

    fn default_scheme_for_testing(&self) -> Option<String> {
        self.state().default_testing.clone()
    }

    fn is_scheme_running(&self, name: &str) -> bool {
        self.state().running.contains(name)
    }

    fn subscribe_events(&self, listener: Arc<dyn ManagerEventListener>) -> Result<(), ManagerError> {
        if self.state().refuse_subscriptions {
            return Err(ManagerError::new(
                ManagerErrorKind::SubscriptionFailed,
                "mock manager refuses subscriptions",
            ));
        }
        self.listeners().push(listener);
        Ok(())
    }
}
