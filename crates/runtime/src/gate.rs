use std::time::Duration;
use tokio::sync::watch;
use tokio::time::Instant;

/// Snapshot of the refresh window bookkeeping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshState {
    /// True strictly between a refresh start and its completion or failure.
    pub loading: bool,
    /// Number of refresh windows opened so far.
    pub generation: u64,
}

/// How a wait on the gate ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaitOutcome {
    /// No refresh was in flight; returned without suspending.
    Idle,
    /// The refresh window open at entry closed after `waited`.
    Settled { waited: Duration },
    /// The ceiling elapsed with the window still open.
    TimedOut { waited: Duration },
}

impl WaitOutcome {
    pub fn waited(self) -> Duration {
        match self {
            WaitOutcome::Idle => Duration::ZERO,
            WaitOutcome::Settled { waited } | WaitOutcome::TimedOut { waited } => waited,
        }
    }
}

/// Single-writer notification slot for refresh windows.
///
/// Only the owning provider's event handlers call [`RefreshGate::open`] and
/// [`RefreshGate::close`]; everyone else waits. A waiter remembers the
/// generation it entered on and wakes once that window has closed, even if
/// a newer window opened before it got scheduled.
#[derive(Debug)]
pub struct RefreshGate {
    state: watch::Sender<RefreshState>,
}

impl RefreshGate {
    pub fn new() -> Self {
        Self { state: watch::Sender::new(RefreshState::default()) }
    }

    pub fn state(&self) -> RefreshState {
        *self.state.borrow()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub(crate) fn open(&self) -> RefreshState {
        self.state.send_modify(|state| {
            state.loading = true;
            state.generation += 1;
        });
        self.state()
    }

    pub(crate) fn close(&self) -> RefreshState {
        self.state.send_modify(|state| state.loading = false);
        self.state()
    }

    /// Suspends until the refresh window open at call time closes, or `ceiling` elapses.
    pub async fn wait_idle(&self, ceiling: Duration) -> WaitOutcome {
        let mut receiver = self.state.subscribe();
        let entered = *receiver.borrow_and_update();
        if !entered.loading {
            return WaitOutcome::Idle;
        }

        let started = Instant::now();
        let settled = receiver
            .wait_for(|state| !state.loading || state.generation != entered.generation);
        let closed = tokio::time::timeout(ceiling, settled).await.is_ok();
        let waited = started.elapsed();
        if closed { WaitOutcome::Settled { waited } } else { WaitOutcome::TimedOut { waited } }
    }
}

impl Default for RefreshGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;

    const CEILING: Duration = Duration::from_secs(10);

    #[rstest]
    fn open_and_close_track_generation() {
        let gate = RefreshGate::new();
        assert_eq!(gate.state(), RefreshState { loading: false, generation: 0 });
        assert_eq!(gate.open(), RefreshState { loading: true, generation: 1 });
        assert_eq!(gate.close(), RefreshState { loading: false, generation: 1 });
        assert_eq!(gate.open().generation, 2);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn idle_gate_returns_immediately() {
        let gate = RefreshGate::new();
        let before = Instant::now();
        assert_eq!(gate.wait_idle(CEILING).await, WaitOutcome::Idle);
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn waiter_wakes_when_window_closes() {
        let gate = Arc::new(RefreshGate::new());
        gate.open();

        let closer = Arc::clone(&gate);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(3)).await;
            closer.close();
        });

        let outcome = gate.wait_idle(CEILING).await;
        assert_eq!(outcome, WaitOutcome::Settled { waited: Duration::from_secs(3) });
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn waiter_gives_up_at_ceiling() {
        let gate = RefreshGate::new();
        gate.open();

        let outcome = gate.wait_idle(CEILING).await;
        assert_eq!(outcome, WaitOutcome::TimedOut { waited: CEILING });
        assert!(gate.is_loading());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn newer_window_does_not_extend_wait() {
        let gate = Arc::new(RefreshGate::new());
        gate.open();

        let driver = Arc::clone(&gate);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            driver.close();
            driver.open();
            tokio::time::sleep(Duration::from_secs(5)).await;
            driver.close();
        });

        let outcome = gate.wait_idle(CEILING).await;
        assert_eq!(outcome.waited(), Duration::from_secs(1));
        assert!(gate.is_loading());
    }
}
