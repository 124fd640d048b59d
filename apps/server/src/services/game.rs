//! Drives the live game session on the tokio runtime.
//!
//! The engine only reports delays; this runtime owns the repeating timer task
//! and the delayed pair resolutions. The session mutex is never held across an
//! `.await`, so every mutation runs to completion before the next one starts.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use flashmatch_core::{BestTimes, GameSession, Resolution, SessionState, SettleOutcome};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, sleep, Instant};

/// The session and its timer task change together under one lock.
struct Live {
    session: GameSession,
    ticker: Option<JoinHandle<()>>,
}

impl Live {
    fn stop_timer(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
            tracing::debug!("Timer stopped");
        }
    }
}

struct GameRuntimeInner {
    live: Mutex<Live>,
}

impl GameRuntimeInner {
    fn lock(&self) -> MutexGuard<'_, Live> {
        self.live.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for GameRuntimeInner {
    fn drop(&mut self) {
        let live = self.live.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = live.ticker.take() {
            handle.abort();
        }
    }
}

/// Owner of the single live session.
///
/// Clone-able: all state sits behind an `Arc`. Background tasks only hold a
/// weak reference, so dropping the last clone stops them.
#[derive(Clone)]
pub struct GameRuntime {
    inner: Arc<GameRuntimeInner>,
}

impl GameRuntime {
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(GameRuntimeInner {
                live: Mutex::new(Live {
                    session,
                    ticker: None,
                }),
            }),
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.inner.lock().session.snapshot()
    }

    pub fn levels(&self) -> Vec<String> {
        let live = self.inner.lock();
        let levels = live
            .session
            .bank()
            .levels()
            .into_iter()
            .map(str::to_string)
            .collect();
        levels
    }

    pub fn best_times(&self) -> BestTimes {
        self.inner.lock().session.best_times().clone()
    }

    /// Whether a timer task is currently alive.
    pub fn timer_running(&self) -> bool {
        self.inner
            .lock()
            .ticker
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Start a round for `level`. Returns `None` for an unknown level, in
    /// which case the session is left idle.
    ///
    /// Dealing and replacing the timer happen under the same lock, so the
    /// running timer always belongs to the live round.
    pub fn start(&self, level: &str) -> Option<SessionState> {
        let mut live = self.inner.lock();
        let started = live.session.start_game(level);
        live.stop_timer();
        if !started {
            tracing::info!("Ignoring start for unknown level {}", level);
            return None;
        }

        let round = live.session.round();
        let period = live.session.timing().tick;
        tracing::info!("Started round {} on level {}", round, level);
        let weak = Arc::downgrade(&self.inner);
        live.ticker = Some(tokio::spawn(run_timer(weak, round, period)));
        Some(live.session.snapshot())
    }

    /// Flip a card and schedule the pair's outcome when it completes one.
    pub fn select(&self, card_id: &str) -> SessionState {
        let (resolution, state) = {
            let mut live = self.inner.lock();
            let resolution = live.session.select_card(card_id);
            (resolution, live.session.snapshot())
        };

        if let Some(resolution) = resolution {
            tracing::debug!(
                "Pair {} / {} resolves as {:?} in {:?}",
                resolution.first,
                resolution.second,
                resolution.kind,
                resolution.delay
            );
            tokio::spawn(settle_later(Arc::downgrade(&self.inner), resolution));
        }
        state
    }

    /// Abandon the round and stop the timer.
    pub fn reset(&self) -> SessionState {
        let mut live = self.inner.lock();
        live.session.reset_game();
        live.stop_timer();
        live.session.snapshot()
    }
}

async fn run_timer(runtime: Weak<GameRuntimeInner>, round: u64, period: std::time::Duration) {
    let mut interval = interval_at(Instant::now() + period, period);
    loop {
        interval.tick().await;
        let Some(inner) = runtime.upgrade() else {
            break;
        };
        let mut live = inner.lock();
        if live.session.round() != round || !live.session.tick() {
            break;
        }
    }
}

async fn settle_later(runtime: Weak<GameRuntimeInner>, resolution: Resolution) {
    sleep(resolution.delay).await;
    let Some(inner) = runtime.upgrade() else {
        return;
    };

    let mut live = inner.lock();
    match live.session.settle(&resolution) {
        SettleOutcome::Won { seconds, new_best } => {
            // Settling only succeeds for the live round, so this is its timer.
            live.stop_timer();
            tracing::info!("Round {} won in {}s (new best: {})", resolution.round, seconds, new_best);
        }
        SettleOutcome::Matched { matched_pairs } => {
            tracing::debug!("Matched pairs: {}", matched_pairs);
        }
        SettleOutcome::FlippedBack => {}
        SettleOutcome::Stale => {
            tracing::debug!("Discarded resolution from round {}", resolution.round);
        }
    }
}
