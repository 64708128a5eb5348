//! Sole owner and writer of [`AppState`].

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::dashboard::bus::{BusMessage, Probe, Transition, TransitionStream};
use crate::dashboard::state::AppState;

/// Applies transitions one at a time and replays the latest state to
/// observers.
///
/// Cloning yields another handle to the same store.
#[derive(Clone)]
pub struct StateStore {
    inner: Arc<Mutex<StoreInner>>,
}

struct StoreInner {
    current: AppState,
    /// Number of transitions applied so far.
    version: u64,
    observers: Vec<mpsc::UnboundedSender<AppState>>,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                current: AppState::initial(),
                version: 0,
                observers: Vec::new(),
            })),
        }
    }

    /// Clone of the latest state.
    pub fn current(&self) -> AppState {
        self.inner.lock().current.clone()
    }

    pub fn version(&self) -> u64 {
        self.inner.lock().version
    }

    pub fn observer_count(&self) -> usize {
        self.inner.lock().observers.len()
    }

    /// Returns an observer that first yields the latest state, then every
    /// later state in order.
    pub fn subscribe(&self) -> StateObserver {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        // Receiver is alive, send cannot fail.
        let _ = tx.send(inner.current.clone());
        inner.observers.push(tx);
        StateObserver { rx }
    }

    /// Apply the next transition to the latest state and publish the result.
    pub fn apply(&self, transition: Transition) -> AppState {
        let label = transition.label();
        let mut inner = self.inner.lock();
        let previous = std::mem::take(&mut inner.current);
        inner.current = transition.apply(previous);
        inner.version += 1;

        let next = inner.current.clone();
        let before = inner.observers.len();
        inner.observers.retain(|observer| observer.send(next.clone()).is_ok());
        let dropped = before - inner.observers.len();

        tracing::trace!(
            transition = label,
            version = inner.version,
            observers = inner.observers.len(),
            dropped,
            "transition applied"
        );
        next
    }

    fn sample(&self, probe: Probe) {
        let state = self.current();
        probe(&state);
    }

    /// Consume the merged bus stream until every source is gone.
    pub async fn drive(&self, mut stream: TransitionStream) {
        while let Some(message) = stream.next().await {
            match message {
                BusMessage::Transition(transition) => {
                    self.apply(transition);
                }
                BusMessage::Sample(probe) => self.sample(probe),
            }
        }
        tracing::debug!(version = self.version(), "transition stream closed");
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered view of every state the store publishes after subscription.
pub struct StateObserver {
    rx: mpsc::UnboundedReceiver<AppState>,
}

impl StateObserver {
    /// Next state, waiting if none is queued. `None` once the store is gone.
    pub async fn next(&mut self) -> Option<AppState> {
        self.rx.recv().await
    }

    pub fn try_next(&mut self) -> Option<AppState> {
        self.rx.try_recv().ok()
    }

    /// Drain everything queued and return only the newest state.
    pub fn latest(&mut self) -> Option<AppState> {
        let mut latest = None;
        while let Ok(state) = self.rx.try_recv() {
            latest = Some(state);
        }
        latest
    }
}
