//! Fan-in of every state-changing event into one ordered stream.
//!
//! Sources hold a [`BusSink`] and push [`Transition`]s (usually built from a
//! [`DashboardIntent`]). All sinks share one FIFO channel, so the stream order
//! is exactly the order in which events reached the bus. The seed transition
//! is queued when the bus is built, before any sink exists.

use std::fmt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::dashboard::intent::DashboardIntent;
use crate::dashboard::mvi::Reducer;
use crate::dashboard::reducer::DashboardReducer;
use crate::dashboard::state::AppState;

type TransitionFn = Box<dyn FnOnce(AppState) -> AppState + Send>;

/// Read-only look at the state, run after every earlier transition.
pub type Probe = Box<dyn FnOnce(&AppState) + Send>;

/// A pure `AppState -> AppState` replacement.
pub struct Transition {
    label: &'static str,
    apply: TransitionFn,
}

impl Transition {
    pub fn new<F>(label: &'static str, apply: F) -> Self
    where
        F: FnOnce(AppState) -> AppState + Send + 'static,
    {
        Self {
            label,
            apply: Box::new(apply),
        }
    }

    /// Replaces the whole state with [`AppState::initial`].
    pub fn seed() -> Self {
        Self::from_intent(DashboardIntent::Seed)
    }

    pub fn from_intent(intent: DashboardIntent) -> Self {
        let label = intent.label();
        Self::new(label, move |state| DashboardReducer::reduce(state, intent))
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn apply(self, state: AppState) -> AppState {
        (self.apply)(state)
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

pub enum BusMessage {
    Transition(Transition),
    Sample(Probe),
}

/// Owns the merged stream until the store takes it.
pub struct ReducerBus {
    sink: BusSink,
    stream: TransitionStream,
}

impl ReducerBus {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = BusSink { tx };
        sink.push(Transition::seed());
        Self {
            sink,
            stream: TransitionStream { rx },
        }
    }

    pub fn sink(&self) -> BusSink {
        self.sink.clone()
    }

    /// Hands the merged stream to its consumer. The stream ends once every
    /// sink has been dropped.
    pub fn into_stream(self) -> TransitionStream {
        self.stream
    }
}

impl Default for ReducerBus {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TransitionStream {
    rx: mpsc::UnboundedReceiver<BusMessage>,
}

impl TransitionStream {
    pub async fn next(&mut self) -> Option<BusMessage> {
        self.rx.recv().await
    }

    /// Non-blocking variant; `None` when nothing is queued right now.
    pub fn try_next(&mut self) -> Option<BusMessage> {
        self.rx.try_recv().ok()
    }
}

/// Cloneable entry point into the bus.
///
/// Every method returns `false` once the stream's consumer is gone.
#[derive(Clone)]
pub struct BusSink {
    tx: mpsc::UnboundedSender<BusMessage>,
}

impl BusSink {
    pub fn push(&self, transition: Transition) -> bool {
        let label = transition.label();
        let sent = self.tx.send(BusMessage::Transition(transition)).is_ok();
        if !sent {
            tracing::trace!(transition = label, "bus closed, transition dropped");
        }
        sent
    }

    pub fn emit(&self, intent: DashboardIntent) -> bool {
        self.push(Transition::from_intent(intent))
    }

    /// Queue `probe` behind everything already on the bus. It sees the state
    /// produced by all transitions pushed before this call.
    pub fn sample<F>(&self, probe: F) -> bool
    where
        F: FnOnce(&AppState) + Send + 'static,
    {
        self.tx.send(BusMessage::Sample(Box::new(probe))).is_ok()
    }

    /// Attach a source stream, turning each item into an intent.
    pub fn forward<T, F>(&self, mut source: mpsc::UnboundedReceiver<T>, to_intent: F) -> JoinHandle<()>
    where
        T: Send + 'static,
        F: Fn(T) -> DashboardIntent + Send + 'static,
    {
        let sink = self.clone();
        tokio::spawn(async move {
            while let Some(item) = source.recv().await {
                if !sink.emit(to_intent(item)) {
                    break;
                }
            }
        })
    }
}
