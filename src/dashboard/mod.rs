//! Reactive state synchronization core.
//!
//! ```text
//! timer, triggers ──→ RequestScheduler ──→ Transport ──→ ResponseRouter
//!                                                             │ per category
//! keystrokes, selection ─────────────────────→ ReducerBus ←───┘
//!                                                  │ arrival order
//!                                              StateStore ──→ observers
//! ```
//!
//! Every event becomes one [`Transition`]; the [`ReducerBus`] merges them in
//! arrival order and the [`StateStore`] applies them one by one.

pub mod bus;
pub mod intent;
pub mod mvi;
pub mod pipeline;
pub mod reducer;
pub mod request;
pub mod router;
pub mod scheduler;
pub mod state;
pub mod store;

pub use bus::{BusMessage, BusSink, Probe, ReducerBus, Transition, TransitionStream};
pub use intent::{DashboardIntent, InputEdit};
pub use pipeline::{Dashboard, PipelineOptions};
pub use reducer::DashboardReducer;
pub use request::{Category, Method, Request};
pub use router::{Response, ResponseBody, ResponseRouter, RouteError, RoutedStreams};
pub use scheduler::{RequestScheduler, RequestStream, POLL_INTERVAL};
pub use state::{AppState, SiteStatus, Uptime};
pub use store::{StateObserver, StateStore};
