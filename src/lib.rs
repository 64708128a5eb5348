//! Live uptime dashboard for a remote site inventory.
//!
//! The [`dashboard`] module holds the reactive core: requests are scheduled,
//! responses routed by category, every event turned into a pure state
//! transition and applied in arrival order by a single store. The [`ui`]
//! module projects that state into a terminal view.

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod shutdown;
pub mod transport;
pub mod ui;

pub use error::DashboardError;
