//! Terminal front-end: projection, drawing and key handling.

pub mod headless;
pub mod input;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod view;

pub use headless::run_headless;
pub use runtime::run;
pub use view::{project, RenderTree};
