mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, BehaviorConfig, Config, LoggingConfig, UiConfig};
