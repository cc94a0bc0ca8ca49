//! Application configuration: types, TOML loading and a shared store.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{Config, ConfigOverrides, StartView, TimingConfig, UiConfig};
