use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Simulated latency of the asynchronous actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Registration submit round-trip in milliseconds (default: 2000).
    #[serde(default = "default_delay_ms")]
    pub submit_delay_ms: u64,
    /// Todo add round-trip in milliseconds (default: 2000).
    #[serde(default = "default_delay_ms")]
    pub add_delay_ms: u64,
    /// Todo edit-save round-trip in milliseconds (default: 2000).
    #[serde(default = "default_delay_ms")]
    pub edit_delay_ms: u64,
}

/// Terminal interface settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw / animation tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// View shown at startup.
    #[serde(default)]
    pub start_view: StartView,
}

/// Which screen opens first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Registration,
    Todos,
}

fn default_delay_ms() -> u64 {
    2000
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_delay_ms(),
            add_delay_ms: default_delay_ms(),
            edit_delay_ms: default_delay_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            start_view: StartView::default(),
        }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Command-line values that take precedence over the config file.
///
/// Kept separately so a reload from disk can re-apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigOverrides {
    pub start_view: Option<StartView>,
    pub delay_ms: Option<u64>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(view) = self.start_view {
            config.ui.start_view = view;
        }
        if let Some(delay) = self.delay_ms {
            config.timing.submit_delay_ms = delay;
            config.timing.add_delay_ms = delay;
            config.timing.edit_delay_ms = delay;
        }
    }
}
