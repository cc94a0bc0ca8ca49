use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, ConfigOverrides, StartView};

/// Registration form and todo list in the terminal.
#[derive(Debug, Parser)]
#[command(name = "formtodo", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// View shown at startup
    #[arg(long, value_enum)]
    pub view: Option<StartView>,

    /// Override every simulated delay (milliseconds)
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Write logs to this file (also FORMTODO_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            start_view: self.view,
            delay_ms: self.delay_ms,
        }
    }
}
