use anyhow::Context;
use clap::Parser;
use std::time::Duration;

use formtodo::cli::Cli;
use formtodo::config::{Config, ConfigStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    formtodo::logging::init_tracing(cli.log_file.as_deref());

    let path = cli.config_path();
    let config = Config::load_from(&path)?;
    let store = ConfigStore::new(config, path, cli.overrides());
    store.get().validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_time()
        .build()
        .context("Failed to start async runtime")?;

    let result = formtodo::ui::run(store, runtime.handle().clone());
    runtime.shutdown_timeout(Duration::from_millis(200));
    result?;
    Ok(())
}
