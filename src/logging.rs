use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file when `--log-file` is absent.
pub const LOG_ENV_VAR: &str = "FORMTODO_LOG";

/// Initialize tracing with file output.
///
/// Logging is off unless a path is given explicitly or through
/// `FORMTODO_LOG`; stdout belongs to the terminal interface.
///
/// The file is created as `{path}.{timestamp}.{pid}` so concurrent
/// instances never share one.
pub fn init_tracing(log_file: Option<&Path>) {
    let Some(log_path) = resolve_log_path(log_file) else {
        return;
    };

    let unique_path = unique_log_path(&log_path);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!(
            "Warning: Failed to create log file: {}",
            unique_path.display()
        );
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(path = %unique_path.display(), "Logging initialized");
}

fn resolve_log_path(log_file: Option<&Path>) -> Option<PathBuf> {
    log_file
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_ENV_VAR).map(PathBuf::from))
}

fn unique_log_path(base: &Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", base.display(), timestamp, pid))
}
