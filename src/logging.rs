use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_LEVEL_ENV: &str = "TICKLIST_LOG_LEVEL";
const LOG_PREFIX: &str = "ticklist-";

/// Route tracing output to a timestamped file under the local data
/// directory. The terminal belongs to the TUI, so nothing goes to stderr.
///
/// The returned guard flushes buffered lines when dropped; keep it alive
/// for the life of the program.
pub fn init_logging() -> Result<(PathBuf, WorkerGuard), Box<dyn std::error::Error>> {
    let log_dir = log_directory()?;
    fs::create_dir_all(&log_dir)?;

    let log_file_path = log_file_path(&log_dir);
    let file = fs::File::create(&log_file_path)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(
            std::env::var(LOG_LEVEL_ENV).ok().as_deref(),
        )))
        .with(file_layer)
        .try_init()?;

    tracing::info!(path = %log_file_path.display(), "logging initialized");

    Ok((log_file_path, guard))
}

fn filter_directive(raw: Option<&str>) -> String {
    let level = raw.and_then(normalize_log_level).unwrap_or("warn");
    format!("{level},ticklist={level}")
}

fn normalize_log_level(raw: &str) -> Option<&'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" | "warning" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

pub fn log_directory() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data_dir = dirs::data_local_dir().ok_or("could not determine local data directory")?;
    Ok(data_dir.join("ticklist").join("logs"))
}

pub fn log_file_path(log_dir: &Path) -> PathBuf {
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    log_dir.join(format!("{LOG_PREFIX}{timestamp}.log"))
}
