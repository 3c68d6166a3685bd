use std::{fs::OpenOptions, path::PathBuf, sync::Mutex};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter, e.g. `FOLIO_LOG=debug`.
pub const LOG_ENV: &str = "FOLIO_LOG";
pub const LOG_FILE_NAME: &str = "folio.log";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn log_file_path() -> crate::Result<PathBuf> {
    Ok(crate::disk_storage::app_dir()?.join(LOG_FILE_NAME))
}

/// Sends logs to `~/.folio/folio.log`. Used while the TUI owns the terminal.
pub fn init_file_logging() -> crate::Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| crate::Error::CreateDirAllFailed(parent.to_path_buf(), e))?;
    }

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .map_err(|e| crate::Error::LogFileOpenFailed(path.clone(), e))?;

    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()
        .map_err(|e| crate::Error::LogInitFailed(e.to_string()))?;

    Ok(path)
}

/// Sends logs to stderr, for the one-shot subcommands.
pub fn init_stderr_logging() -> crate::Result<()> {
    tracing_subscriber::registry()
        .with(filter())
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| crate::Error::LogInitFailed(e.to_string()))
}
