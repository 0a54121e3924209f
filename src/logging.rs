use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_NAME: &str = "league_store.log";
const DEFAULT_DIRECTIVE: &str = "league_store=info";

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Splits a log file path into its directory and file name.
fn split_log_path(custom_path: &str) -> (String, String) {
    let path = Path::new(custom_path);
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(LOG_FILE_NAME);
    (parent.to_string_lossy().to_string(), file_name.to_string())
}

/// Sets up logging for the application.
///
/// Logs always go to a daily rolling file, either at the `--log-file` path,
/// the path stored in config or the default log directory. With `--debug`
/// they are also written to stdout.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => split_log_path(custom_path),
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must outlive the program's logging or buffered lines are lost
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = if args.debug {
        Some(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(true)
                .with_filter(env_filter()?),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(
            fmt::Layer::new()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(env_filter()?),
        )
        .init();

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
