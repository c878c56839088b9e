use crate::cli::Args;
use sleeper_trade_tracker::config::Config;
use sleeper_trade_tracker::constants::LOG_FILE_NAME;
use sleeper_trade_tracker::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter directive for this crate's spans and events.
const DEFAULT_DIRECTIVE: &str = "sleeper_trade_tracker=info";

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Resolves the log directory and file name from `--log-file`, the config
/// file, or the default location, in that order.
fn resolve_log_location(args: &Args, config_log_path: Option<&String>) -> (String, String) {
    match args.log_file.as_ref().or(config_log_path) {
        Some(custom_path) => {
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
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    }
}

/// Sets up logging configuration for the application.
///
/// - Normal runs log only to the file so the report on stdout stays clean
/// - `--debug` logs to both stdout and the file
/// - Creates log directory if it doesn't exist
/// - Uses daily rolling file appender
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    // Try to load config to get log file path if specified
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let (log_dir, log_file_name) = resolve_log_location(args, config_log_path.as_ref());

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_log_file_wins() {
        let args = Args::parse_from(["sleeper_trade_tracker", "--log-file", "/tmp/run/out.log"]);
        let config_path = "/var/log/other.log".to_string();
        let (dir, file) = resolve_log_location(&args, Some(&config_path));
        assert_eq!(dir, "/tmp/run");
        assert_eq!(file, "out.log");
    }

    #[test]
    fn test_config_log_file_used_without_cli() {
        let args = Args::parse_from(["sleeper_trade_tracker"]);
        let config_path = "/var/log/other.log".to_string();
        let (dir, file) = resolve_log_location(&args, Some(&config_path));
        assert_eq!(dir, "/var/log");
        assert_eq!(file, "other.log");
    }

    #[test]
    fn test_bare_file_name_logs_to_current_dir() {
        let args = Args::parse_from(["sleeper_trade_tracker", "--log-file", "tracker.log"]);
        let (dir, file) = resolve_log_location(&args, None);
        assert_eq!(dir, ".");
        assert_eq!(file, "tracker.log");
    }

    #[test]
    fn test_default_location() {
        let args = Args::parse_from(["sleeper_trade_tracker"]);
        let (dir, file) = resolve_log_location(&args, None);
        assert!(dir.ends_with("logs"));
        assert_eq!(file, LOG_FILE_NAME);
    }

    #[test]
    fn test_default_directive_parses() {
        assert!(env_filter().is_ok());
    }
}
