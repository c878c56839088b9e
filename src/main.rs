// src/main.rs
mod cli;
mod logging;

use clap::Parser;
use cli::{Args, is_config_operation};
use sleeper_trade_tracker::config::validation::validate_draft_id;
use sleeper_trade_tracker::config::{Config, normalize_base_url};
use sleeper_trade_tracker::data_fetcher::api::{AnalysisOptions, SleeperClient, analyze_first_trade};
use sleeper_trade_tracker::error::AppError;
use sleeper_trade_tracker::report::render_report;
use std::path::Path;

/// Copies the `--set-*` / `--clear-*` flags onto `config`.
/// The API URL is normalized first so a bare host gets its scheme.
fn apply_config_updates(config: &mut Config, args: &Args) {
    if let Some(new_url) = &args.new_api_url {
        config.api_base_url = normalize_base_url(new_url);
    }

    if let Some(new_draft_id) = &args.new_draft_id {
        config.draft_id = new_draft_id.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }
}

/// Draft id from `--draft-id`, checked like the configured one, or the config's.
fn select_draft_id(cli_draft_id: Option<&str>, config: &Config) -> Result<String, AppError> {
    match cli_draft_id {
        Some(draft_id) => {
            validate_draft_id(draft_id)?;
            Ok(draft_id.to_string())
        }
        None => Ok(config.draft_id.clone()),
    }
}

/// Applies the `--set-*` / `--clear-*` flags to the stored config.
async fn update_config(args: Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_updates(&mut config, &args);
    if args.clear_log_file_path && args.new_log_file_path.is_none() {
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    if is_config_operation(&args) {
        return update_config(args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    let draft_id = select_draft_id(args.draft_id.as_deref(), &config)?;
    let client = SleeperClient::from_config(&config)?;
    let options = AnalysisOptions {
        resolve_slots: args.resolve_slots,
        include_players: args.include_players,
    };

    let report = analyze_first_trade(&client, &draft_id, options)
        .await
        .inspect_err(|e| tracing::error!("Trade analysis failed: {e}"))?;

    let mut stdout = std::io::stdout().lock();
    render_report(report.as_ref(), &mut stdout)?;

    Ok(())
}
