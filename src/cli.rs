use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the run only inspects or edits the config file
pub fn is_config_operation(args: &Args) -> bool {
    args.list_config
        || args.new_api_url.is_some()
        || args.new_draft_id.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Sleeper Draft Trade Tracker
///
/// Finds the earliest trade in a Sleeper league's first week of transactions
/// and shows which draft picks changed hands and which players they became.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Draft to analyse. Defaults to the draft id in the config file.
    #[arg(long = "draft-id", short = 'd', value_name = "DRAFT_ID")]
    pub draft_id: Option<String>,

    /// Look traded picks up through the draft's slot-to-roster mapping
    /// instead of treating the original roster id as the draft slot.
    #[arg(long = "resolve-slots", help_heading = "Analysis Options")]
    pub resolve_slots: bool,

    /// Also list the players that changed hands in the trade.
    #[arg(long = "include-players", help_heading = "Analysis Options")]
    pub include_players: bool,

    /// Update the API base URL in config.
    #[arg(long = "set-api-url", value_name = "URL", help_heading = "Configuration")]
    pub new_api_url: Option<String>,

    /// Update the default draft id in config.
    #[arg(long = "set-draft-id", value_name = "DRAFT_ID", help_heading = "Configuration")]
    pub new_draft_id: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", value_name = "PATH", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Print logs to the terminal as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", value_name = "PATH", help_heading = "Debug")]
    pub log_file: Option<String>,
}
