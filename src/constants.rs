//! Application-wide constants and configuration values

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Base URL of the public Sleeper API
pub const DEFAULT_API_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Draft analysed when neither the CLI nor the config names one
pub const DEFAULT_DRAFT_ID: &str = "993596402045345792";

/// Transactions are only read for this week; draft-day trades land there
pub const TRANSACTIONS_WEEK: u32 = 1;

/// Sport segment of the player catalog endpoint
pub const PLAYER_CATALOG_SPORT: &str = "nfl";

/// Name used for the config directory and the default log file
pub const APP_DIR_NAME: &str = "sleeper_trade_tracker";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "sleeper_trade_tracker.log";

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_URL: &str = "SLEEPER_API_URL";
    pub const DRAFT_ID: &str = "SLEEPER_DRAFT_ID";
    pub const LOG_FILE: &str = "SLEEPER_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "SLEEPER_HTTP_TIMEOUT";
}

/// Resource names used in fetch errors, one per endpoint
pub mod resources {
    pub const DRAFT: &str = "draft info";
    pub const LEAGUE_USERS: &str = "league users";
    pub const LEAGUE_ROSTERS: &str = "league rosters";
    pub const TRANSACTIONS: &str = "transactions";
    pub const DRAFT_PICKS: &str = "draft picks";
    pub const PLAYERS: &str = "players";
}

/// Placeholder text for lookups that miss
pub mod placeholders {
    pub const UNKNOWN_PICK_NO: &str = "Unknown";
    pub const UNKNOWN_PLAYER: &str = "Unknown Player";
}
