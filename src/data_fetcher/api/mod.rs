mod fetch_utils;
pub mod http_client;
pub mod orchestrator;
pub mod sleeper_client;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
pub use http_client::create_http_client_with_timeout;
pub use orchestrator::{AnalysisOptions, TradeReport, analyze_first_trade};
pub use sleeper_client::{SleeperApi, SleeperClient};
