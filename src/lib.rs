//! Sleeper Draft Trade Tracker Library
//!
//! Finds the first trade of a Sleeper fantasy football draft's league and
//! traces which draft picks changed hands and which players they became.
//!
//! # Examples
//!
//! ```rust,no_run
//! use sleeper_trade_tracker::data_fetcher::api::{AnalysisOptions, SleeperClient, analyze_first_trade};
//! use sleeper_trade_tracker::report::render_report;
//! use sleeper_trade_tracker::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = SleeperClient::from_config(&config)?;
//!
//!     let report = analyze_first_trade(&client, "993596402045345792", AnalysisOptions::default()).await?;
//!
//!     let mut stdout = std::io::stdout();
//!     render_report(report.as_ref(), &mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod report;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::{
    AnalysisOptions, SleeperApi, SleeperClient, TradeReport, analyze_first_trade,
};
pub use error::AppError;
pub use report::render_report;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
