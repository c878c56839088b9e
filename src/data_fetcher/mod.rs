pub mod api;
pub mod models;
pub mod player_names;
pub mod processors;

pub use api::{AnalysisOptions, SleeperApi, SleeperClient, TradeReport, analyze_first_trade};
pub use models::{Draft, DraftPick, Player, PlayerCatalog, Roster, Transaction, User};
