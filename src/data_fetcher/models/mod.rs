pub mod draft;
pub mod league;
pub mod players;
pub mod transaction;

pub use draft::{Draft, DraftPick, PickMetadata};
pub use league::{Roster, User};
pub use players::{Player, PlayerCatalog};
pub use transaction::{TRADE_TYPE, TradedPick, Transaction};
