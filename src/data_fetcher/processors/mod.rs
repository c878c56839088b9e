pub mod indices;
pub mod trade_resolver;
pub mod trade_selector;

pub use indices::{
    ManagerDirectory, PickCoordinate, SlotResolution, build_pick_index, build_roster_index,
    build_user_index,
};
pub use trade_resolver::{
    PickAttribution, PlayerAttribution, involved_managers, resolve_player_adds, resolve_trade,
};
pub use trade_selector::find_first_trade;
