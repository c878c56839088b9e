//! Resolves a trade into the picks each manager gained and the players those
//! picks became.
//!
//! # Coordinate caveat
//!
//! The draft's picks are keyed by `"{round}.{draft_slot}"`, while a traded pick
//! only knows `"{round}.{roster_id}"` of the roster it originally belonged to.
//! With [`SlotResolution::RosterIdAsSlot`] the roster id is looked up as if it
//! were the draft slot. Slots and roster ids are different id spaces, so this
//! only lines up for drafts whose order matches roster ids. Pass
//! [`SlotResolution::DraftOrder`] to translate through the draft's
//! `slot_to_roster_id` instead; that mode also leaves picks of other seasons
//! unresolved rather than matching them against this draft.

use crate::constants::placeholders::{UNKNOWN_PICK_NO, UNKNOWN_PLAYER};
use crate::data_fetcher::models::{DraftPick, PlayerCatalog, Transaction};
use crate::data_fetcher::player_names::{build_full_name, drafted_player_name};
use crate::data_fetcher::processors::indices::{
    ManagerDirectory, PickCoordinate, SlotResolution, build_pick_index,
};
use std::fmt;
use tracing::debug;

/// One pick a manager received in the trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickAttribution {
    pub manager: String,
    /// Round and original roster id as the trade records them.
    pub traded_pick: PickCoordinate,
    /// Overall pick number, `None` when the pick wasn't found in the draft.
    pub pick_no: Option<u32>,
    /// Drafted player, `None` when the slot is undrafted or unresolved.
    pub player_name: Option<String>,
}

impl fmt::Display for PickAttribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pick_no = self
            .pick_no
            .map(|n| n.to_string())
            .unwrap_or_else(|| UNKNOWN_PICK_NO.to_string());
        write!(
            f,
            "{} acquired Pick {}, which turned into pick number {} ({})",
            self.manager,
            self.traded_pick,
            pick_no,
            self.player_name.as_deref().unwrap_or(UNKNOWN_PLAYER)
        )
    }
}

/// One player a manager received in the trade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerAttribution {
    pub manager: String,
    pub player_id: String,
    pub player_name: Option<String>,
}

impl fmt::Display for PlayerAttribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.player_name {
            Some(name) => write!(f, "{} acquired {}", self.manager, name),
            None => write!(
                f,
                "{} acquired {} ({})",
                self.manager, UNKNOWN_PLAYER, self.player_id
            ),
        }
    }
}

/// Manager names of the trade's rosters, in `roster_ids` order.
pub fn involved_managers(trade: &Transaction, managers: &ManagerDirectory) -> Vec<String> {
    trade
        .roster_ids
        .iter()
        .map(|roster_id| managers.manager_name(*roster_id))
        .collect()
}

/// Attributes every pick gained in `trade` to its new manager.
///
/// Output order follows the trade's `roster_ids`, then each roster's gained
/// picks in the order the trade lists them. Lookups that miss produce
/// placeholders, never errors.
pub fn resolve_trade(
    trade: &Transaction,
    managers: &ManagerDirectory,
    draft_picks: &[DraftPick],
    players: &PlayerCatalog,
    slots: SlotResolution<'_>,
) -> Vec<PickAttribution> {
    let pick_index = build_pick_index(draft_picks);
    let mut attributions = Vec::new();

    for &roster_id in &trade.roster_ids {
        let manager = managers.manager_name(roster_id);

        for traded in trade.picks_gained_by(roster_id) {
            let traded_pick = PickCoordinate::new(traded.round, traded.roster_id);
            let lookup = PickCoordinate::new(traded.round, slots.slot_for_roster(traded.roster_id));
            let drafted = if slots.covers_season(traded.season.as_deref()) {
                let found = pick_index.get(&lookup).copied();
                if found.is_none() {
                    debug!("Pick {traded_pick} (looked up as {lookup}) not found in draft");
                }
                found
            } else {
                debug!(
                    "Pick {traded_pick} is from season {:?}, not this draft's",
                    traded.season
                );
                None
            };

            let pick_no = drafted.and_then(|pick| pick.pick_no);
            let player_name = drafted.and_then(|pick| {
                let player_id = pick.player_id.as_deref()?;
                drafted_player_name(player_id, players, pick.metadata.as_ref())
            });

            attributions.push(PickAttribution {
                manager: manager.clone(),
                traded_pick,
                pick_no,
                player_name,
            });
        }
    }

    attributions
}

/// Attributes the players moved by `trade` (its `adds`) to their new managers,
/// grouped by `roster_ids` order and sorted by player id within a roster.
pub fn resolve_player_adds(
    trade: &Transaction,
    managers: &ManagerDirectory,
    players: &PlayerCatalog,
) -> Vec<PlayerAttribution> {
    let Some(adds) = &trade.adds else {
        return Vec::new();
    };

    trade
        .roster_ids
        .iter()
        .flat_map(|&roster_id| {
            let manager = managers.manager_name(roster_id);
            adds.iter()
                .filter(move |(_, gaining)| **gaining == roster_id)
                .map(move |(player_id, _)| PlayerAttribution {
                    manager: manager.clone(),
                    player_id: player_id.clone(),
                    player_name: players.get(player_id).and_then(|p| {
                        build_full_name(p.first_name.as_deref(), p.last_name.as_deref())
                    }),
                })
        })
        .collect()
}
