//! Lookup structures built once from the fetched collections.

use crate::data_fetcher::models::{DraftPick, Roster, User};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// user_id → display name. Users without any name are left out.
pub fn build_user_index(users: &[User]) -> HashMap<String, String> {
    users
        .iter()
        .filter_map(|user| Some((user.user_id.clone(), user.name()?.to_string())))
        .collect()
}

/// roster_id → owning user_id. Rosters without an owner are left out.
pub fn build_roster_index(rosters: &[Roster]) -> HashMap<u32, String> {
    rosters
        .iter()
        .filter_map(|roster| Some((roster.roster_id, roster.owner_id.clone()?)))
        .collect()
}

/// Resolves roster ids to manager names through roster → owner → user.
#[derive(Debug, Clone, Default)]
pub struct ManagerDirectory {
    users: HashMap<String, String>,
    rosters: HashMap<u32, String>,
}

impl ManagerDirectory {
    pub fn new(users: HashMap<String, String>, rosters: HashMap<u32, String>) -> Self {
        Self { users, rosters }
    }

    pub fn from_league(users: &[User], rosters: &[Roster]) -> Self {
        Self::new(build_user_index(users), build_roster_index(rosters))
    }

    /// Manager name for a roster, or `"Unknown Manager (Roster ID: <id>)"`
    /// when the roster or its owner can't be found.
    pub fn manager_name(&self, roster_id: u32) -> String {
        self.rosters
            .get(&roster_id)
            .and_then(|owner_id| self.users.get(owner_id))
            .cloned()
            .unwrap_or_else(|| format!("Unknown Manager (Roster ID: {roster_id})"))
    }
}

/// A `(round, slot)` position in the draft, shown as `"{round}.{slot}"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PickCoordinate {
    pub round: u32,
    pub slot: u32,
}

impl PickCoordinate {
    pub fn new(round: u32, slot: u32) -> Self {
        Self { round, slot }
    }
}

impl fmt::Display for PickCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.round, self.slot)
    }
}

/// Every pick of the draft keyed by `(round, draft_slot)`.
/// A later duplicate coordinate replaces an earlier one.
pub fn build_pick_index(picks: &[DraftPick]) -> HashMap<PickCoordinate, &DraftPick> {
    picks
        .iter()
        .map(|pick| (PickCoordinate::new(pick.round, pick.draft_slot), pick))
        .collect()
}

/// How a traded pick's original roster id becomes a draft slot for lookup.
#[derive(Debug, Clone, Copy, Default)]
pub enum SlotResolution<'a> {
    /// The roster id is used as the slot unchanged.
    #[default]
    RosterIdAsSlot,
    /// The roster id is mapped back to its slot through the draft's
    /// `slot_to_roster_id`; unmapped rosters, or a draft without a map, keep
    /// the id. Picks of a season other than the draft's are never matched.
    DraftOrder {
        slot_to_roster_id: Option<&'a BTreeMap<u32, Option<u32>>>,
        season: Option<&'a str>,
    },
}

impl SlotResolution<'_> {
    pub fn slot_for_roster(&self, roster_id: u32) -> u32 {
        match self {
            SlotResolution::RosterIdAsSlot
            | SlotResolution::DraftOrder {
                slot_to_roster_id: None,
                ..
            } => roster_id,
            SlotResolution::DraftOrder {
                slot_to_roster_id: Some(slots),
                ..
            } => slots
                .iter()
                .find(|(_, owner)| **owner == Some(roster_id))
                .map(|(slot, _)| *slot)
                .unwrap_or(roster_id),
        }
    }

    /// False when the pick belongs to another season's draft. Unknown
    /// seasons on either side count as a match.
    pub fn covers_season(&self, pick_season: Option<&str>) -> bool {
        match (self, pick_season) {
            (
                SlotResolution::DraftOrder {
                    season: Some(draft_season),
                    ..
                },
                Some(pick_season),
            ) => *draft_season == pick_season,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User {
            user_id: id.to_string(),
            display_name: Some(name.to_string()),
            username: None,
        }
    }

    fn roster(roster_id: u32, owner: Option<&str>) -> Roster {
        Roster {
            roster_id,
            owner_id: owner.map(str::to_string),
        }
    }

    fn pick(round: u32, draft_slot: u32, pick_no: u32) -> DraftPick {
        DraftPick {
            round,
            draft_slot,
            pick_no: Some(pick_no),
            player_id: None,
            picked_by: None,
            roster_id: None,
            metadata: None,
        }
    }

    #[test]
    fn test_manager_name_resolves_chain() {
        let directory = ManagerDirectory::from_league(
            &[user("u1", "Alice"), user("u2", "Bob")],
            &[roster(1, Some("u1")), roster(2, Some("u2"))],
        );
        assert_eq!(directory.manager_name(1), "Alice");
        assert_eq!(directory.manager_name(2), "Bob");
    }

    #[test]
    fn test_manager_name_unknown_roster() {
        let directory = ManagerDirectory::from_league(&[user("u1", "Alice")], &[roster(1, Some("u1"))]);
        assert_eq!(directory.manager_name(9), "Unknown Manager (Roster ID: 9)");
    }

    #[test]
    fn test_manager_name_missing_owner_or_user() {
        let directory = ManagerDirectory::from_league(
            &[user("u1", "Alice")],
            &[roster(1, None), roster(2, Some("ghost"))],
        );
        assert_eq!(directory.manager_name(1), "Unknown Manager (Roster ID: 1)");
        assert_eq!(directory.manager_name(2), "Unknown Manager (Roster ID: 2)");
    }

    #[test]
    fn test_user_index_uses_username_fallback() {
        let users = vec![
            User {
                user_id: "u1".to_string(),
                display_name: None,
                username: Some("alice99".to_string()),
            },
            User {
                user_id: "u2".to_string(),
                display_name: None,
                username: None,
            },
        ];
        let index = build_user_index(&users);
        assert_eq!(index.get("u1").map(String::as_str), Some("alice99"));
        assert!(!index.contains_key("u2"));
    }

    #[test]
    fn test_pick_index_keys_on_round_and_slot() {
        let picks = vec![pick(1, 1, 1), pick(1, 2, 2), pick(2, 1, 4)];
        let index = build_pick_index(&picks);
        assert_eq!(index.len(), 3);
        assert_eq!(index[&PickCoordinate::new(2, 1)].pick_no, Some(4));
        assert!(!index.contains_key(&PickCoordinate::new(2, 2)));
    }

    #[test]
    fn test_pick_index_last_duplicate_wins() {
        let picks = vec![pick(1, 1, 1), pick(1, 1, 99)];
        let index = build_pick_index(&picks);
        assert_eq!(index[&PickCoordinate::new(1, 1)].pick_no, Some(99));
    }

    #[test]
    fn test_coordinate_display() {
        assert_eq!(PickCoordinate::new(3, 2).to_string(), "3.2");
        assert_eq!(PickCoordinate::new(1, 11).to_string(), "1.11");
    }

    #[test]
    fn test_slot_resolution() {
        let slots: BTreeMap<u32, Option<u32>> =
            [(1, Some(4)), (2, Some(1)), (3, None)].into_iter().collect();

        let draft_order = SlotResolution::DraftOrder {
            slot_to_roster_id: Some(&slots),
            season: Some("2023"),
        };

        assert_eq!(SlotResolution::RosterIdAsSlot.slot_for_roster(4), 4);
        assert_eq!(draft_order.slot_for_roster(4), 1);
        assert_eq!(draft_order.slot_for_roster(1), 2);
        // Unmapped roster keeps its id
        assert_eq!(draft_order.slot_for_roster(8), 8);

        let no_map = SlotResolution::DraftOrder {
            slot_to_roster_id: None,
            season: None,
        };
        assert_eq!(no_map.slot_for_roster(4), 4);
    }

    #[test]
    fn test_season_coverage() {
        let draft_order = SlotResolution::DraftOrder {
            slot_to_roster_id: None,
            season: Some("2023"),
        };
        assert!(draft_order.covers_season(Some("2023")));
        assert!(!draft_order.covers_season(Some("2025")));
        assert!(draft_order.covers_season(None));

        // The legacy lookup never filters on season
        assert!(SlotResolution::RosterIdAsSlot.covers_season(Some("2025")));
    }
}
