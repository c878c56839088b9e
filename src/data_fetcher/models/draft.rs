use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Draft metadata from `GET /draft/{draft_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Draft {
    #[serde(default)]
    pub draft_id: Option<String>,
    pub league_id: String,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Draft slot → roster id. Null until the draft order is set; single
    /// slots can also be null while a league is still filling.
    #[serde(default)]
    pub slot_to_roster_id: Option<BTreeMap<u32, Option<u32>>>,
}

/// Name fields Sleeper copies onto a pick when it is made.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PickMetadata {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// One selection from `GET /draft/{draft_id}/picks`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPick {
    pub round: u32,
    pub draft_slot: u32,
    /// Overall selection number.
    #[serde(default)]
    pub pick_no: Option<u32>,
    /// Only present once the slot has been drafted.
    #[serde(default)]
    pub player_id: Option<String>,
    #[serde(default)]
    pub picked_by: Option<String>,
    /// Roster that made the selection.
    #[serde(default)]
    pub roster_id: Option<u32>,
    #[serde(default)]
    pub metadata: Option<PickMetadata>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_deserialization() {
        let json = r#"{
            "draft_id": "993596402045345792",
            "league_id": "993596401126780928",
            "season": "2023",
            "status": "complete",
            "type": "snake",
            "slot_to_roster_id": {"1": 4, "2": 1, "3": null, "10": 7}
        }"#;

        let draft: Draft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.league_id, "993596401126780928");
        assert_eq!(draft.season.as_deref(), Some("2023"));
        let slots = draft.slot_to_roster_id.unwrap();
        assert_eq!(slots.get(&1), Some(&Some(4)));
        assert_eq!(slots.get(&3), Some(&None));
        assert_eq!(slots.get(&10), Some(&Some(7)));
    }

    #[test]
    fn test_draft_null_slot_map() {
        let json = r#"{"league_id": "1", "slot_to_roster_id": null}"#;
        let draft: Draft = serde_json::from_str(json).unwrap();
        assert!(draft.slot_to_roster_id.is_none());
        assert!(draft.draft_id.is_none());
    }

    #[test]
    fn test_draft_without_league_id_fails() {
        let json = r#"{"draft_id": "1"}"#;
        assert!(serde_json::from_str::<Draft>(json).is_err());
    }

    #[test]
    fn test_draft_pick_deserialization() {
        let json = r#"{
            "round": 3,
            "draft_slot": 2,
            "pick_no": 27,
            "player_id": "4046",
            "picked_by": "7311",
            "roster_id": 2,
            "is_keeper": null,
            "metadata": {"first_name": "Patrick", "last_name": "Mahomes", "position": "QB"}
        }"#;

        let pick: DraftPick = serde_json::from_str(json).unwrap();
        assert_eq!(pick.round, 3);
        assert_eq!(pick.draft_slot, 2);
        assert_eq!(pick.pick_no, Some(27));
        assert_eq!(pick.player_id.as_deref(), Some("4046"));
        assert_eq!(pick.roster_id, Some(2));
        let metadata = pick.metadata.unwrap();
        assert_eq!(metadata.last_name.as_deref(), Some("Mahomes"));
    }

    #[test]
    fn test_undrafted_pick_has_no_player() {
        let json = r#"{"round": 1, "draft_slot": 5, "pick_no": 5}"#;
        let pick: DraftPick = serde_json::from_str(json).unwrap();
        assert!(pick.player_id.is_none());
        assert!(pick.roster_id.is_none());
        assert!(pick.metadata.is_none());
    }
}
