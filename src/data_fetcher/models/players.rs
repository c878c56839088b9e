use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Entry of the global player catalog (`GET /players/nfl`).
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Player {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
}

/// player_id → player, as returned by the catalog endpoint.
pub type PlayerCatalog = HashMap<String, Player>;
