use serde::{Deserialize, Serialize};

/// League member from `GET /league/{league_id}/users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl User {
    /// Display name, falling back to the username when Sleeper has none.
    pub fn name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .or(self.username.as_deref())
    }
}

/// Team entry from `GET /league/{league_id}/rosters`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub roster_id: u32,
    /// Null for orphaned teams.
    #[serde(default)]
    pub owner_id: Option<String>,
}
