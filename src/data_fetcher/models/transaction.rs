use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Transaction type Sleeper uses for trades.
pub const TRADE_TYPE: &str = "trade";

/// League transaction from `GET /league/{league_id}/transactions/{week}`.
///
/// Fields not modelled here are kept in `extra` so the raw dump shows the
/// record as Sleeper sent it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Creation time in epoch milliseconds.
    pub created: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub roster_ids: Vec<u32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub draft_picks: Vec<TradedPick>,
    /// player_id → roster id that received the player.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adds: Option<BTreeMap<String, u32>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Transaction {
    pub fn is_trade(&self) -> bool {
        self.kind == TRADE_TYPE
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.created)
    }

    /// Picks in this transaction that `roster_id` ended up owning, in list order.
    pub fn picks_gained_by(&self, roster_id: u32) -> impl Iterator<Item = &TradedPick> {
        self.draft_picks
            .iter()
            .filter(move |pick| pick.owner_id == roster_id)
    }
}

/// Sleeper sends `null` instead of `[]` for lists a transaction doesn't use.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Draft pick moved by a transaction.
///
/// `roster_id` is the roster the pick originally belonged to, `owner_id` the
/// roster holding it after the transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradedPick {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    pub round: u32,
    pub roster_id: u32,
    pub owner_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_owner_id: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
