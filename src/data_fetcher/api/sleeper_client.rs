//! The Sleeper read API as a trait, plus its reqwest implementation.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::fetch_json;
use super::http_client::create_http_client_with_timeout;
use super::urls::{
    build_draft_picks_url, build_draft_url, build_league_rosters_url, build_league_users_url,
    build_players_url, build_transactions_url,
};
use crate::config::Config;
use crate::constants::{PLAYER_CATALOG_SPORT, TRANSACTIONS_WEEK, resources};
use crate::data_fetcher::models::{Draft, DraftPick, PlayerCatalog, Roster, Transaction, User};
use crate::error::AppError;

/// Read operations the trade analysis needs.
///
/// Every call is a single request; a non-200 answer is an
/// [`AppError::ApiFetch`] naming the resource.
#[async_trait]
pub trait SleeperApi: Send + Sync {
    async fn fetch_draft(&self, draft_id: &str) -> Result<Draft, AppError>;

    async fn fetch_league_users(&self, league_id: &str) -> Result<Vec<User>, AppError>;

    async fn fetch_league_rosters(&self, league_id: &str) -> Result<Vec<Roster>, AppError>;

    /// Transactions of the league's first week, where draft-day trades land.
    async fn fetch_transactions(&self, league_id: &str) -> Result<Vec<Transaction>, AppError>;

    async fn fetch_draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPick>, AppError>;

    async fn fetch_players(&self) -> Result<PlayerCatalog, AppError>;

    /// League the draft belongs to.
    async fn fetch_league_id(&self, draft_id: &str) -> Result<String, AppError> {
        Ok(self.fetch_draft(draft_id).await?.league_id)
    }
}

/// [`SleeperApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    client: Client,
    api_base_url: String,
}

impl SleeperClient {
    pub fn new(client: Client, api_base_url: impl Into<String>) -> Self {
        Self {
            client,
            api_base_url: api_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client with the configured base URL and timeout.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::new(client, &config.api_base_url))
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[async_trait]
impl SleeperApi for SleeperClient {
    #[instrument(skip(self))]
    async fn fetch_draft(&self, draft_id: &str) -> Result<Draft, AppError> {
        let url = build_draft_url(&self.api_base_url, draft_id);
        let draft: Draft = fetch_json(&self.client, &url, resources::DRAFT).await?;
        info!("Draft {draft_id} belongs to league {}", draft.league_id);
        Ok(draft)
    }

    #[instrument(skip(self))]
    async fn fetch_league_users(&self, league_id: &str) -> Result<Vec<User>, AppError> {
        let url = build_league_users_url(&self.api_base_url, league_id);
        let users: Vec<User> = fetch_json(&self.client, &url, resources::LEAGUE_USERS).await?;
        info!("Fetched {} users", users.len());
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn fetch_league_rosters(&self, league_id: &str) -> Result<Vec<Roster>, AppError> {
        let url = build_league_rosters_url(&self.api_base_url, league_id);
        let rosters: Vec<Roster> =
            fetch_json(&self.client, &url, resources::LEAGUE_ROSTERS).await?;
        info!("Fetched {} rosters", rosters.len());
        Ok(rosters)
    }

    #[instrument(skip(self))]
    async fn fetch_transactions(&self, league_id: &str) -> Result<Vec<Transaction>, AppError> {
        let url = build_transactions_url(&self.api_base_url, league_id, TRANSACTIONS_WEEK);
        let transactions: Vec<Transaction> =
            fetch_json(&self.client, &url, resources::TRANSACTIONS).await?;
        info!("Fetched {} transactions", transactions.len());
        Ok(transactions)
    }

    #[instrument(skip(self))]
    async fn fetch_draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPick>, AppError> {
        let url = build_draft_picks_url(&self.api_base_url, draft_id);
        let picks: Vec<DraftPick> = fetch_json(&self.client, &url, resources::DRAFT_PICKS).await?;
        info!("Fetched {} draft picks", picks.len());
        Ok(picks)
    }

    #[instrument(skip(self))]
    async fn fetch_players(&self) -> Result<PlayerCatalog, AppError> {
        let url = build_players_url(&self.api_base_url, PLAYER_CATALOG_SPORT);
        let players: PlayerCatalog = fetch_json(&self.client, &url, resources::PLAYERS).await?;
        info!("Fetched {} players", players.len());
        Ok(players)
    }
}
