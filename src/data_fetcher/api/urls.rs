//! URL building utilities for Sleeper API endpoints

/// Builds the URL of a draft's metadata.
///
/// # Example
/// ```
/// use sleeper_trade_tracker::data_fetcher::api::build_draft_url;
///
/// let url = build_draft_url("https://api.sleeper.app/v1", "993596402045345792");
/// assert_eq!(url, "https://api.sleeper.app/v1/draft/993596402045345792");
/// ```
pub fn build_draft_url(api_base_url: &str, draft_id: &str) -> String {
    format!("{api_base_url}/draft/{draft_id}")
}

/// Builds the URL listing every pick of a draft.
///
/// # Example
/// ```
/// use sleeper_trade_tracker::data_fetcher::api::build_draft_picks_url;
///
/// let url = build_draft_picks_url("https://api.sleeper.app/v1", "42");
/// assert_eq!(url, "https://api.sleeper.app/v1/draft/42/picks");
/// ```
pub fn build_draft_picks_url(api_base_url: &str, draft_id: &str) -> String {
    format!("{api_base_url}/draft/{draft_id}/picks")
}

/// Builds the URL of a league's users.
pub fn build_league_users_url(api_base_url: &str, league_id: &str) -> String {
    format!("{api_base_url}/league/{league_id}/users")
}

/// Builds the URL of a league's rosters.
pub fn build_league_rosters_url(api_base_url: &str, league_id: &str) -> String {
    format!("{api_base_url}/league/{league_id}/rosters")
}

/// Builds the URL of a league's transactions for one week.
///
/// # Example
/// ```
/// use sleeper_trade_tracker::data_fetcher::api::build_transactions_url;
///
/// let url = build_transactions_url("https://api.sleeper.app/v1", "7", 1);
/// assert_eq!(url, "https://api.sleeper.app/v1/league/7/transactions/1");
/// ```
pub fn build_transactions_url(api_base_url: &str, league_id: &str, week: u32) -> String {
    format!("{api_base_url}/league/{league_id}/transactions/{week}")
}

/// Builds the URL of the global player catalog for a sport.
pub fn build_players_url(api_base_url: &str, sport: &str) -> String {
    format!("{api_base_url}/players/{sport}")
}
