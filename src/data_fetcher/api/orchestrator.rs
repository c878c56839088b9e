//! Fetches everything a draft's first trade needs and resolves it.

use tracing::{info, instrument, warn};

use super::sleeper_client::SleeperApi;
use crate::data_fetcher::models::Transaction;
use crate::data_fetcher::processors::{
    ManagerDirectory, PickAttribution, PlayerAttribution, SlotResolution, find_first_trade,
    involved_managers, resolve_player_adds, resolve_trade,
};
use crate::error::AppError;

/// Switches for the optional parts of the analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisOptions {
    /// Look traded picks up through the draft's `slot_to_roster_id`.
    pub resolve_slots: bool,
    /// Also attribute players moved by the trade.
    pub include_players: bool,
}

/// Everything the console report prints for one trade.
#[derive(Debug, Clone)]
pub struct TradeReport {
    pub trade: Transaction,
    pub managers: Vec<String>,
    pub picks: Vec<PickAttribution>,
    /// Empty unless [`AnalysisOptions::include_players`] was set.
    pub players: Vec<PlayerAttribution>,
}

/// Runs the whole analysis for `draft_id` against `api`.
///
/// Fetches draft, users, rosters, week-1 transactions, draft picks and the
/// player catalog in that order; the first failing fetch aborts the run.
/// Returns `Ok(None)` when the league has no trade.
///
/// # Example
/// ```rust,no_run
/// use sleeper_trade_tracker::data_fetcher::api::{AnalysisOptions, SleeperClient, analyze_first_trade};
/// use sleeper_trade_tracker::{AppError, Config};
///
/// #[tokio::main]
/// async fn main() -> Result<(), AppError> {
///     let config = Config::load().await?;
///     let client = SleeperClient::from_config(&config)?;
///     let report = analyze_first_trade(&client, &config.draft_id, AnalysisOptions::default()).await?;
///     if let Some(report) = report {
///         for line in &report.picks {
///             println!("{line}");
///         }
///     }
///     Ok(())
/// }
/// ```
#[instrument(skip(api))]
pub async fn analyze_first_trade<A: SleeperApi + ?Sized>(
    api: &A,
    draft_id: &str,
    options: AnalysisOptions,
) -> Result<Option<TradeReport>, AppError> {
    info!("Starting trade analysis for draft {draft_id}");

    let draft = api.fetch_draft(draft_id).await?;
    let league_id = draft.league_id.as_str();
    let users = api.fetch_league_users(league_id).await?;
    let rosters = api.fetch_league_rosters(league_id).await?;
    let transactions = api.fetch_transactions(league_id).await?;
    let draft_picks = api.fetch_draft_picks(draft_id).await?;
    let players = api.fetch_players().await?;

    let Some(trade) = find_first_trade(&transactions) else {
        info!("No trades among {} transactions", transactions.len());
        return Ok(None);
    };

    info!(
        "First trade {} created at {}",
        trade.transaction_id.as_deref().unwrap_or("<no id>"),
        trade
            .created_at()
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| trade.created.to_string())
    );

    let directory = ManagerDirectory::from_league(&users, &rosters);
    let slots = if options.resolve_slots {
        if draft.slot_to_roster_id.is_none() {
            warn!("Draft {draft_id} has no slot_to_roster_id, using roster ids as slots");
        }
        SlotResolution::DraftOrder {
            slot_to_roster_id: draft.slot_to_roster_id.as_ref(),
            season: draft.season.as_deref(),
        }
    } else {
        SlotResolution::RosterIdAsSlot
    };

    let picks = resolve_trade(trade, &directory, &draft_picks, &players, slots);
    let player_lines = if options.include_players {
        resolve_player_adds(trade, &directory, &players)
    } else {
        Vec::new()
    };

    info!(
        "Resolved {} picks and {} players",
        picks.len(),
        player_lines.len()
    );

    Ok(Some(TradeReport {
        trade: trade.clone(),
        managers: involved_managers(trade, &directory),
        picks,
        players: player_lines,
    }))
}
