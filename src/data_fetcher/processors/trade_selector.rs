use crate::data_fetcher::models::Transaction;
use tracing::debug;

/// Earliest trade in the list by `created`, or `None` when there is no trade.
/// Trades created at the same instant resolve to the first one listed.
pub fn find_first_trade(transactions: &[Transaction]) -> Option<&Transaction> {
    let first = transactions
        .iter()
        .filter(|transaction| transaction.is_trade())
        .min_by_key(|trade| trade.created);

    debug!(
        "Scanned {} transactions, first trade: {:?}",
        transactions.len(),
        first.map(|trade| trade.created)
    );
    first
}
