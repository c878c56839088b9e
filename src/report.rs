//! Plain-text console report for a resolved trade.

use crate::data_fetcher::api::TradeReport;
use crate::error::AppError;
use std::io::Write;

/// Printed when the league has no trade in the scanned week.
pub const NO_TRADES_MESSAGE: &str = "No trades found in this draft.";

/// Writes the report, or [`NO_TRADES_MESSAGE`] when there is none.
///
/// Layout: the raw transaction as JSON, the involved managers joined by
/// `", "`, then one line per acquired pick. Player lines follow in their own
/// section when the report has any.
pub fn render_report<W: Write>(report: Option<&TradeReport>, out: &mut W) -> Result<(), AppError> {
    let Some(report) = report else {
        writeln!(out, "{NO_TRADES_MESSAGE}")?;
        return Ok(());
    };

    writeln!(out, "Raw Transaction:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&report.trade)?)?;

    writeln!(out)?;
    writeln!(out, "Teams involved in this transaction:")?;
    writeln!(out, "{}", report.managers.join(", "))?;

    writeln!(out)?;
    writeln!(out, "Analysis:")?;
    for line in &report.picks {
        writeln!(out, "{line}")?;
    }

    if !report.players.is_empty() {
        writeln!(out)?;
        writeln!(out, "Players moved:")?;
        for line in &report.players {
            writeln!(out, "{line}")?;
        }
    }

    out.flush()?;
    Ok(())
}
