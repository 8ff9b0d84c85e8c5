//! Per-iteration reporting types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Side, Signal, Trade};

/// Outcome of submitting a trade to a venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    /// Trade settled against the venue balance
    Filled,
    /// Trade refused by the venue; balance unchanged
    Rejected,
}

/// Flattened trade record carried in an iteration report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSummary {
    pub id: Uuid,
    pub strategy: String,
    pub side: Side,
    pub quantity: Decimal,
    /// Price the trade was submitted at
    pub price: Decimal,
    pub status: ExecutionStatus,
}

impl TradeSummary {
    /// Build a summary for a trade submitted at `price`.
    pub fn new(trade: &Trade, price: Decimal, status: ExecutionStatus) -> Self {
        Self {
            id: trade.id,
            strategy: trade.strategy.clone(),
            side: trade.side,
            quantity: trade.quantity,
            price,
            status,
        }
    }
}

/// Structured record of one trading-loop iteration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IterationReport {
    pub symbol: String,
    pub signal: Signal,
    /// Present only when the signal was actionable
    pub trade: Option<TradeSummary>,
    /// Venue balance after the iteration (unchanged on Hold or rejection)
    pub balance_after: Decimal,
}
