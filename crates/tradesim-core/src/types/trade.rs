//! Trade value object.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Side;

/// An immutable record of a decided trade.
///
/// Created once by the orchestrator per actionable signal and discarded after
/// execution; settlement is the venue's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    /// Unique trade ID
    pub id: Uuid,
    /// Name of the strategy that produced the signal
    pub strategy: String,
    /// Buy or sell
    pub side: Side,
    /// Quantity to trade
    pub quantity: Decimal,
    /// Symbol traded
    pub symbol: String,
    /// When the trade was created
    pub created_at: DateTime<Utc>,
}

impl Trade {
    /// Create a new trade, stamping it with the current wall-clock time.
    pub fn new(
        strategy: impl Into<String>,
        side: Side,
        quantity: Decimal,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            strategy: strategy.into(),
            side,
            quantity,
            symbol: symbol.into(),
            created_at: Utc::now(),
        }
    }

    /// Total value of the trade at the given price.
    pub fn notional(&self, price: Decimal) -> Decimal {
        self.quantity * price
    }
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} via '{}' at {}",
            self.side, self.quantity, self.symbol, self.strategy, self.created_at
        )
    }
}
