//! Trading loop orchestration.
//!
//! [`TradingLoop`] runs one fetch → signal → execute pass per call. Cadence
//! (fixed sleeps between passes) belongs to the caller.

use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tradesim_core::error::{DataError, TradingError, TradingResult, VenueError};
use tradesim_core::traits::{PriceSource, Strategy, Venue};
use tradesim_core::types::{ExecutionStatus, IterationReport, PriceSeries, Trade, TradeSummary};

/// Orchestrates a single symbol through one strategy against one venue.
pub struct TradingLoop {
    source: Arc<dyn PriceSource>,
    strategy: Box<dyn Strategy>,
    venue: Arc<dyn Venue>,
    symbol: String,
    quantity: Decimal,
}

impl TradingLoop {
    /// Create a new trading loop.
    ///
    /// `quantity` is the fixed size used for every trade the loop creates.
    pub fn new(
        source: Arc<dyn PriceSource>,
        strategy: Box<dyn Strategy>,
        venue: Arc<dyn Venue>,
        symbol: impl Into<String>,
        quantity: Decimal,
    ) -> Self {
        Self {
            source,
            strategy,
            venue,
            symbol: symbol.into(),
            quantity,
        }
    }

    /// Symbol this loop trades.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Run a single iteration: fetch, decide, settle, report.
    ///
    /// Errors mean the iteration was skipped; the venue balance is only
    /// touched by a filled trade.
    pub async fn run_once(&self) -> TradingResult<IterationReport> {
        let closes = self
            .source
            .fetch_recent_closes(&self.symbol, self.strategy.warmup())
            .await?;

        let Some(latest) = closes.last().copied() else {
            return Err(DataError::NoDataAvailable.into());
        };

        debug!(symbol = %self.symbol, price = latest, "price updated");

        let series = PriceSeries::new(self.symbol.clone(), closes);
        let signal = self.strategy.generate(&series);
        info!(symbol = %self.symbol, %signal, "signal generated");

        let Some(side) = signal.to_side() else {
            return Ok(IterationReport {
                symbol: self.symbol.clone(),
                signal,
                trade: None,
                balance_after: self.venue.balance().await,
            });
        };

        let price = Decimal::try_from(latest).map_err(|e| {
            TradingError::Internal(format!("latest close {} is not a valid price: {}", latest, e))
        })?;

        let trade = Trade::new(self.strategy.name(), side, self.quantity, self.symbol.clone());
        info!(%trade, "trade created");

        let (status, balance_after) = match self.venue.place(&trade, price).await {
            Ok(balance) => (ExecutionStatus::Filled, balance),
            Err(VenueError::InsufficientBalance {
                required,
                available,
            }) => {
                warn!(%required, %available, "buy rejected, balance unchanged");
                (ExecutionStatus::Rejected, available)
            }
            Err(err) => return Err(err.into()),
        };

        Ok(IterationReport {
            symbol: self.symbol.clone(),
            signal,
            trade: Some(TradeSummary::new(&trade, price, status)),
            balance_after,
        })
    }
}
