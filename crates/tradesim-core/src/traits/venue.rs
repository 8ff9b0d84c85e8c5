//! Execution venue trait definition.

use crate::error::VenueError;
use crate::types::Trade;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for execution venues.
///
/// Venues validate and settle trades against an account balance. `place` is
/// atomic: the balance read-check-write is a single logical step with no
/// interleaving from other calls.
#[async_trait]
pub trait Venue: Send + Sync {
    /// Apply `trade` at `price`.
    ///
    /// # Returns
    /// The balance after settlement. Rejections leave the balance unchanged.
    async fn place(&self, trade: &Trade, price: Decimal) -> Result<Decimal, VenueError>;

    /// Current cash balance.
    async fn balance(&self) -> Decimal;

    /// Get the venue name.
    fn name(&self) -> &str;
}
