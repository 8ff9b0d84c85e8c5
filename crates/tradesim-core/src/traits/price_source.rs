//! Price source trait definition.

use crate::error::DataError;
use async_trait::async_trait;

/// Trait for close-price history sources.
///
/// The loop does not care how prices are produced (HTTP API, file, fixed
/// fixture), only that it gets a chronologically ordered tail of closes.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the most recent `count` closing prices for `symbol`.
    ///
    /// # Returns
    /// A chronologically ordered tail of at most `count` closes, most recent
    /// last. Fewer (or zero) closes are returned when less history exists.
    async fn fetch_recent_closes(&self, symbol: &str, count: usize) -> Result<Vec<f64>, DataError>;

    /// Get the price source name.
    fn name(&self) -> &str;
}
