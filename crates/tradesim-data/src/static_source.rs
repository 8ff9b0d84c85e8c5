//! Fixed in-memory price source.

use async_trait::async_trait;
use tradesim_core::error::DataError;
use tradesim_core::traits::PriceSource;

/// Price source serving a fixed, preloaded close history.
///
/// Useful for tests and offline runs.
pub struct StaticPriceSource {
    closes: Vec<f64>,
}

impl StaticPriceSource {
    /// Create a source over already-ordered closes, oldest first.
    pub fn new(closes: Vec<f64>) -> Self {
        Self { closes }
    }
}

#[async_trait]
impl PriceSource for StaticPriceSource {
    async fn fetch_recent_closes(&self, _symbol: &str, count: usize) -> Result<Vec<f64>, DataError> {
        let start = self.closes.len().saturating_sub(count);
        Ok(self.closes[start..].to_vec())
    }

    fn name(&self) -> &str {
        "static"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_returns_tail() {
        let source = StaticPriceSource::new(vec![1.0, 2.0, 3.0, 4.0]);

        let closes = source.fetch_recent_closes("TEST", 2).await.unwrap();
        assert_eq!(closes, vec![3.0, 4.0]);
    }

    #[tokio::test]
    async fn test_short_history_returns_everything() {
        let source = StaticPriceSource::new(vec![1.0, 2.0]);

        let closes = source.fetch_recent_closes("TEST", 10).await.unwrap();
        assert_eq!(closes, vec![1.0, 2.0]);
    }

    #[tokio::test]
    async fn test_empty_history() {
        let source = StaticPriceSource::new(vec![]);

        let closes = source.fetch_recent_closes("TEST", 5).await.unwrap();
        assert!(closes.is_empty());
    }
}
