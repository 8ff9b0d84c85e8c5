//! Close-price history handed to strategies.

/// Chronologically ordered close prices for a symbol, most recent last.
///
/// Built fresh from a price source on every loop iteration and handed to the
/// strategy by reference; no component retains it.
#[derive(Debug, Clone)]
pub struct PriceSeries {
    symbol: String,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Create a series from already-ordered closes.
    pub fn new(symbol: impl Into<String>, closes: Vec<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            closes,
        }
    }

    /// Symbol the closes were fetched for.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Number of closes.
    #[inline]
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// The most recent close.
    pub fn last(&self) -> Option<f64> {
        self.closes.last().copied()
    }

    /// All closes, oldest first.
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// The trailing `n` closes (fewer when less history exists).
    pub fn last_n(&self, n: usize) -> &[f64] {
        let start = self.closes.len().saturating_sub(n);
        &self.closes[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_accessors() {
        let series = PriceSeries::new("AAPL", vec![100.0, 101.0, 102.0]);

        assert_eq!(series.symbol(), "AAPL");
        assert_eq!(series.len(), 3);
        assert!(!series.is_empty());
        assert_eq!(series.last(), Some(102.0));
        assert_eq!(series.closes(), &[100.0, 101.0, 102.0]);
    }

    #[test]
    fn test_last_n_tail() {
        let series = PriceSeries::new("AAPL", vec![1.0, 2.0, 3.0, 4.0]);

        assert_eq!(series.last_n(2), &[3.0, 4.0]);
        assert_eq!(series.last_n(10), &[1.0, 2.0, 3.0, 4.0]);
        assert!(series.last_n(0).is_empty());
    }

    #[test]
    fn test_empty_series() {
        let series = PriceSeries::new("AAPL", vec![]);

        assert!(series.is_empty());
        assert_eq!(series.last(), None);
    }
}
