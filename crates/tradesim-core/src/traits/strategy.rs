//! Strategy trait definition.

use crate::types::{PriceSeries, Signal};

/// Core strategy trait.
///
/// All trading strategies implement this trait to integrate with the
/// trading loop. A strategy is a pure function from a price history to a
/// signal: deterministic for identical input, with no side effects. New
/// strategies are added as new implementations, not by changing callers.
pub trait Strategy: Send + Sync {
    /// Get the unique name of this strategy.
    fn name(&self) -> &str;

    /// Derive a signal from the given close-price history.
    ///
    /// Histories shorter than [`warmup`](Strategy::warmup) yield
    /// `Signal::Hold`; insufficient history is not an error.
    fn generate(&self, prices: &PriceSeries) -> Signal;

    /// Minimum number of closes needed before the strategy can produce a
    /// non-Hold signal.
    fn warmup(&self) -> usize;

    /// Check if enough history is available to generate signals.
    fn has_warmed_up(&self, available: usize) -> bool {
        available >= self.warmup()
    }

    /// Get a description of the strategy.
    fn description(&self) -> &str {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysHold {
        warmup: usize,
    }

    impl Strategy for AlwaysHold {
        fn name(&self) -> &str {
            "always-hold"
        }

        fn generate(&self, _prices: &PriceSeries) -> Signal {
            Signal::Hold
        }

        fn warmup(&self) -> usize {
            self.warmup
        }
    }

    #[test]
    fn test_has_warmed_up() {
        let strategy = AlwaysHold { warmup: 21 };

        assert!(!strategy.has_warmed_up(8));
        assert!(!strategy.has_warmed_up(20));
        assert!(strategy.has_warmed_up(21));
        assert!(strategy.has_warmed_up(100));
    }

    #[test]
    fn test_object_safety() {
        let strategy: Box<dyn Strategy> = Box::new(AlwaysHold { warmup: 1 });
        let series = PriceSeries::new("TEST", vec![1.0, 2.0]);

        assert_eq!(strategy.generate(&series), Signal::Hold);
    }
}
