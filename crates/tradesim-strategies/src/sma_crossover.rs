//! Dual simple-moving-average crossover strategy.
//!
//! Buys when the short-window average sits above the long-window average,
//! sells when it sits below, and holds on a tie or insufficient history.

use serde::{Deserialize, Serialize};
use tracing::trace;
use tradesim_core::error::StrategyError;
use tradesim_core::traits::Strategy;
use tradesim_core::types::{PriceSeries, Signal};

use crate::sma::Sma;

/// Configuration for the SMA crossover strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaCrossoverConfig {
    /// Short moving-average window
    pub short_window: usize,
    /// Long moving-average window
    pub long_window: usize,
}

impl Default for SmaCrossoverConfig {
    fn default() -> Self {
        Self {
            short_window: 9,
            long_window: 21,
        }
    }
}

impl SmaCrossoverConfig {
    /// Validate the window configuration.
    pub fn validate(&self) -> Result<(), StrategyError> {
        if self.short_window == 0 || self.long_window == 0 {
            return Err(StrategyError::InvalidConfig(
                "Window sizes must be greater than 0".into(),
            ));
        }
        if self.short_window >= self.long_window {
            return Err(StrategyError::InvalidConfig(
                "Short window must be less than long window".into(),
            ));
        }
        Ok(())
    }
}

/// Dual moving-average crossover strategy.
pub struct SmaCrossover {
    config: SmaCrossoverConfig,
    short: Sma,
    long: Sma,
}

impl SmaCrossover {
    /// Create the strategy, validating the window configuration up front.
    pub fn new(config: SmaCrossoverConfig) -> Result<Self, StrategyError> {
        config.validate()?;
        Ok(Self {
            short: Sma::new(config.short_window),
            long: Sma::new(config.long_window),
            config,
        })
    }

    pub fn config(&self) -> &SmaCrossoverConfig {
        &self.config
    }
}

impl Strategy for SmaCrossover {
    fn name(&self) -> &str {
        "SMA Crossover"
    }

    fn description(&self) -> &str {
        "Compares short and long simple moving averages of recent closes"
    }

    fn generate(&self, prices: &PriceSeries) -> Signal {
        if prices.len() < self.config.long_window {
            return Signal::Hold;
        }

        let closes = prices.closes();

        // Both averages are well defined here: windows are validated
        // positive and the length check above covers the longer one.
        let (Some(short_avg), Some(long_avg)) =
            (self.short.value(closes), self.long.value(closes))
        else {
            return Signal::Hold;
        };

        trace!(short_avg, long_avg, "moving averages computed");

        if short_avg > long_avg {
            Signal::Buy
        } else if long_avg > short_avg {
            Signal::Sell
        } else {
            Signal::Hold
        }
    }

    fn warmup(&self) -> usize {
        self.config.long_window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(short_window: usize, long_window: usize) -> SmaCrossover {
        SmaCrossover::new(SmaCrossoverConfig {
            short_window,
            long_window,
        })
        .unwrap()
    }

    fn series(closes: &[f64]) -> PriceSeries {
        PriceSeries::new("TEST", closes.to_vec())
    }

    #[test]
    fn test_config_validation() {
        assert!(SmaCrossoverConfig::default().validate().is_ok());

        let zero = SmaCrossoverConfig {
            short_window: 0,
            long_window: 21,
        };
        assert!(zero.validate().is_err());

        let inverted = SmaCrossoverConfig {
            short_window: 30,
            long_window: 20,
        };
        assert!(inverted.validate().is_err());

        let equal = SmaCrossoverConfig {
            short_window: 9,
            long_window: 9,
        };
        assert!(equal.validate().is_err());
    }

    #[test]
    fn test_construction_fails_fast_on_bad_windows() {
        let result = SmaCrossover::new(SmaCrossoverConfig {
            short_window: 0,
            long_window: 0,
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_insufficient_history_holds() {
        // 8 closes against a 21-bar long window.
        let strategy = strategy(9, 21);
        let prices = series(&[4.0, 2.0, 1.0, 45.0, 62.0, 1.0, 1.0, 1.0]);

        assert_eq!(strategy.generate(&prices), Signal::Hold);
    }

    #[test]
    fn test_rising_tail_buys() {
        let strategy = strategy(3, 7);
        // short avg = (5+6+7)/3 = 6, long avg = 4
        let prices = series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);

        assert_eq!(strategy.generate(&prices), Signal::Buy);
    }

    #[test]
    fn test_falling_tail_sells() {
        let strategy = strategy(3, 7);
        // short avg = 2, long avg = 4
        let prices = series(&[7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);

        assert_eq!(strategy.generate(&prices), Signal::Sell);
    }

    #[test]
    fn test_equal_averages_hold() {
        let strategy = strategy(3, 7);
        let prices = series(&[5.0; 7]);

        assert_eq!(strategy.generate(&prices), Signal::Hold);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let strategy = strategy(3, 7);
        let prices = series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);

        assert_eq!(strategy.generate(&prices), strategy.generate(&prices));
    }

    #[test]
    fn test_warmup_matches_long_window() {
        let strategy = strategy(9, 21);

        assert_eq!(strategy.warmup(), 21);
        assert!(!strategy.has_warmed_up(20));
        assert!(strategy.has_warmed_up(21));
    }
}
