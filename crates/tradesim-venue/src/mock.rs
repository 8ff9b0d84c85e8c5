//! Mock venue settling trades against an in-memory balance.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Mutex;
use tracing::info;
use tradesim_core::error::VenueError;
use tradesim_core::traits::Venue;
use tradesim_core::types::{Side, Trade};

/// Simulated execution venue holding a single cash balance.
///
/// Buys are funded from the balance and rejected when it cannot cover the
/// notional. Sells always settle and credit the balance; there is no
/// holdings or short-position check.
pub struct MockVenue {
    balance: Mutex<Decimal>,
}

impl MockVenue {
    /// Create a venue with the given starting balance.
    pub fn new(initial_balance: Decimal) -> Self {
        Self {
            balance: Mutex::new(initial_balance),
        }
    }
}

#[async_trait]
impl Venue for MockVenue {
    async fn place(&self, trade: &Trade, price: Decimal) -> Result<Decimal, VenueError> {
        if trade.quantity <= Decimal::ZERO {
            return Err(VenueError::Rejected(format!(
                "non-positive quantity {}",
                trade.quantity
            )));
        }

        let notional = trade.notional(price);

        // Single lock scope keeps the read-check-write atomic.
        let mut balance = self.balance.lock().unwrap();
        match trade.side {
            Side::Buy => {
                if *balance < notional {
                    return Err(VenueError::InsufficientBalance {
                        required: notional,
                        available: *balance,
                    });
                }
                *balance -= notional;
            }
            Side::Sell => {
                *balance += notional;
            }
        }

        info!(
            side = %trade.side,
            symbol = %trade.symbol,
            %price,
            balance = %*balance,
            "order settled"
        );

        Ok(*balance)
    }

    async fn balance(&self) -> Decimal {
        *self.balance.lock().unwrap()
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn trade(side: Side, quantity: Decimal) -> Trade {
        Trade::new("SMA Crossover", side, quantity, "JPM")
    }

    #[tokio::test]
    async fn test_buy_reduces_balance_by_notional() {
        let venue = MockVenue::new(dec!(100000));

        let new_balance = venue
            .place(&trade(Side::Buy, dec!(100)), dec!(200))
            .await
            .unwrap();

        assert_eq!(new_balance, dec!(80000));
        assert_eq!(venue.balance().await, dec!(80000));
    }

    #[tokio::test]
    async fn test_buy_rejected_when_balance_too_small() {
        // 100 x 200 = 20000 against a 10000 balance.
        let venue = MockVenue::new(dec!(10000));

        let result = venue.place(&trade(Side::Buy, dec!(100)), dec!(200)).await;

        assert!(matches!(
            result,
            Err(VenueError::InsufficientBalance {
                required,
                available
            }) if required == dec!(20000) && available == dec!(10000)
        ));
        assert_eq!(venue.balance().await, dec!(10000));
    }

    #[tokio::test]
    async fn test_buy_allowed_at_exact_balance() {
        let venue = MockVenue::new(dec!(20000));

        let new_balance = venue
            .place(&trade(Side::Buy, dec!(100)), dec!(200))
            .await
            .unwrap();

        assert_eq!(new_balance, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_sell_always_credits_balance() {
        let venue = MockVenue::new(dec!(0));

        let new_balance = venue
            .place(&trade(Side::Sell, dec!(3)), dec!(50))
            .await
            .unwrap();

        assert_eq!(new_balance, dec!(150));
    }

    #[tokio::test]
    async fn test_non_positive_quantity_rejected() {
        let venue = MockVenue::new(dec!(1000));

        let result = venue.place(&trade(Side::Buy, dec!(0)), dec!(10)).await;

        assert!(matches!(result, Err(VenueError::Rejected(_))));
        assert_eq!(venue.balance().await, dec!(1000));
    }
}
