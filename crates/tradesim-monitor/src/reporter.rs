//! Console rendering of iteration reports.

use tradesim_core::types::{ExecutionStatus, IterationReport};

/// Render one iteration report as a human-readable line.
pub fn render_report(report: &IterationReport) -> String {
    match &report.trade {
        Some(trade) => {
            let status = match trade.status {
                ExecutionStatus::Filled => "placed",
                ExecutionStatus::Rejected => "rejected (insufficient balance)",
            };
            format!(
                "{}: {} {} at {} via '{}' {}, balance {}",
                report.symbol,
                trade.side,
                trade.quantity,
                trade.price,
                trade.strategy,
                status,
                report.balance_after
            )
        }
        None => format!(
            "{}: {}, no trade, balance {}",
            report.symbol, report.signal, report.balance_after
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tradesim_core::types::{Side, Signal, Trade, TradeSummary};

    #[test]
    fn test_render_filled_trade() {
        let trade = Trade::new("SMA Crossover", Side::Buy, dec!(1), "AAPL");
        let report = IterationReport {
            symbol: "AAPL".to_string(),
            signal: Signal::Buy,
            trade: Some(TradeSummary::new(&trade, dec!(150), ExecutionStatus::Filled)),
            balance_after: dec!(99850),
        };

        let line = render_report(&report);
        assert_eq!(
            line,
            "AAPL: BUY 1 at 150 via 'SMA Crossover' placed, balance 99850"
        );
    }

    #[test]
    fn test_render_rejected_trade() {
        let trade = Trade::new("SMA Crossover", Side::Buy, dec!(100), "JPM");
        let report = IterationReport {
            symbol: "JPM".to_string(),
            signal: Signal::Buy,
            trade: Some(TradeSummary::new(&trade, dec!(200), ExecutionStatus::Rejected)),
            balance_after: dec!(10000),
        };

        let line = render_report(&report);
        assert!(line.contains("rejected (insufficient balance)"));
        assert!(line.contains("balance 10000"));
    }

    #[test]
    fn test_render_hold() {
        let report = IterationReport {
            symbol: "AAPL".to_string(),
            signal: Signal::Hold,
            trade: None,
            balance_after: dec!(100000),
        };

        assert_eq!(render_report(&report), "AAPL: HOLD, no trade, balance 100000");
    }
}
