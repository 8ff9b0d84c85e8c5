//! Run command: the fixed-cadence trading loop.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use tradesim_config::{load_config, AppConfig};
use tradesim_core::traits::{PriceSource, Venue};
use tradesim_data::{CsvPriceSource, StooqPriceSource};
use tradesim_engine::TradingLoop;
use tradesim_monitor::render_report;
use tradesim_strategies::StrategyRegistry;
use tradesim_venue::MockVenue;

use crate::cli::RunArgs;

pub async fn run(args: RunArgs, config_path: &Path) -> Result<()> {
    let config = if config_path.exists() {
        load_config(config_path).context("Failed to load configuration")?
    } else {
        AppConfig::default()
    };

    // CLI arguments override the configuration file.
    let symbol = args.symbol.unwrap_or(config.trading.symbol);
    let strategy_name = args.strategy.unwrap_or(config.strategy.name);
    let short_window = args.short_window.unwrap_or(config.strategy.short_window);
    let long_window = args.long_window.unwrap_or(config.strategy.long_window);
    let interval_secs = args.interval.unwrap_or(config.trading.interval_secs);
    let quantity = match args.quantity {
        Some(q) => Decimal::try_from(q).context("Invalid quantity")?,
        None => config.trading.quantity,
    };
    let capital = match args.capital {
        Some(c) => Decimal::try_from(c).context("Invalid capital")?,
        None => config.venue.initial_balance,
    };

    let registry = StrategyRegistry::new();
    let strategy = registry
        .create(
            &strategy_name,
            serde_json::json!({
                "short_window": short_window,
                "long_window": long_window,
            }),
        )
        .context("Failed to create strategy")?;

    let source: Arc<dyn PriceSource> = if let Some(path) = &args.data {
        Arc::new(CsvPriceSource::new(path)?)
    } else {
        match config.data.kind.as_str() {
            "csv" => {
                let path = config
                    .data
                    .path
                    .as_deref()
                    .context("data.path is required for the csv source")?;
                Arc::new(CsvPriceSource::new(path)?)
            }
            _ => Arc::new(StooqPriceSource::new()?),
        }
    };

    let venue: Arc<dyn Venue> = Arc::new(MockVenue::new(capital));

    info!(
        %symbol,
        strategy = %strategy_name,
        %quantity,
        %capital,
        source = source.name(),
        "starting trading loop"
    );

    let engine = TradingLoop::new(source, strategy, venue, symbol, quantity);

    let mut remaining = args.iterations;
    if remaining == Some(0) {
        return Ok(());
    }

    let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs.max(1)));

    loop {
        ticker.tick().await;

        match engine.run_once().await {
            Ok(report) => {
                if args.output == "json" {
                    println!("{}", serde_json::to_string(&report)?);
                } else {
                    println!("{}", render_report(&report));
                }
            }
            // A failed iteration is reported and skipped; the loop keeps
            // its cadence.
            Err(err) => error!(%err, "iteration skipped"),
        }

        if let Some(n) = remaining.as_mut() {
            *n -= 1;
            if *n == 0 {
                break;
            }
        }
    }

    Ok(())
}
