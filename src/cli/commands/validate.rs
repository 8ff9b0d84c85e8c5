//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use tradesim_config::{default_as_toml, load_config};

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    match load_config(config_path) {
        Ok(config) => {
            println!("Configuration is valid!");
            println!();
            println!("App: {}", config.app.name);
            println!("Environment: {}", config.app.environment);
            println!("Log level: {}", config.logging.level);
            println!("Symbol: {}", config.trading.symbol);
            println!("Quantity per trade: {}", config.trading.quantity);
            println!("Interval: {}s", config.trading.interval_secs);
            println!(
                "Strategy: {} ({} / {})",
                config.strategy.name, config.strategy.short_window, config.strategy.long_window
            );
            println!("Initial balance: {}", config.venue.initial_balance);
            println!("Data source: {}", config.data.kind);
        }
        Err(e) => {
            println!("Configuration error: {}", e);
            println!();
            println!("A default configuration looks like:");
            println!("{}", default_as_toml()?);
            return Err(e.into());
        }
    }

    Ok(())
}
