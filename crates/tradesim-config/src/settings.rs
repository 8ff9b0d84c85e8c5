//! Configuration structures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub trading: TradingSettings,
    #[serde(default)]
    pub strategy: StrategySettings,
    #[serde(default)]
    pub venue: VenueSettings,
    #[serde(default)]
    pub data: DataSettings,
}

/// General app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "tradesim".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Trading loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradingSettings {
    pub symbol: String,
    /// Fixed quantity per trade
    pub quantity: Decimal,
    /// Seconds between loop iterations
    pub interval_secs: u64,
}

impl Default for TradingSettings {
    fn default() -> Self {
        use rust_decimal_macros::dec;
        Self {
            symbol: "AAPL".to_string(),
            quantity: dec!(1),
            interval_secs: 60,
        }
    }
}

/// Strategy settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategySettings {
    pub name: String,
    pub short_window: usize,
    pub long_window: usize,
}

impl Default for StrategySettings {
    fn default() -> Self {
        Self {
            name: "sma_crossover".to_string(),
            short_window: 9,
            long_window: 21,
        }
    }
}

/// Mock venue settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSettings {
    pub initial_balance: Decimal,
}

impl Default for VenueSettings {
    fn default() -> Self {
        use rust_decimal_macros::dec;
        Self {
            initial_balance: dec!(100000),
        }
    }
}

/// Price source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSettings {
    /// Source kind: "stooq" or "csv"
    pub kind: String,
    /// CSV file path, required for the csv kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            kind: "stooq".to_string(),
            path: None,
        }
    }
}
