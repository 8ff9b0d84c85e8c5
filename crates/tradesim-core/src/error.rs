//! Error types for the trading loop.

use rust_decimal::Decimal;
use thiserror::Error;

/// Top-level trading system error.
#[derive(Error, Debug)]
pub enum TradingError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),

    #[error("Venue error: {0}")]
    Venue(#[from] VenueError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Strategy-specific errors.
///
/// Configuration problems are raised at construction time; `generate`
/// itself never fails.
#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Strategy not found: {0}")]
    NotFound(String),
}

/// Execution venue errors.
#[derive(Error, Debug)]
pub enum VenueError {
    #[error("Insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        required: Decimal,
        available: Decimal,
    },

    #[error("Order rejected: {0}")]
    Rejected(String),
}

/// Price source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("No data available for the requested symbol")]
    NoDataAvailable,

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Data source error: {0}")]
    Internal(String),
}

/// Result type alias for trading operations.
pub type TradingResult<T> = Result<T, TradingError>;
