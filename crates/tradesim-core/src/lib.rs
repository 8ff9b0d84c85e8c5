//! Core types and traits for the simulated trading loop.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (PriceSeries)
//! - Trading signals and trade value objects
//! - Per-iteration reporting types
//! - Core traits for strategies, price sources, and execution venues

pub mod error;
pub mod traits;
pub mod types;

pub use error::{TradingError, TradingResult};
pub use traits::*;
pub use types::*;
