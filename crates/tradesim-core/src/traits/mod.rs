//! Core traits for the trading loop.

mod price_source;
mod strategy;
mod venue;

pub use price_source::PriceSource;
pub use strategy::Strategy;
pub use venue::Venue;
