//! Trading strategy implementations.
//!
//! This crate provides the dual simple-moving-average crossover strategy and
//! a registry for constructing strategies by name.

mod registry;
mod sma;
mod sma_crossover;

pub use registry::{StrategyInfo, StrategyRegistry};
pub use sma::Sma;
pub use sma_crossover::{SmaCrossover, SmaCrossoverConfig};
