//! Mock execution venue for the trading loop.

mod mock;

pub use mock::MockVenue;
