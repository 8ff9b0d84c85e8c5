//! Price sources for the trading loop.
//!
//! Implementations of [`tradesim_core::traits::PriceSource`]:
//! - [`CsvPriceSource`] reads daily closes from a local CSV file
//! - [`StooqPriceSource`] downloads daily closes over HTTP
//! - [`StaticPriceSource`] serves a fixed in-memory history

mod csv_source;
mod static_source;
mod stooq;

pub use csv_source::CsvPriceSource;
pub use static_source::StaticPriceSource;
pub use stooq::StooqPriceSource;
