//! Logging setup and console reporting.

mod logging;
mod reporter;

pub use logging::setup_logging;
pub use reporter::render_report;
