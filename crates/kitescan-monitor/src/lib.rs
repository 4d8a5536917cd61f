//! Logging setup and the terminal dashboard.

mod dashboard;
mod logging;

pub use dashboard::Dashboard;
pub use logging::setup_logging;
