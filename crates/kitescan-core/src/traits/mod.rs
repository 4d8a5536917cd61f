//! Core traits for the scanner.

mod data_source;
mod gateway;
mod indicator;

pub use data_source::HistoricalSource;
pub use gateway::OrderGateway;
pub use indicator::Indicator;
