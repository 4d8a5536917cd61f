//! Core types and traits for the kitescan signal scanner.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, BarSeries, Interval)
//! - Analysis results and signal actions
//! - Order intent/record types
//! - Core traits for indicators, historical data sources, and order gateways

pub mod error;
pub mod traits;
pub mod types;

pub use error::{ScanError, ScanResult};
pub use traits::*;
pub use types::*;
