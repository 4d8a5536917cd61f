//! Technical indicators used by the signal scanner.
//!
//! Two indicators are provided:
//! - RSI, the simple-moving-average variant (rolling mean of gains and
//!   losses, not Wilder's exponential smoothing)
//! - Fibonacci retracement levels over a whole price window

pub mod momentum;
pub mod retracement;

pub use momentum::Rsi;
pub use retracement::FibonacciRetracement;
