//! Signal generation: the RSI + Fibonacci threshold rule and the
//! analyzer that applies it to a bar series.

mod analyzer;
mod rule;

pub use analyzer::Analyzer;
pub use rule::{RuleConfig, ThresholdRule};
