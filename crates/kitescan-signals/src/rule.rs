//! The BUY/SELL threshold rule.
//!
//! Buys when RSI is weak and price sits near the 100% retracement (the
//! window low); sells when RSI is strong and price sits near the 0%
//! level (the window high).

use kitescan_core::{
    error::ScanError,
    types::{FibLevels, SignalAction},
};
use serde::{Deserialize, Serialize};

/// Configuration for the threshold rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Emit BUY only when RSI is strictly below this
    pub buy_rsi_below: f64,
    /// Emit SELL only when RSI is strictly above this
    pub sell_rsi_above: f64,
    /// Maximum relative distance from the retracement level (0.01 = 1%)
    pub proximity: f64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            buy_rsi_below: 50.0,
            sell_rsi_above: 55.0,
            proximity: 0.01,
        }
    }
}

impl RuleConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ScanError> {
        if !(0.0..=100.0).contains(&self.buy_rsi_below)
            || !(0.0..=100.0).contains(&self.sell_rsi_above)
        {
            return Err(ScanError::Config(
                "RSI thresholds must be between 0 and 100".into(),
            ));
        }
        if self.buy_rsi_below >= self.sell_rsi_above {
            return Err(ScanError::Config(
                "Buy threshold must be below the sell threshold".into(),
            ));
        }
        if self.proximity <= 0.0 {
            return Err(ScanError::Config("Proximity must be positive".into()));
        }
        Ok(())
    }
}

/// Static threshold rule over (latest RSI, latest close, retracement levels).
#[derive(Debug, Clone)]
pub struct ThresholdRule {
    config: RuleConfig,
}

impl ThresholdRule {
    /// Create a rule from configuration.
    pub fn new(config: RuleConfig) -> Self {
        Self { config }
    }

    /// Relative distance of a price from a level.
    ///
    /// Infinite when the level is zero, so the proximity check can never
    /// pass on a degenerate window.
    pub fn relative_distance(price: f64, level: f64) -> f64 {
        if level == 0.0 {
            f64::INFINITY
        } else {
            ((price - level) / level).abs()
        }
    }

    /// Evaluate the rule. BUY takes precedence over SELL.
    pub fn evaluate(&self, rsi: f64, last_price: f64, fib: &FibLevels) -> Option<SignalAction> {
        if rsi < self.config.buy_rsi_below
            && Self::relative_distance(last_price, fib.low) < self.config.proximity
        {
            Some(SignalAction::Buy)
        } else if rsi > self.config.sell_rsi_above
            && Self::relative_distance(last_price, fib.high) < self.config.proximity
        {
            Some(SignalAction::Sell)
        } else {
            None
        }
    }

    /// The configuration in effect.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }
}
