//! Analysis results: signal actions and Fibonacci levels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Trading action suggested by the signal rule.
///
/// The absence of a signal is represented as `Option::None` rather than a
/// third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
}

impl SignalAction {
    /// Get the opposite action.
    pub fn opposite(&self) -> Self {
        match self {
            SignalAction::Buy => SignalAction::Sell,
            SignalAction::Sell => SignalAction::Buy,
        }
    }
}

impl std::fmt::Display for SignalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalAction::Buy => write!(f, "BUY"),
            SignalAction::Sell => write!(f, "SELL"),
        }
    }
}

/// Fibonacci retracement levels over a price window.
///
/// Ratios are measured down from the window high; `high` is the 0.0%
/// level and `low` the 100.0% level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FibLevels {
    /// 0.0% level (window maximum)
    pub high: f64,
    /// 23.6% retracement
    pub r236: f64,
    /// 38.2% retracement
    pub r382: f64,
    /// 50.0% retracement
    pub r500: f64,
    /// 61.8% retracement
    pub r618: f64,
    /// 100.0% level (window minimum)
    pub low: f64,
}

impl FibLevels {
    /// Levels with their conventional labels, from 0.0% to 100.0%.
    pub fn labeled(&self) -> [(&'static str, f64); 6] {
        [
            ("0.0%", self.high),
            ("23.6%", self.r236),
            ("38.2%", self.r382),
            ("50.0%", self.r500),
            ("61.8%", self.r618),
            ("100.0%", self.low),
        ]
    }

    /// Midpoint of the window (the 50.0% level).
    #[inline]
    pub fn midpoint(&self) -> f64 {
        self.r500
    }
}

impl std::fmt::Display for FibLevels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (label, level) in self.labeled() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:.2}", label, level)?;
            first = false;
        }
        Ok(())
    }
}

/// Result of one analysis run over a single instrument.
///
/// Ephemeral: produced, displayed/logged, and discarded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Instrument symbol or token analyzed
    pub symbol: String,
    /// Latest closing price in the window
    pub last_price: f64,
    /// Latest defined RSI value
    pub rsi: f64,
    /// Retracement levels over the whole window
    pub fib: FibLevels,
    /// Suggested action, if the rule fired
    pub action: Option<SignalAction>,
    /// When the analysis was produced
    pub generated_at: DateTime<Utc>,
}

impl Analysis {
    /// One-line summary in the log format used across the tool.
    pub fn summary(&self) -> String {
        let action = self
            .action
            .map(|a| a.to_string())
            .unwrap_or_else(|| "None".to_string());
        format!(
            "{} - Signal: {}, Price: {:.2}, RSI: {:.2}",
            self.symbol, action, self.last_price, self.rsi
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels() -> FibLevels {
        FibLevels {
            high: 200.0,
            r236: 176.4,
            r382: 161.8,
            r500: 150.0,
            r618: 138.2,
            low: 100.0,
        }
    }

    #[test]
    fn test_action_display() {
        assert_eq!(SignalAction::Buy.to_string(), "BUY");
        assert_eq!(SignalAction::Sell.to_string(), "SELL");
        assert_eq!(SignalAction::Buy.opposite(), SignalAction::Sell);
    }

    #[test]
    fn test_labeled_order() {
        let labels: Vec<&str> = levels().labeled().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["0.0%", "23.6%", "38.2%", "50.0%", "61.8%", "100.0%"]
        );
    }

    #[test]
    fn test_summary_includes_action() {
        let analysis = Analysis {
            symbol: "NIFTY50".to_string(),
            last_price: 100.5,
            rsi: 42.0,
            fib: levels(),
            action: Some(SignalAction::Buy),
            generated_at: Utc::now(),
        };
        assert_eq!(
            analysis.summary(),
            "NIFTY50 - Signal: BUY, Price: 100.50, RSI: 42.00"
        );

        let idle = Analysis {
            action: None,
            ..analysis
        };
        assert!(idle.summary().contains("Signal: None"));
    }
}
