//! Turns a bar series into an analysis result.

use chrono::Utc;
use kitescan_core::{
    error::{DataError, ScanError},
    traits::Indicator,
    types::{Analysis, BarSeries},
};
use kitescan_indicators::{FibonacciRetracement, Rsi};
use tracing::debug;

use crate::rule::{RuleConfig, ThresholdRule};

/// Computes RSI and Fibonacci levels over a series and applies the
/// threshold rule to the latest values.
pub struct Analyzer {
    rsi: Rsi,
    rule: ThresholdRule,
}

impl Analyzer {
    /// Create an analyzer.
    pub fn new(rsi_period: usize, rule: RuleConfig) -> Self {
        Self {
            rsi: Rsi::new(rsi_period),
            rule: ThresholdRule::new(rule),
        }
    }

    /// Minimum number of bars before a signal can be produced.
    pub fn warmup_period(&self) -> usize {
        self.rsi.period()
    }

    /// Analyze a bar series.
    ///
    /// Fails with `DataError::NoDataAvailable` on an empty series and
    /// `IndicatorError::InsufficientData` when the window is shorter
    /// than the RSI warmup.
    pub fn analyze(&self, series: &BarSeries) -> Result<Analysis, ScanError> {
        let last_bar = series.last().ok_or(DataError::NoDataAvailable)?;
        let closes = series.closes();

        self.rsi.validate_data(&closes)?;
        let rsi_values = self.rsi.calculate(&closes);
        let rsi = rsi_values
            .last()
            .copied()
            .ok_or(DataError::NoDataAvailable)?;

        let fib =
            FibonacciRetracement::levels(&closes).ok_or(DataError::NoDataAvailable)?;
        let last_price = last_bar.close;

        debug!(
            symbol = %series.symbol,
            rsi,
            last_price,
            buy_distance = ThresholdRule::relative_distance(last_price, fib.low),
            sell_distance = ThresholdRule::relative_distance(last_price, fib.high),
            "evaluating threshold rule"
        );

        let action = self.rule.evaluate(rsi, last_price, &fib);

        Ok(Analysis {
            symbol: series.symbol.clone(),
            last_price,
            rsi,
            fib,
            action,
            generated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitescan_core::types::{Bar, Interval, SignalAction};

    fn series_from_closes(closes: &[f64]) -> BarSeries {
        let mut series = BarSeries::new("NIFTY50".to_string(), Interval::Minute5);
        for (i, &close) in closes.iter().enumerate() {
            series.push(Bar::new(
                i as i64 * 300_000,
                close,
                close + 1.0,
                close - 1.0,
                close,
                0.0,
            ));
        }
        series
    }

    fn analyzer(period: usize) -> Analyzer {
        Analyzer::new(period, RuleConfig::default())
    }

    #[test]
    fn test_empty_series() {
        let result = analyzer(14).analyze(&series_from_closes(&[]));
        assert!(matches!(
            result,
            Err(ScanError::Data(DataError::NoDataAvailable))
        ));
    }

    #[test]
    fn test_insufficient_data() {
        let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let result = analyzer(14).analyze(&series_from_closes(&closes));
        assert!(matches!(result, Err(ScanError::Indicator(_))));
    }

    #[test]
    fn test_decline_to_support_is_buy() {
        // Monotone decline: RSI 0, last price on the window low
        let closes: Vec<f64> = (0..30).map(|i| 16000.0 - i as f64 * 10.0).collect();
        let analysis = analyzer(14).analyze(&series_from_closes(&closes)).unwrap();

        assert!(analysis.rsi < 1.0);
        assert!((analysis.last_price - analysis.fib.low).abs() < 1e-9);
        assert_eq!(analysis.action, Some(SignalAction::Buy));
    }

    #[test]
    fn test_rally_to_resistance_is_sell() {
        // Monotone rally: RSI 100, last price on the window high
        let closes: Vec<f64> = (0..30).map(|i| 15000.0 + i as f64 * 10.0).collect();
        let analysis = analyzer(14).analyze(&series_from_closes(&closes)).unwrap();

        assert!(analysis.rsi > 99.0);
        assert!((analysis.last_price - analysis.fib.high).abs() < 1e-9);
        assert_eq!(analysis.action, Some(SignalAction::Sell));
    }

    #[test]
    fn test_neutral_rsi_gives_no_signal() {
        // Alternating closes keep RSI pinned to 50; price ends on the
        // window high but the sell threshold is not crossed
        let closes: Vec<f64> = (0..30)
            .map(|i| if i % 2 == 0 { 15000.0 } else { 15100.0 })
            .collect();
        let analysis = analyzer(14).analyze(&series_from_closes(&closes)).unwrap();

        assert!((analysis.rsi - 50.0).abs() < 1e-9);
        assert_eq!(analysis.action, None);
    }

    #[test]
    fn test_warmup_period() {
        assert_eq!(analyzer(14).warmup_period(), 15);
    }
}
