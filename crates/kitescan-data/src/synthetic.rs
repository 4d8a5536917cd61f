//! Synthetic bar generation for simulation mode.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kitescan_core::{
    error::DataError,
    traits::HistoricalSource,
    types::{Bar, Interval},
};
use rand::Rng;

/// Number of bars produced per request.
const WINDOW_BARS: usize = 100;

/// Generates uniformly-random OHLC bars in an instrument-dependent
/// price band.
///
/// Open/high/low/close are independent draws, so bars are not
/// internally consistent; only the closes feed the indicators.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    bars: usize,
}

impl SyntheticSource {
    /// Create a source producing the default 100-bar window.
    pub fn new() -> Self {
        Self { bars: WINDOW_BARS }
    }

    /// Override the window size.
    pub fn with_bars(mut self, bars: usize) -> Self {
        self.bars = bars;
        self
    }

    /// Price band for an instrument token.
    ///
    /// Index tokens containing NIFTY (but not BANK) trade near 15-16k;
    /// everything else gets the BANKNIFTY-like 35-36k band.
    fn price_band(token: &str) -> (f64, f64) {
        if token.contains("NIFTY") && !token.contains("BANK") {
            (15000.0, 16000.0)
        } else {
            (35000.0, 36000.0)
        }
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoricalSource for SyntheticSource {
    async fn fetch_bars(
        &self,
        token: &str,
        interval: Interval,
        _from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Bar>, DataError> {
        let (lo, hi) = Self::price_band(token);
        let step = interval.as_millis();
        let end = to.timestamp_millis();
        let mut rng = rand::thread_rng();

        let bars = (0..self.bars)
            .map(|i| {
                let timestamp = end - (self.bars - 1 - i) as i64 * step;
                Bar::new(
                    timestamp,
                    rng.gen_range(lo..hi),
                    rng.gen_range(lo..hi),
                    rng.gen_range(lo..hi),
                    rng.gen_range(lo..hi),
                    0.0,
                )
            })
            .collect();

        Ok(bars)
    }

    fn name(&self) -> &str {
        "synthetic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_window_size_and_spacing() {
        let source = SyntheticSource::new();
        let to = Utc::now();
        let bars = source
            .fetch_bars("NIFTY50", Interval::Minute5, to, to)
            .await
            .unwrap();

        assert_eq!(bars.len(), 100);
        assert_eq!(bars.last().unwrap().timestamp, to.timestamp_millis());
        for pair in bars.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, 300_000);
        }
    }

    #[tokio::test]
    async fn test_price_bands() {
        let source = SyntheticSource::new();
        let to = Utc::now();

        let nifty = source
            .fetch_bars("NIFTY50", Interval::Minute5, to, to)
            .await
            .unwrap();
        for bar in &nifty {
            assert!(bar.close >= 15000.0 && bar.close < 16000.0);
        }

        let banknifty = source
            .fetch_bars("BANKNIFTY", Interval::Minute5, to, to)
            .await
            .unwrap();
        for bar in &banknifty {
            assert!(bar.close >= 35000.0 && bar.close < 36000.0);
        }
    }

    #[tokio::test]
    async fn test_custom_window() {
        let source = SyntheticSource::new().with_bars(25);
        let to = Utc::now();
        let bars = source
            .fetch_bars("BANKNIFTY", Interval::Minute, to, to)
            .await
            .unwrap();

        assert_eq!(bars.len(), 25);
    }
}
