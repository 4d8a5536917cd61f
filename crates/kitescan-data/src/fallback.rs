//! Fetch-or-simulate fallback source.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kitescan_core::{
    error::DataError,
    traits::HistoricalSource,
    types::{Bar, Interval},
};
use tracing::{error, info};

use crate::synthetic::SyntheticSource;

/// Wraps an optional primary source and answers every failure with
/// synthetic data. No retry, no backoff, no partial-data handling.
///
/// With no primary configured (simulation mode) every request is
/// served synthetically.
pub struct FallbackSource<S> {
    primary: Option<S>,
    synthetic: SyntheticSource,
}

impl<S> FallbackSource<S> {
    /// Create a fallback around an optional primary source.
    pub fn new(primary: Option<S>) -> Self {
        Self {
            primary,
            synthetic: SyntheticSource::new(),
        }
    }

    /// Whether a primary source is configured.
    pub fn has_primary(&self) -> bool {
        self.primary.is_some()
    }
}

#[async_trait]
impl<S: HistoricalSource> HistoricalSource for FallbackSource<S> {
    async fn fetch_bars(
        &self,
        token: &str,
        interval: Interval,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Bar>, DataError> {
        if let Some(primary) = &self.primary {
            match primary.fetch_bars(token, interval, from, to).await {
                Ok(bars) => return Ok(bars),
                Err(e) => {
                    error!("Error fetching historical data: {}", e);
                    info!("Falling back to simulation data");
                }
            }
        }

        info!("Using simulated data for {}", token);
        self.synthetic.fetch_bars(token, interval, from, to).await
    }

    fn name(&self) -> &str {
        "fallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingSource;

    #[async_trait]
    impl HistoricalSource for FailingSource {
        async fn fetch_bars(
            &self,
            _token: &str,
            _interval: Interval,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> Result<Vec<Bar>, DataError> {
            Err(DataError::ConnectionError("connection refused".into()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct FixedSource(Vec<Bar>);

    #[async_trait]
    impl HistoricalSource for FixedSource {
        async fn fetch_bars(
            &self,
            _token: &str,
            _interval: Interval,
            _from: DateTime<Utc>,
            _to: DateTime<Utc>,
        ) -> Result<Vec<Bar>, DataError> {
            Ok(self.0.clone())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_primary_error_falls_back_to_synthetic() {
        let source = FallbackSource::new(Some(FailingSource));
        let to = Utc::now();
        let bars = source
            .fetch_bars("NIFTY50", Interval::Minute5, to, to)
            .await
            .unwrap();

        assert_eq!(bars.len(), 100);
    }

    #[tokio::test]
    async fn test_primary_result_passes_through() {
        let fixed = vec![Bar::new(1, 1.0, 2.0, 0.5, 1.5, 0.0)];
        let source = FallbackSource::new(Some(FixedSource(fixed.clone())));
        let to = Utc::now();
        let bars = source
            .fetch_bars("NIFTY50", Interval::Minute5, to, to)
            .await
            .unwrap();

        assert_eq!(bars, fixed);
    }

    #[tokio::test]
    async fn test_no_primary_serves_synthetic() {
        let source: FallbackSource<FailingSource> = FallbackSource::new(None);
        assert!(!source.has_primary());

        let to = Utc::now();
        let bars = source
            .fetch_bars("BANKNIFTY", Interval::Minute5, to, to)
            .await
            .unwrap();
        assert_eq!(bars.len(), 100);
    }
}
