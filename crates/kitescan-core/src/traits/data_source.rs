//! Historical data source trait definition.

use crate::error::DataError;
use crate::types::{Bar, Interval};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Trait for historical candle sources.
#[async_trait]
pub trait HistoricalSource: Send + Sync {
    /// Fetch historical bars for one instrument.
    ///
    /// # Arguments
    /// * `token` - Instrument token or symbol the source understands
    /// * `interval` - Candle interval
    /// * `from` - Start of the date range
    /// * `to` - End of the date range
    ///
    /// # Returns
    /// Bars ordered from oldest to newest.
    async fn fetch_bars(
        &self,
        token: &str,
        interval: Interval,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Bar>, DataError>;

    /// Get the data source name.
    fn name(&self) -> &str;
}
