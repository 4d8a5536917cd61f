//! Candle interval definitions.
//!
//! Names follow the Kite Connect historical API vocabulary so the
//! serialized form can be used directly in request paths.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Candle interval for historical data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Interval {
    /// 1 minute candles
    #[serde(rename = "minute")]
    Minute,
    /// 3 minute candles
    #[serde(rename = "3minute")]
    Minute3,
    /// 5 minute candles
    #[serde(rename = "5minute")]
    #[default]
    Minute5,
    /// 10 minute candles
    #[serde(rename = "10minute")]
    Minute10,
    /// 15 minute candles
    #[serde(rename = "15minute")]
    Minute15,
    /// 30 minute candles
    #[serde(rename = "30minute")]
    Minute30,
    /// 60 minute candles
    #[serde(rename = "60minute")]
    Minute60,
    /// Daily candles
    #[serde(rename = "day")]
    Day,
}

impl Interval {
    /// Get the duration of the interval in seconds.
    pub fn as_secs(&self) -> u64 {
        match self {
            Interval::Minute => 60,
            Interval::Minute3 => 180,
            Interval::Minute5 => 300,
            Interval::Minute10 => 600,
            Interval::Minute15 => 900,
            Interval::Minute30 => 1800,
            Interval::Minute60 => 3600,
            Interval::Day => 86400,
        }
    }

    /// Get the duration of the interval in milliseconds.
    pub fn as_millis(&self) -> i64 {
        self.as_secs() as i64 * 1000
    }

    /// Check if this is an intraday interval.
    pub fn is_intraday(&self) -> bool {
        !matches!(self, Interval::Day)
    }

    /// The exact string the Kite API expects.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Interval::Minute => "minute",
            Interval::Minute3 => "3minute",
            Interval::Minute5 => "5minute",
            Interval::Minute10 => "10minute",
            Interval::Minute15 => "15minute",
            Interval::Minute30 => "30minute",
            Interval::Minute60 => "60minute",
            Interval::Day => "day",
        }
    }

    /// Get all available intervals.
    pub fn all() -> &'static [Interval] {
        &[
            Interval::Minute,
            Interval::Minute3,
            Interval::Minute5,
            Interval::Minute10,
            Interval::Minute15,
            Interval::Minute30,
            Interval::Minute60,
            Interval::Day,
        ]
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_api_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minute" | "1minute" | "1m" => Ok(Interval::Minute),
            "3minute" | "3m" => Ok(Interval::Minute3),
            "5minute" | "5m" => Ok(Interval::Minute5),
            "10minute" | "10m" => Ok(Interval::Minute10),
            "15minute" | "15m" => Ok(Interval::Minute15),
            "30minute" | "30m" => Ok(Interval::Minute30),
            "60minute" | "60m" | "hour" | "1h" => Ok(Interval::Minute60),
            "day" | "daily" | "1d" => Ok(Interval::Day),
            _ => Err(format!("Invalid interval: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_duration() {
        assert_eq!(Interval::Minute.as_secs(), 60);
        assert_eq!(Interval::Minute5.as_secs(), 300);
        assert_eq!(Interval::Day.as_secs(), 86400);
    }

    #[test]
    fn test_interval_parse() {
        assert_eq!(Interval::from_str("5minute").unwrap(), Interval::Minute5);
        assert_eq!(Interval::from_str("5m").unwrap(), Interval::Minute5);
        assert_eq!(Interval::from_str("day").unwrap(), Interval::Day);
        assert!(Interval::from_str("fortnight").is_err());
    }

    #[test]
    fn test_interval_serde_uses_api_strings() {
        let json = serde_json::to_string(&Interval::Minute5).unwrap();
        assert_eq!(json, "\"5minute\"");

        let parsed: Interval = serde_json::from_str("\"day\"").unwrap();
        assert_eq!(parsed, Interval::Day);
    }

    #[test]
    fn test_is_intraday() {
        assert!(Interval::Minute5.is_intraday());
        assert!(!Interval::Day.is_intraday());
    }
}
