//! Configuration structures.

use kitescan_core::error::ScanError;
use kitescan_core::types::Interval;
use kitescan_signals::RuleConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main scanner configuration, persisted as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    #[serde(default)]
    pub kite: KiteCredentials,
    /// Display name -> instrument token/symbol
    #[serde(default = "default_instruments")]
    pub instruments: BTreeMap<String, String>,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub rule: RuleConfig,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default = "default_simulation_mode")]
    pub simulation_mode: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            kite: KiteCredentials::default(),
            instruments: default_instruments(),
            analysis: AnalysisSettings::default(),
            rule: RuleConfig::default(),
            logging: LoggingSettings::default(),
            simulation_mode: default_simulation_mode(),
        }
    }
}

impl ScanConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ScanError> {
        if self.analysis.rsi_period < 2 {
            return Err(ScanError::Config("rsi_period must be at least 2".into()));
        }
        if self.analysis.duration_days < 1 {
            return Err(ScanError::Config("duration_days must be at least 1".into()));
        }
        if self.instruments.is_empty() {
            return Err(ScanError::Config(
                "At least one instrument is required".into(),
            ));
        }
        self.rule.validate()
    }
}

fn default_instruments() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("NIFTY".to_string(), "NIFTY50".to_string()),
        ("BANKNIFTY".to_string(), "BANKNIFTY".to_string()),
    ])
}

fn default_simulation_mode() -> bool {
    true
}

/// Kite Connect credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KiteCredentials {
    pub api_key: String,
    pub api_secret: String,
    pub access_token: String,
}

impl Default for KiteCredentials {
    fn default() -> Self {
        Self {
            api_key: "YOUR_KITE_API_KEY".to_string(),
            api_secret: "YOUR_KITE_API_SECRET".to_string(),
            access_token: "YOUR_ACCESS_TOKEN".to_string(),
        }
    }
}

impl KiteCredentials {
    /// Whether the credentials still hold the generated placeholders.
    pub fn is_placeholder(&self) -> bool {
        self.api_key.starts_with("YOUR_") || self.access_token.starts_with("YOUR_")
    }
}

/// Analysis parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    pub rsi_period: usize,
    pub interval: Interval,
    pub duration_days: i64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            interval: Interval::Minute5,
            duration_days: 1,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub dir: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
        }
    }
}
