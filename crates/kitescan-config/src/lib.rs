//! Configuration management.
//!
//! The config lives in a JSON file that is auto-created with placeholder
//! values on first run, then loaded with environment overrides layered
//! on top.

mod settings;

pub use settings::{AnalysisSettings, KiteCredentials, LoggingSettings, ScanConfig};

use config::{Config, Environment, File, FileFormat};
use kitescan_core::error::ScanError;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load configuration, creating a default file if none exists.
pub fn load_or_create(path: &Path) -> Result<ScanConfig, ScanError> {
    if !path.exists() {
        let json = serde_json::to_string_pretty(&ScanConfig::default())
            .map_err(|e| ScanError::Serialization(e.to_string()))?;
        fs::write(path, json)?;
        info!("Created default configuration at {}", path.display());
    }

    let config = Config::builder()
        .add_source(File::from(path).format(FileFormat::Json).required(true))
        .add_source(
            Environment::with_prefix("KITESCAN")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| ScanError::Config(e.to_string()))?;

    let config: ScanConfig = config
        .try_deserialize()
        .map_err(|e| ScanError::Config(e.to_string()))?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        assert!(!path.exists());

        let config = load_or_create(&path).unwrap();
        assert!(path.exists());
        assert!(config.simulation_mode);
        assert!(config.kite.is_placeholder());
        assert_eq!(config.analysis.rsi_period, 14);

        // Documented schema on disk
        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["kite"]["api_key"], "YOUR_KITE_API_KEY");
        assert_eq!(raw["kite"]["api_secret"], "YOUR_KITE_API_SECRET");
        assert_eq!(raw["kite"]["access_token"], "YOUR_ACCESS_TOKEN");
        assert_eq!(raw["instruments"]["NIFTY"], "NIFTY50");
        assert_eq!(raw["instruments"]["BANKNIFTY"], "BANKNIFTY");
        assert_eq!(raw["analysis"]["rsi_period"], 14);
        assert_eq!(raw["analysis"]["interval"], "5minute");
        assert_eq!(raw["analysis"]["duration_days"], 1);
        assert_eq!(raw["simulation_mode"], true);
    }

    #[test]
    fn test_loads_minimal_legacy_file() {
        // A hand-written file without the rule and logging sections
        // still loads; both fall back to defaults.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "kite": {
                    "api_key": "k",
                    "api_secret": "s",
                    "access_token": "t"
                },
                "instruments": { "NIFTY": "256265" },
                "analysis": {
                    "rsi_period": 9,
                    "interval": "15minute",
                    "duration_days": 3
                },
                "simulation_mode": false
            }"#,
        )
        .unwrap();

        let config = load_or_create(&path).unwrap();
        assert!(!config.simulation_mode);
        assert!(!config.kite.is_placeholder());
        assert_eq!(config.analysis.rsi_period, 9);
        assert_eq!(config.instruments["NIFTY"], "256265");
        assert_eq!(config.rule.buy_rsi_below, 50.0);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "analysis": { "rsi_period": 1, "interval": "5minute", "duration_days": 1 } }"#,
        )
        .unwrap();

        assert!(matches!(
            load_or_create(&path),
            Err(ScanError::Config(_))
        ));
    }

    #[test]
    fn test_reload_is_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let first = load_or_create(&path).unwrap();
        let second = load_or_create(&path).unwrap();
        assert_eq!(first.analysis.rsi_period, second.analysis.rsi_period);
        assert_eq!(first.instruments, second.instruments);
    }
}
