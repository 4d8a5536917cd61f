//! Validate configuration command.

use anyhow::Result;
use kitescan_config::ScanConfig;
use std::path::Path;

pub async fn run(config_path: &Path, config: ScanConfig) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    println!("Configuration is valid!");
    println!();
    println!("Simulation mode: {}", config.simulation_mode);
    println!("Instruments:");
    for (name, token) in &config.instruments {
        println!("  {} -> {}", name, token);
    }
    println!("RSI period: {}", config.analysis.rsi_period);
    println!("Interval: {}", config.analysis.interval);
    println!("Duration: {} day(s)", config.analysis.duration_days);
    println!(
        "Rule: BUY below RSI {}, SELL above RSI {}, proximity {:.1}%",
        config.rule.buy_rsi_below,
        config.rule.sell_rsi_above,
        config.rule.proximity * 100.0
    );
    println!("Log level: {}", config.logging.level);

    if !config.simulation_mode && config.kite.is_placeholder() {
        println!();
        println!("Warning: live mode is enabled but the Kite credentials are placeholders.");
    }

    Ok(())
}
