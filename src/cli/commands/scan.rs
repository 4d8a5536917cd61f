//! One-shot scan command implementation.

use anyhow::Result;
use kitescan_config::ScanConfig;

use crate::cli::ScanArgs;
use crate::pipeline::ScanContext;

pub async fn run(args: ScanArgs, config: ScanConfig) -> Result<()> {
    let ctx = ScanContext::build(config);

    println!(
        "Mode: {}",
        if ctx.config.simulation_mode {
            "Simulation"
        } else {
            "Live Trading"
        }
    );

    let reports = ctx.scan_all().await;
    if reports.is_empty() {
        println!("No instrument produced a result; see the log for details.");
        return Ok(());
    }

    for (name, analysis) in &reports {
        let action = analysis
            .action
            .map(|a| a.to_string())
            .unwrap_or_else(|| "None".to_string());
        println!(
            "{} - Signal: {}, Price: {:.2}, RSI: {:.2}",
            name, action, analysis.last_price, analysis.rsi
        );
        println!("  Fib: [{}]", analysis.fib);

        if args.execute && analysis.action.is_some() {
            match ctx.execute_signal(name, analysis, args.quantity).await {
                Some(order_id) => println!("  Order placed: {}", order_id),
                None => println!("  Order failed; see the log for details."),
            }
        }
    }

    Ok(())
}
