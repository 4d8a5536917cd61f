//! Dashboard command implementation.

use anyhow::Result;
use kitescan_config::ScanConfig;
use kitescan_monitor::Dashboard;

use crate::cli::DashboardArgs;
use crate::pipeline::ScanContext;

pub async fn run(args: DashboardArgs, config: ScanConfig) -> Result<()> {
    let simulation_mode = config.simulation_mode;
    let ctx = ScanContext::build(config);
    let dashboard = Dashboard::new(args.refresh_ms, simulation_mode);

    // The TUI owns its thread; scans are driven synchronously from the
    // event loop and block the interface while they run.
    let handle = tokio::runtime::Handle::current();
    tokio::task::spawn_blocking(move || {
        dashboard.run(move || handle.block_on(ctx.scan_all()))
    })
    .await??;

    Ok(())
}
