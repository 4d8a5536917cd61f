//! The per-instrument analysis pipeline shared by the scan and
//! dashboard commands.

use chrono::{DateTime, Duration, Utc};
use kitescan_broker::{KiteClient, SimGateway};
use kitescan_config::ScanConfig;
use kitescan_core::{
    error::ScanError,
    traits::{HistoricalSource, OrderGateway},
    types::{Analysis, BarSeries, OrderIntent},
};
use kitescan_data::FallbackSource;
use kitescan_signals::Analyzer;
use tracing::{error, info, warn};

/// Everything one analysis run needs: config, data source, order
/// gateway and the analyzer.
pub struct ScanContext {
    pub config: ScanConfig,
    source: FallbackSource<KiteClient>,
    gateway: Box<dyn OrderGateway>,
    analyzer: Analyzer,
}

impl ScanContext {
    /// Wire sources and gateways according to the simulation flag.
    ///
    /// A live client that cannot be constructed degrades to simulation,
    /// the same way a failing fetch does.
    pub fn build(config: ScanConfig) -> Self {
        let primary = if config.simulation_mode {
            None
        } else {
            if config.kite.is_placeholder() {
                warn!("Live mode is enabled but the Kite credentials are placeholders");
            }
            match KiteClient::new(&config.kite.api_key, &config.kite.access_token) {
                Ok(client) => {
                    info!("Kite client initialized successfully");
                    Some(client)
                }
                Err(e) => {
                    error!("Error initializing Kite client: {}", e);
                    None
                }
            }
        };

        let gateway: Box<dyn OrderGateway> = match &primary {
            Some(client) => Box::new(client.clone()),
            None => Box::new(SimGateway::new()),
        };

        let analyzer = Analyzer::new(config.analysis.rsi_period, config.rule.clone());

        Self {
            config,
            source: FallbackSource::new(primary),
            gateway,
            analyzer,
        }
    }

    /// Analyze every configured instrument.
    ///
    /// Per-instrument failures are logged and skipped; the run carries
    /// on with the remaining instruments.
    pub async fn scan_all(&self) -> Vec<(String, Analysis)> {
        let to = Utc::now();
        let from = to - Duration::days(self.config.analysis.duration_days);

        let mut results = Vec::new();
        for (name, token) in &self.config.instruments {
            match self.scan_one(token, from, to).await {
                Ok(analysis) => {
                    info!(
                        "{} - Signal: {}, Price: {:.2}, RSI: {:.2}",
                        name,
                        analysis
                            .action
                            .map(|a| a.to_string())
                            .unwrap_or_else(|| "None".to_string()),
                        analysis.last_price,
                        analysis.rsi
                    );
                    results.push((name.clone(), analysis));
                }
                Err(e) => error!("Analysis failed for {}: {}", name, e),
            }
        }
        results
    }

    async fn scan_one(
        &self,
        token: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Analysis, ScanError> {
        let bars = self
            .source
            .fetch_bars(token, self.config.analysis.interval, from, to)
            .await?;

        let mut series = BarSeries::new(token.to_string(), self.config.analysis.interval);
        series.extend(bars);

        self.analyzer.analyze(&series)
    }

    /// Dispatch a market order for a fired signal.
    ///
    /// Failures are logged and reported as `None`; nothing is retried.
    pub async fn execute_signal(
        &self,
        name: &str,
        analysis: &Analysis,
        quantity: u32,
    ) -> Option<String> {
        let action = analysis.action?;
        let intent = OrderIntent::nse(analysis.symbol.clone(), action, quantity);

        match self.gateway.place_market_order(&intent).await {
            Ok(record) => {
                info!(
                    "Executed {} order for {}. Order ID: {}",
                    action, name, record.order_id
                );
                Some(record.order_id)
            }
            Err(e) => {
                error!("Order execution failed: {}", e);
                None
            }
        }
    }
}
