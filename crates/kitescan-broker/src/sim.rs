//! Simulated order gateway.

use async_trait::async_trait;
use chrono::Utc;
use kitescan_core::error::BrokerError;
use kitescan_core::traits::OrderGateway;
use kitescan_core::types::{OrderIntent, OrderRecord};
use tracing::info;

/// Gateway that fabricates order ids instead of placing orders.
///
/// Ids are derived from wall-clock seconds, so two orders within the
/// same second receive the same id. Known weakness, kept as-is.
#[derive(Debug, Clone, Default)]
pub struct SimGateway;

impl SimGateway {
    /// Create a simulated gateway.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OrderGateway for SimGateway {
    async fn place_market_order(&self, intent: &OrderIntent) -> Result<OrderRecord, BrokerError> {
        info!("SIMULATION: Order executed - {}", intent);
        Ok(OrderRecord::simulated(format!(
            "sim_order_{}",
            Utc::now().timestamp()
        )))
    }

    fn name(&self) -> &str {
        "simulation"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kitescan_core::types::SignalAction;

    #[tokio::test]
    async fn test_simulated_order() {
        let gateway = SimGateway::new();
        let intent = OrderIntent::nse("NIFTY50", SignalAction::Buy, 1);

        let record = gateway.place_market_order(&intent).await.unwrap();
        assert!(record.simulated);
        assert!(record.order_id.starts_with("sim_order_"));
    }
}
