//! Order gateway trait definition.

use crate::error::BrokerError;
use crate::types::{OrderIntent, OrderRecord};
use async_trait::async_trait;

/// Trait for order dispatch.
///
/// A gateway either forwards the intent to a broker or fabricates a
/// simulated record; it never retries.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Place a market order.
    ///
    /// # Returns
    /// The order record on acceptance. Failures are reported as errors;
    /// callers log them and continue without an order id.
    async fn place_market_order(&self, intent: &OrderIntent) -> Result<OrderRecord, BrokerError>;

    /// Get the gateway name.
    fn name(&self) -> &str;
}
