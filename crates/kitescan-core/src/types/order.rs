//! Order intent and record types.

use serde::{Deserialize, Serialize};

use super::SignalAction;

/// Intent to place a market order for an instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderIntent {
    /// Trading symbol as the broker knows it
    pub tradingsymbol: String,
    /// Exchange segment
    pub exchange: String,
    /// Buy or sell
    pub action: SignalAction,
    /// Quantity in units
    pub quantity: u32,
}

impl OrderIntent {
    /// Create a market order intent on the NSE segment.
    pub fn nse(tradingsymbol: impl Into<String>, action: SignalAction, quantity: u32) -> Self {
        Self {
            tradingsymbol: tradingsymbol.into(),
            exchange: "NSE".to_string(),
            action,
            quantity,
        }
    }
}

impl std::fmt::Display for OrderIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} @ {}",
            self.action, self.quantity, self.tradingsymbol, self.exchange
        )
    }
}

/// Identifier returned by an order gateway.
///
/// Not persisted anywhere; only logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Broker (or fabricated) order id
    pub order_id: String,
    /// Whether the order was simulated rather than placed
    pub simulated: bool,
}

impl OrderRecord {
    /// Record for a simulated order.
    pub fn simulated(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            simulated: true,
        }
    }

    /// Record for a live order.
    pub fn live(order_id: impl Into<String>) -> Self {
        Self {
            order_id: order_id.into(),
            simulated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_display() {
        let intent = OrderIntent::nse("NIFTY50", SignalAction::Buy, 1);
        assert_eq!(intent.to_string(), "BUY 1 NIFTY50 @ NSE");
        assert_eq!(intent.exchange, "NSE");
    }

    #[test]
    fn test_record_constructors() {
        assert!(OrderRecord::simulated("sim_order_1").simulated);
        assert!(!OrderRecord::live("240101000001").simulated);
    }
}
