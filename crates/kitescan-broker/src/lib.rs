//! Broker integrations: the Kite Connect client and the simulated
//! order gateway.

mod kite;
mod sim;

pub use kite::KiteClient;
pub use sim::SimGateway;
