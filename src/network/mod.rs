pub mod backward;
pub mod config;
pub mod forward;
pub mod network;

pub use config::{HiddenDelta, NetworkConfig};
pub use network::Network;
