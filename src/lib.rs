//! A three-layer feedforward network trained by online backpropagation
//! with momentum.
//!
//! ```
//! use bp_net::{Network, NetworkConfig};
//!
//! let mut net = Network::new(&NetworkConfig::new(2, 3, 1).with_seed(1)).unwrap();
//! net.train(&[1.0, 0.0], &[1.0]).unwrap();
//! assert!(net.opt_err_sum() >= 0.0);
//! ```

pub mod activation;
pub mod error;
pub mod math;
pub mod network;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::init::WeightInit;
pub use math::matrix::Matrix;
pub use network::config::{HiddenDelta, NetworkConfig};
pub use network::network::Network;
pub use optim::momentum::Momentum;
pub use train::epoch_stats::EpochStats;
pub use train::trainer::train_epoch;
