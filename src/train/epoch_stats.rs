use serde::{Deserialize, Serialize};

/// Summary of one pass produced by `train_epoch`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// Number of samples trained on.
    pub samples: usize,
    /// Mean `opt_err_sum` over the pass.
    pub mean_opt_err: f64,
    /// Mean `hid_err_sum` over the pass.
    pub mean_hid_err: f64,
}
