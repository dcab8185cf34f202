use tracing::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::network::backward::{hidden_error, output_error};
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;

impl Network {
    /// Trains on a single labelled example.
    ///
    /// `example` must hold exactly `input_size` values; `target` at least
    /// `output_size` (extra values are ignored). Both are checked before
    /// anything is written, so a `SizeMismatch` leaves the network as it was.
    ///
    /// One call runs the forward pass, computes the output then hidden error
    /// signals, and updates the hidden-to-output weights followed by the
    /// input-to-hidden weights.
    pub fn train(&mut self, example: &[f64], target: &[f64]) -> Result<()> {
        self.check_example(example)?;
        self.check_target(target)?;
        self.load_input(example);
        self.load_target(target);

        self.forward();

        self.opt_err_sum = output_error(&self.output, &self.target, &mut self.opt_delta);
        self.hid_err_sum = hidden_error(
            &self.hidden,
            &self.hid_opt_weights,
            &self.opt_delta,
            &mut self.hid_delta,
            self.hidden_rule,
        );

        // Both deltas are final before either matrix moves.
        self.optimizer.step(
            &self.opt_delta,
            &mut self.hidden,
            &mut self.hid_opt_weights,
            &mut self.hid_opt_prev,
        );
        self.optimizer.step(
            &self.hid_delta,
            &mut self.input,
            &mut self.ipt_hid_weights,
            &mut self.ipt_hid_prev,
        );

        if !self.opt_err_sum.is_finite() || !self.hid_err_sum.is_finite() {
            warn!(
                opt_err_sum = self.opt_err_sum,
                hid_err_sum = self.hid_err_sum,
                "error signal is no longer finite"
            );
        }
        trace!(opt_err_sum = self.opt_err_sum, hid_err_sum = self.hid_err_sum, "trained example");
        Ok(())
    }
}

/// One online pass over `inputs`/`targets`, in order.
///
/// Calls [`Network::train`] once per sample and returns the mean error sums
/// over the pass. Stops at the first sample that fails validation; samples
/// before it have already been applied.
pub fn train_epoch(
    network: &mut Network,
    inputs: &[Vec<f64>],
    targets: &[Vec<f64>],
) -> Result<EpochStats> {
    if inputs.len() != targets.len() {
        return Err(Error::InvalidConfig(format!(
            "{} inputs but {} targets",
            inputs.len(),
            targets.len()
        )));
    }

    let mut stats = EpochStats {
        samples: inputs.len(),
        ..EpochStats::default()
    };
    for (input, target) in inputs.iter().zip(targets) {
        network.train(input, target)?;
        stats.mean_opt_err += network.opt_err_sum();
        stats.mean_hid_err += network.hid_err_sum();
    }
    if stats.samples > 0 {
        stats.mean_opt_err /= stats.samples as f64;
        stats.mean_hid_err /= stats.samples as f64;
    }

    debug!(
        samples = stats.samples,
        mean_opt_err = stats.mean_opt_err,
        mean_hid_err = stats.mean_hid_err,
        "epoch complete"
    );
    Ok(stats)
}
