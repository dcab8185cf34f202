use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;
use crate::network::config::{HiddenDelta, NetworkConfig};
use crate::network::forward::propagate;
use crate::optim::momentum::Momentum;

/// A three-layer network trained one example at a time.
///
/// Every layer vector is one slot longer than its semantic size; slot 0 is
/// the bias unit. Weight and momentum-history matrices are laid out
/// `[src][dst]` and include the bias row and column.
#[derive(Debug, Clone)]
pub struct Network {
    pub(crate) input: Vec<f64>,
    pub(crate) hidden: Vec<f64>,
    pub(crate) output: Vec<f64>,
    pub(crate) target: Vec<f64>,

    pub(crate) hid_delta: Vec<f64>,
    pub(crate) opt_delta: Vec<f64>,

    pub(crate) ipt_hid_weights: Matrix,
    pub(crate) hid_opt_weights: Matrix,
    pub(crate) ipt_hid_prev: Matrix,
    pub(crate) hid_opt_prev: Matrix,

    pub(crate) optimizer: Momentum,
    pub(crate) hidden_rule: HiddenDelta,

    pub(crate) opt_err_sum: f64,
    pub(crate) hid_err_sum: f64,
}

impl Network {
    /// Builds a network and fills both weight matrices from `config.init`.
    ///
    /// The generator is seeded from `config.seed` when present and dropped
    /// once the weights are drawn.
    pub fn new(config: &NetworkConfig) -> Result<Network> {
        config.validate()?;
        let mut network = Network::zeroed(config);
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        config.init.fill(&mut network.ipt_hid_weights, &mut rng);
        config.init.fill(&mut network.hid_opt_weights, &mut rng);

        debug!(
            input = config.input_size,
            hidden = config.hidden_size,
            output = config.output_size,
            eta = config.eta,
            momentum = config.momentum,
            hidden_delta = ?config.hidden_delta,
            init = ?config.init,
            "network initialized"
        );
        Ok(network)
    }

    /// Shorthand for a randomly initialized network with default
    /// hyperparameters.
    pub fn with_defaults(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
    ) -> Result<Network> {
        Network::new(&NetworkConfig::new(input_size, hidden_size, output_size))
    }

    /// Builds a network around caller-supplied weights.
    ///
    /// `ipt_hid` must be `(input_size + 1) x (hidden_size + 1)` and `hid_opt`
    /// `(hidden_size + 1) x (output_size + 1)`. `config.init` and
    /// `config.seed` are ignored.
    pub fn from_weights(
        config: &NetworkConfig,
        ipt_hid: Matrix,
        hid_opt: Matrix,
    ) -> Result<Network> {
        config.validate()?;
        let mut network = Network::zeroed(config);
        for (name, given, expected) in [
            ("input-to-hidden", &ipt_hid, &network.ipt_hid_weights),
            ("hidden-to-output", &hid_opt, &network.hid_opt_weights),
        ] {
            if given.shape() != expected.shape() {
                return Err(Error::InvalidConfig(format!(
                    "{name} weights must be {:?}, got {:?}",
                    expected.shape(),
                    given.shape()
                )));
            }
        }
        network.ipt_hid_weights = ipt_hid;
        network.hid_opt_weights = hid_opt;
        Ok(network)
    }

    /// `config` must already have passed `validate`, which bounds every
    /// size below.
    fn zeroed(config: &NetworkConfig) -> Network {
        let (i, h, o) = (
            config.input_size + 1,
            config.hidden_size + 1,
            config.output_size + 1,
        );
        Network {
            input: vec![0.0; i],
            hidden: vec![0.0; h],
            output: vec![0.0; o],
            target: vec![0.0; o],
            hid_delta: vec![0.0; h],
            opt_delta: vec![0.0; o],
            ipt_hid_weights: Matrix::zeros(i, h),
            hid_opt_weights: Matrix::zeros(h, o),
            ipt_hid_prev: Matrix::zeros(i, h),
            hid_opt_prev: Matrix::zeros(h, o),
            optimizer: Momentum::new(config.eta, config.momentum),
            hidden_rule: config.hidden_delta,
            opt_err_sum: 0.0,
            hid_err_sum: 0.0,
        }
    }

    /// Runs a forward pass only and returns the output (bias slot excluded).
    ///
    /// Activations are overwritten; weights, deltas and error sums are not.
    pub fn predict(&mut self, example: &[f64]) -> Result<Vec<f64>> {
        self.check_example(example)?;
        self.load_input(example);
        self.forward();
        Ok(self.output().to_vec())
    }

    pub(crate) fn check_example(&self, example: &[f64]) -> Result<()> {
        if example.len() != self.input_size() {
            return Err(Error::SizeMismatch {
                what: "example",
                expected: self.input_size(),
                actual: example.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn check_target(&self, target: &[f64]) -> Result<()> {
        if target.len() < self.output_size() {
            return Err(Error::SizeMismatch {
                what: "target",
                expected: self.output_size(),
                actual: target.len(),
            });
        }
        Ok(())
    }

    pub(crate) fn load_input(&mut self, example: &[f64]) {
        self.input[1..].copy_from_slice(example);
    }

    /// Copies the first `output_size` values; any extra values are ignored.
    pub(crate) fn load_target(&mut self, target: &[f64]) {
        let n = self.output_size();
        self.target[1..].copy_from_slice(&target[..n]);
    }

    pub(crate) fn forward(&mut self) {
        propagate(&mut self.input, &mut self.hidden, &self.ipt_hid_weights);
        propagate(&mut self.hidden, &mut self.output, &self.hid_opt_weights);
    }

    pub fn input_size(&self) -> usize {
        self.input.len() - 1
    }

    pub fn hidden_size(&self) -> usize {
        self.hidden.len() - 1
    }

    pub fn output_size(&self) -> usize {
        self.output.len() - 1
    }

    pub fn eta(&self) -> f64 {
        self.optimizer.eta
    }

    pub fn momentum(&self) -> f64 {
        self.optimizer.momentum
    }

    pub fn hidden_delta_rule(&self) -> HiddenDelta {
        self.hidden_rule
    }

    /// Latest network output without the bias slot.
    pub fn output(&self) -> &[f64] {
        &self.output[1..]
    }

    /// Input layer vector, bias slot included.
    pub fn input_layer(&self) -> &[f64] {
        &self.input
    }

    /// Hidden layer vector, bias slot included.
    pub fn hidden_layer(&self) -> &[f64] {
        &self.hidden
    }

    /// Output layer vector, slot 0 included.
    pub fn output_layer(&self) -> &[f64] {
        &self.output
    }

    pub fn output_delta(&self) -> &[f64] {
        &self.opt_delta
    }

    pub fn hidden_delta(&self) -> &[f64] {
        &self.hid_delta
    }

    pub fn ipt_hid_weights(&self) -> &Matrix {
        &self.ipt_hid_weights
    }

    pub fn hid_opt_weights(&self) -> &Matrix {
        &self.hid_opt_weights
    }

    /// Previous updates applied to the input-to-hidden weights.
    pub fn ipt_hid_momentum(&self) -> &Matrix {
        &self.ipt_hid_prev
    }

    /// Previous updates applied to the hidden-to-output weights.
    pub fn hid_opt_momentum(&self) -> &Matrix {
        &self.hid_opt_prev
    }

    /// L1 norm of the output deltas from the most recent `train` call.
    pub fn opt_err_sum(&self) -> f64 {
        self.opt_err_sum
    }

    /// L1 norm of the hidden deltas from the most recent `train` call.
    pub fn hid_err_sum(&self) -> f64 {
        self.hid_err_sum
    }
}
