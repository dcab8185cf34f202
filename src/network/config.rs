use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::init::WeightInit;

pub const DEFAULT_ETA: f64 = 0.998;
pub const DEFAULT_MOMENTUM: f64 = 0.001;

/// Which value plays the role of `o` in the hidden-layer error
/// `delta_hid[i] = o * (1 - o) * sum`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HiddenDelta {
    /// `o` is the hidden delta left over from the previous call. Since the
    /// delta vector starts at zero, hidden deltas stay zero under this rule
    /// and the input-to-hidden weights only move through momentum.
    #[default]
    StaleDelta,
    /// `o` is the hidden activation (textbook backpropagation).
    Activation,
}

/// Sizes and hyperparameters of a three-layer network.
///
/// Sizes are semantic sizes; each layer vector carries one extra bias slot
/// at index 0. `eta` and `momentum` are fixed once the network is built.
///
/// # Example
///
/// ```json
/// {
///   "input_size": 2,
///   "hidden_size": 3,
///   "output_size": 1,
///   "eta": 0.5,
///   "hidden_delta": "activation",
///   "seed": 7
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    /// Learning rate.
    #[serde(default = "default_eta")]
    pub eta: f64,
    /// Fraction of the previous update carried into the next one.
    #[serde(default = "default_momentum")]
    pub momentum: f64,
    #[serde(default)]
    pub hidden_delta: HiddenDelta,
    #[serde(default)]
    pub init: WeightInit,
    /// Seed for weight initialization; entropy is used when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_eta() -> f64 {
    DEFAULT_ETA
}

fn default_momentum() -> f64 {
    DEFAULT_MOMENTUM
}

impl NetworkConfig {
    /// Config with default hyperparameters (`eta = 0.998`, `momentum = 0.001`).
    pub fn new(input_size: usize, hidden_size: usize, output_size: usize) -> NetworkConfig {
        NetworkConfig {
            input_size,
            hidden_size,
            output_size,
            eta: DEFAULT_ETA,
            momentum: DEFAULT_MOMENTUM,
            hidden_delta: HiddenDelta::default(),
            init: WeightInit::default(),
            seed: None,
        }
    }

    pub fn with_eta(mut self, eta: f64) -> Self {
        self.eta = eta;
        self
    }

    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_hidden_delta(mut self, rule: HiddenDelta) -> Self {
        self.hidden_delta = rule;
        self
    }

    pub fn with_init(mut self, init: WeightInit) -> Self {
        self.init = init;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("output_size", self.output_size),
        ];
        for (name, size) in sizes {
            if size == 0 {
                return Err(Error::InvalidConfig(format!("{name} must be positive")));
            }
        }
        let (i, h, o) = match (
            self.input_size.checked_add(1),
            self.hidden_size.checked_add(1),
            self.output_size.checked_add(1),
        ) {
            (Some(i), Some(h), Some(o)) => (i, h, o),
            _ => return Err(Error::InvalidConfig("layer size too large".into())),
        };
        // Each weight matrix and its history is one f64 buffer.
        let max_cells = isize::MAX as usize / std::mem::size_of::<f64>();
        for (name, rows, cols) in [("input-to-hidden", i, h), ("hidden-to-output", h, o)] {
            match rows.checked_mul(cols) {
                Some(cells) if cells <= max_cells => {}
                _ => {
                    return Err(Error::InvalidConfig(format!(
                        "{name} weight matrix {rows}x{cols} is too large"
                    )))
                }
            }
        }
        if !self.eta.is_finite() {
            return Err(Error::InvalidConfig("eta must be finite".into()));
        }
        if !self.momentum.is_finite() {
            return Err(Error::InvalidConfig("momentum must be finite".into()));
        }
        Ok(())
    }

    /// Reads and validates a config from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: NetworkConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the config as pretty-printed JSON.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
