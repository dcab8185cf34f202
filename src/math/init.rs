use rand::distributions::Open01;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::math::matrix::Matrix;

/// How a fresh weight matrix is filled. Both schemes stay inside (-1, 1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightInit {
    /// Magnitude from one uniform draw in [0, 1), sign from a second,
    /// independent draw (negative when that draw is <= 0.5).
    #[default]
    SignedMagnitude,
    /// A single uniform draw over the open interval (-1, 1).
    Symmetric,
}

impl WeightInit {
    /// Overwrites every cell of `matrix`.
    pub fn fill<R: Rng + ?Sized>(&self, matrix: &mut Matrix, rng: &mut R) {
        for cell in matrix.data.iter_mut() {
            *cell = self.sample(rng);
        }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self {
            WeightInit::SignedMagnitude => {
                let magnitude: f64 = rng.gen();
                if rng.gen::<f64>() > 0.5 {
                    magnitude
                } else {
                    -magnitude
                }
            }
            WeightInit::Symmetric => {
                let u: f64 = rng.sample(Open01);
                u * 2.0 - 1.0
            }
        }
    }
}
