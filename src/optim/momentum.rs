use crate::math::matrix::Matrix;

/// Gradient step with a momentum term carried in a history matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Momentum {
    pub eta: f64,
    pub momentum: f64,
}

impl Momentum {
    pub fn new(eta: f64, momentum: f64) -> Momentum {
        Momentum { eta, momentum }
    }

    /// Applies one update to `weights` (shape `layer.len() x delta.len()`).
    ///
    /// `layer[0]` is forced to 1.0. For every delta slot `i >= 1` and every
    /// layer slot `j`:
    ///
    /// ```text
    /// u = momentum * prev[j][i] + eta * delta[i] * layer[j]
    /// weights[j][i] += u
    /// prev[j][i] = u
    /// ```
    ///
    /// Column 0 of `weights` is never touched.
    pub fn step(&self, delta: &[f64], layer: &mut [f64], weights: &mut Matrix, prev: &mut Matrix) {
        debug_assert_eq!(weights.shape(), (layer.len(), delta.len()));
        debug_assert_eq!(weights.shape(), prev.shape());
        layer[0] = 1.0;
        for i in 1..delta.len() {
            for (j, &activation) in layer.iter().enumerate() {
                let update = self.momentum * prev[(j, i)] + self.eta * delta[i] * activation;
                weights[(j, i)] += update;
                prev[(j, i)] = update;
            }
        }
    }
}
