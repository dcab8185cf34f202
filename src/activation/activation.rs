/// Logistic sigmoid: 1 / (1 + e^-x).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Sigmoid slope expressed in terms of an already-activated value `o`.
pub fn sigmoid_derivative(o: f64) -> f64 {
    o * (1.0 - o)
}
