use crate::activation::sigmoid_derivative;
use crate::math::matrix::Matrix;
use crate::network::config::HiddenDelta;

/// Output-layer error signal.
///
/// For every output unit `i >= 1`:
/// `delta[i] = out[i] * (1 - out[i]) * (target[i] - out[i])`.
/// Slot 0 is left untouched. Returns the L1 norm of the written deltas.
pub fn output_error(output: &[f64], target: &[f64], delta: &mut [f64]) -> f64 {
    let mut err_sum = 0.0;
    for i in 1..delta.len() {
        let o = output[i];
        delta[i] = sigmoid_derivative(o) * (target[i] - o);
        err_sum += delta[i].abs();
    }
    err_sum
}

/// Hidden-layer error signal, propagated back through `hid_opt_weights`.
///
/// For every hidden unit `i >= 1`, `sum = sum_j W[i][j] * out_delta[j]` over
/// all output slots (slot 0 is always zero) and
/// `hid_delta[i] = o * (1 - o) * sum`, where `o` is picked by `rule`.
/// Returns the L1 norm of the written deltas.
pub fn hidden_error(
    hidden: &[f64],
    hid_opt_weights: &Matrix,
    out_delta: &[f64],
    hid_delta: &mut [f64],
    rule: HiddenDelta,
) -> f64 {
    debug_assert_eq!(hid_opt_weights.shape(), (hid_delta.len(), out_delta.len()));
    let mut err_sum = 0.0;
    for i in 1..hid_delta.len() {
        let o = match rule {
            HiddenDelta::StaleDelta => hid_delta[i],
            HiddenDelta::Activation => hidden[i],
        };
        let sum: f64 = hid_opt_weights
            .row(i)
            .iter()
            .zip(out_delta)
            .map(|(w, d)| w * d)
            .sum();
        hid_delta[i] = sigmoid_derivative(o) * sum;
        err_sum += hid_delta[i].abs();
    }
    err_sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_output_error_skips_slot_zero() {
        let output = vec![0.9, 0.5, 0.25];
        let target = vec![0.0, 1.0, 0.0];
        let mut delta = vec![0.0; 3];
        let sum = output_error(&output, &target, &mut delta);
        assert_eq!(delta[0], 0.0);
        assert_eq!(delta[1], 0.5 * 0.5 * 0.5);
        assert_eq!(delta[2], 0.25 * 0.75 * -0.25);
        assert_eq!(sum, delta[1].abs() + delta[2].abs());
    }

    #[test]
    fn test_output_error_zero_when_on_target() {
        let output = vec![0.0, 0.3, 0.8];
        let mut delta = vec![0.0; 3];
        assert_eq!(output_error(&output, &output, &mut delta), 0.0);
        assert!(delta.iter().all(|&d| d == 0.0));
    }

    #[test]
    fn test_hidden_error_activation_rule() {
        let hidden = vec![1.0, 0.5, 0.2];
        let weights = Matrix::from_data(vec![
            vec![9.0, 9.0],
            vec![0.0, 2.0],
            vec![0.0, -1.0],
        ]);
        let out_delta = vec![0.0, 0.1];
        let mut hid_delta = vec![0.0; 3];
        let sum = hidden_error(
            &hidden,
            &weights,
            &out_delta,
            &mut hid_delta,
            HiddenDelta::Activation,
        );
        assert_eq!(hid_delta[0], 0.0);
        assert_abs_diff_eq!(hid_delta[1], 0.25 * 0.2, epsilon = 1e-15);
        assert_abs_diff_eq!(hid_delta[2], 0.2 * 0.8 * -0.1, epsilon = 1e-15);
        assert_abs_diff_eq!(sum, 0.05 + 0.016, epsilon = 1e-15);
    }

    #[test]
    fn test_hidden_error_stale_rule_reads_previous_delta() {
        let hidden = vec![1.0, 0.5];
        let weights = Matrix::from_data(vec![vec![0.0, 0.0], vec![0.0, 1.0]]);
        let out_delta = vec![0.0, 0.4];

        let mut hid_delta = vec![0.0, 0.0];
        let sum = hidden_error(
            &hidden,
            &weights,
            &out_delta,
            &mut hid_delta,
            HiddenDelta::StaleDelta,
        );
        assert_eq!(hid_delta[1], 0.0);
        assert_eq!(sum, 0.0);

        let mut hid_delta = vec![0.0, 0.5];
        hidden_error(&hidden, &weights, &out_delta, &mut hid_delta, HiddenDelta::StaleDelta);
        assert_abs_diff_eq!(hid_delta[1], 0.25 * 0.4, epsilon = 1e-15);
    }
}
