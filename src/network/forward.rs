use crate::activation::sigmoid;
use crate::math::matrix::Matrix;

/// Feeds `source` through `weights` into `dest`.
///
/// `source[0]` is forced to 1.0 first so the bias row of `weights` takes
/// part in every weighted sum. Every destination slot, index 0 included,
/// receives `sigmoid(sum_i weights[i][j] * source[i])`.
pub fn propagate(source: &mut [f64], dest: &mut [f64], weights: &Matrix) {
    debug_assert_eq!(weights.shape(), (source.len(), dest.len()));
    source[0] = 1.0;
    for (j, out) in dest.iter_mut().enumerate() {
        let sum: f64 = source
            .iter()
            .enumerate()
            .map(|(i, s)| weights[(i, j)] * s)
            .sum();
        *out = sigmoid(sum);
    }
}
