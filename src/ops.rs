//! Math kernels over flat buffers.
//!
//! Every kernel works on the feature-major, sample-minor layout: the value
//! of feature `j` for sample `i` lives at `features[j * m + i]`.

/// Computes one batch of predictions from the current parameters.
///
/// For each sample `i` in `[0, m)`:
/// `out[i] = bias + sum_j weights[j] * features[j*m + i]`,
/// where `m = out.len()`.
pub fn forward_batch(weights: &[f64], bias: f64, features: &[f64], out: &mut [f64]) {
    let m = out.len();
    assert_eq!(features.len(), weights.len() * m, "features shape mismatch");

    for (i, pred) in out.iter_mut().enumerate() {
        let mut acc = bias;
        for (j, w) in weights.iter().enumerate() {
            acc += w * features[j * m + i];
        }
        *pred = acc;
    }
}

/// Accumulates the batch-averaged gradient of the squared-error loss.
///
/// Writes the weight gradient into `dw` and returns the bias gradient:
/// - `dw[j] = (1/m) * sum_i (predictions[i] - targets[i]) * features[j*m + i]`
/// - `db    = (1/m) * sum_i (predictions[i] - targets[i])`
pub fn backward_batch(
    features: &[f64],
    targets: &[f64],
    predictions: &[f64],
    dw: &mut [f64],
) -> f64 {
    let m = targets.len();
    assert_eq!(predictions.len(), m, "predictions shape mismatch");
    assert_eq!(features.len(), dw.len() * m, "features shape mismatch");
    assert!(m > 0, "batch must be non-empty");

    dw.fill(0.0);
    let mut db = 0.0;

    for i in 0..m {
        let error = predictions[i] - targets[i];
        for (j, g) in dw.iter_mut().enumerate() {
            *g += error * features[j * m + i];
        }
        db += error;
    }

    let scale = 1.0 / m as f64;
    for g in dw.iter_mut() {
        *g *= scale;
    }
    db * scale
}

/// Takes one gradient-descent step on `params`, in place.
pub fn descend(params: &mut [f64], grad: &[f64], learning_rate: f64) {
    for (p, g) in params.iter_mut().zip(grad) {
        *p -= learning_rate * g;
    }
}

/// Mean squared error of a batch of predictions.
pub fn mse(predictions: &[f64], targets: &[f64]) -> f64 {
    let sum: f64 = predictions
        .iter()
        .zip(targets)
        .map(|(p, y)| (p - y).powi(2))
        .sum();

    sum / predictions.len() as f64
}
