//! Evaluation metrics.
//!
//! Metrics are separate from the gradient-descent update — the cost is
//! tracked over the full training set once per epoch, while accuracy is
//! computed on whatever set the caller evaluates against.

use ndarray::ArrayView1;

/// Binary cross-entropy: `-(1/n) * [yᵗ·ln(p) + (1-y)ᵗ·ln(1-p)]`.
///
/// Lower is better. `predictions` must be probabilities; `labels` must
/// be 0/1.
///
/// Predictions are *not* clamped away from 0 and 1: a saturated
/// prediction makes a log term non-finite and the returned cost is then
/// `inf` or NaN. That is an accepted failure mode of the algorithm (it
/// shows up when the adaptive learning rate grows unbounded) and is left
/// visible to the caller rather than papered over.
pub fn log_loss(predictions: ArrayView1<'_, f64>, labels: ArrayView1<'_, f64>) -> f64 {
    debug_assert_eq!(predictions.len(), labels.len());

    let n = predictions.len() as f64;
    let log_p = predictions.mapv(f64::ln);
    let log_one_minus_p = predictions.mapv(|p| (1.0 - p).ln());
    let complement = labels.mapv(|y| 1.0 - y);

    -(labels.dot(&log_p) + complement.dot(&log_one_minus_p)) / n
}

/// Fraction of matching 0/1 predictions, in `[0, 1]`.
///
/// Mismatches are counted as the summed absolute difference between the
/// two label columns, which equals the mismatch count when both sides
/// are 0/1.
pub fn accuracy(predictions: ArrayView1<'_, f64>, labels: ArrayView1<'_, f64>) -> f64 {
    debug_assert_eq!(predictions.len(), labels.len());

    let n = predictions.len() as f64;
    let mismatches: f64 = predictions
        .iter()
        .zip(labels.iter())
        .map(|(p, y)| (p - y).abs())
        .sum();
    (n - mismatches) / n
}
