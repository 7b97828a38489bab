//! Mini-batch gradient descent primitives.

use ndarray::{Array1, ArrayView1, ArrayView2};

/// Logistic function, mapping any real to `(0, 1)`.
#[inline]
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Compute `sigmoid(features · weights)` for every row.
///
/// `features` must already be standardized and bias-augmented, so its
/// column count equals the weight count.
pub fn predict_probabilities(
    features: ArrayView2<'_, f64>,
    weights: ArrayView1<'_, f64>,
) -> Array1<f64> {
    features.dot(&weights).mapv(sigmoid)
}

/// One gradient-descent update on a batch, mutating `weights` in place.
///
/// The gradient of the cross-entropy cost with respect to the weights is
/// `featuresᵗ · (sigmoid(features · weights) − labels) / batch_rows`;
/// the update subtracts `learning_rate` times that vector.
pub fn gradient_step(
    weights: &mut Array1<f64>,
    features: ArrayView2<'_, f64>,
    labels: ArrayView1<'_, f64>,
    learning_rate: f64,
) {
    debug_assert_eq!(features.ncols(), weights.len());
    debug_assert_eq!(features.nrows(), labels.len());

    let predictions = predict_probabilities(features, weights.view());
    let difference = &predictions - &labels;
    let gradient = features.t().dot(&difference) / features.nrows() as f64;
    weights.scaled_add(-learning_rate, &gradient);
}
