//! Feature standardization with fit-once moments.
//!
//! The per-column mean and variance are computed from the *first* batch of
//! data the standardizer sees (the training features) and are then frozen
//! for the lifetime of the instance. Prediction-time inputs are rescaled
//! with the stored moments so they land in the same space the model was
//! trained in.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

/// Per-column mean and variance, computed once from training data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moments {
    /// Column means, `[n_features]`.
    pub mean: Array1<f64>,
    /// Population variances (ddof = 0), `[n_features]`.
    pub variance: Array1<f64>,
}

/// Rescales features to zero mean and unit variance.
///
/// A constant column has zero variance; standardizing it divides by zero
/// and produces non-finite values. That degeneracy is propagated rather
/// than corrected, matching the behavior of the cost computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Standardizer {
    moments: Option<Moments>,
}

impl Standardizer {
    /// Create an unfitted standardizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether moments have been computed.
    #[inline]
    pub fn is_fitted(&self) -> bool {
        self.moments.is_some()
    }

    /// Stored moments, if fitted.
    pub fn moments(&self) -> Option<&Moments> {
        self.moments.as_ref()
    }

    /// Compute moments from `features`, store them, and return the
    /// standardized matrix.
    ///
    /// If moments already exist they are reused unchanged, so repeated
    /// calls behave exactly like [`transform`](Self::transform).
    ///
    /// # Panics
    ///
    /// Panics if the standardizer is unfitted and `features` has zero
    /// rows, since no moments can be computed.
    pub fn fit_transform(&mut self, features: ArrayView2<'_, f64>) -> Array2<f64> {
        if self.moments.is_none() {
            let mean = features
                .mean_axis(Axis(0))
                .expect("fit requires at least one row");
            let variance = features.var_axis(Axis(0), 0.0);
            self.moments = Some(Moments { mean, variance });
        }
        self.transform(features)
    }

    /// Apply `(x - mean) / sqrt(variance)` column-wise using the stored
    /// moments. Moments are never recomputed here.
    ///
    /// # Panics
    ///
    /// Panics if the standardizer has not been fitted.
    pub fn transform(&self, features: ArrayView2<'_, f64>) -> Array2<f64> {
        let moments = self
            .moments
            .as_ref()
            .expect("transform called before fit_transform");
        let std_dev = moments.variance.mapv(f64::sqrt);
        (&features - &moments.mean) / &std_dev
    }

    /// Mutable access to the stored moments, for tests that verify the
    /// moments are reused rather than recomputed.
    #[cfg(test)]
    pub(crate) fn moments_mut(&mut self) -> Option<&mut Moments> {
        self.moments.as_mut()
    }
}

/// Prepend a constant `1.0` bias column to every row.
///
/// The returned matrix has one more column than the input; column 0 is
/// all ones.
pub fn with_bias_column(features: ArrayView2<'_, f64>) -> Array2<f64> {
    let (rows, cols) = features.dim();
    let mut augmented = Array2::ones((rows, cols + 1));
    augmented
        .slice_mut(ndarray::s![.., 1..])
        .assign(&features);
    augmented
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn fit_computes_population_moments() {
        let features = array![[1.0, 10.0], [3.0, 30.0]];
        let mut scaler = Standardizer::new();
        scaler.fit_transform(features.view());

        let moments = scaler.moments().unwrap();
        assert_abs_diff_eq!(moments.mean[0], 2.0);
        assert_abs_diff_eq!(moments.mean[1], 20.0);
        // Population variance: mean of squared deviations.
        assert_abs_diff_eq!(moments.variance[0], 1.0);
        assert_abs_diff_eq!(moments.variance[1], 100.0);
    }

    #[test]
    fn transform_standardizes_columns() {
        let features = array![[1.0, 10.0], [3.0, 30.0]];
        let mut scaler = Standardizer::new();
        let scaled = scaler.fit_transform(features.view());

        assert_abs_diff_eq!(scaled[[0, 0]], -1.0);
        assert_abs_diff_eq!(scaled[[1, 0]], 1.0);
        assert_abs_diff_eq!(scaled[[0, 1]], -1.0);
        assert_abs_diff_eq!(scaled[[1, 1]], 1.0);
    }

    #[test]
    fn second_fit_transform_reuses_moments() {
        let train = array![[0.0], [2.0]];
        let mut scaler = Standardizer::new();
        scaler.fit_transform(train.view());
        let before = scaler.moments().unwrap().clone();

        // Different data; the moments must not move.
        let other = array![[100.0], [200.0]];
        scaler.fit_transform(other.view());

        assert_eq!(scaler.moments().unwrap(), &before);
    }

    #[test]
    fn transform_uses_stored_not_recomputed_moments() {
        let train = array![[0.0], [2.0]];
        let mut scaler = Standardizer::new();
        scaler.fit_transform(train.view());

        // Overwrite the stored moments; transform must follow the stale
        // values instead of recomputing from the input.
        let moments = scaler.moments_mut().unwrap();
        moments.mean[0] = 10.0;
        moments.variance[0] = 4.0;

        let scaled = scaler.transform(array![[12.0]].view());
        assert_abs_diff_eq!(scaled[[0, 0]], 1.0);
    }

    #[test]
    #[should_panic(expected = "at least one row")]
    fn fit_transform_zero_rows_panics() {
        let mut scaler = Standardizer::new();
        scaler.fit_transform(Array2::<f64>::zeros((0, 2)).view());
    }

    #[test]
    #[should_panic(expected = "before fit_transform")]
    fn transform_unfitted_panics() {
        let scaler = Standardizer::new();
        scaler.transform(array![[1.0]].view());
    }

    #[test]
    fn bias_column_prepended() {
        let features = array![[2.0, 3.0], [4.0, 5.0]];
        let augmented = with_bias_column(features.view());

        assert_eq!(augmented.dim(), (2, 3));
        assert_eq!(augmented.column(0).to_vec(), vec![1.0, 1.0]);
        assert_eq!(augmented.row(0).to_vec(), vec![1.0, 2.0, 3.0]);
        assert_eq!(augmented.row(1).to_vec(), vec![1.0, 4.0, 5.0]);
    }

    #[test]
    fn zero_variance_column_degenerates() {
        let features = array![[5.0], [5.0]];
        let mut scaler = Standardizer::new();
        let scaled = scaler.fit_transform(features.view());

        // 0 / sqrt(0) is NaN; propagated, not corrected.
        assert!(scaled[[0, 0]].is_nan());
    }
}
