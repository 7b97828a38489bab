//! Dataset: validated feature/label pairs.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::error::ModelError;

/// A dense feature matrix paired with a binary label column.
///
/// Rows of `features` correspond 1:1 with entries of `labels`. Labels are
/// expected to be `0.0` or `1.0`; values outside that set are the caller's
/// responsibility (upstream column extraction is out of scope here).
///
/// The dataset is immutable once constructed.
#[derive(Debug, Clone)]
pub struct Dataset {
    features: Array2<f64>,
    labels: Array1<f64>,
}

impl Dataset {
    /// Create a dataset, validating that shapes agree.
    ///
    /// # Errors
    ///
    /// - [`ModelError::RowCountMismatch`] if `features` and `labels` have
    ///   a different number of rows.
    /// - [`ModelError::EmptyDataset`] if there are no rows or no columns.
    pub fn new(features: Array2<f64>, labels: Array1<f64>) -> Result<Self, ModelError> {
        if features.nrows() != labels.len() {
            return Err(ModelError::RowCountMismatch {
                feature_rows: features.nrows(),
                label_rows: labels.len(),
            });
        }
        if features.nrows() == 0 || features.ncols() == 0 {
            return Err(ModelError::EmptyDataset);
        }
        Ok(Self { features, labels })
    }

    /// Number of samples (rows).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    /// Number of feature columns. The bias column added during
    /// preprocessing is not part of this count.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    /// View of the feature matrix, `[n_samples, n_features]`.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    /// View of the label column, `[n_samples]`.
    #[inline]
    pub fn labels(&self) -> ArrayView1<'_, f64> {
        self.labels.view()
    }
}
