//! Error types shared across the crate.

use crate::training::ParamValidationError;

/// Errors surfaced by model construction, prediction, and evaluation.
///
/// Shape disagreements are caller errors and are reported immediately;
/// nothing is recovered internally. Numeric degeneracy (a saturated
/// prediction driving the cross-entropy cost to a non-finite value) is
/// deliberately *not* an error: it propagates into the cost history where
/// the caller can inspect it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Feature and label row counts disagree.
    #[error("feature rows ({feature_rows}) do not match label rows ({label_rows})")]
    RowCountMismatch {
        feature_rows: usize,
        label_rows: usize,
    },

    /// Input column count does not match the width the model was trained on.
    #[error("expected {expected} input features, got {got}")]
    FeatureCountMismatch { expected: usize, got: usize },

    /// A dataset with zero rows or zero columns was supplied.
    #[error("dataset must have at least one row and one feature column")]
    EmptyDataset,

    /// Hyperparameter validation failed at construction time.
    #[error(transparent)]
    InvalidParams(#[from] ParamValidationError),
}
