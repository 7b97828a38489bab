//! Training hyperparameters.

use serde::{Deserialize, Serialize};

use super::Verbosity;

/// Hyperparameters for mini-batch logistic-regression training.
///
/// `learning_rate` is only the *initial* step size; during training the
/// adaptive controller owns the live value and mutates it from the cost
/// trend (see [`AdaptiveLearningRate`](super::AdaptiveLearningRate)).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainParams {
    /// Initial gradient-descent step size. Must be positive.
    pub learning_rate: f64,

    /// Number of training epochs. Zero is allowed and trains nothing.
    pub n_epochs: usize,

    /// Rows per mini-batch. Must be at least 1. The per-epoch batch count
    /// is `floor(rows / batch_size)`, so a trailing partial batch is
    /// dropped, and a batch size larger than the row count yields zero
    /// gradient steps per epoch.
    pub batch_size: usize,

    /// Probability threshold for the positive class, in `[0, 1]`.
    /// A probability strictly greater than the boundary is classified 1.
    pub decision_boundary: f64,

    /// Verbosity of training progress output.
    pub verbosity: Verbosity,
}

impl Default for TrainParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            n_epochs: 500,
            batch_size: 32,
            decision_boundary: 0.5,
            verbosity: Verbosity::Silent,
        }
    }
}

impl TrainParams {
    /// Validate parameters.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint. NaN values fail the
    /// corresponding range check.
    pub fn validate(&self) -> Result<(), ParamValidationError> {
        if !(self.learning_rate > 0.0) {
            return Err(ParamValidationError::InvalidLearningRate(
                self.learning_rate,
            ));
        }
        if self.batch_size == 0 {
            return Err(ParamValidationError::InvalidBatchSize);
        }
        if !(0.0..=1.0).contains(&self.decision_boundary) {
            return Err(ParamValidationError::InvalidDecisionBoundary(
                self.decision_boundary,
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Hyperparameter validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamValidationError {
    /// learning_rate must be > 0.
    #[error("learning_rate must be > 0, got {0}")]
    InvalidLearningRate(f64),

    /// batch_size must be >= 1.
    #[error("batch_size must be >= 1")]
    InvalidBatchSize,

    /// decision_boundary must be in [0, 1].
    #[error("decision_boundary must be in [0, 1], got {0}")]
    InvalidDecisionBoundary(f64),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_are_valid() {
        assert!(TrainParams::default().validate().is_ok());
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.1)]
    #[case(f64::NAN)]
    fn non_positive_learning_rate_rejected(#[case] learning_rate: f64) {
        let params = TrainParams {
            learning_rate,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamValidationError::InvalidLearningRate(_))
        ));
    }

    #[test]
    fn zero_batch_size_rejected() {
        let params = TrainParams {
            batch_size: 0,
            ..Default::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamValidationError::InvalidBatchSize)
        );
    }

    #[rstest]
    #[case(-0.01)]
    #[case(1.01)]
    #[case(f64::NAN)]
    fn out_of_range_boundary_rejected(#[case] decision_boundary: f64) {
        let params = TrainParams {
            decision_boundary,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamValidationError::InvalidDecisionBoundary(_))
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    fn boundary_endpoints_accepted(#[case] decision_boundary: f64) {
        let params = TrainParams {
            decision_boundary,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn zero_epochs_accepted() {
        let params = TrainParams {
            n_epochs: 0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());
    }
}
