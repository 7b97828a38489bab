//! logreg: mini-batch logistic regression with an adaptive learning rate.
//!
//! Trains a binary classifier by mini-batch gradient descent over dense
//! `ndarray` matrices, with feature standardization moments computed once
//! from the training data, per-epoch cross-entropy cost tracking, and a
//! step-size controller that halves the learning rate when the cost rises
//! and grows it by 5% otherwise.
//!
//! # Key Types
//!
//! - [`LogisticRegression`] - Model with train/predict/evaluate
//! - [`TrainParams`] - Hyperparameters, validated at construction
//! - [`Dataset`] - Feature/label pairs with shape validation
//! - [`Standardizer`] - Fit-once feature standardization
//!
//! # Example
//!
//! ```
//! use logreg::{Dataset, LogisticRegression, TrainParams};
//! use ndarray::array;
//!
//! let data = Dataset::new(
//!     array![[-2.0, 1.0], [-1.0, -1.5], [1.0, 0.5], [2.0, -0.5]],
//!     array![0.0, 0.0, 1.0, 1.0],
//! )?;
//! let params = TrainParams {
//!     n_epochs: 200,
//!     batch_size: 4,
//!     ..Default::default()
//! };
//!
//! let mut model = LogisticRegression::new(&data, params)?;
//! model.train();
//!
//! let accuracy = model.evaluate(&data)?;
//! assert!(accuracy > 0.9);
//! # Ok::<(), logreg::ModelError>(())
//! ```

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod error;
pub mod model;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use data::{with_bias_column, Dataset, Moments, Standardizer};
pub use error::ModelError;
pub use model::{LogisticRegression, PersistError};
pub use training::{
    AdaptiveLearningRate, ParamValidationError, TrainParams, TrainingLogger, Verbosity,
};
