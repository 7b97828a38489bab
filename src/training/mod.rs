//! Training infrastructure for logistic regression.
//!
//! - [`TrainParams`]: hyperparameters with construction-time validation
//! - [`sgd`]: sigmoid and the mini-batch gradient-descent update
//! - [`metrics`]: cross-entropy cost and accuracy
//! - [`AdaptiveLearningRate`]: cost-driven step-size controller
//! - [`TrainingLogger`], [`Verbosity`]: epoch-level progress output

mod logger;
mod params;
mod schedule;

pub mod metrics;
pub mod sgd;

pub use logger::{TrainingLogger, Verbosity};
pub use params::{ParamValidationError, TrainParams};
pub use schedule::{AdaptiveLearningRate, BACKOFF_FACTOR, GROWTH_FACTOR};
