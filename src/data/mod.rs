//! Data handling for training and prediction.
//!
//! - [`Dataset`]: paired feature matrix and binary label column with
//!   shape validation at construction.
//! - [`Standardizer`]: per-column standardization with fit-once moments,
//!   plus bias-column augmentation via [`with_bias_column`].

mod dataset;
mod standardize;

pub use dataset::Dataset;
pub use standardize::{with_bias_column, Moments, Standardizer};
