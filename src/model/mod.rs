//! High-level model types.

mod logistic;
mod persist;

pub use logistic::LogisticRegression;
pub use persist::PersistError;
