//! Model persistence as JSON.
//!
//! The full model state is serialized — weights, standardization moments,
//! hyperparameters, the adapted learning rate, cost history, and the
//! (preprocessed) training set — so a loaded model predicts identically
//! and can continue training where it left off.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use super::LogisticRegression;

/// Errors from saving or loading a model.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Underlying file or stream I/O failed.
    #[error("model i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The payload could not be (de)serialized.
    #[error("model serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl LogisticRegression {
    /// Serialize the model as JSON into a writer.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), PersistError> {
        serde_json::to_writer(writer, self)?;
        Ok(())
    }

    /// Deserialize a model from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PersistError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Save the model to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), PersistError> {
        let file = File::create(path)?;
        self.to_writer(BufWriter::new(file))
    }

    /// Load a model from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, PersistError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
