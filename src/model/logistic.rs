//! Binary logistic regression trained by mini-batch gradient descent.

use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::data::{with_bias_column, Dataset, Standardizer};
use crate::error::ModelError;
use crate::training::{
    metrics, sgd, AdaptiveLearningRate, TrainParams, TrainingLogger,
};

/// Binary logistic-regression model.
///
/// Owns the standardization moments (computed once from the training
/// features at construction and reused for every later input), the weight
/// vector (bias weight at index 0), the per-epoch cost history, and the
/// adaptive learning-rate controller.
///
/// The model starts untrained: weights all zero, cost history empty.
/// [`train`](Self::train) runs the configured number of epochs and is
/// cumulative — calling it again continues optimizing from the current
/// weights and appends more cost entries. There is no reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticRegression {
    params: TrainParams,
    schedule: AdaptiveLearningRate,
    scaler: Standardizer,
    /// `[1 + n_features]`, bias first.
    weights: Array1<f64>,
    /// Chronological cross-entropy costs, one per completed epoch.
    cost_history: Vec<f64>,
    /// Standardized, bias-augmented training features.
    train_features: Array2<f64>,
    train_labels: Array1<f64>,
}

impl LogisticRegression {
    /// Build an untrained model from a dataset and hyperparameters.
    ///
    /// This is the call that computes the standardization moments; they
    /// are frozen from here on.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InvalidParams`] if the hyperparameters fail
    /// validation. Dataset shape errors are caught earlier, when the
    /// [`Dataset`] is constructed.
    pub fn new(data: &Dataset, params: TrainParams) -> Result<Self, ModelError> {
        params.validate()?;

        let mut scaler = Standardizer::new();
        let standardized = scaler.fit_transform(data.features());
        let train_features = with_bias_column(standardized.view());
        let weights = Array1::zeros(train_features.ncols());
        let schedule = AdaptiveLearningRate::new(params.learning_rate);

        Ok(Self {
            params,
            schedule,
            scaler,
            weights,
            cost_history: Vec::new(),
            train_features,
            train_labels: data.labels().to_owned(),
        })
    }

    /// Run `n_epochs` of mini-batch gradient descent.
    ///
    /// Each epoch processes `floor(rows / batch_size)` batches in
    /// increasing index order — strictly sequentially, since every step
    /// starts from the weights the previous one left behind. A trailing
    /// partial batch is dropped; a batch size larger than the row count
    /// yields zero gradient steps per epoch. After the batches, the
    /// cross-entropy cost over the full training set is appended to the
    /// history and the learning-rate controller compares the two most
    /// recent costs.
    pub fn train(&mut self) {
        let batch_size = self.params.batch_size;
        let n_batches = self.train_features.nrows() / batch_size;

        let mut logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(self.params.n_epochs);

        for epoch in 0..self.params.n_epochs {
            for batch in 0..n_batches {
                let start = batch * batch_size;
                let end = start + batch_size;
                sgd::gradient_step(
                    &mut self.weights,
                    self.train_features.slice(s![start..end, ..]),
                    self.train_labels.slice(s![start..end]),
                    self.schedule.rate(),
                );
            }
            let cost = self.record_cost();
            self.schedule.adjust(&self.cost_history);
            logger.log_epoch(epoch, cost, self.schedule.rate());
        }

        logger.finish_training(self.cost_history.last().copied());
    }

    /// Classify observations with the learned decision boundary.
    ///
    /// Observations are standardized with the *stored* moments (never
    /// recomputed) and bias-augmented before applying the weights. A
    /// probability strictly greater than `decision_boundary` yields 1.0;
    /// a probability exactly on the boundary yields 0.0. Row order is
    /// preserved.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FeatureCountMismatch`] if the column count
    /// differs from the training features.
    pub fn predict(&self, observations: ArrayView2<'_, f64>) -> Result<Array1<f64>, ModelError> {
        let boundary = self.params.decision_boundary;
        let probabilities = self.predict_proba(observations)?;
        Ok(probabilities.mapv(|p| if p > boundary { 1.0 } else { 0.0 }))
    }

    /// Raw sigmoid probabilities, before thresholding.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FeatureCountMismatch`] if the column count
    /// differs from the training features.
    pub fn predict_proba(
        &self,
        observations: ArrayView2<'_, f64>,
    ) -> Result<Array1<f64>, ModelError> {
        if observations.ncols() != self.n_features() {
            return Err(ModelError::FeatureCountMismatch {
                expected: self.n_features(),
                got: observations.ncols(),
            });
        }
        let processed = with_bias_column(self.scaler.transform(observations).view());
        Ok(sgd::predict_probabilities(
            processed.view(),
            self.weights.view(),
        ))
    }

    /// Accuracy of the model on a labeled dataset, in `[0, 1]`.
    ///
    /// Row-count agreement between features and labels is enforced by
    /// [`Dataset::new`]; the feature width is checked here against the
    /// trained model.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::FeatureCountMismatch`] if the dataset width
    /// differs from the training features.
    pub fn evaluate(&self, data: &Dataset) -> Result<f64, ModelError> {
        let predictions = self.predict(data.features())?;
        Ok(metrics::accuracy(predictions.view(), data.labels()))
    }

    /// Compute the cross-entropy cost over the full training set and
    /// append it to the history.
    fn record_cost(&mut self) -> f64 {
        let probabilities =
            sgd::predict_probabilities(self.train_features.view(), self.weights.view());
        let cost = metrics::log_loss(probabilities.view(), self.train_labels.view());
        self.cost_history.push(cost);
        cost
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Number of input feature columns the model expects (without bias).
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len() - 1
    }

    /// The weight vector, `[1 + n_features]` with the bias weight at
    /// index 0.
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    /// Chronological per-epoch cross-entropy costs (index 0 = first
    /// epoch ever trained). Non-finite entries indicate a saturated
    /// prediction during that epoch.
    pub fn cost_history(&self) -> &[f64] {
        &self.cost_history
    }

    /// The current (adapted) learning rate.
    pub fn learning_rate(&self) -> f64 {
        self.schedule.rate()
    }

    /// The hyperparameters the model was constructed with.
    /// `learning_rate` here is the initial value; see
    /// [`learning_rate`](Self::learning_rate) for the live one.
    pub fn params(&self) -> &TrainParams {
        &self.params
    }
}
