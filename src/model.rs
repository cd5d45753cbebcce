//! Model abstraction and the compressive linear model

use crate::train::{sparsity, MetricRecord, MetricSet, SPARSITY_EPSILON};
use ndarray::{Array1, ArrayView1, ArrayView2, ArrayViewMut1};

/// Trait for trainable models
///
/// A model owns a weight vector and knows how to turn inputs into
/// predictions. Optimizers mutate the weights through [`Model::weights_mut`];
/// the training loop reads metrics through [`Model::compute_metrics`].
pub trait Model {
    /// Compute predictions for the given inputs (pure, no mutation)
    fn evaluate(&self, x: ArrayView2<f64>) -> Array1<f64>;

    /// Current weight vector
    fn weights(&self) -> ArrayView1<f64>;

    /// Mutable view of the weight vector, the seam optimizers update through
    fn weights_mut(&mut self) -> ArrayViewMut1<f64>;

    /// Evaluate the model once and apply every metric in `metrics` to
    /// `(predictions, y)`
    fn compute_metrics(
        &self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        metrics: &MetricSet,
    ) -> MetricRecord {
        let predictions = self.evaluate(x);
        let mut record = MetricRecord::new();
        for (name, metric) in metrics.iter() {
            record.insert_scalar(name, metric(predictions.view(), y));
        }
        record
    }
}

/// Linear model `ŷ = Xw` for compressive (sparse) regression
///
/// # Example
///
/// ```
/// use disperso::CompressiveLinearModel;
/// use disperso::Model;
/// use ndarray::{array, Array1};
///
/// let w = array![1.0, 0.0, -2.0];
/// let model = CompressiveLinearModel::new(w.view());
/// let x = array![[1.0, 1.0, 1.0], [0.0, 1.0, 2.0]];
///
/// let predictions = model.evaluate(x.view());
/// assert_eq!(predictions, array![-1.0, -4.0]);
/// ```
pub struct CompressiveLinearModel {
    w: Array1<f64>,
}

impl CompressiveLinearModel {
    /// Create a model from initial weights
    ///
    /// The weights are copied so the model never aliases the caller's array.
    pub fn new(w: ArrayView1<f64>) -> Self {
        Self { w: w.to_owned() }
    }

    /// Create a model with all weights at zero
    pub fn zeros(dim: usize) -> Self {
        Self {
            w: Array1::zeros(dim),
        }
    }

    /// Number of weight components
    pub fn dim(&self) -> usize {
        self.w.len()
    }
}

impl Model for CompressiveLinearModel {
    fn evaluate(&self, x: ArrayView2<f64>) -> Array1<f64> {
        x.dot(&self.w)
    }

    fn weights(&self) -> ArrayView1<f64> {
        self.w.view()
    }

    fn weights_mut(&mut self) -> ArrayViewMut1<f64> {
        self.w.view_mut()
    }

    /// Caller metrics plus a `sparsity` entry and a snapshot of the current
    /// weights for trajectory inspection
    fn compute_metrics(
        &self,
        x: ArrayView2<f64>,
        y: ArrayView1<f64>,
        metrics: &MetricSet,
    ) -> MetricRecord {
        let predictions = self.evaluate(x);
        let mut record = MetricRecord::new();
        for (name, metric) in metrics.iter() {
            record.insert_scalar(name, metric(predictions.view(), y));
        }
        record.insert_scalar("sparsity", sparsity(self.w.view(), SPARSITY_EPSILON));
        record.set_weights(self.w.clone());
        record
    }
}
