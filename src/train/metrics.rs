//! Metric functions, per-step records, and the training history

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default threshold below which weight components count as sparse
pub const SPARSITY_EPSILON: f64 = 1e-4;

/// A caller-supplied metric: pure function of `(predictions, y)`
pub type MetricFn = Box<dyn Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64>;

/// Approximate sparsity of a vector: the number of entries below `epsilon`
///
/// The comparison is one-sided (`value < epsilon`, not `|value| < epsilon`),
/// matching the historical definition: any entry below the threshold counts,
/// including strongly negative ones.
pub fn sparsity(vector: ArrayView1<f64>, epsilon: f64) -> f64 {
    vector.iter().filter(|&&value| value < epsilon).count() as f64
}

/// Mean squared error between predictions and targets
pub fn mean_squared_error(predictions: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    let diff = &predictions - &y;
    diff.mapv(|e| e * e).mean().unwrap_or(0.0)
}

/// Named metric functions, applied after every optimizer step
///
/// Iteration order is insertion order, so metric names stay stable across a
/// run.
#[derive(Default)]
pub struct MetricSet {
    entries: Vec<(String, MetricFn)>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a metric, replacing any previous one with the same name
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        metric: impl Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64 + 'static,
    ) {
        let name = name.into();
        self.entries.retain(|(existing, _)| *existing != name);
        self.entries.push((name, Box::new(metric)));
    }

    /// Builder-style [`MetricSet::insert`]
    pub fn with(
        mut self,
        name: impl Into<String>,
        metric: impl Fn(ArrayView1<f64>, ArrayView1<f64>) -> f64 + 'static,
    ) -> Self {
        self.insert(name, metric);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetricFn)> {
        self.entries.iter().map(|(name, f)| (name.as_str(), f))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One metrics snapshot: named scalars plus an optional weight-vector copy
#[derive(Clone, Debug, Default)]
pub struct MetricRecord {
    scalars: BTreeMap<String, f64>,
    weights: Option<Array1<f64>>,
}

impl MetricRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_scalar(&mut self, name: impl Into<String>, value: f64) {
        self.scalars.insert(name.into(), value);
    }

    pub fn set_weights(&mut self, weights: Array1<f64>) {
        self.weights = Some(weights);
    }

    pub fn scalar(&self, name: &str) -> Option<f64> {
        self.scalars.get(name).copied()
    }

    pub fn scalars(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scalars.iter().map(|(name, &value)| (name.as_str(), value))
    }

    pub fn weights(&self) -> Option<&Array1<f64>> {
        self.weights.as_ref()
    }
}

/// Full metric trajectory of a training run
///
/// Every scalar series (caller metrics plus the model's own entries) and the
/// weight path hold one value per snapshot: one before any update, then one
/// after every optimizer step.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MetricsHistory {
    series: BTreeMap<String, Vec<f64>>,
    weight_path: Vec<Array1<f64>>,
    snapshots: usize,
}

impl MetricsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one snapshot to every series
    pub fn record(&mut self, record: MetricRecord) {
        for (name, value) in record.scalars {
            self.series.entry(name).or_default().push(value);
        }
        if let Some(weights) = record.weights {
            self.weight_path.push(weights);
        }
        self.snapshots += 1;
    }

    /// Series recorded under `name`
    pub fn series(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(Vec::as_slice)
    }

    /// Names of all recorded series
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Weight-vector snapshots, one per record
    pub fn weight_path(&self) -> &[Array1<f64>] {
        &self.weight_path
    }

    /// Number of snapshots recorded
    pub fn len(&self) -> usize {
        self.snapshots
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots == 0
    }
}
