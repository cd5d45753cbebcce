//! Elastic net: combined L1/L2 subgradient rule

use super::{sign, Batch, Optimizer};
use crate::error::Result;
use crate::model::Model;

/// Subgradient descent on the elastic-net objective
///
/// Combines the sparsity-inducing L1 penalty with an L2 shrinkage term,
/// each with its own coefficient:
///
/// `grad = Xᵀ(Xw - y)/n + l1·sign(w) + 2·l2·w`
/// `w ← w - lr·grad`
pub struct ElasticNet {
    learning_rate: f64,
    l1: f64,
    l2: f64,
}

impl ElasticNet {
    /// Create an elastic net optimizer
    pub fn new(learning_rate: f64, l1: f64, l2: f64) -> Self {
        Self {
            learning_rate,
            l1,
            l2,
        }
    }
}

impl Default for ElasticNet {
    fn default() -> Self {
        Self::new(0.01, 0.01, 0.01)
    }
}

impl Optimizer for ElasticNet {
    fn step(&mut self, model: &mut dyn Model, batch: &Batch<'_>) -> Result<()> {
        let x = batch.x();
        let n = batch.len() as f64;

        let residual = model.evaluate(x) - &batch.y();
        let w = model.weights().to_owned();

        let mut grad = x.t().dot(&residual) / n;
        grad += &(w.mapv(sign) * self.l1);
        grad += &(&w * (2.0 * self.l2));

        model
            .weights_mut()
            .zip_mut_with(&grad, |wi, gi| *wi -= self.learning_rate * gi);

        Ok(())
    }

    fn name(&self) -> &str {
        "ElasticNet"
    }
}
