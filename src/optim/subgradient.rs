//! Subgradient descent for L1-regularized least squares

use super::{sign, Batch, Optimizer};
use crate::error::Result;
use crate::model::Model;

/// Subgradient descent on the lasso objective
///
/// Uses `sign(w)` as the subgradient of the L1 penalty, with `sign(0) = 0`,
/// so exactly-zero coordinates receive no penalty force. The data-fit
/// gradient is normalized by the number of samples in the batch:
///
/// `grad = Xᵀ(Xw - y)/n + l1·sign(w) + 2·l2·w`
/// `w ← w - lr·grad`
///
/// The ridge coefficient `l2` defaults to zero; setting it turns this into
/// the elastic-net subgradient rule.
pub struct SubgradientDescent {
    learning_rate: f64,
    l1: f64,
    l2: f64,
}

impl SubgradientDescent {
    /// Create a subgradient descent optimizer with an L1 coefficient
    pub fn new(learning_rate: f64, lam: f64) -> Self {
        Self {
            learning_rate,
            l1: lam,
            l2: 0.0,
        }
    }

    /// Add an L2 (ridge) coefficient
    pub fn with_ridge(mut self, lam: f64) -> Self {
        self.l2 = lam;
        self
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl Default for SubgradientDescent {
    fn default() -> Self {
        Self::new(0.01, 0.01)
    }
}

impl Optimizer for SubgradientDescent {
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
        "SubgradientDescent"
    }
}
