//! ISTA: iterative shrinkage-thresholding

use super::{soft_threshold, Batch, Optimizer};
use crate::error::Result;
use crate::model::Model;

/// Proximal gradient descent for the lasso objective
///
/// Alternates a gradient step on the unnormalized least-squares term with
/// the soft-thresholding proximal operator of the L1 penalty:
///
/// `w ← prox(w - lr·Xᵀ(Xw - y), lr·lam)`
///
/// Note the gradient is not divided by the batch size, so stable learning
/// rates are roughly `n` times smaller than for [`super::SubgradientDescent`].
pub struct ISTA {
    learning_rate: f64,
    lam: f64,
}

impl ISTA {
    /// Create an ISTA optimizer
    pub fn new(learning_rate: f64, lam: f64) -> Self {
        Self { learning_rate, lam }
    }
}

impl Default for ISTA {
    fn default() -> Self {
        Self::new(0.01, 0.1)
    }
}

impl Optimizer for ISTA {
    fn step(&mut self, model: &mut dyn Model, batch: &Batch<'_>) -> Result<()> {
        let x = batch.x();

        let residual = model.evaluate(x) - &batch.y();
        let grad = x.t().dot(&residual);

        let z = model.weights().to_owned() - grad * self.learning_rate;
        let next = soft_threshold(z.view(), self.learning_rate * self.lam);
        model.weights_mut().assign(&next);

        Ok(())
    }

    fn name(&self) -> &str {
        "ISTA"
    }
}
