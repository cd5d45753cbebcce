//! Coordinate descent placeholder

use super::{Batch, Optimizer};
use crate::error::{Error, Result};
use crate::model::Model;

/// Coordinate descent for the lasso objective
///
/// The update rule is not implemented yet. `step` fails with
/// [`Error::NotSupported`] rather than silently leaving the weights
/// unchanged, so call sites notice immediately.
///
/// TODO: implement the per-coordinate closed-form update
/// `w_j = soft_threshold(X_jᵀ(y - X_{-j} w_{-j}), lam) / ||X_j||²`.
pub struct CoordinateDescent {
    #[allow(dead_code)]
    lam: f64,
}

impl CoordinateDescent {
    /// Create a coordinate descent optimizer
    pub fn new(lam: f64) -> Self {
        Self { lam }
    }
}

impl Default for CoordinateDescent {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl Optimizer for CoordinateDescent {
    fn step(&mut self, _model: &mut dyn Model, _batch: &Batch<'_>) -> Result<()> {
        Err(Error::NotSupported(
            "CoordinateDescent does not implement an update rule yet",
        ))
    }

    fn name(&self) -> &str {
        "CoordinateDescent"
    }
}
