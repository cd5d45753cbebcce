//! Optimizer trait

use super::Batch;
use crate::error::Result;
use crate::model::Model;

/// Trait for optimization algorithms
///
/// An optimizer reads the model's current weights and the batch data, and
/// writes the updated weights back in place. Hyperparameters are fixed at
/// construction; the update rules themselves are stateless.
pub trait Optimizer {
    /// Perform a single optimization step, mutating the model's weights
    fn step(&mut self, model: &mut dyn Model, batch: &Batch<'_>) -> Result<()>;

    /// Name of the algorithm
    fn name(&self) -> &str;
}
