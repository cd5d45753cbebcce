//! Training configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for a [`super::fit`] run
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    /// Number of passes over the dataset
    pub num_epochs: usize,

    /// Nominal minibatch size; determines the number of optimizer steps per
    /// epoch (`ceil(n / batch_size)`)
    pub batch_size: usize,

    /// Seed for the shuffling RNG (None = OS entropy)
    pub seed: Option<u64>,

    /// Pass each step only its minibatch's rows instead of the full dataset
    ///
    /// Off by default: historically each step sees all of `X`/`y`, and
    /// `batch_size` only controls the step count per epoch.
    pub subset_batches: bool,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            num_epochs: 1000,
            batch_size: 100,
            seed: None,
            subset_batches: false,
        }
    }
}

impl FitConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of epochs
    pub fn with_epochs(mut self, num_epochs: usize) -> Self {
        self.num_epochs = num_epochs;
        self
    }

    /// Set the minibatch size
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Fix the shuffling seed for reproducible runs
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable true minibatch subsetting
    pub fn with_minibatch_subsetting(mut self, enabled: bool) -> Self {
        self.subset_batches = enabled;
        self
    }

    /// Check the configuration for values a run cannot proceed with
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::ConfigError("batch_size must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FitConfig::default();
        assert_eq!(config.num_epochs, 1000);
        assert_eq!(config.batch_size, 100);
        assert_eq!(config.seed, None);
        assert!(!config.subset_batches);
    }

    #[test]
    fn test_builder() {
        let config = FitConfig::new()
            .with_epochs(5)
            .with_batch_size(32)
            .with_seed(7)
            .with_minibatch_subsetting(true);

        assert_eq!(config.num_epochs, 5);
        assert_eq!(config.batch_size, 32);
        assert_eq!(config.seed, Some(7));
        assert!(config.subset_batches);
    }

    #[test]
    fn test_zero_batch_size_rejected() {
        let config = FitConfig::new().with_batch_size(0);
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_roundtrips_through_serde() {
        let config = FitConfig::new().with_epochs(3).with_seed(42);
        let json = serde_json::to_string(&config).unwrap();
        let back: FitConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.num_epochs, 3);
        assert_eq!(back.seed, Some(42));
    }
}
