//! Training loop and metric tracking
//!
//! The [`fit`] entry point drives epochs and minibatches, delegates each
//! numerical update to an [`crate::optim::Optimizer`], and snapshots every
//! metric after every step into a [`MetricsHistory`].
//!
//! # Example
//!
//! ```
//! use disperso::optim::ISTA;
//! use disperso::train::{fit, mean_squared_error, FitConfig, MetricSet};
//! use disperso::CompressiveLinearModel;
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.0], [0.0, 1.0]];
//! let y = array![1.0, -0.5];
//!
//! let mut model = CompressiveLinearModel::zeros(2);
//! let mut optimizer = ISTA::new(0.1, 0.01);
//! let metrics = MetricSet::new().with("mse", mean_squared_error);
//! let config = FitConfig::new().with_epochs(10).with_batch_size(2).with_seed(42);
//!
//! let history = fit(&mut model, &mut optimizer, &x, &y, &metrics, &config).unwrap();
//! assert_eq!(history.len(), 1 + 10);
//! ```

mod config;
mod fit;
mod metrics;

pub use config::FitConfig;
pub use fit::{fit, fit_with_rng};
pub use metrics::{
    mean_squared_error, sparsity, MetricFn, MetricRecord, MetricSet, MetricsHistory,
    SPARSITY_EPSILON,
};
