//! # Disperso: Sparse Linear Regression Training
//!
//! Disperso trains a linear model with sparsity-inducing regularization using
//! iterative first-order optimization, recording a metric trajectory across
//! training. It is teaching infrastructure for comparing optimizers on
//! synthetic sparse-regression problems.
//!
//! ## Architecture
//!
//! - **model**: `Model` trait and the affine `CompressiveLinearModel`
//! - **optim**: Optimizers (subgradient descent, ISTA, elastic net) and the
//!   soft-thresholding proximal operator
//! - **train**: The `fit` loop, configuration, and per-step metric tracking
//! - **data**: Synthetic sparse-regression dataset generation
//!
//! ## Example
//!
//! ```
//! use disperso::data::generate_dataset;
//! use disperso::optim::SubgradientDescent;
//! use disperso::train::{fit, mean_squared_error, FitConfig, MetricSet};
//! use disperso::CompressiveLinearModel;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let (x, y, _w) = generate_dataset(10, 40, 3, 0.1, None, &mut rng).unwrap();
//!
//! let mut model = CompressiveLinearModel::zeros(10);
//! let mut optimizer = SubgradientDescent::new(0.05, 0.01);
//! let metrics = MetricSet::new().with("mse", mean_squared_error);
//! let config = FitConfig::new().with_epochs(50).with_batch_size(40).with_seed(42);
//!
//! let history = fit(&mut model, &mut optimizer, &x, &y, &metrics, &config).unwrap();
//! let mse = history.series("mse").unwrap();
//! assert!(mse.last().unwrap() < mse.first().unwrap());
//! ```

pub mod data;
pub mod error;
pub mod model;
pub mod optim;
pub mod train;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{CompressiveLinearModel, Model};
pub use optim::{Batch, CoordinateDescent, ElasticNet, Optimizer, SubgradientDescent, ISTA};
pub use train::{fit, FitConfig, MetricSet, MetricsHistory};
