//! The epoch/minibatch training loop

use super::{FitConfig, MetricSet, MetricsHistory};
use crate::error::{Error, Result};
use crate::model::Model;
use crate::optim::{Batch, Optimizer};
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Train `model` with `optimizer` on `(x, y)`, tracking metrics per step
///
/// Records one metrics snapshot before any update and one after every
/// optimizer step, so every history series ends up with
/// `1 + num_epochs * ceil(n / batch_size)` entries. Each epoch shuffles a
/// fresh permutation of the sample indices and partitions it into near-equal
/// chunks; by default a step still sees the full dataset and the chunks only
/// set the step count (see [`FitConfig::subset_batches`]).
///
/// The run is fully reproducible given a fixed [`FitConfig::seed`].
pub fn fit(
    model: &mut dyn Model,
    optimizer: &mut dyn Optimizer,
    x: &Array2<f64>,
    y: &Array1<f64>,
    metrics: &MetricSet,
    config: &FitConfig,
) -> Result<MetricsHistory> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    fit_with_rng(model, optimizer, x, y, metrics, config, &mut rng)
}

/// [`fit`] with a caller-managed random number generator
///
/// `config.seed` is ignored here; shuffling draws from `rng` directly.
pub fn fit_with_rng<R: Rng + ?Sized>(
    model: &mut dyn Model,
    optimizer: &mut dyn Optimizer,
    x: &Array2<f64>,
    y: &Array1<f64>,
    metrics: &MetricSet,
    config: &FitConfig,
    rng: &mut R,
) -> Result<MetricsHistory> {
    config.validate()?;
    check_dimensions(model, x, y)?;

    let n = x.nrows();
    let num_batches = n.div_ceil(config.batch_size);

    let mut history = MetricsHistory::new();
    history.record(model.compute_metrics(x.view(), y.view(), metrics));

    let mut indices: Vec<usize> = (0..n).collect();
    for _ in 0..config.num_epochs {
        indices.shuffle(rng);

        for chunk in even_chunks(&indices, num_batches) {
            let batch = if config.subset_batches {
                Batch::select(x, y, chunk)
            } else {
                Batch::full(x, y)
            };

            optimizer.step(model, &batch)?;
            history.record(model.compute_metrics(x.view(), y.view(), metrics));
        }
    }

    Ok(history)
}

fn check_dimensions(model: &dyn Model, x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
    if model.weights().len() != x.ncols() {
        return Err(Error::DimensionMismatch {
            context: "model weights vs data columns",
            expected: x.ncols(),
            got: model.weights().len(),
        });
    }
    if x.nrows() != y.len() {
        return Err(Error::DimensionMismatch {
            context: "data rows vs targets",
            expected: x.nrows(),
            got: y.len(),
        });
    }
    Ok(())
}

/// Split `indices` into `parts` contiguous chunks whose sizes differ by at
/// most one, earlier chunks taking the extra elements
fn even_chunks(indices: &[usize], parts: usize) -> impl Iterator<Item = &[usize]> {
    let n = indices.len();
    let (base, extra) = if parts == 0 { (0, 0) } else { (n / parts, n % parts) };

    let mut start = 0;
    (0..parts).map(move |i| {
        let len = base + usize::from(i < extra);
        let chunk = &indices[start..start + len];
        start += len;
        chunk
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CompressiveLinearModel;
    use crate::optim::{CoordinateDescent, SubgradientDescent, ISTA};
    use crate::train::mean_squared_error;
    use ndarray::array;

    fn toy_problem() -> (Array2<f64>, Array1<f64>) {
        (
            array![[1.0, 0.0], [0.0, 1.0], [1.0, 1.0], [2.0, -1.0], [0.5, 0.5]],
            array![1.0, -0.5, 0.5, 2.5, 0.25],
        )
    }

    #[test]
    fn test_history_length_invariant() {
        let (x, y) = toy_problem();
        let mut model = CompressiveLinearModel::zeros(2);
        let mut opt = SubgradientDescent::new(0.01, 0.01);
        let metrics = MetricSet::new().with("mse", mean_squared_error);
        let config = FitConfig::new().with_epochs(3).with_batch_size(2).with_seed(0);

        let history = fit(&mut model, &mut opt, &x, &y, &metrics, &config).unwrap();

        // 5 samples, batch 2 -> ceil(5/2) = 3 steps per epoch.
        let expected = 1 + 3 * 3;
        assert_eq!(history.len(), expected);
        assert_eq!(history.series("mse").unwrap().len(), expected);
        assert_eq!(history.series("sparsity").unwrap().len(), expected);
        assert_eq!(history.weight_path().len(), expected);
    }

    #[test]
    fn test_initial_snapshot_precedes_updates() {
        let (x, y) = toy_problem();
        let mut model = CompressiveLinearModel::zeros(2);
        let mut opt = SubgradientDescent::new(0.01, 0.0);
        let metrics = MetricSet::new().with("mse", mean_squared_error);
        let config = FitConfig::new().with_epochs(1).with_batch_size(5).with_seed(0);

        let history = fit(&mut model, &mut opt, &x, &y, &metrics, &config).unwrap();

        // First snapshot is the untrained model: w = 0, so mse = mean(y²).
        let initial = history.series("mse").unwrap()[0];
        let expected = y.mapv(|v| v * v).mean().unwrap();
        assert!((initial - expected).abs() < 1e-12);
        assert!(history.weight_path()[0].iter().all(|&w| w == 0.0));
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let (x, y) = toy_problem();
        let metrics = MetricSet::new().with("mse", mean_squared_error);
        let config = FitConfig::new()
            .with_epochs(4)
            .with_batch_size(2)
            .with_seed(1234)
            .with_minibatch_subsetting(true);

        let run = || {
            let mut model = CompressiveLinearModel::zeros(2);
            let mut opt = ISTA::new(0.01, 0.01);
            fit(&mut model, &mut opt, &x, &y, &metrics, &config).unwrap()
        };

        let a = run();
        let b = run();

        assert_eq!(a.series("mse").unwrap(), b.series("mse").unwrap());
        assert_eq!(a.weight_path(), b.weight_path());
    }

    #[test]
    fn test_different_seeds_diverge_with_subsetting() {
        let (x, y) = toy_problem();
        let metrics = MetricSet::new().with("mse", mean_squared_error);
        let base = FitConfig::new()
            .with_epochs(4)
            .with_batch_size(2)
            .with_minibatch_subsetting(true);

        let run = |seed: u64| {
            let mut model = CompressiveLinearModel::zeros(2);
            let mut opt = ISTA::new(0.01, 0.01);
            let config = base.clone().with_seed(seed);
            fit(&mut model, &mut opt, &x, &y, &metrics, &config).unwrap()
        };

        // Different shuffles see different rows per step.
        assert_ne!(run(1).series("mse").unwrap(), run(2).series("mse").unwrap());
    }

    #[test]
    fn test_explicit_rng_matches_seeded_config() {
        let (x, y) = toy_problem();
        let metrics = MetricSet::new();
        let config = FitConfig::new().with_epochs(2).with_batch_size(2).with_seed(9);

        let mut model_a = CompressiveLinearModel::zeros(2);
        let mut opt_a = SubgradientDescent::new(0.01, 0.01);
        let a = fit(&mut model_a, &mut opt_a, &x, &y, &metrics, &config).unwrap();

        let mut model_b = CompressiveLinearModel::zeros(2);
        let mut opt_b = SubgradientDescent::new(0.01, 0.01);
        let mut rng = StdRng::seed_from_u64(9);
        let b = fit_with_rng(&mut model_b, &mut opt_b, &x, &y, &metrics, &config, &mut rng)
            .unwrap();

        assert_eq!(a.weight_path(), b.weight_path());
    }

    #[test]
    fn test_step_error_propagates() {
        let (x, y) = toy_problem();
        let mut model = CompressiveLinearModel::zeros(2);
        let mut opt = CoordinateDescent::new(0.1);
        let config = FitConfig::new().with_epochs(1).with_seed(0);

        let result = fit(&mut model, &mut opt, &x, &y, &MetricSet::new(), &config);

        assert!(matches!(result, Err(Error::NotSupported(_))));
    }

    #[test]
    fn test_dimension_mismatch_weights() {
        let (x, y) = toy_problem();
        let mut model = CompressiveLinearModel::zeros(3);
        let mut opt = SubgradientDescent::default();

        let result = fit(&mut model, &mut opt, &x, &y, &MetricSet::new(), &FitConfig::new());

        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_dimension_mismatch_targets() {
        let x = array![[1.0], [2.0]];
        let y = array![1.0];
        let mut model = CompressiveLinearModel::zeros(1);
        let mut opt = SubgradientDescent::default();

        let result = fit(&mut model, &mut opt, &x, &y, &MetricSet::new(), &FitConfig::new());

        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn test_zero_batch_size_is_config_error() {
        let (x, y) = toy_problem();
        let mut model = CompressiveLinearModel::zeros(2);
        let mut opt = SubgradientDescent::default();
        let config = FitConfig::new().with_batch_size(0);

        let result = fit(&mut model, &mut opt, &x, &y, &MetricSet::new(), &config);

        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_even_chunks_cover_all_indices_once() {
        let indices: Vec<usize> = (0..7).collect();
        let chunks: Vec<&[usize]> = even_chunks(&indices, 3).collect();

        // 7 over 3 parts: sizes 3, 2, 2 with extras at the front.
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 3);
        assert_eq!(chunks[1].len(), 2);
        assert_eq!(chunks[2].len(), 2);

        let flattened: Vec<usize> = chunks.concat();
        assert_eq!(flattened, indices);
    }

    #[test]
    fn test_even_chunks_exact_division() {
        let indices: Vec<usize> = (0..6).collect();
        let chunks: Vec<&[usize]> = even_chunks(&indices, 3).collect();

        assert!(chunks.iter().all(|c| c.len() == 2));
    }

    #[test]
    fn test_even_chunks_zero_parts() {
        let indices: Vec<usize> = vec![];
        assert_eq!(even_chunks(&indices, 0).count(), 0);
    }
}
