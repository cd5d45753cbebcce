//! Disperso CLI
//!
//! Generates a synthetic sparse-regression dataset, trains a linear model
//! with the chosen optimizer, and prints the metric trajectory summary.
//!
//! # Usage
//!
//! ```bash
//! # Lasso via proximal gradient
//! disperso --optimizer ista --lam 0.1
//!
//! # Elastic net with both penalties
//! disperso --optimizer elastic-net --lam 0.01 --lam2 0.01
//!
//! # Reproducible run with true minibatch subsetting
//! disperso --optimizer subgradient --seed 7 --subset-batches
//! ```

use clap::{Parser, ValueEnum};
use disperso::data::generate_dataset;
use disperso::train::{fit, mean_squared_error, sparsity, FitConfig, MetricSet, SPARSITY_EPSILON};
use disperso::{
    CompressiveLinearModel, CoordinateDescent, ElasticNet, Optimizer, SubgradientDescent, ISTA,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OptimizerKind {
    Subgradient,
    Ista,
    ElasticNet,
    Coordinate,
}

#[derive(Parser)]
#[command(
    name = "disperso",
    about = "Compare sparse-regression optimizers on a synthetic dataset"
)]
struct Cli {
    /// Optimization algorithm
    #[arg(long, value_enum, default_value_t = OptimizerKind::Ista)]
    optimizer: OptimizerKind,

    /// Number of weight dimensions
    #[arg(long, default_value_t = 50)]
    dim: usize,

    /// Number of training samples
    #[arg(long, default_value_t = 500)]
    samples: usize,

    /// Nonzero entries in the ground-truth weights
    #[arg(long, default_value_t = 10)]
    nonzeros: usize,

    /// Standard deviation of the label noise
    #[arg(long, default_value_t = 1.0)]
    noise: f64,

    /// Training epochs
    #[arg(long, default_value_t = 200)]
    epochs: usize,

    /// Minibatch size
    #[arg(long, default_value_t = 100)]
    batch_size: usize,

    /// Learning rate
    #[arg(long, default_value_t = 0.001)]
    lr: f64,

    /// L1 regularization coefficient
    #[arg(long, default_value_t = 0.01)]
    lam: f64,

    /// L2 regularization coefficient (elastic net only)
    #[arg(long, default_value_t = 0.01)]
    lam2: f64,

    /// Seed for dataset generation and shuffling
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Pass each step only its minibatch's rows instead of the full dataset
    #[arg(long)]
    subset_batches: bool,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> disperso::Result<()> {
    let mut rng = StdRng::seed_from_u64(cli.seed);
    let (x, y, w_true) =
        generate_dataset(cli.dim, cli.samples, cli.nonzeros, cli.noise, None, &mut rng)?;

    let mut model = CompressiveLinearModel::zeros(cli.dim);
    let mut optimizer: Box<dyn Optimizer> = match cli.optimizer {
        OptimizerKind::Subgradient => Box::new(SubgradientDescent::new(cli.lr, cli.lam)),
        OptimizerKind::Ista => Box::new(ISTA::new(cli.lr, cli.lam)),
        OptimizerKind::ElasticNet => Box::new(ElasticNet::new(cli.lr, cli.lam, cli.lam2)),
        OptimizerKind::Coordinate => Box::new(CoordinateDescent::new(cli.lam)),
    };

    let metrics = MetricSet::new().with("mse", mean_squared_error);
    let config = FitConfig::new()
        .with_epochs(cli.epochs)
        .with_batch_size(cli.batch_size)
        .with_seed(cli.seed)
        .with_minibatch_subsetting(cli.subset_batches);

    println!(
        "Training {} on {} samples x {} dims ({} true nonzeros)",
        optimizer.name(),
        cli.samples,
        cli.dim,
        cli.nonzeros
    );

    let history = fit(&mut model, optimizer.as_mut(), &x, &y, &metrics, &config)?;

    let mse = history.series("mse").unwrap_or(&[]);
    let sparse = history.series("sparsity").unwrap_or(&[]);
    println!(
        "mse: {:.4} -> {:.4} over {} snapshots",
        mse.first().unwrap_or(&f64::NAN),
        mse.last().unwrap_or(&f64::NAN),
        history.len()
    );
    println!(
        "sparsity: {:.0} -> {:.0} (ground truth: {:.0})",
        sparse.first().unwrap_or(&f64::NAN),
        sparse.last().unwrap_or(&f64::NAN),
        sparsity(w_true.view(), SPARSITY_EPSILON)
    );

    Ok(())
}
