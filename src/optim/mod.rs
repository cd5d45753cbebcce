//! Optimizers for sparse linear regression

mod batch;
mod coordinate;
mod elastic_net;
mod ista;
mod optimizer;
mod prox;
mod subgradient;

pub use batch::Batch;
pub use coordinate::CoordinateDescent;
pub use elastic_net::ElasticNet;
pub use ista::ISTA;
pub use optimizer::Optimizer;
pub use prox::soft_threshold;
pub use subgradient::SubgradientDescent;

pub(crate) use prox::sign;
