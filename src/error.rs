//! Error types for Disperso

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Operation not supported: {0}")]
    NotSupported(&'static str),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, Error>;
