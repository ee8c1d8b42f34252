//! Error types for cubemarch

use thiserror::Error;

/// Main error type for cubemarch operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Density sampling failed: {0}")]
    Sampling(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Algorithm error: {0}")]
    Algorithm(String),
}

/// Result type alias for cubemarch operations
pub type Result<T> = std::result::Result<T, Error>;
