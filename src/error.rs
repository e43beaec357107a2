use thiserror::Error;

/// Custom error types for rxscope
#[derive(Debug, Error)]
pub enum RxError {
    #[error("Invalid dataset file: {0}")]
    InvalidDataset(String),

    #[error("Invalid names file: {0}")]
    InvalidNames(String),

    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
