// src/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmotilogError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, EmotilogError>;
