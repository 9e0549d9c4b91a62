//! Error types for deskcalc.

use thiserror::Error;

/// Arithmetic failures reported by the engine.
///
/// The `Display` text is what the calculator shows in place of a number.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Cannot divide by zero")]
    DivideByZero,
    #[error("Invalid input")]
    InvalidInput,
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Unknown unary operator: {0}")]
    UnknownUnaryOperator(String),
}

/// Failures reading or writing the settings file.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
