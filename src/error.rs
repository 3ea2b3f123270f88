//! Error types for the pantograph solver

use thiserror::Error;

/// Main error type for sizing calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PantographError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Degenerate angle: {0}")]
    DegenerateAngle(String),
}

/// Result type for sizing calculations
pub type PantographResult<T> = Result<T, PantographError>;
