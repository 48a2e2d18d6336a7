//! Error types for shape construction and mutation.

use thiserror::Error;

/// Errors raised when a shape would be given invalid geometric parameters.
///
/// Validation happens on every construction path and every setter, so a
/// `Circle` that exists always has a finite, strictly positive radius.
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum GeometryError {
    /// Radius was zero, negative, NaN or infinite.
    #[error("radius must be a finite positive number, got {0}")]
    InvalidRadius(f64),

    /// Diameter was zero, negative, NaN or infinite.
    #[error("diameter must be a finite positive number, got {0}")]
    InvalidDiameter(f64),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
