//! Error types for Easeplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Easeplot operations.
pub type Result<T> = std::result::Result<T, EaseplotError>;

/// Errors that can occur in Easeplot.
#[derive(Debug, Error)]
pub enum EaseplotError {
    /// Axis range with an empty or inverted span.
    #[error("Invalid domain: x [{x_min}, {x_max}], y [{y_min}, {y_max}]")]
    InvalidDomain {
        /// Lower x bound.
        x_min: f32,
        /// Upper x bound.
        x_max: f32,
        /// Lower y bound.
        y_min: f32,
        /// Upper y bound.
        y_max: f32,
    },

    /// Vertical range not centered on zero.
    #[error("Vertical range must be symmetric about zero (MIN = -MAX), got [{y_min}, {y_max}]")]
    AsymmetricRange {
        /// Lower y bound.
        y_min: f32,
        /// Upper y bound.
        y_max: f32,
    },

    /// Drawing surface has no pixels to sample into.
    #[error("Surface has no pixels: {width}x{height}")]
    EmptySurface {
        /// Surface width in pixels.
        width: usize,
        /// Surface height in pixels.
        height: usize,
    },

    /// Curve name not in the catalogue.
    #[error("Unknown curve: {name}")]
    UnknownCurve {
        /// Name as given.
        name: String,
    },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EaseplotError {
    /// Create an InvalidDomain error.
    pub fn invalid_domain(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self::InvalidDomain {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Create an AsymmetricRange error.
    pub fn asymmetric_range(y_min: f32, y_max: f32) -> Self {
        Self::AsymmetricRange { y_min, y_max }
    }

    /// Create an EmptySurface error.
    pub fn empty_surface(width: usize, height: usize) -> Self {
        Self::EmptySurface { width, height }
    }

    /// Create an UnknownCurve error.
    pub fn unknown_curve(name: impl Into<String>) -> Self {
        Self::UnknownCurve { name: name.into() }
    }
}
