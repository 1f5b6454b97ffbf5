//! Geometry validation error types.

use thiserror::Error;

/// Errors from grid-geometry validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    /// Every grid axis needs at least one cell.
    #[error("Grid dimensions must be at least 1x1x1, got {nx}x{ny}x{nz}")]
    InvalidDimensions {
        /// Cell count along x.
        nx: usize,
        /// Cell count along y.
        ny: usize,
        /// Cell count along z.
        nz: usize,
    },

    /// Physical extents must be positive and finite.
    #[error("Grid extents must be positive and finite, got {lx} x {ly} x {lz}")]
    InvalidExtents {
        /// Extent along x.
        lx: f64,
        /// Extent along y.
        ly: f64,
        /// Extent along z.
        lz: f64,
    },

    /// The rotation angle must be finite.
    #[error("Rotation angle must be finite, got {rotation}")]
    InvalidRotation {
        /// Rotation angle in degrees.
        rotation: f64,
    },
}
