//! Rigid areal coordinate transform: rotation plus origin translation.

use serde::{Deserialize, Serialize};

use super::error::GeometryError;

/// Rigid transform applied to areal grid coordinates.
///
/// The composition order is fixed: a point is **rotated about the local
/// origin first, then translated** to the configured origin:
///
/// ```text
/// x' = x cos(r) - y sin(r) + originX
/// y' = x sin(r) + y cos(r) + originY
/// ```
///
/// `rotation` is in degrees, positive counterclockwise. Applying a
/// transform never changes grid dimensions or extents; it only moves the
/// geometry within the coordinate frame of the extents.
///
/// # Examples
///
/// ```
/// use casegen_model::geometry::Transform;
///
/// let transform = Transform::new(1000.0, 2000.0, 90.0);
/// let (x, y) = transform.apply(1.0, 0.0);
/// assert!((x - 1000.0).abs() < 1e-12);
/// assert!((y - 2001.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Transform {
    /// Target x coordinate of the grid origin.
    pub origin_x: f64,
    /// Target y coordinate of the grid origin.
    pub origin_y: f64,
    /// Rotation in degrees, positive counterclockwise.
    pub rotation: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            rotation: 0.0,
        }
    }
}

impl Transform {
    /// Creates a transform from origin coordinates and a rotation angle
    /// in degrees.
    pub fn new(origin_x: f64, origin_y: f64, rotation: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            rotation,
        }
    }

    /// Whether this transform leaves coordinates unchanged.
    pub fn is_identity(&self) -> bool {
        self.origin_x == 0.0 && self.origin_y == 0.0 && self.rotation == 0.0
    }

    /// Validates the transform parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidRotation`] for a NaN or infinite
    /// rotation angle.
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.rotation.is_finite() {
            return Err(GeometryError::InvalidRotation {
                rotation: self.rotation,
            });
        }
        Ok(())
    }

    /// Applies the transform to an areal point: rotate about the local
    /// origin, then translate.
    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        (
            x * cos - y * sin + self.origin_x,
            x * sin + y * cos + self.origin_y,
        )
    }
}
