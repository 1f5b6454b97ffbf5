//! Grid geometry: dimensions, physical extents, and coordinate
//! transforms.

pub mod dimensions;
pub mod error;
pub mod transform;

pub use dimensions::{Extents, GridDimensions};
pub use error::GeometryError;
pub use transform::Transform;
