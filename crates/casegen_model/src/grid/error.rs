//! Case validation and generation error types.

use casegen_core::types::error::{CompactError, ConvertError, SamplingError, SequenceError};
use thiserror::Error;

use crate::geometry::GeometryError;

/// Errors from case validation and property generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// Grid geometry failed validation.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A per-layer property source could not be broadcast to the layer
    /// count.
    #[error("Invalid '{field}' definition: {source}")]
    InvalidLayerSource {
        /// Name of the specification field.
        field: &'static str,
        /// The underlying broadcast failure.
        #[source]
        source: SequenceError,
    },

    /// A region-index source could not be converted to deck indices.
    #[error("Invalid '{field}' definition: {source}")]
    InvalidRegionIndex {
        /// Name of the specification field.
        field: &'static str,
        /// The underlying conversion failure.
        #[source]
        source: ConvertError,
    },

    /// A volume-fraction or saturation value is outside `[0, 1]`.
    #[error("'{field}' must lie in [0, 1], got {value}")]
    OutOfRange {
        /// Name of the specification field.
        field: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Stochastic sampling failed.
    #[error(transparent)]
    Sampling(#[from] SamplingError),

    /// Run-length compaction failed.
    #[error(transparent)]
    Compact(#[from] CompactError),
}
