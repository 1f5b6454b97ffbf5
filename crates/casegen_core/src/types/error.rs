//! Error types for structured error handling.
//!
//! This module provides:
//! - `SequenceError`: Errors from scalar-or-list broadcasting
//! - `ConvertError`: Errors from elementwise value conversion
//! - `SamplingError`: Errors from uniform sampling
//! - `CompactError`: Errors from run-length compaction and expansion

use thiserror::Error;

/// Errors from scalar-or-list broadcasting operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A list source has a length that can neither be used as-is nor
    /// broadcast (only single-element lists broadcast).
    #[error("Cannot broadcast list of length {got} to {want} elements")]
    LengthMismatch {
        /// Length of the provided list.
        got: usize,
        /// Required number of elements.
        want: usize,
    },
}

/// Errors from elementwise value conversion.
///
/// The whole conversion aborts on the first failure; no silent coercion
/// or default substitution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A list element could not be converted. Carries the position of the
    /// offending element.
    #[error("Cannot convert element at index {index}: {reason}")]
    Element {
        /// Zero-based position of the element that failed to convert.
        index: usize,
        /// Description of the conversion failure.
        reason: String,
    },

    /// A scalar value could not be converted.
    #[error("Cannot convert value: {reason}")]
    Scalar {
        /// Description of the conversion failure.
        reason: String,
    },
}

/// Errors from uniform sampling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SamplingError {
    /// Lower bound exceeds upper bound.
    #[error("Invalid sampling range: low {low} > high {high}")]
    InvalidRange {
        /// The lower bound supplied by the caller.
        low: f64,
        /// The upper bound supplied by the caller.
        high: f64,
    },

    /// A sampling bound is NaN or infinite.
    #[error("Sampling bounds must be finite, got [{low}, {high}]")]
    NonFiniteBound {
        /// The lower bound supplied by the caller.
        low: f64,
        /// The upper bound supplied by the caller.
        high: f64,
    },
}

/// Errors from run-length compaction and expansion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompactError {
    /// The input sequence was empty. An empty property array is always a
    /// configuration bug upstream, so this fails rather than encoding an
    /// empty string.
    #[error("Cannot compact an empty sequence")]
    EmptyInput,

    /// A token in the encoded text could not be parsed back into a run.
    #[error("Malformed token '{token}' at position {position}")]
    MalformedToken {
        /// The token that failed to parse.
        token: String,
        /// Zero-based position of the token in the encoded text.
        position: usize,
    },
}
