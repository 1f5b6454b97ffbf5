//! Elementwise and scalar value conversion with pluggable conversion
//! functions.
//!
//! Conversion is shape-preserving: a scalar source stays a scalar, a list
//! stays a list of the same length. Any element that fails to convert
//! aborts the whole conversion with an error naming the offending
//! position; nothing is silently coerced or substituted.

use num_traits::cast;

use crate::sequence::Param;
use crate::types::error::ConvertError;

/// Applies a fallible conversion to a scalar or to every element of a
/// list, preserving the source shape.
///
/// # Errors
///
/// Returns [`ConvertError::Element`] with the zero-based index of the
/// first failing element for a list source, or [`ConvertError::Scalar`]
/// for a scalar source.
///
/// # Examples
///
/// ```
/// use casegen_core::convert::{convert, parse_f64, parse_i32};
/// use casegen_core::sequence::Param;
///
/// let source = Param::List(vec!["1".to_string(), "2".to_string(), "3.5".to_string()]);
/// let converted = convert(&source, |s| parse_f64(s)).unwrap();
/// assert_eq!(converted, Param::List(vec![1.0, 2.0, 3.5]));
///
/// let scalar = Param::Scalar("7".to_string());
/// assert_eq!(convert(&scalar, |s| parse_i32(s)).unwrap(), Param::Scalar(7));
/// ```
pub fn convert<T, U, F>(source: &Param<T>, mut conversion: F) -> Result<Param<U>, ConvertError>
where
    F: FnMut(&T) -> Result<U, String>,
{
    match source {
        Param::Scalar(value) => conversion(value)
            .map(Param::Scalar)
            .map_err(|reason| ConvertError::Scalar { reason }),
        Param::List(items) => {
            let mut out = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                out.push(
                    conversion(item).map_err(|reason| ConvertError::Element { index, reason })?,
                );
            }
            Ok(Param::List(out))
        }
    }
}

/// Parses a decimal string into `f64`.
pub fn parse_f64(text: &str) -> Result<f64, String> {
    text.trim()
        .parse::<f64>()
        .map_err(|err| format!("'{}': {}", text, err))
}

/// Parses a decimal string into `i32`.
pub fn parse_i32(text: &str) -> Result<i32, String> {
    text.trim()
        .parse::<i32>()
        .map_err(|err| format!("'{}': {}", text, err))
}

/// Narrows an `i64` to `i32`, rejecting out-of-range values.
pub fn i64_to_i32(value: i64) -> Result<i32, String> {
    cast::<i64, i32>(value).ok_or_else(|| format!("{} is out of i32 range", value))
}

/// Converts an `f64` to `i32`, rejecting fractional, non-finite, and
/// out-of-range values.
pub fn f64_to_i32(value: f64) -> Result<i32, String> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(format!("{} is not an integer", value));
    }
    cast::<f64, i32>(value).ok_or_else(|| format!("{} is out of i32 range", value))
}
