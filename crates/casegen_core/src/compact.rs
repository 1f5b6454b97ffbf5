//! Run-length compaction of per-cell value sequences.
//!
//! Large structured grids are dominated by homogeneous regions, so the
//! per-cell property arrays written into simulation decks compress well
//! as runs: each maximal run of `k` equal values is rendered as `k*v`
//! when `k > 1` and as the bare value when `k == 1`, every token preceded
//! by a single space. The encoding is lossless: [`expand`] reproduces the
//! original sequence exactly.
//!
//! Run merging uses exact value equality. Callers that want approximate
//! merging of floating-point cells must quantize before compacting.

use std::fmt::Display;
use std::str::FromStr;

use crate::types::error::CompactError;

/// One maximal run of equal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<T> {
    /// The repeated value.
    pub value: T,
    /// Number of consecutive occurrences, always at least 1.
    pub count: usize,
}

/// Decomposes a sequence into maximal runs of equal values.
///
/// The decomposition is canonical: no two consecutive runs share the same
/// value, and the run counts sum to the input length.
pub fn runs<T: PartialEq + Clone>(values: &[T]) -> Vec<Run<T>> {
    let mut out: Vec<Run<T>> = Vec::new();
    for value in values {
        match out.last_mut() {
            Some(run) if run.value == *value => run.count += 1,
            _ => out.push(Run {
                value: value.clone(),
                count: 1,
            }),
        }
    }
    out
}

/// Renders a non-empty sequence as deck-style run-length text.
///
/// Each run becomes `" {count}*{value}"` when the count exceeds 1 and
/// `" {value}"` otherwise; note the single leading space before every
/// token, including the first.
///
/// # Errors
///
/// Returns [`CompactError::EmptyInput`] for an empty sequence. An empty
/// property array is always a configuration bug upstream, so it fails
/// loudly instead of encoding to an empty string.
///
/// # Examples
///
/// ```
/// use casegen_core::compact::compact;
///
/// assert_eq!(compact(&[1, 1, 1, 1, 2, 1, 1, 1]).unwrap(), " 4*1 2 3*1");
/// assert_eq!(compact(&[0.25]).unwrap(), " 0.25");
/// assert!(compact::<i32>(&[]).is_err());
/// ```
pub fn compact<T: PartialEq + Clone + Display>(values: &[T]) -> Result<String, CompactError> {
    if values.is_empty() {
        return Err(CompactError::EmptyInput);
    }
    let mut text = String::new();
    for run in runs(values) {
        if run.count > 1 {
            text.push_str(&format!(" {}*{}", run.count, run.value));
        } else {
            text.push_str(&format!(" {}", run.value));
        }
    }
    Ok(text)
}

/// Decodes deck-style run-length text back into the original sequence.
///
/// Each `count*value` token expands to `count` repetitions of `value`;
/// each bare token expands to a single value. This is the inverse of
/// [`compact`]: `expand(&compact(v)?)? == v` for every non-empty `v`.
///
/// # Errors
///
/// - [`CompactError::EmptyInput`] when the text contains no tokens
/// - [`CompactError::MalformedToken`] when a token has a zero or
///   unparsable count, or a value that does not parse as `T`
pub fn expand<T>(text: &str) -> Result<Vec<T>, CompactError>
where
    T: FromStr + Clone,
{
    let malformed = |token: &str, position: usize| CompactError::MalformedToken {
        token: token.to_string(),
        position,
    };

    let mut out = Vec::new();
    for (position, token) in text.split_whitespace().enumerate() {
        match token.split_once('*') {
            Some((count, value)) => {
                let count: usize = count.parse().map_err(|_| malformed(token, position))?;
                if count == 0 {
                    return Err(malformed(token, position));
                }
                let value: T = value.parse().map_err(|_| malformed(token, position))?;
                out.extend(std::iter::repeat(value).take(count));
            }
            None => out.push(token.parse().map_err(|_| malformed(token, position))?),
        }
    }
    if out.is_empty() {
        return Err(CompactError::EmptyInput);
    }
    Ok(out)
}
