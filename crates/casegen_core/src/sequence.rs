//! Scalar-or-list parameter sources and nested-sequence flattening.
//!
//! Case configurations describe per-layer and per-region parameters either
//! as a single scalar (applied everywhere) or as a list (one entry per
//! layer), and lists may be grouped into nested sub-lists for readability.
//! The types here make that shape explicit instead of inferring it at
//! runtime: [`Nested`] models an arbitrarily nested list of leaves, and
//! [`Param`] models the scalar-or-list dichotomy with statically checked
//! broadcasting rules.

use serde::{Deserialize, Serialize};

use crate::types::error::SequenceError;

/// An arbitrarily nested sequence of scalar leaves.
///
/// Deserialises from a bare scalar or from arbitrarily nested lists, so a
/// configuration may write `poro: 0.1`, `poro: [0.1, 0.2]`, or group
/// layers as `poro: [[0.1, 0.1], [0.2]]` interchangeably.
///
/// # Examples
///
/// ```
/// use casegen_core::sequence::Nested;
///
/// let nested = Nested::List(vec![
///     Nested::Leaf(1),
///     Nested::List(vec![Nested::Leaf(2), Nested::Leaf(3)]),
/// ]);
/// assert_eq!(nested.flatten(), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nested<T> {
    /// A single scalar leaf.
    Leaf(T),
    /// A list of nested values.
    List(Vec<Nested<T>>),
}

impl<T: Clone> Nested<T> {
    /// Collects all scalar leaves in depth-first, left-to-right order.
    ///
    /// Empty lists contribute nothing; flattening an already-flat list is
    /// the identity on its leaves.
    pub fn flatten(&self) -> Vec<T> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into(&self, out: &mut Vec<T>) {
        match self {
            Nested::Leaf(value) => out.push(value.clone()),
            Nested::List(items) => {
                for item in items {
                    item.collect_into(out);
                }
            }
        }
    }

    /// Number of scalar leaves.
    pub fn leaf_count(&self) -> usize {
        match self {
            Nested::Leaf(_) => 1,
            Nested::List(items) => items.iter().map(Nested::leaf_count).sum(),
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Nested::Leaf(value)
    }
}

/// A parameter source that is either a single scalar or a list of scalars.
///
/// This is the statically-checked replacement for inferring "scalar vs
/// list" from a dynamic value: the two shapes are explicit variants, and
/// the broadcasting rules live in [`Param::listify`].
///
/// # Examples
///
/// ```
/// use casegen_core::sequence::Param;
///
/// // A scalar broadcasts to any count
/// assert_eq!(Param::Scalar(7).listify(3).unwrap(), vec![7, 7, 7]);
///
/// // A single-element list broadcasts too
/// assert_eq!(Param::List(vec![7]).listify(3).unwrap(), vec![7, 7, 7]);
///
/// // A full-length list is used as-is
/// assert_eq!(Param::List(vec![1, 2, 3]).listify(3).unwrap(), vec![1, 2, 3]);
///
/// // Any other length fails fast
/// assert!(Param::List(vec![1, 2]).listify(3).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param<T> {
    /// A single scalar, applied to every element.
    Scalar(T),
    /// An explicit list of scalars.
    List(Vec<T>),
}

impl<T: Clone> Param<T> {
    /// Broadcasts this source to a list of exactly `count` elements.
    ///
    /// - `Scalar(x)` repeats `x` `count` times.
    /// - A single-element list broadcasts like a scalar.
    /// - A list of length `count` is returned as-is.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::LengthMismatch`] for a list whose length
    /// is neither 1 nor `count`.
    pub fn listify(&self, count: usize) -> Result<Vec<T>, SequenceError> {
        match self {
            Param::Scalar(value) => Ok(vec![value.clone(); count]),
            Param::List(items) if items.len() == 1 => Ok(vec![items[0].clone(); count]),
            Param::List(items) if items.len() == count => Ok(items.clone()),
            Param::List(items) => Err(SequenceError::LengthMismatch {
                got: items.len(),
                want: count,
            }),
        }
    }

    /// Broadcasts to `count` elements, then applies `conversion` once per
    /// resulting element.
    ///
    /// The conversion runs after broadcasting, so a stateful conversion
    /// observes every output element rather than the scalar source once.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::LengthMismatch`] under the same rules as
    /// [`Param::listify`].
    pub fn listify_with<U, F>(&self, count: usize, conversion: F) -> Result<Vec<U>, SequenceError>
    where
        F: FnMut(&T) -> U,
    {
        Ok(self.listify(count)?.iter().map(conversion).collect())
    }

    /// Number of elements this source describes: 1 for a scalar, the list
    /// length otherwise.
    pub fn len(&self) -> usize {
        match self {
            Param::Scalar(_) => 1,
            Param::List(items) => items.len(),
        }
    }

    /// Whether this source is an empty list.
    pub fn is_empty(&self) -> bool {
        matches!(self, Param::List(items) if items.is_empty())
    }
}

impl<T> From<T> for Param<T> {
    fn from(value: T) -> Self {
        Param::Scalar(value)
    }
}

impl<T> From<Vec<T>> for Param<T> {
    fn from(values: Vec<T>) -> Self {
        Param::List(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested() {
        let nested = Nested::List(vec![
            Nested::Leaf(1),
            Nested::List(vec![
                Nested::Leaf(2),
                Nested::List(vec![Nested::Leaf(3), Nested::Leaf(4)]),
            ]),
            Nested::Leaf(5),
        ]);
        assert_eq!(nested.flatten(), vec![1, 2, 3, 4, 5]);
        assert_eq!(nested.leaf_count(), 5);
    }

    #[test]
    fn test_flatten_leaf() {
        assert_eq!(Nested::Leaf(7).flatten(), vec![7]);
    }

    #[test]
    fn test_flatten_empty_list() {
        let nested: Nested<i32> = Nested::List(vec![]);
        assert_eq!(nested.flatten(), Vec::<i32>::new());
        assert_eq!(nested.leaf_count(), 0);
    }

    #[test]
    fn test_flatten_idempotent_on_flat_lists() {
        let flat = Nested::List(vec![Nested::Leaf(1), Nested::Leaf(2), Nested::Leaf(3)]);
        let once = flat.flatten();
        let again = Nested::List(once.iter().copied().map(Nested::Leaf).collect()).flatten();
        assert_eq!(once, again);
    }

    #[test]
    fn test_flatten_preserves_order() {
        let nested = Nested::List(vec![
            Nested::List(vec![Nested::Leaf(0.3), Nested::Leaf(0.1)]),
            Nested::Leaf(0.2),
        ]);
        assert_eq!(nested.flatten(), vec![0.3, 0.1, 0.2]);
    }

    #[test]
    fn test_listify_scalar() {
        assert_eq!(Param::Scalar(0.5).listify(4).unwrap(), vec![0.5; 4]);
    }

    #[test]
    fn test_listify_single_element_list() {
        assert_eq!(Param::List(vec![0.5]).listify(4).unwrap(), vec![0.5; 4]);
    }

    #[test]
    fn test_listify_full_length_list() {
        let source = Param::List(vec![1, 2, 3]);
        assert_eq!(source.listify(3).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_listify_length_mismatch() {
        let source = Param::List(vec![1, 2]);
        assert_eq!(
            source.listify(5),
            Err(SequenceError::LengthMismatch { got: 2, want: 5 })
        );
    }

    #[test]
    fn test_listify_empty_list_rejected() {
        let source: Param<i32> = Param::List(vec![]);
        assert_eq!(
            source.listify(3),
            Err(SequenceError::LengthMismatch { got: 0, want: 3 })
        );
    }

    #[test]
    fn test_listify_with_applies_conversion_per_element() {
        let mut calls = 0;
        let out = Param::Scalar(2)
            .listify_with(3, |v| {
                calls += 1;
                v * 10
            })
            .unwrap();
        assert_eq!(out, vec![20, 20, 20]);
        // Conversion runs once per output element, not once on the scalar.
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_listify_zero_count() {
        assert_eq!(Param::Scalar(1).listify(0).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_from_impls() {
        assert_eq!(Param::from(3), Param::Scalar(3));
        assert_eq!(Param::from(vec![1, 2]), Param::List(vec![1, 2]));
        assert_eq!(Nested::from(3), Nested::Leaf(3));
    }

    mod serde_tests {
        use super::*;

        #[derive(Debug, serde::Deserialize, PartialEq)]
        struct Holder {
            poro: Nested<f64>,
            volume: Param<f64>,
        }

        #[test]
        fn test_deserialize_scalar_and_list() {
            let holder: Holder = serde_yaml::from_str("poro: 0.1\nvolume: [0.1, 0.3]\n").unwrap();
            assert_eq!(holder.poro, Nested::Leaf(0.1));
            assert_eq!(holder.volume, Param::List(vec![0.1, 0.3]));
        }

        #[test]
        fn test_deserialize_nested_groups() {
            let holder: Holder =
                serde_yaml::from_str("poro: [[0.1, 0.1], [0.2]]\nvolume: 0.1\n").unwrap();
            assert_eq!(holder.poro.flatten(), vec![0.1, 0.1, 0.2]);
            assert_eq!(holder.volume, Param::Scalar(0.1));
        }
    }
}
