//! # casegen_core: Foundation Layer for the Case Generator
//!
//! This crate is the bottom layer of the casegen workspace, providing:
//! - Scalar-or-list parameter sources and nested-sequence flattening
//!   (`sequence`)
//! - Elementwise value conversion with pluggable conversion functions
//!   (`convert`)
//! - Owned, seedable uniform sampling for stochastic properties (`rng`)
//! - Run-length compaction of per-cell value sequences into the deck text
//!   encoding (`compact`)
//! - Error types for all of the above (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other casegen crates, with
//! minimal external dependencies:
//! - num-traits: Checked numeric casts for region indices
//! - rand / rand_distr: Seedable uniform sampling
//! - serde: Deserialisation of parameter sources from case configurations
//! - thiserror: Structured error types
//!
//! ## Determinism
//!
//! Every operation in this crate is a pure function of its inputs except
//! sampling, which is a pure function of its inputs plus the owned
//! generator state. There is no process-global mutable state anywhere:
//! independent generation tasks construct independent [`rng::CaseRng`]
//! instances and cannot interfere.
//!
//! ## Usage Examples
//!
//! ```rust
//! use casegen_core::compact::compact;
//! use casegen_core::rng::CaseRng;
//! use casegen_core::sequence::Param;
//!
//! // Broadcast a scalar source to a per-layer list
//! let poro = Param::Scalar(0.0912).listify(3).unwrap();
//! assert_eq!(poro, vec![0.0912, 0.0912, 0.0912]);
//!
//! // Reproducible sampling from an owned generator
//! let mut rng = CaseRng::from_seed(42);
//! let draws = rng.sample_uniform(0.1, 0.3, 4).unwrap();
//! assert!(draws.iter().all(|v| (0.1..0.3).contains(v)));
//!
//! // Deck-style run-length encoding
//! let text = compact(&[1, 1, 1, 1, 2, 1, 1, 1]).unwrap();
//! assert_eq!(text, " 4*1 2 3*1");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod compact;
pub mod convert;
pub mod rng;
pub mod sequence;
pub mod types;
