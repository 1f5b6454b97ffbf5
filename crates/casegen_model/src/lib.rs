//! # casegen_model: Grid Geometry and Property Generation
//!
//! Domain layer of the casegen workspace. This crate turns a case
//! specification into the per-cell property arrays and scalar summary a
//! simulation-deck writer consumes:
//! - Validated grid dimensions, extents, and coordinate transforms
//!   (`geometry`)
//! - The case specification, property-array generation, and case summary
//!   (`grid`)
//!
//! ## Determinism
//!
//! Generation is a pure function of the case specification: for an
//! identical specification (seed included) two runs produce byte-identical
//! compacted output. Stochastic vug sampling draws from an owned
//! [`casegen_core::rng::CaseRng`] constructed per generation call.
//!
//! ## Cell-traversal order
//!
//! Every property array is laid out with the i index fastest, then j,
//! then k (`index = i + nx * (j + ny * k)`). Downstream writers rely on
//! this order; it never changes between runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod geometry;
pub mod grid;
