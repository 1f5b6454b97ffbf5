//! Case specification deserialised from YAML configurations.

use casegen_core::sequence::{Nested, Param};
use serde::Deserialize;

use crate::geometry::Transform;

/// Internal porosity assumed for vug inclusions when the configuration
/// does not set one: a pure void.
pub const DEFAULT_VUG_POROSITY: f64 = 1.0;

/// Complete specification of a synthetic reservoir-grid case.
///
/// Per-layer sources (`poro`, `swat`, `fipnum`, `satnum`) accept a bare
/// scalar (applied to all layers), a list with one entry per layer, or
/// nested sub-lists that flatten to one entry per layer. A single-element
/// list broadcasts like a scalar.
///
/// # Examples
///
/// ```
/// use casegen_model::grid::CaseSpec;
///
/// let yaml = "
/// nx: 53
/// ny: 53
/// nz: 50
/// lx: 4.15
/// ly: 4.15
/// lz: 1.03
/// poro: 0.0912
/// ";
/// let spec: CaseSpec = serde_yaml::from_str(yaml).unwrap();
/// assert_eq!(spec.nx, 53);
/// assert!(spec.vug.is_none());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CaseSpec {
    /// Number of cells along x.
    pub nx: usize,
    /// Number of cells along y.
    pub ny: usize,
    /// Number of cells along z.
    pub nz: usize,

    /// Physical extent along x.
    pub lx: f64,
    /// Physical extent along y.
    pub ly: f64,
    /// Physical extent along z.
    pub lz: f64,

    /// Matrix porosity per layer.
    pub poro: Nested<f64>,

    /// Initial water saturation per layer.
    #[serde(default = "default_swat")]
    pub swat: Nested<f64>,

    /// Fluid-in-place region index per layer.
    #[serde(default = "default_region")]
    pub fipnum: Nested<i64>,

    /// Saturation-function region index per layer.
    #[serde(default = "default_region")]
    pub satnum: Nested<i64>,

    /// Optional stochastic vug inclusions.
    #[serde(default)]
    pub vug: Option<VugSpec>,

    /// Optional areal coordinate transform.
    #[serde(default)]
    pub transform: Option<Transform>,

    /// Optional random seed for reproducible vug sampling.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Stochastic vug-inclusion settings.
#[derive(Debug, Clone, Deserialize)]
pub struct VugSpec {
    /// Vug volume-fraction bounds: a scalar (degenerate, deterministic)
    /// or a `[low, high]` pair sampled per cell.
    pub volume: Param<f64>,

    /// Internal porosity of the vug inclusions.
    #[serde(default = "default_vug_porosity")]
    pub porosity: f64,
}

fn default_swat() -> Nested<f64> {
    Nested::Leaf(1.0)
}

fn default_region() -> Nested<i64> {
    Nested::Leaf(1)
}

fn default_vug_porosity() -> f64 {
    DEFAULT_VUG_POROSITY
}
