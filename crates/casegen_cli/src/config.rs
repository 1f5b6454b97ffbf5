//! Case-configuration loading and command-line override merging.

use std::fs;

use casegen_core::sequence::Param;
use casegen_model::grid::{CaseSpec, VugSpec, DEFAULT_VUG_POROSITY};
use tracing::debug;

use crate::error::Result;

/// Command-line overrides applied on top of the YAML case spec.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Random seed override.
    pub seed: Option<u64>,
    /// Vug volume-fraction bounds override.
    pub vug_volume: Option<(f64, f64)>,
    /// Grid origin X override.
    pub origin_x: Option<f64>,
    /// Grid origin Y override.
    pub origin_y: Option<f64>,
    /// Grid rotation override in degrees.
    pub rotation: Option<f64>,
}

impl Overrides {
    fn touches_transform(&self) -> bool {
        self.origin_x.is_some() || self.origin_y.is_some() || self.rotation.is_some()
    }
}

/// Loads a case specification from a YAML file and applies overrides.
pub fn load_spec(path: &str, overrides: &Overrides) -> Result<CaseSpec> {
    debug!(path, "loading case configuration");
    let text = fs::read_to_string(path)?;
    let mut spec: CaseSpec = serde_yaml::from_str(&text)?;
    apply_overrides(&mut spec, overrides);
    Ok(spec)
}

/// Merges command-line overrides into a parsed specification.
///
/// A `--vug-volume` override replaces the configured bounds, creating a
/// vug section with the default void porosity when the configuration has
/// none. Transform overrides merge field-by-field into the configured
/// transform (identity when absent).
pub fn apply_overrides(spec: &mut CaseSpec, overrides: &Overrides) {
    if let Some(seed) = overrides.seed {
        spec.seed = Some(seed);
    }

    if let Some((low, high)) = overrides.vug_volume {
        let volume = Param::List(vec![low, high]);
        match spec.vug.as_mut() {
            Some(vug) => vug.volume = volume,
            None => {
                spec.vug = Some(VugSpec {
                    volume,
                    porosity: DEFAULT_VUG_POROSITY,
                })
            }
        }
    }

    if overrides.touches_transform() {
        let mut transform = spec.transform.unwrap_or_default();
        if let Some(origin_x) = overrides.origin_x {
            transform.origin_x = origin_x;
        }
        if let Some(origin_y) = overrides.origin_y {
            transform.origin_y = origin_y;
        }
        if let Some(rotation) = overrides.rotation {
            transform.rotation = rotation;
        }
        spec.transform = Some(transform);
    }
}
