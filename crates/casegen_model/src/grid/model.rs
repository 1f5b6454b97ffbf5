//! Case model: validation and property-array generation.

use casegen_core::convert::{convert, i64_to_i32};
use casegen_core::rng::CaseRng;
use casegen_core::sequence::{Nested, Param};

use crate::geometry::{Extents, GridDimensions, Transform};

use super::error::ModelError;
use super::property::{quantize, Property};
use super::spec::{CaseSpec, VugSpec};
use super::summary::CaseSummary;

/// Decimal places real-valued arrays are quantized to before compaction.
const PROP_DECIMALS: u32 = 6;

/// Decimal places of the summary means.
const SUMMARY_DECIMALS: u32 = 4;

/// Validated vug-inclusion parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
struct VugBounds {
    low: f64,
    high: f64,
    porosity: f64,
}

/// A validated case model, ready to generate property arrays.
///
/// Construction listifies every per-layer source and validates all value
/// ranges up front, so generation cannot fail halfway through with a
/// partially-built case.
///
/// # Examples
///
/// ```
/// use casegen_model::grid::{CaseModel, CaseSpec};
///
/// let yaml = "
/// nx: 4
/// ny: 3
/// nz: 2
/// lx: 4.0
/// ly: 3.0
/// lz: 1.0
/// poro: [0.1, 0.2]
/// seed: 42
/// ";
/// let spec: CaseSpec = serde_yaml::from_str(yaml).unwrap();
/// let case = CaseModel::new(&spec).unwrap().generate().unwrap();
/// assert_eq!(case.property("PORO").unwrap().len(), 24);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CaseModel {
    dims: GridDimensions,
    extents: Extents,
    layer_poro: Vec<f64>,
    layer_swat: Vec<f64>,
    layer_fipnum: Vec<i32>,
    layer_satnum: Vec<i32>,
    vug: Option<VugBounds>,
    transform: Transform,
    seed: Option<u64>,
}

impl CaseModel {
    /// Validates a case specification into a model.
    ///
    /// # Errors
    ///
    /// Fails fast on invalid geometry, per-layer sources that cannot be
    /// broadcast to `nz` layers, region indices outside `i32`, or
    /// fraction/saturation values outside `[0, 1]`.
    pub fn new(spec: &CaseSpec) -> Result<Self, ModelError> {
        let dims = GridDimensions::new(spec.nx, spec.ny, spec.nz)?;
        let extents = Extents::new(spec.lx, spec.ly, spec.lz)?;
        let transform = spec.transform.unwrap_or_default();
        transform.validate()?;

        let nz = dims.nz();
        let layer_poro = layerify_fraction(&spec.poro, nz, "poro")?;
        let layer_swat = layerify_fraction(&spec.swat, nz, "swat")?;
        let layer_fipnum = layerify_index(&spec.fipnum, nz, "fipnum")?;
        let layer_satnum = layerify_index(&spec.satnum, nz, "satnum")?;
        let vug = spec.vug.as_ref().map(vug_bounds).transpose()?;

        Ok(Self {
            dims,
            extents,
            layer_poro,
            layer_swat,
            layer_fipnum,
            layer_satnum,
            vug,
            transform,
            seed: spec.seed,
        })
    }

    /// The validated grid dimensions.
    #[inline]
    pub fn dims(&self) -> &GridDimensions {
        &self.dims
    }

    /// The validated physical extents.
    #[inline]
    pub fn extents(&self) -> &Extents {
        &self.extents
    }

    /// The areal transform (identity when none was configured).
    #[inline]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The configured random seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The four areal corners of the grid outline after the transform:
    /// origin corner first, counterclockwise.
    pub fn outline(&self) -> [(f64, f64); 4] {
        let (lx, ly) = (self.extents.lx(), self.extents.ly());
        [
            self.transform.apply(0.0, 0.0),
            self.transform.apply(lx, 0.0),
            self.transform.apply(lx, ly),
            self.transform.apply(0.0, ly),
        ]
    }

    /// Generates all property arrays and the case summary.
    ///
    /// Cells are traversed i fastest, then j, then k. When vugs are
    /// configured, each cell's volume fraction is drawn from the
    /// configured bounds and the cell porosity becomes the
    /// volume-weighted mixture `poro * (1 - f) + vug_porosity * f`.
    ///
    /// For an identical model (seed included) two calls produce identical
    /// output; degenerate vug bounds are deterministic regardless of seed.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Sampling`] when the configured vug bounds
    /// are inverted (`low > high`).
    pub fn generate(&self) -> Result<Case, ModelError> {
        let cells = self.dims.num_cells();
        let mut rng = match self.seed {
            Some(seed) => CaseRng::from_seed(seed),
            None => CaseRng::from_entropy(),
        };

        let fractions = match self.vug {
            Some(bounds) => rng.sample_uniform(bounds.low, bounds.high, cells)?,
            None => vec![0.0; cells],
        };

        let mut poro = Vec::with_capacity(cells);
        let mut vugfrac = Vec::with_capacity(cells);
        let mut swat = Vec::with_capacity(cells);
        let mut fipnum = Vec::with_capacity(cells);
        let mut satnum = Vec::with_capacity(cells);

        let mut cell = 0;
        for k in 0..self.dims.nz() {
            let layer_poro = self.layer_poro[k];
            let layer_swat = self.layer_swat[k];
            let layer_fipnum = self.layer_fipnum[k];
            let layer_satnum = self.layer_satnum[k];
            for j in 0..self.dims.ny() {
                for i in 0..self.dims.nx() {
                    debug_assert_eq!(cell, self.dims.cell_index(i, j, k));
                    let fraction = fractions[cell];
                    let cell_poro = match self.vug {
                        Some(bounds) => {
                            layer_poro * (1.0 - fraction) + bounds.porosity * fraction
                        }
                        None => layer_poro,
                    };
                    poro.push(quantize(cell_poro, PROP_DECIMALS));
                    vugfrac.push(quantize(fraction, PROP_DECIMALS));
                    swat.push(quantize(layer_swat, PROP_DECIMALS));
                    fipnum.push(layer_fipnum);
                    satnum.push(layer_satnum);
                    cell += 1;
                }
            }
        }

        let (dx, dy, dz) = self.extents.cell_size(&self.dims);

        let summary = CaseSummary {
            nx: self.dims.nx(),
            ny: self.dims.ny(),
            nz: self.dims.nz(),
            lx: self.extents.lx(),
            ly: self.extents.ly(),
            lz: self.extents.lz(),
            poro: quantize(mean(&poro), SUMMARY_DECIMALS),
            swat: quantize(mean(&swat), SUMMARY_DECIMALS),
            origin_x: self.transform.origin_x,
            origin_y: self.transform.origin_y,
            rotation: self.transform.rotation,
        };

        let properties = vec![
            Property::real("PORO", poro),
            Property::real("VUGFRAC", vugfrac),
            Property::real("SWAT", swat),
            Property::int("FIPNUM", fipnum),
            Property::int("SATNUM", satnum),
            Property::real("DX", vec![quantize(dx, PROP_DECIMALS); cells]),
            Property::real("DY", vec![quantize(dy, PROP_DECIMALS); cells]),
            Property::real("DZ", vec![quantize(dz, PROP_DECIMALS); cells]),
        ];

        Ok(Case {
            summary,
            properties,
        })
    }
}

/// A generated case: scalar summary plus named property arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    summary: CaseSummary,
    properties: Vec<Property>,
}

impl Case {
    /// The scalar case summary.
    #[inline]
    pub fn summary(&self) -> &CaseSummary {
        &self.summary
    }

    /// All property arrays in emission order.
    #[inline]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Looks up a property array by deck keyword.
    pub fn property(&self, keyword: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|property| property.keyword() == keyword)
    }
}

/// Broadcasts a nested per-layer fraction source to `nz` layers and
/// validates every value into `[0, 1]`.
fn layerify_fraction(
    source: &Nested<f64>,
    nz: usize,
    field: &'static str,
) -> Result<Vec<f64>, ModelError> {
    let layers = Param::List(source.flatten())
        .listify(nz)
        .map_err(|err| ModelError::InvalidLayerSource { field, source: err })?;
    for &value in &layers {
        if !(0.0..=1.0).contains(&value) {
            return Err(ModelError::OutOfRange { field, value });
        }
    }
    Ok(layers)
}

/// Broadcasts a nested per-layer region-index source to `nz` layers,
/// narrowing to deck `i32` indices.
fn layerify_index(
    source: &Nested<i64>,
    nz: usize,
    field: &'static str,
) -> Result<Vec<i32>, ModelError> {
    convert(&Param::List(source.flatten()), |value| i64_to_i32(*value))
        .map_err(|err| ModelError::InvalidRegionIndex { field, source: err })?
        .listify(nz)
        .map_err(|err| ModelError::InvalidLayerSource { field, source: err })
}

/// Validates vug settings into sampling bounds.
fn vug_bounds(spec: &VugSpec) -> Result<VugBounds, ModelError> {
    let bounds = spec
        .volume
        .listify(2)
        .map_err(|err| ModelError::InvalidLayerSource {
            field: "vug.volume",
            source: err,
        })?;
    for &value in &bounds {
        if !(0.0..=1.0).contains(&value) {
            return Err(ModelError::OutOfRange {
                field: "vug.volume",
                value,
            });
        }
    }
    if !(0.0..=1.0).contains(&spec.porosity) {
        return Err(ModelError::OutOfRange {
            field: "vug.porosity",
            value: spec.porosity,
        });
    }
    Ok(VugBounds {
        low: bounds[0],
        high: bounds[1],
        porosity: spec.porosity,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::spec::DEFAULT_VUG_POROSITY;
    use approx::assert_relative_eq;

    fn base_spec() -> CaseSpec {
        CaseSpec {
            nx: 4,
            ny: 3,
            nz: 2,
            lx: 4.0,
            ly: 3.0,
            lz: 1.0,
            poro: Nested::Leaf(0.1),
            swat: Nested::Leaf(1.0),
            fipnum: Nested::Leaf(1),
            satnum: Nested::Leaf(1),
            vug: None,
            transform: None,
            seed: Some(42),
        }
    }

    #[test]
    fn test_all_arrays_cover_every_cell() {
        let case = CaseModel::new(&base_spec()).unwrap().generate().unwrap();
        for keyword in ["PORO", "VUGFRAC", "SWAT", "FIPNUM", "SATNUM", "DX", "DY", "DZ"] {
            let property = case.property(keyword).unwrap();
            assert_eq!(property.len(), 24, "{}", keyword);
        }
    }

    #[test]
    fn test_per_layer_broadcast() {
        let mut spec = base_spec();
        spec.poro = Nested::List(vec![Nested::Leaf(0.1), Nested::Leaf(0.3)]);
        let case = CaseModel::new(&spec).unwrap().generate().unwrap();
        match case.property("PORO").unwrap().values() {
            crate::grid::PropertyValues::Real(values) => {
                // First 12 cells are layer 0, next 12 layer 1.
                assert!(values[..12].iter().all(|&v| v == 0.1));
                assert!(values[12..].iter().all(|&v| v == 0.3));
            }
            other => panic!("expected real values, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_layer_groups_flatten() {
        let mut spec = base_spec();
        spec.fipnum = Nested::List(vec![
            Nested::List(vec![Nested::Leaf(1)]),
            Nested::Leaf(2),
        ]);
        let case = CaseModel::new(&spec).unwrap().generate().unwrap();
        assert_eq!(case.property("FIPNUM").unwrap().compacted().unwrap(), " 12*1 12*2");
    }

    #[test]
    fn test_layer_length_mismatch_rejected() {
        let mut spec = base_spec();
        spec.poro = Nested::List(vec![
            Nested::Leaf(0.1),
            Nested::Leaf(0.2),
            Nested::Leaf(0.3),
        ]);
        let err = CaseModel::new(&spec).unwrap_err();
        assert!(matches!(
            err,
            ModelError::InvalidLayerSource { field: "poro", .. }
        ));
    }

    #[test]
    fn test_fraction_out_of_range_rejected() {
        let mut spec = base_spec();
        spec.poro = Nested::Leaf(1.2);
        assert!(matches!(
            CaseModel::new(&spec).unwrap_err(),
            ModelError::OutOfRange { field: "poro", .. }
        ));
    }

    #[test]
    fn test_region_index_overflow_rejected() {
        let mut spec = base_spec();
        spec.satnum = Nested::Leaf(i64::from(i32::MAX) + 1);
        assert!(matches!(
            CaseModel::new(&spec).unwrap_err(),
            ModelError::InvalidRegionIndex {
                field: "satnum",
                ..
            }
        ));
    }

    #[test]
    fn test_degenerate_vug_mixing() {
        let mut spec = base_spec();
        spec.vug = Some(VugSpec {
            volume: Param::Scalar(0.1),
            porosity: 0.9112,
        });
        let case = CaseModel::new(&spec).unwrap().generate().unwrap();
        // poro = 0.1 * 0.9 + 0.9112 * 0.1 = 0.18112 in every cell.
        assert_relative_eq!(case.summary().poro, 0.1811, epsilon = 1e-12);
        match case.property("VUGFRAC").unwrap().values() {
            crate::grid::PropertyValues::Real(values) => {
                assert!(values.iter().all(|&v| v == 0.1));
            }
            other => panic!("expected real values, got {:?}", other),
        }
    }

    #[test]
    fn test_vug_default_porosity_is_void() {
        let mut spec = base_spec();
        spec.vug = Some(VugSpec {
            volume: Param::Scalar(0.5),
            porosity: DEFAULT_VUG_POROSITY,
        });
        let case = CaseModel::new(&spec).unwrap().generate().unwrap();
        // poro = 0.1 * 0.5 + 1.0 * 0.5 = 0.55
        assert_relative_eq!(case.summary().poro, 0.55, epsilon = 1e-12);
    }

    #[test]
    fn test_inverted_vug_bounds_fail_at_generation() {
        let mut spec = base_spec();
        spec.vug = Some(VugSpec {
            volume: Param::List(vec![0.3, 0.1]),
            porosity: 1.0,
        });
        let model = CaseModel::new(&spec).unwrap();
        assert!(matches!(
            model.generate().unwrap_err(),
            ModelError::Sampling(_)
        ));
    }

    #[test]
    fn test_vug_volume_out_of_range_rejected() {
        let mut spec = base_spec();
        spec.vug = Some(VugSpec {
            volume: Param::Scalar(1.5),
            porosity: 1.0,
        });
        assert!(matches!(
            CaseModel::new(&spec).unwrap_err(),
            ModelError::OutOfRange {
                field: "vug.volume",
                ..
            }
        ));
    }

    #[test]
    fn test_vug_bounds_pair_rejected_when_longer() {
        let mut spec = base_spec();
        spec.vug = Some(VugSpec {
            volume: Param::List(vec![0.1, 0.2, 0.3]),
            porosity: 1.0,
        });
        assert!(matches!(
            CaseModel::new(&spec).unwrap_err(),
            ModelError::InvalidLayerSource {
                field: "vug.volume",
                ..
            }
        ));
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut spec = base_spec();
        spec.vug = Some(VugSpec {
            volume: Param::List(vec![0.05, 0.3]),
            porosity: 0.9,
        });
        let model = CaseModel::new(&spec).unwrap();
        let first = model.generate().unwrap();
        let second = model.generate().unwrap();
        assert_eq!(
            first.property("PORO").unwrap().compacted().unwrap(),
            second.property("PORO").unwrap().compacted().unwrap()
        );
        assert_eq!(first.summary(), second.summary());
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut spec = base_spec();
        spec.vug = Some(VugSpec {
            volume: Param::List(vec![0.05, 0.3]),
            porosity: 0.9,
        });
        let first = CaseModel::new(&spec).unwrap().generate().unwrap();
        spec.seed = Some(43);
        let second = CaseModel::new(&spec).unwrap().generate().unwrap();
        assert_ne!(
            first.property("PORO").unwrap().compacted().unwrap(),
            second.property("PORO").unwrap().compacted().unwrap()
        );
    }

    #[test]
    fn test_grid_increments() {
        let case = CaseModel::new(&base_spec()).unwrap().generate().unwrap();
        assert_eq!(case.property("DX").unwrap().compacted().unwrap(), " 24*1");
        assert_eq!(case.property("DZ").unwrap().compacted().unwrap(), " 24*0.5");
    }

    #[test]
    fn test_outline_with_transform() {
        let mut spec = base_spec();
        spec.transform = Some(Transform::new(100.0, 200.0, 90.0));
        let model = CaseModel::new(&spec).unwrap();
        let outline = model.outline();
        assert_relative_eq!(outline[0].0, 100.0, epsilon = 1e-9);
        assert_relative_eq!(outline[0].1, 200.0, epsilon = 1e-9);
        // (lx, 0) rotates onto +y.
        assert_relative_eq!(outline[1].0, 100.0, epsilon = 1e-9);
        assert_relative_eq!(outline[1].1, 204.0, epsilon = 1e-9);
    }

    #[test]
    fn test_non_finite_rotation_rejected() {
        let mut spec = base_spec();
        spec.transform = Some(Transform::new(0.0, 0.0, f64::INFINITY));
        assert!(matches!(
            CaseModel::new(&spec).unwrap_err(),
            ModelError::Geometry(_)
        ));
    }
}
