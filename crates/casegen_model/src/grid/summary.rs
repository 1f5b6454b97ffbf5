//! Scalar key/value summary of a generated case.

/// Scalar summary values recorded alongside the property arrays.
///
/// `poro` and `swat` are arithmetic means over all cells, rounded to four
/// decimals; the transform parameters are recorded verbatim (zeros for
/// the identity transform).
#[derive(Debug, Clone, PartialEq)]
pub struct CaseSummary {
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
    /// Mean porosity over all cells, rounded to four decimals.
    pub poro: f64,
    /// Mean water saturation over all cells, rounded to four decimals.
    pub swat: f64,
    /// Grid origin x coordinate.
    pub origin_x: f64,
    /// Grid origin y coordinate.
    pub origin_y: f64,
    /// Grid rotation in degrees, positive counterclockwise.
    pub rotation: f64,
}

impl CaseSummary {
    /// Ordered `(key, value)` entries as written to the summary file.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("nx", self.nx.to_string()),
            ("ny", self.ny.to_string()),
            ("nz", self.nz.to_string()),
            ("lx", self.lx.to_string()),
            ("ly", self.ly.to_string()),
            ("lz", self.lz.to_string()),
            ("poro", self.poro.to_string()),
            ("swat", self.swat.to_string()),
            ("originX", self.origin_x.to_string()),
            ("originY", self.origin_y.to_string()),
            ("rotation", self.rotation.to_string()),
        ]
    }
}
