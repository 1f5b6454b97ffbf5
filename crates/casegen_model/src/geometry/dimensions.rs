//! Validated grid dimensions and physical extents.

use super::error::GeometryError;

/// Cell counts of a structured 3D grid.
///
/// # Examples
///
/// ```
/// use casegen_model::geometry::GridDimensions;
///
/// let dims = GridDimensions::new(53, 53, 50).unwrap();
/// assert_eq!(dims.num_cells(), 140_450);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    nx: usize,
    ny: usize,
    nz: usize,
}

impl GridDimensions {
    /// Creates validated grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidDimensions`] when any axis has
    /// zero cells.
    pub fn new(nx: usize, ny: usize, nz: usize) -> Result<Self, GeometryError> {
        if nx == 0 || ny == 0 || nz == 0 {
            return Err(GeometryError::InvalidDimensions { nx, ny, nz });
        }
        Ok(Self { nx, ny, nz })
    }

    /// Cell count along x.
    #[inline]
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Cell count along y.
    #[inline]
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Cell count along z.
    #[inline]
    pub fn nz(&self) -> usize {
        self.nz
    }

    /// Total number of cells.
    #[inline]
    pub fn num_cells(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Linear index of cell `(i, j, k)` in the fixed traversal order:
    /// i fastest, then j, then k — `i + nx * (j + ny * k)`.
    ///
    /// Every property array this workspace produces uses this order; it
    /// is the contract consumed by deck writers and stable across runs.
    #[inline]
    pub fn cell_index(&self, i: usize, j: usize, k: usize) -> usize {
        debug_assert!(i < self.nx && j < self.ny && k < self.nz);
        i + self.nx * (j + self.ny * k)
    }
}

/// Physical extents of the grid along each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    lx: f64,
    ly: f64,
    lz: f64,
}

impl Extents {
    /// Creates validated extents.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidExtents`] when any extent is
    /// non-positive, NaN, or infinite.
    pub fn new(lx: f64, ly: f64, lz: f64) -> Result<Self, GeometryError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(lx) || !valid(ly) || !valid(lz) {
            return Err(GeometryError::InvalidExtents { lx, ly, lz });
        }
        Ok(Self { lx, ly, lz })
    }

    /// Extent along x.
    #[inline]
    pub fn lx(&self) -> f64 {
        self.lx
    }

    /// Extent along y.
    #[inline]
    pub fn ly(&self) -> f64 {
        self.ly
    }

    /// Extent along z.
    #[inline]
    pub fn lz(&self) -> f64 {
        self.lz
    }

    /// Uniform cell size `(dx, dy, dz)` for the given dimensions.
    #[inline]
    pub fn cell_size(&self, dims: &GridDimensions) -> (f64, f64, f64) {
        (
            self.lx / dims.nx() as f64,
            self.ly / dims.ny() as f64,
            self.lz / dims.nz() as f64,
        )
    }
}
