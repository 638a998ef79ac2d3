use std::cmp;

use error_chain::bail;
use log::debug;

use crate::cells::{Cartesian2DCoordinate, Cartesian3DCoordinate};
use crate::errors::*;
use crate::grid_traits::GridDimensions;
use crate::units::{CellSize, ColumnsCount, EdgesCount, LayersCount, NodesCount, RowsCount};

/// Smallest extent along any axis. Leaves room for the 2x2 centre room plus a ring around it.
pub const MINIMUM_DIMENSION: usize = 4;

/// Normalise a requested grid extent: odd values drop to the even number below, then anything
/// under `MINIMUM_DIMENSION` is raised to it.
///
/// Negative requests, or ones too large for a `u32` coordinate, are rejected.
pub fn normalise_dimension(axis: &'static str, requested: i64) -> Result<usize> {
    if requested < 0 || requested > i64::from(u32::MAX) {
        bail!(ErrorKind::InvalidDimension(axis, requested));
    }

    let even = if requested % 2 != 0 { requested - 1 } else { requested };
    let normalised = cmp::max(even as usize, MINIMUM_DIMENSION);
    if normalised as i64 != requested {
        debug!("normalised {} {} -> {}", axis, requested, normalised);
    }
    Ok(normalised)
}

fn checked_cells_count(extents: &[(&'static str, i64, usize)]) -> Result<usize> {
    extents.iter().try_fold(1usize, |count, &(axis, requested, extent)| {
        count.checked_mul(extent)
             .ok_or_else(|| Error::from(ErrorKind::InvalidDimension(axis, requested)))
    })
}

// Centre of cell `index` (1-based) along an axis of `extent` cells.
#[inline]
fn axis_position(index: u32, extent: usize, cell_size: CellSize) -> f32 {
    let CellSize(side) = cell_size;
    let start = -(side * (extent / 2) as f32) + side / 2.0;
    start + (index as f32 - 1.0) * side
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RectGridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
}

impl RectGridDimensions {
    pub fn new(rows: i64, columns: i64) -> Result<RectGridDimensions> {
        let normalised_rows = normalise_dimension("rows", rows)?;
        let normalised_columns = normalise_dimension("columns", columns)?;
        checked_cells_count(&[("rows", rows, normalised_rows),
                              ("columns", columns, normalised_columns)])?;

        Ok(RectGridDimensions {
            rows: RowsCount(normalised_rows),
            columns: ColumnsCount(normalised_columns),
        })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }
}

impl GridDimensions<Cartesian2DCoordinate> for RectGridDimensions {
    #[inline(always)]
    fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0)
    }

    fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.rows, self.columns);
        let internal_walls = rows * (columns - 1) + columns * (rows - 1);
        (self.size(), EdgesCount(internal_walls))
    }

    #[inline]
    fn contains(&self, coord: Cartesian2DCoordinate) -> bool {
        coord.x >= 1 && coord.x as usize <= self.columns.0 && coord.y >= 1 &&
        coord.y as usize <= self.rows.0
    }

    fn is_boundary(&self, coord: Cartesian2DCoordinate) -> bool {
        self.contains(coord) &&
        (coord.x == 1 || coord.x as usize == self.columns.0 || coord.y == 1 ||
         coord.y as usize == self.rows.0)
    }

    fn coordinate_at(&self, index: usize) -> Option<Cartesian2DCoordinate> {
        if index < self.size().0 {
            let RowsCount(rows) = self.rows;
            let x = index / rows + 1;
            let y = index % rows + 1;
            Some(Cartesian2DCoordinate::new(x as u32, y as u32))
        } else {
            None
        }
    }

    fn world_position(&self, coord: Cartesian2DCoordinate, cell_size: CellSize) -> [f32; 3] {
        [axis_position(coord.x, self.columns.0, cell_size),
         axis_position(coord.y, self.rows.0, cell_size),
         0.0]
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CuboidGridDimensions {
    rows: RowsCount,
    columns: ColumnsCount,
    layers: LayersCount,
}

impl CuboidGridDimensions {
    pub fn new(rows: i64, columns: i64, layers: i64) -> Result<CuboidGridDimensions> {
        let normalised_rows = normalise_dimension("rows", rows)?;
        let normalised_columns = normalise_dimension("columns", columns)?;
        let normalised_layers = normalise_dimension("layers", layers)?;
        checked_cells_count(&[("rows", rows, normalised_rows),
                              ("columns", columns, normalised_columns),
                              ("layers", layers, normalised_layers)])?;

        Ok(CuboidGridDimensions {
            rows: RowsCount(normalised_rows),
            columns: ColumnsCount(normalised_columns),
            layers: LayersCount(normalised_layers),
        })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn layers(&self) -> LayersCount {
        self.layers
    }

    /// The corner diagonally opposite `(1, 1, 1)`.
    pub fn far_corner(&self) -> Cartesian3DCoordinate {
        Cartesian3DCoordinate::new(self.columns.0 as u32,
                                   self.rows.0 as u32,
                                   self.layers.0 as u32)
    }
}

impl GridDimensions<Cartesian3DCoordinate> for CuboidGridDimensions {
    #[inline(always)]
    fn size(&self) -> NodesCount {
        NodesCount(self.rows.0 * self.columns.0 * self.layers.0)
    }

    fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let (r, c, l) = (self.rows.0, self.columns.0, self.layers.0);
        let internal_walls = (c - 1) * r * l + c * (r - 1) * l + c * r * (l - 1);
        (self.size(), EdgesCount(internal_walls))
    }

    #[inline]
    fn contains(&self, coord: Cartesian3DCoordinate) -> bool {
        let far = self.far_corner();
        coord.x >= 1 && coord.x <= far.x && coord.y >= 1 && coord.y <= far.y && coord.z >= 1 &&
        coord.z <= far.z
    }

    fn is_boundary(&self, coord: Cartesian3DCoordinate) -> bool {
        let far = self.far_corner();
        self.contains(coord) &&
        (coord.x == 1 || coord.x == far.x || coord.y == 1 || coord.y == far.y || coord.z == 1 ||
         coord.z == far.z)
    }

    fn coordinate_at(&self, index: usize) -> Option<Cartesian3DCoordinate> {
        if index < self.size().0 {
            let (RowsCount(rows), LayersCount(layers)) = (self.rows, self.layers);
            let x = index / (rows * layers) + 1;
            let y = (index / layers) % rows + 1;
            let z = index % layers + 1;
            Some(Cartesian3DCoordinate::new(x as u32, y as u32, z as u32))
        } else {
            None
        }
    }

    fn world_position(&self, coord: Cartesian3DCoordinate, cell_size: CellSize) -> [f32; 3] {
        [axis_position(coord.x, self.columns.0, cell_size),
         axis_position(coord.y, self.rows.0, cell_size),
         axis_position(coord.z, self.layers.0, cell_size)]
    }
}
