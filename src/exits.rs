use error_chain::bail;
use log::debug;
use rand::Rng;

use crate::cells::{Cartesian2DCoordinate, Cartesian3DCoordinate, CubeCell, SquareCell};
use crate::errors::*;
use crate::grid::Grid;
use crate::grid_dimensions::RectGridDimensions;
use crate::grid_traits::GridDimensions;
use crate::units::{ColumnsCount, RowsCount};
use crate::walls::Direction;

/// The outward wall a boundary exit opens on `coord`.
///
/// Edges are checked left, right, top then bottom so a corner takes the first edge it sits on.
pub fn boundary_exit_direction(dimensions: &RectGridDimensions,
                               coord: Cartesian2DCoordinate)
                               -> Direction {
    let (ColumnsCount(columns), RowsCount(rows)) = (dimensions.columns(), dimensions.rows());
    if coord.x == 1 {
        Direction::Left
    } else if coord.x as usize == columns {
        Direction::Right
    } else if coord.y as usize == rows {
        Direction::Up
    } else {
        Direction::Down
    }
}

/// Open one wall to the outside on a boundary cell chosen at random.
pub fn carve_boundary_exit<R: Rng>(grid: &mut Grid<SquareCell>,
                                   rng: &mut R)
                                   -> Result<(Cartesian2DCoordinate, Direction)> {
    let boundary = grid.coordinates()
                       .filter(|coord| grid.dimensions().is_boundary(*coord))
                       .collect::<Vec<_>>();
    if boundary.is_empty() {
        bail!(ErrorKind::InvariantViolation("grid has no boundary cells".to_owned()));
    }

    let exit = boundary[rng.gen_range(0, boundary.len())];
    let direction = boundary_exit_direction(grid.dimensions(), exit);
    let _ = grid.open_wall(exit, direction)?;

    debug!("boundary exit at {} facing {}", exit, direction);
    Ok((exit, direction))
}

/// The two openings of a 3D maze. The entry is where a traversal agent is spawned.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CornerExits {
    pub entry: Cartesian3DCoordinate,
    pub exit: Cartesian3DCoordinate,
}

/// Open `Back` on the origin corner and `Forward` on the far corner.
pub fn carve_corner_exits(grid: &mut Grid<CubeCell>) -> Result<CornerExits> {
    let exits = CornerExits {
        entry: Cartesian3DCoordinate::new(1, 1, 1),
        exit: grid.dimensions().far_corner(),
    };
    let _ = grid.open_wall(exits.entry, Direction::Back)?;
    let _ = grid.open_wall(exits.exit, Direction::Forward)?;

    debug!("entry at {}, exit at {}", exits.entry, exits.exit);
    Ok(exits)
}
