use std::fmt::Debug;

use crate::cells::Coordinate;
use crate::units::{CellSize, EdgesCount, NodesCount};
use crate::walls::WallSet;

/// Extent of a grid, already normalised.
pub trait GridDimensions<C: Coordinate>: Debug + Clone {
    fn size(&self) -> NodesCount;

    /// (cells, walls shared by two adjacent cells)
    fn graph_size(&self) -> (NodesCount, EdgesCount);

    /// Is the coordinate within the grid's extent
    fn contains(&self, coord: C) -> bool;

    /// Is the coordinate on an outer edge or face of the grid
    fn is_boundary(&self, coord: C) -> bool;

    /// Coordinate at position `index` of the grid's enumeration order: x outermost, then y, then z.
    fn coordinate_at(&self, index: usize) -> Option<C>;

    /// Centre of the cell in world space, with the grid centred on the origin.
    fn world_position(&self, coord: C, cell_size: CellSize) -> [f32; 3];
}

/// The root container every placed cell hangs off.
pub trait SceneRoot {
    /// Destroy everything placed by the previous generation.
    fn teardown(&mut self);
}

/// Instantiates a generated maze as scene objects.
///
/// Generation never touches a scene directly: the finished walls are handed over cell by cell.
pub trait MazeScene<C: Coordinate>: SceneRoot {
    /// Place one cell. Only walls still closed in `walls` should be shown.
    fn place_cell(&mut self, coord: C, position: [f32; 3], walls: WallSet, sprite_disabled: bool);

    /// Spawn the traversal agent at the maze entry.
    fn spawn_agent(&mut self, _coord: C, _position: [f32; 3]) {}
}
