use std::fmt;
use std::slice;

use error_chain::bail;
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};
use smallvec::SmallVec;

use crate::cells::{Cell, Coordinate};
use crate::errors::*;
use crate::grid_iterators::GridCellIter;
use crate::grid_traits::GridDimensions;
use crate::units::NodesCount;
use crate::utils::{self, FnvHashMap};
use crate::walls::{Direction, WallSet};

/// Directions that point away from the origin on each axis. Walking only these visits every
/// internal wall exactly once.
static POSITIVE_DIRECTIONS: [Direction; 3] = [Direction::Right, Direction::Up, Direction::Forward];

pub type CoordinateSmallVec<C> = SmallVec<[C; 6]>;

/// One grid cell and the state of its walls.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct MazeCell<C: Coordinate> {
    coord: C,
    walls: WallSet,
}

impl<C: Coordinate> MazeCell<C> {
    fn new(coord: C) -> MazeCell<C> {
        MazeCell {
            coord,
            walls: WallSet::closed(),
        }
    }

    #[inline]
    pub fn coordinate(&self) -> C {
        self.coord
    }

    #[inline]
    pub fn walls(&self) -> WallSet {
        self.walls
    }
}

/// The cells of one maze, keyed by coordinate.
///
/// Built once with every wall closed, never resized. Only walls change afterwards, and only by
/// opening.
pub struct Grid<CellT: Cell> {
    dimensions: CellT::Dimensions,
    cells: Vec<MazeCell<CellT::Coord>>,
    lookup: FnvHashMap<CellT::Coord, usize>,
}

impl<CellT: Cell> fmt::Debug for Grid<CellT> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: dimensions: {:?}, cells: {:?}, links: {:?}",
               self.dimensions, self.size(), self.links_count())
    }
}

impl<CellT: Cell> Grid<CellT> {
    /// Allocate one closed cell per coordinate of `dimensions`.
    pub fn new(dimensions: CellT::Dimensions) -> Result<Grid<CellT>> {
        let NodesCount(cells_count) = dimensions.size();
        let mut cells = Vec::with_capacity(cells_count);
        let mut lookup = utils::fnv_hashmap(cells_count);

        for coord in GridCellIter::<CellT::Coord, _>::new(&dimensions) {
            if lookup.insert(coord, cells.len()).is_some() {
                bail!(ErrorKind::InvariantViolation(format!("coordinate {:?} enumerated twice", coord)));
            }
            cells.push(MazeCell::new(coord));
        }

        Ok(Grid {
            dimensions,
            cells,
            lookup,
        })
    }

    #[inline]
    pub fn dimensions(&self) -> &CellT::Dimensions {
        &self.dimensions
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn contains(&self, coord: CellT::Coord) -> bool {
        self.lookup.contains_key(&coord)
    }

    /// Position of the cell in the grid's enumeration order.
    #[inline]
    pub fn index_of(&self, coord: CellT::Coord) -> Option<usize> {
        self.lookup.get(&coord).cloned()
    }

    #[inline]
    pub fn cell(&self, coord: CellT::Coord) -> Option<&MazeCell<CellT::Coord>> {
        self.index_of(coord).map(|index| &self.cells[index])
    }

    #[inline]
    pub fn walls(&self, coord: CellT::Coord) -> Option<WallSet> {
        self.cell(coord).map(|cell| cell.walls)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<MazeCell<CellT::Coord>> {
        self.cells.iter()
    }

    pub fn coordinates<'a>(&'a self) -> impl Iterator<Item = CellT::Coord> + 'a
        where CellT: 'a
    {
        self.cells.iter().map(|cell| cell.coord)
    }

    /// The cell one step away in `direction`, if the grid has one there.
    pub fn neighbour_at_direction(&self,
                                  coord: CellT::Coord,
                                  direction: Direction)
                                  -> Option<CellT::Coord> {
        if !CellT::supports(direction) {
            return None;
        }
        coord.offset(direction)
             .and_then(|neighbour| if self.contains(neighbour) {
                 Some(neighbour)
             } else {
                 None
             })
    }

    /// Cells adjacent to `coord`, whether linked or not, in the cell type's direction order.
    pub fn neighbours(&self, coord: CellT::Coord) -> CoordinateSmallVec<CellT::Coord> {
        CellT::offset_directions()
            .iter()
            .filter_map(|dir| self.neighbour_at_direction(coord, *dir))
            .collect()
    }

    /// Open the wall of `coord` facing `direction`, and the matching wall of the neighbour on the
    /// other side if there is one. Without a neighbour the opening leads out of the grid.
    ///
    /// Returns whether the wall was closed before.
    pub fn open_wall(&mut self, coord: CellT::Coord, direction: Direction) -> Result<bool> {
        if !CellT::supports(direction) {
            bail!(ErrorKind::InvalidDirection(format!("{} is not a wall of {:?}", direction, coord)));
        }
        let index = self.index_of(coord)
                        .ok_or_else(|| ErrorKind::InvalidCoordinate(format!("{:?}", coord)))?;

        let was_closed = self.cells[index].walls.open(direction);
        if let Some(neighbour) = self.neighbour_at_direction(coord, direction) {
            if let Some(neighbour_index) = self.index_of(neighbour) {
                let _ = self.cells[neighbour_index].walls.open(direction.opposite());
            }
        }

        Ok(was_closed)
    }

    /// Open the wall shared by two adjacent cells.
    pub fn link(&mut self, a: CellT::Coord, b: CellT::Coord) -> Result<()> {
        if !self.contains(b) {
            bail!(ErrorKind::InvalidCoordinate(format!("{:?}", b)));
        }
        if !a.is_adjacent(&b) {
            bail!(ErrorKind::NotAdjacent(format!("{:?} and {:?}", a, b)));
        }
        let direction = a.direction_towards(&b)
                         .ok_or_else(|| ErrorKind::NotAdjacent(format!("{:?} and itself", a)))?;
        self.open_wall(a, direction).map(|_| ())
    }

    /// Are two cells in the grid joined by an open wall
    pub fn is_linked(&self, a: CellT::Coord, b: CellT::Coord) -> bool {
        self.contains(b) && a.is_adjacent(&b) &&
        a.direction_towards(&b)
         .map_or(false, |direction| self.is_open(a, direction))
    }

    /// Is the wall of `coord` facing `direction` open. False for coordinates outside the grid.
    pub fn is_open(&self, coord: CellT::Coord, direction: Direction) -> bool {
        self.walls(coord).map_or(false, |walls| walls.is_open(direction))
    }

    /// Number of open walls shared by two cells.
    pub fn links_count(&self) -> usize {
        self.iter_links().count()
    }

    /// Every pair of cells joined by an open wall, each pair once.
    pub fn iter_links<'a>(&'a self) -> impl Iterator<Item = (CellT::Coord, CellT::Coord)> + 'a
        where CellT: 'a
    {
        self.cells.iter().flat_map(move |cell| {
            POSITIVE_DIRECTIONS.iter().filter_map(move |dir| {
                if cell.walls.is_open(*dir) {
                    self.neighbour_at_direction(cell.coord, *dir)
                        .map(|neighbour| (cell.coord, neighbour))
                } else {
                    None
                }
            })
        })
    }

    /// Open walls that lead out of the grid.
    pub fn outward_openings(&self) -> Vec<(CellT::Coord, Direction)> {
        self.cells
            .iter()
            .flat_map(|cell| {
                cell.walls
                    .iter_open()
                    .filter(|dir| self.neighbour_at_direction(cell.coord, *dir).is_none())
                    .map(|dir| (cell.coord, dir))
                    .collect::<SmallVec<[(CellT::Coord, Direction); 2]>>()
            })
            .collect()
    }

    /// The open passages as an undirected graph. Node `i` is the cell at enumeration index `i`.
    pub fn passage_graph(&self) -> Graph<CellT::Coord, (), Undirected> {
        let mut graph = Graph::with_capacity(self.size(), self.size());
        for cell in &self.cells {
            let _ = graph.add_node(cell.coord);
        }
        for (a, b) in self.iter_links() {
            if let (Some(a_index), Some(b_index)) = (self.index_of(a), self.index_of(b)) {
                let _ = graph.add_edge(NodeIndex::new(a_index), NodeIndex::new(b_index), ());
            }
        }
        graph
    }
}
