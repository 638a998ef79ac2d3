use std::cmp;

use bit_set::BitSet;
use error_chain::bail;
use log::{debug, trace};
use rand::Rng;

use crate::cells::Cell;
use crate::errors::*;
use crate::grid::{CoordinateSmallVec, Grid};

/// Cells not yet joined to the maze, by grid index.
#[derive(Debug, Clone)]
pub struct UnvisitedCells {
    unvisited: BitSet,
    remaining: usize,
}

impl UnvisitedCells {
    /// Every cell of the grid, none visited yet.
    pub fn all<CellT: Cell>(grid: &Grid<CellT>) -> UnvisitedCells {
        let mut unvisited = BitSet::with_capacity(grid.size());
        for index in 0..grid.size() {
            let _ = unvisited.insert(index);
        }
        UnvisitedCells {
            unvisited,
            remaining: grid.size(),
        }
    }

    /// Mark a cell visited. Returns false if it already was, or is not in the grid.
    pub fn remove<CellT: Cell>(&mut self, grid: &Grid<CellT>, coord: CellT::Coord) -> bool {
        let removed = grid.index_of(coord)
                          .map_or(false, |index| self.unvisited.remove(index));
        if removed {
            self.remaining -= 1;
        }
        removed
    }

    pub fn contains<CellT: Cell>(&self, grid: &Grid<CellT>, coord: CellT::Coord) -> bool {
        grid.index_of(coord)
            .map_or(false, |index| self.unvisited.contains(index))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.remaining
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }
}

/// What a carving run did.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CarveReport<C> {
    pub start: C,
    /// Cells joined to the maze by opening a wall.
    pub carved: usize,
    /// Times a dead end sent the carver back down the stack.
    pub backtracks: usize,
    pub peak_stack_depth: usize,
    pub unvisited_remaining: usize,
    pub stack_remaining: usize,
}

fn unvisited_neighbours<CellT: Cell>(grid: &Grid<CellT>,
                                     unvisited: &UnvisitedCells,
                                     coord: CellT::Coord)
                                     -> CoordinateSmallVec<CellT::Coord> {
    grid.neighbours(coord)
        .into_iter()
        .filter(|neighbour| unvisited.contains(grid, *neighbour))
        .collect()
}

/// Apply the recursive backtracker maze generation algorithm to a grid.
///
/// A randomised depth first walk from `start`: at each step pick a random unvisited neighbour,
/// knock down the wall to it and move there, remembering where we came from on a stack. At a dead
/// end pop the stack and carry on from there. Each step joins exactly one new cell to the maze, so
/// the passages carved form a spanning tree over the cells in `unvisited`.
///
/// Cells already visited (absent from `unvisited`) are never carved into. Running out of stack
/// while cells remain unvisited means part of the grid could not be reached, reported as an
/// `InvariantViolation`.
pub fn recursive_backtracker<CellT, R>(grid: &mut Grid<CellT>,
                                       start: CellT::Coord,
                                       mut unvisited: UnvisitedCells,
                                       rng: &mut R)
                                       -> Result<CarveReport<CellT::Coord>>
    where CellT: Cell,
          R: Rng
{
    if !grid.contains(start) {
        bail!(ErrorKind::InvalidCoordinate(format!("carving start {:?}", start)));
    }
    let _ = unvisited.remove(grid, start);

    let mut current = start;
    let mut stack: Vec<CellT::Coord> = Vec::new();
    let mut carved = 0;
    let mut backtracks = 0;
    let mut peak_stack_depth = 0;

    while !unvisited.is_empty() {
        let neighbours = unvisited_neighbours(grid, &unvisited, current);

        if !neighbours.is_empty() {
            let next = neighbours[rng.gen_range(0, neighbours.len())];
            stack.push(current);
            grid.link(current, next)?;
            trace!("carved {:?} -> {:?}", current, next);
            current = next;
            let _ = unvisited.remove(grid, current);

            carved += 1;
            peak_stack_depth = cmp::max(peak_stack_depth, stack.len());
        } else if let Some(previous) = stack.pop() {
            trace!("dead end at {:?}, back to {:?}", current, previous);
            current = previous;
            backtracks += 1;
        } else {
            bail!(ErrorKind::InvariantViolation(format!("{} cells unreachable from {:?}",
                                                        unvisited.len(),
                                                        start)));
        }
    }

    // Every cell is visited, so nothing left on the stack has anywhere to go.
    stack.clear();

    let report = CarveReport {
        start,
        carved,
        backtracks,
        peak_stack_depth,
        unvisited_remaining: unvisited.len(),
        stack_remaining: stack.len(),
    };
    debug!("recursive backtracker finished: {:?}", report);
    Ok(report)
}
