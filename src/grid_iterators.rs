use std::fmt;
use std::marker::PhantomData;

use crate::cells::Coordinate;
use crate::grid_traits::GridDimensions;

/// Every coordinate of a grid's extent in enumeration order (x outermost, z innermost).
#[derive(Clone)]
pub struct GridCellIter<'a, C: Coordinate, D: GridDimensions<C>> {
    dimensions: &'a D,
    current_cell_number: usize,
    cells_count: usize,
    coordinate_type: PhantomData<C>,
}

impl<'a, C: Coordinate, D: GridDimensions<C>> GridCellIter<'a, C, D> {
    pub fn new(dimensions: &'a D) -> GridCellIter<'a, C, D> {
        GridCellIter {
            dimensions,
            current_cell_number: 0,
            cells_count: dimensions.size().0,
            coordinate_type: PhantomData,
        }
    }
}

impl<'a, C: Coordinate, D: GridDimensions<C>> fmt::Debug for GridCellIter<'a, C, D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "GridCellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl<'a, C: Coordinate, D: GridDimensions<C>> ExactSizeIterator for GridCellIter<'a, C, D> {} // default impl using size_hint()
impl<'a, C: Coordinate, D: GridDimensions<C>> Iterator for GridCellIter<'a, C, D> {
    type Item = C;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let coord = self.dimensions.coordinate_at(self.current_cell_number);
            self.current_cell_number += 1;
            coord
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
