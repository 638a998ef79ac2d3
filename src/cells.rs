use std::fmt;
use std::fmt::Debug;
use std::hash::Hash;

use crate::grid_dimensions::{CuboidGridDimensions, RectGridDimensions};
use crate::grid_traits::GridDimensions;
use crate::walls::{Direction, PLANAR_DIRECTIONS, SPATIAL_DIRECTIONS};

/// A grid-stable integer cell identifier. Coordinates start at 1 on every axis.
pub trait Coordinate
    : PartialEq + Eq + Hash + Copy + Clone + Debug + Ord + PartialOrd {

    /// Creates a new `Coordinate` offset 1 cell away in the given direction.
    /// Returns None if the direction has no meaning for this coordinate type or the result is not
    /// representable. The result is not checked against any grid.
    fn offset(&self, dir: Direction) -> Option<Self>;

    /// The direction of the wall on `self` that faces `other`.
    ///
    /// Axes are compared in the order x, y, z and the first one that differs decides. None if the
    /// coordinates are equal.
    fn direction_towards(&self, other: &Self) -> Option<Direction>;

    /// Exactly one axis differs, by exactly one.
    fn is_adjacent(&self, other: &Self) -> bool {
        self.direction_towards(other)
            .and_then(|dir| self.offset(dir))
            .map_or(false, |stepped| stepped == *other)
    }
}

/// Ties a coordinate type to the wall directions and grid shape it lives in.
pub trait Cell {
    type Coord: Coordinate;
    type Dimensions: GridDimensions<Self::Coord>;

    /// The directions a cell of this type has walls in, in neighbour search order.
    fn offset_directions() -> &'static [Direction];

    #[inline]
    fn supports(dir: Direction) -> bool {
        Self::offset_directions().contains(&dir)
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian2DCoordinate {
    pub x: u32,
    pub y: u32,
}

impl Cartesian2DCoordinate {
    pub fn new(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate { x, y }
    }
}

impl Coordinate for Cartesian2DCoordinate {
    fn offset(&self, dir: Direction) -> Option<Self> {
        let (x, y) = (self.x, self.y);
        match dir {
            Direction::Left => x.checked_sub(1).map(|x| Cartesian2DCoordinate::new(x, y)),
            Direction::Right => x.checked_add(1).map(|x| Cartesian2DCoordinate::new(x, y)),
            Direction::Up => y.checked_add(1).map(|y| Cartesian2DCoordinate::new(x, y)),
            Direction::Down => y.checked_sub(1).map(|y| Cartesian2DCoordinate::new(x, y)),
            Direction::Forward | Direction::Back => None,
        }
    }

    fn direction_towards(&self, other: &Self) -> Option<Direction> {
        if other.x < self.x {
            Some(Direction::Left)
        } else if other.x > self.x {
            Some(Direction::Right)
        } else if other.y > self.y {
            Some(Direction::Up)
        } else if other.y < self.y {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

impl From<(u32, u32)> for Cartesian2DCoordinate {
    fn from(x_y_pair: (u32, u32)) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x_y_pair.0, x_y_pair.1)
    }
}

impl fmt::Display for Cartesian2DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct Cartesian3DCoordinate {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl Cartesian3DCoordinate {
    pub fn new(x: u32, y: u32, z: u32) -> Cartesian3DCoordinate {
        Cartesian3DCoordinate { x, y, z }
    }

    /// The x/y part of the coordinate, as seen on its layer.
    pub fn as_cartesian_2d(&self) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(self.x, self.y)
    }
}

impl Coordinate for Cartesian3DCoordinate {
    fn offset(&self, dir: Direction) -> Option<Self> {
        let (x, y, z) = (self.x, self.y, self.z);
        match dir {
            Direction::Forward => z.checked_add(1).map(|z| Cartesian3DCoordinate::new(x, y, z)),
            Direction::Back => z.checked_sub(1).map(|z| Cartesian3DCoordinate::new(x, y, z)),
            planar => {
                self.as_cartesian_2d()
                    .offset(planar)
                    .map(|c| Cartesian3DCoordinate::new(c.x, c.y, z))
            }
        }
    }

    fn direction_towards(&self, other: &Self) -> Option<Direction> {
        self.as_cartesian_2d()
            .direction_towards(&other.as_cartesian_2d())
            .or_else(|| if other.z > self.z {
                Some(Direction::Forward)
            } else if other.z < self.z {
                Some(Direction::Back)
            } else {
                None
            })
    }
}

impl From<(u32, u32, u32)> for Cartesian3DCoordinate {
    fn from(x_y_z: (u32, u32, u32)) -> Cartesian3DCoordinate {
        Cartesian3DCoordinate::new(x_y_z.0, x_y_z.1, x_y_z.2)
    }
}

impl fmt::Display for Cartesian3DCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A cell on a flat rectangular grid with four walls.
#[derive(Copy, Clone, Debug)]
pub struct SquareCell;

impl Cell for SquareCell {
    type Coord = Cartesian2DCoordinate;
    type Dimensions = RectGridDimensions;

    #[inline]
    fn offset_directions() -> &'static [Direction] {
        &PLANAR_DIRECTIONS
    }
}

/// A cell in a cuboid grid of layers with six walls.
#[derive(Copy, Clone, Debug)]
pub struct CubeCell;

impl Cell for CubeCell {
    type Coord = Cartesian3DCoordinate;
    type Dimensions = CuboidGridDimensions;

    #[inline]
    fn offset_directions() -> &'static [Direction] {
        &SPATIAL_DIRECTIONS
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn planar_offsets() {
        let c = Cartesian2DCoordinate::new(2, 2);
        assert_eq!(c.offset(Direction::Left), Some(Cartesian2DCoordinate::new(1, 2)));
        assert_eq!(c.offset(Direction::Right), Some(Cartesian2DCoordinate::new(3, 2)));
        assert_eq!(c.offset(Direction::Up), Some(Cartesian2DCoordinate::new(2, 3)));
        assert_eq!(c.offset(Direction::Down), Some(Cartesian2DCoordinate::new(2, 1)));
        assert_eq!(c.offset(Direction::Forward), None);
        assert_eq!(c.offset(Direction::Back), None);

        let origin = Cartesian2DCoordinate::new(0, 0);
        assert_eq!(origin.offset(Direction::Left), None);
        assert_eq!(origin.offset(Direction::Down), None);
    }

    #[test]
    fn spatial_offsets() {
        let c = Cartesian3DCoordinate::new(2, 2, 2);
        assert_eq!(c.offset(Direction::Left), Some(Cartesian3DCoordinate::new(1, 2, 2)));
        assert_eq!(c.offset(Direction::Up), Some(Cartesian3DCoordinate::new(2, 3, 2)));
        assert_eq!(c.offset(Direction::Forward), Some(Cartesian3DCoordinate::new(2, 2, 3)));
        assert_eq!(c.offset(Direction::Back), Some(Cartesian3DCoordinate::new(2, 2, 1)));
    }

    #[test]
    fn direction_resolves_on_first_differing_axis() {
        let gc = |x, y, z| Cartesian3DCoordinate::new(x, y, z);
        assert_eq!(gc(2, 2, 2).direction_towards(&gc(1, 5, 9)), Some(Direction::Left));
        assert_eq!(gc(2, 2, 2).direction_towards(&gc(2, 3, 1)), Some(Direction::Up));
        assert_eq!(gc(2, 2, 2).direction_towards(&gc(2, 2, 1)), Some(Direction::Back));
        assert_eq!(gc(2, 2, 2).direction_towards(&gc(2, 2, 2)), None);
    }

    #[test]
    fn adjacency() {
        let gc = |x, y| Cartesian2DCoordinate::new(x, y);
        assert!(gc(1, 1).is_adjacent(&gc(1, 2)));
        assert!(gc(1, 2).is_adjacent(&gc(1, 1)));
        assert!(!gc(1, 1).is_adjacent(&gc(1, 1)));
        assert!(!gc(1, 1).is_adjacent(&gc(2, 2)));
        assert!(!gc(1, 1).is_adjacent(&gc(3, 1)));

        let gc3 = |x, y, z| Cartesian3DCoordinate::new(x, y, z);
        assert!(gc3(1, 1, 1).is_adjacent(&gc3(1, 1, 2)));
        assert!(!gc3(1, 1, 1).is_adjacent(&gc3(1, 2, 2)));
    }

    #[test]
    fn supported_directions() {
        assert!(SquareCell::supports(Direction::Up));
        assert!(!SquareCell::supports(Direction::Forward));
        assert!(CubeCell::supports(Direction::Forward));
        assert_eq!(CubeCell::offset_directions().len(), 6);
    }
}
