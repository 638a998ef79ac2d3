use std::fmt;

use crate::errors::*;

/// The axis-aligned directions a cell can have a wall towards.
///
/// `Right`/`Left` move along x, `Up`/`Down` along y and `Forward`/`Back` along z.
/// Planar (2D) cells only use the first four.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug, Ord, PartialOrd)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
    Forward,
    Back,
}

pub static PLANAR_DIRECTIONS: [Direction; 4] = [Direction::Left,
                                                Direction::Right,
                                                Direction::Up,
                                                Direction::Down];

pub static SPATIAL_DIRECTIONS: [Direction; 6] = [Direction::Left,
                                                 Direction::Right,
                                                 Direction::Up,
                                                 Direction::Down,
                                                 Direction::Forward,
                                                 Direction::Back];

impl Direction {
    #[inline]
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Forward => Direction::Back,
            Direction::Back => Direction::Forward,
        }
    }

    /// Numeric wall id, in the order the directions are declared.
    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
            Direction::Forward => 4,
            Direction::Back => 5,
        }
    }

    pub fn from_id(id: u8) -> Result<Direction> {
        SPATIAL_DIRECTIONS.get(id as usize)
                          .cloned()
                          .ok_or_else(|| ErrorKind::InvalidDirection(format!("no wall with id {}", id)).into())
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << self.id()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Open/closed state of every wall around one cell.
///
/// A cleared bit is a wall that is present. Walls only ever open.
#[derive(Eq, PartialEq, Hash, Copy, Clone, Default)]
pub struct WallSet {
    open: u8,
}

impl WallSet {
    /// All walls present.
    pub fn closed() -> WallSet {
        WallSet::default()
    }

    /// Opens the wall in `dir`. Returns false if it was already open.
    #[inline]
    pub fn open(&mut self, dir: Direction) -> bool {
        let was_closed = self.is_closed(dir);
        self.open |= dir.bit();
        was_closed
    }

    #[inline]
    pub fn is_open(&self, dir: Direction) -> bool {
        self.open & dir.bit() != 0
    }

    #[inline]
    pub fn is_closed(&self, dir: Direction) -> bool {
        !self.is_open(dir)
    }

    #[inline]
    pub fn open_count(&self) -> usize {
        self.open.count_ones() as usize
    }

    /// Raw bits, one per `Direction::id`.
    #[inline]
    pub fn bits(&self) -> u8 {
        self.open
    }

    pub fn iter_open(&self) -> impl Iterator<Item = Direction> + '_ {
        SPATIAL_DIRECTIONS.iter()
                          .cloned()
                          .filter(move |dir| self.is_open(*dir))
    }
}

impl fmt::Debug for WallSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter_open()).finish()
    }
}
