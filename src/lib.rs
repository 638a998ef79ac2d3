//! **perfect_mazes** generates perfect mazes, one path between any two cells, with the recursive
//! backtracker.
//!
//! Square grids get a 2x2 room knocked through at the centre and a single exit on the boundary.
//! Cuboid grids are entered and left through opposite corners.

// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

pub mod cells;
pub mod errors;
pub mod exits;
pub mod generators;
pub mod grid;
pub mod grid_dimensions;
pub mod grid_displays;
pub mod grid_iterators;
pub mod grid_traits;
pub mod mazes;
pub mod rooms;
pub mod units;
pub mod walls;
mod utils;
