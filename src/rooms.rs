use log::debug;
use rand::Rng;

use crate::cells::{Cartesian2DCoordinate, SquareCell};
use crate::errors::*;
use crate::generators::UnvisitedCells;
use crate::grid::Grid;
use crate::grid_dimensions::RectGridDimensions;
use crate::units::{ColumnsCount, RowsCount};
use crate::walls::Direction;

/// The 2x2 block of cells nearest the grid centre.
///
/// Order: top left, top right, bottom left, bottom right (y grows upwards).
pub fn centre_room(dimensions: &RectGridDimensions) -> [Cartesian2DCoordinate; 4] {
    let (ColumnsCount(columns), RowsCount(rows)) = (dimensions.columns(), dimensions.rows());
    let (c, r) = ((columns / 2) as u32, (rows / 2) as u32);
    [Cartesian2DCoordinate::new(c, r + 1),
     Cartesian2DCoordinate::new(c + 1, r + 1),
     Cartesian2DCoordinate::new(c, r),
     Cartesian2DCoordinate::new(c + 1, r)]
}

/// Knock the centre room through into one open 2x2 space and choose where carving starts.
///
/// One room cell is picked at random as the start. The other three are marked visited but the
/// carver never resumes from them, so the room only connects to the rest of the maze through the
/// start cell.
pub fn seed_centre_room<R: Rng>(grid: &mut Grid<SquareCell>,
                                unvisited: &mut UnvisitedCells,
                                rng: &mut R)
                                -> Result<Cartesian2DCoordinate> {
    let room = centre_room(grid.dimensions());
    let [top_left, top_right, bottom_left, bottom_right] = room;

    let _ = grid.open_wall(top_left, Direction::Down)?;
    let _ = grid.open_wall(top_left, Direction::Right)?;
    let _ = grid.open_wall(top_right, Direction::Down)?;
    let _ = grid.open_wall(top_right, Direction::Left)?;
    let _ = grid.open_wall(bottom_left, Direction::Up)?;
    let _ = grid.open_wall(bottom_left, Direction::Right)?;
    let _ = grid.open_wall(bottom_right, Direction::Up)?;
    let _ = grid.open_wall(bottom_right, Direction::Left)?;

    let start = room[rng.gen_range(0, room.len())];
    for coord in room.iter().filter(|coord| **coord != start) {
        let _ = unvisited.remove(grid, *coord);
    }

    debug!("centre room {:?} seeded, carving starts at {}", room, start);
    Ok(start)
}


#[cfg(test)]
mod tests {

    use petgraph::algo::is_cyclic_undirected;
    use rand::{SeedableRng, XorShiftRng};

    use super::*;

    fn gc(x: u32, y: u32) -> Cartesian2DCoordinate {
        Cartesian2DCoordinate::new(x, y)
    }

    fn square_grid(rows: i64, columns: i64) -> Grid<SquareCell> {
        Grid::new(RectGridDimensions::new(rows, columns).unwrap()).unwrap()
    }

    #[test]
    fn room_sits_at_the_centre() {
        let dims = RectGridDimensions::new(4, 4).unwrap();
        assert_eq!(centre_room(&dims), [gc(2, 3), gc(3, 3), gc(2, 2), gc(3, 2)]);

        let dims = RectGridDimensions::new(6, 10).unwrap();
        assert_eq!(centre_room(&dims), [gc(5, 4), gc(6, 4), gc(5, 3), gc(6, 3)]);
    }

    #[test]
    fn room_walls_form_a_loop() {
        let mut g = square_grid(8, 8);
        let mut unvisited = UnvisitedCells::all(&g);
        let mut rng = XorShiftRng::from_seed([1, 2, 3, 4]);
        let start = seed_centre_room(&mut g, &mut unvisited, &mut rng).unwrap();

        let room = centre_room(g.dimensions());
        assert!(room.contains(&start));
        assert_eq!(g.links_count(), 4);
        assert!(g.is_linked(gc(4, 5), gc(5, 5)));
        assert!(g.is_linked(gc(4, 4), gc(5, 4)));
        assert!(g.is_linked(gc(4, 5), gc(4, 4)));
        assert!(g.is_linked(gc(5, 5), gc(5, 4)));
        assert!(room.iter().all(|coord| g.walls(*coord).unwrap().open_count() == 2));
        assert!(is_cyclic_undirected(&g.passage_graph()));
        assert!(g.outward_openings().is_empty());
    }

    #[test]
    fn only_the_start_stays_unvisited() {
        for seed in 1..12 {
            let mut g = square_grid(4, 4);
            let mut unvisited = UnvisitedCells::all(&g);
            let mut rng = XorShiftRng::from_seed([seed, 7, 7, 7]);
            let start = seed_centre_room(&mut g, &mut unvisited, &mut rng).unwrap();

            assert_eq!(unvisited.len(), 13);
            assert!(unvisited.contains(&g, start));
            for coord in centre_room(g.dimensions()).iter().filter(|c| **c != start) {
                assert!(!unvisited.contains(&g, *coord));
            }
        }
    }
}
