use log::info;
use rand::{SeedableRng, XorShiftRng};

use crate::cells::{Cartesian2DCoordinate, Cartesian3DCoordinate, Cell, CubeCell, SquareCell};
use crate::errors::*;
use crate::exits::{self, CornerExits};
use crate::generators::{self, CarveReport, UnvisitedCells};
use crate::grid::Grid;
use crate::grid_dimensions::{CuboidGridDimensions, RectGridDimensions};
use crate::grid_traits::{GridDimensions, MazeScene, SceneRoot};
use crate::rooms;
use crate::units::CellSize;
use crate::walls::Direction;

const DEFAULT_EXTENT: i64 = 10;

/// Everything needed to generate and place a maze. `layers` only matters for 3D mazes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MazeConfig {
    pub rows: i64,
    pub columns: i64,
    pub layers: i64,
    pub seed: u64,
    pub disable_cell_sprite: bool,
    pub cell_size: CellSize,
}

impl Default for MazeConfig {
    fn default() -> MazeConfig {
        MazeConfig {
            rows: DEFAULT_EXTENT,
            columns: DEFAULT_EXTENT,
            layers: DEFAULT_EXTENT,
            seed: 0,
            disable_cell_sprite: false,
            cell_size: CellSize(1.0),
        }
    }
}

impl MazeConfig {
    pub fn builder() -> MazeConfigBuilder {
        MazeConfigBuilder::default()
    }
}

#[derive(Debug, Default, Clone)]
pub struct MazeConfigBuilder {
    config: MazeConfig,
}

impl MazeConfigBuilder {
    pub fn rows(mut self, rows: i64) -> Self {
        self.config.rows = rows;
        self
    }

    pub fn columns(mut self, columns: i64) -> Self {
        self.config.columns = columns;
        self
    }

    pub fn layers(mut self, layers: i64) -> Self {
        self.config.layers = layers;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn disable_cell_sprite(mut self, disable: bool) -> Self {
        self.config.disable_cell_sprite = disable;
        self
    }

    pub fn cell_size(mut self, cell_size: CellSize) -> Self {
        self.config.cell_size = cell_size;
        self
    }

    pub fn build(self) -> MazeConfig {
        self.config
    }
}

/// The random number generator a maze seed stands for.
///
/// Every seed maps to a valid xorshift state (never all zero words).
pub fn seeded_rng(seed: u64) -> XorShiftRng {
    let (low, high) = (seed as u32, (seed >> 32) as u32);
    XorShiftRng::from_seed([low ^ 0x193a_6754,
                            high ^ 0xa8a7_d469,
                            low ^ 0x9783_0e05,
                            high ^ 0x113b_a7bb])
}

/// A finished maze: the walls of every cell plus where it was entered and left.
#[derive(Debug)]
pub struct Maze<CellT: Cell> {
    pub grid: Grid<CellT>,
    /// Cell the carver started from.
    pub start: CellT::Coord,
    /// Walls opened to the outside of the grid.
    pub exits: Vec<(CellT::Coord, Direction)>,
    /// Where a traversal agent is spawned, if the maze has a fixed entry.
    pub entry: Option<CellT::Coord>,
    pub report: CarveReport<CellT::Coord>,
    pub seed: u64,
}

pub type Maze2D = Maze<SquareCell>;
pub type Maze3D = Maze<CubeCell>;

impl<CellT: Cell> Maze<CellT> {
    /// Hand every cell, and the entry if there is one, to a scene.
    pub fn instantiate<S>(&self, scene: &mut S, config: &MazeConfig)
        where S: MazeScene<CellT::Coord>
    {
        let dimensions = self.grid.dimensions();
        for cell in self.grid.iter() {
            let coord = cell.coordinate();
            scene.place_cell(coord,
                             dimensions.world_position(coord, config.cell_size),
                             cell.walls(),
                             config.disable_cell_sprite);
        }
        if let Some(entry) = self.entry {
            scene.spawn_agent(entry, dimensions.world_position(entry, config.cell_size));
        }
    }
}

/// Generate a 2D maze: centre room, carving from inside the room, then one boundary exit.
pub fn generate_2d(config: &MazeConfig) -> Result<Maze2D> {
    let dimensions = RectGridDimensions::new(config.rows, config.columns)?;
    let mut grid = Grid::<SquareCell>::new(dimensions)?;
    let mut rng = seeded_rng(config.seed);

    let mut unvisited = UnvisitedCells::all(&grid);
    let start = rooms::seed_centre_room(&mut grid, &mut unvisited, &mut rng)?;
    let report = generators::recursive_backtracker(&mut grid, start, unvisited, &mut rng)?;
    let exit = exits::carve_boundary_exit(&mut grid, &mut rng)?;

    info!("maze generation finished: {} rows x {} columns, seed {}",
          dimensions.rows().0,
          dimensions.columns().0,
          config.seed);
    Ok(Maze {
        grid,
        start,
        exits: vec![exit],
        entry: None,
        report,
        seed: config.seed,
    })
}

/// Generate a 3D maze: carving from the origin corner, entry and exit at opposite corners.
pub fn generate_3d(config: &MazeConfig) -> Result<Maze3D> {
    let dimensions = CuboidGridDimensions::new(config.rows, config.columns, config.layers)?;
    let mut grid = Grid::<CubeCell>::new(dimensions)?;
    let mut rng = seeded_rng(config.seed);

    let start = Cartesian3DCoordinate::new(1, 1, 1);
    let unvisited = UnvisitedCells::all(&grid);
    let report = generators::recursive_backtracker(&mut grid, start, unvisited, &mut rng)?;
    let CornerExits { entry, exit } = exits::carve_corner_exits(&mut grid)?;

    info!("maze generation finished: {} rows x {} columns x {} layers, seed {}",
          dimensions.rows().0,
          dimensions.columns().0,
          dimensions.layers().0,
          config.seed);
    Ok(Maze {
        grid,
        start,
        exits: vec![(entry, Direction::Back), (exit, Direction::Forward)],
        entry: Some(entry),
        report,
        seed: config.seed,
    })
}

/// Regenerates mazes into one scene, clearing out the previous maze first.
#[derive(Debug)]
pub struct MazeGenerator<S> {
    config: MazeConfig,
    scene: S,
    populated: bool,
}

impl<S: SceneRoot> MazeGenerator<S> {
    pub fn new(config: MazeConfig, scene: S) -> MazeGenerator<S> {
        MazeGenerator {
            config,
            scene,
            populated: false,
        }
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: MazeConfig) {
        self.config = config;
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn into_scene(self) -> S {
        self.scene
    }

    fn clear_previous(&mut self) {
        if self.populated {
            self.scene.teardown();
            self.populated = false;
        }
    }

    pub fn generate_2d(&mut self) -> Result<Maze2D>
        where S: MazeScene<Cartesian2DCoordinate>
    {
        self.clear_previous();
        let maze = generate_2d(&self.config)?;
        maze.instantiate(&mut self.scene, &self.config);
        self.populated = true;
        Ok(maze)
    }

    pub fn generate_3d(&mut self) -> Result<Maze3D>
        where S: MazeScene<Cartesian3DCoordinate>
    {
        self.clear_previous();
        let maze = generate_3d(&self.config)?;
        maze.instantiate(&mut self.scene, &self.config);
        self.populated = true;
        Ok(maze)
    }
}


#[cfg(test)]
mod tests {

    use petgraph::algo::{connected_components, is_cyclic_undirected};
    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::walls::WallSet;

    fn config_2d(rows: i64, columns: i64, seed: u64) -> MazeConfig {
        MazeConfig::builder().rows(rows).columns(columns).seed(seed).build()
    }

    fn config_3d(rows: i64, columns: i64, layers: i64, seed: u64) -> MazeConfig {
        MazeConfig::builder().rows(rows).columns(columns).layers(layers).seed(seed).build()
    }

    fn wall_bits<CellT: Cell>(maze: &Maze<CellT>) -> Vec<u8> {
        maze.grid.iter().map(|cell| cell.walls().bits()).collect()
    }

    #[test]
    fn config_defaults() {
        let config = MazeConfig::default();
        assert_eq!((config.rows, config.columns, config.layers), (10, 10, 10));
        assert!(!config.disable_cell_sprite);
        assert_eq!(config.cell_size, CellSize(1.0));
        assert_eq!(MazeConfig::builder().build(), config);
    }

    #[test]
    fn seeds_never_give_a_dead_rng() {
        use rand::Rng;
        for seed in &[0, 1, u64::max_value(), 0x193a_6754, 0xa8a7_d469_0000_0000] {
            let mut rng = seeded_rng(*seed);
            let draws = (0..4).map(|_| rng.next_u32()).collect::<Vec<_>>();
            assert!(draws.iter().any(|draw| *draw != 0));
        }
    }

    #[test]
    fn square_maze_is_a_tree_plus_the_room_loop() {
        let maze = generate_2d(&config_2d(10, 12, 42)).unwrap();
        let graph = maze.grid.passage_graph();

        assert_eq!(maze.grid.size(), 120);
        assert_eq!(maze.grid.links_count(), 120);
        assert_eq!(connected_components(&graph), 1);
        assert!(is_cyclic_undirected(&graph));
        assert_eq!(maze.report.carved, 120 - 4);
        assert_eq!(maze.report.unvisited_remaining, 0);
        assert!(rooms::centre_room(maze.grid.dimensions()).contains(&maze.start));
        assert_eq!(maze.entry, None);
    }

    #[test]
    fn square_maze_has_one_boundary_exit() {
        let maze = generate_2d(&config_2d(8, 8, 9)).unwrap();
        let openings = maze.grid.outward_openings();
        assert_eq!(openings, maze.exits);
        assert_eq!(openings.len(), 1);
        assert!(maze.grid.dimensions().is_boundary(openings[0].0));
    }

    #[test]
    fn odd_request_normalises_to_four_by_four() {
        let maze = generate_2d(&config_2d(5, 5, 1)).unwrap();
        assert_eq!(maze.grid.dimensions().rows().0, 4);
        assert_eq!(maze.grid.dimensions().columns().0, 4);
        assert_eq!(maze.grid.size(), 16);
    }

    #[test]
    fn negative_request_is_rejected() {
        match generate_2d(&config_2d(-2, 4, 1)) {
            Err(Error(ErrorKind::InvalidDimension("rows", -2), _)) => {}
            other => panic!("expected InvalidDimension, got {:?}", other),
        }
        assert!(generate_3d(&config_3d(4, 4, -1, 1)).is_err());
    }

    #[test]
    fn golden_four_by_four() {
        let maze = generate_2d(&config_2d(4, 4, 2024)).unwrap();
        assert_eq!(maze.start, GOLDEN_START);
        assert_eq!(maze.exits, vec![GOLDEN_EXIT]);
        assert_eq!(wall_bits(&maze), GOLDEN_WALLS.to_vec());
    }

    // Wall bits of every cell of the 4x4 maze with seed 2024, in enumeration order.
    const GOLDEN_START: Cartesian2DCoordinate = Cartesian2DCoordinate { x: 2, y: 3 };
    const GOLDEN_EXIT: (Cartesian2DCoordinate, Direction) = (Cartesian2DCoordinate { x: 1, y: 3 },
                                                             Direction::Left);
    const GOLDEN_WALLS: [u8; 16] = [0b0110, 0b1100, 0b1011, 0b0010,
                                    0b0011, 0b0110, 0b1011, 0b0011,
                                    0b0011, 0b0101, 0b1001, 0b0011,
                                    0b0101, 0b1100, 0b1100, 0b1001];

    #[test]
    fn same_seed_same_maze() {
        let first = generate_2d(&config_2d(12, 8, 77)).unwrap();
        let second = generate_2d(&config_2d(12, 8, 77)).unwrap();
        assert_eq!(wall_bits(&first), wall_bits(&second));
        assert_eq!(first.exits, second.exits);

        let first = generate_3d(&config_3d(4, 6, 4, 77)).unwrap();
        let second = generate_3d(&config_3d(4, 6, 4, 77)).unwrap();
        assert_eq!(wall_bits(&first), wall_bits(&second));
    }

    #[test]
    fn cube_maze_from_the_corner() {
        let maze = generate_3d(&config_3d(4, 4, 4, 3)).unwrap();

        assert_eq!(maze.start, Cartesian3DCoordinate::new(1, 1, 1));
        assert_eq!(maze.report.start, maze.start);
        assert_eq!(maze.report.unvisited_remaining, 0);
        assert_eq!(maze.report.stack_remaining, 0);
        assert_eq!(maze.grid.links_count(), 63);
        let graph = maze.grid.passage_graph();
        assert_eq!(connected_components(&graph), 1);
        assert!(!is_cyclic_undirected(&graph));
    }

    #[test]
    fn cube_maze_corner_exits() {
        let maze = generate_3d(&config_3d(4, 6, 8, 5)).unwrap();
        let far = Cartesian3DCoordinate::new(6, 4, 8);
        assert_eq!(maze.entry, Some(Cartesian3DCoordinate::new(1, 1, 1)));
        assert_eq!(maze.grid.outward_openings(),
                   vec![(Cartesian3DCoordinate::new(1, 1, 1), Direction::Back),
                        (far, Direction::Forward)]);
        assert_eq!(maze.exits, maze.grid.outward_openings());
    }

    #[test]
    fn quickcheck_square_mazes_are_connected_with_one_loop() {
        fn p(rows: u8, columns: u8, seed: u64) -> TestResult {
            let config = config_2d(i64::from(rows % 20), i64::from(columns % 20), seed);
            let maze = match generate_2d(&config) {
                Ok(maze) => maze,
                Err(_) => return TestResult::failed(),
            };
            let graph = maze.grid.passage_graph();
            TestResult::from_bool(maze.grid.links_count() == maze.grid.size() &&
                                  connected_components(&graph) == 1 &&
                                  maze.grid.outward_openings().len() == 1)
        }
        quickcheck(p as fn(u8, u8, u64) -> TestResult);
    }

    #[test]
    fn quickcheck_cube_mazes_are_spanning_trees() {
        fn p(rows: u8, columns: u8, layers: u8, seed: u64) -> TestResult {
            let config = config_3d(i64::from(rows % 9),
                                   i64::from(columns % 9),
                                   i64::from(layers % 9),
                                   seed);
            let maze = match generate_3d(&config) {
                Ok(maze) => maze,
                Err(_) => return TestResult::failed(),
            };
            let graph = maze.grid.passage_graph();
            TestResult::from_bool(maze.grid.links_count() == maze.grid.size() - 1 &&
                                  connected_components(&graph) == 1 &&
                                  !is_cyclic_undirected(&graph))
        }
        quickcheck(p as fn(u8, u8, u8, u64) -> TestResult);
    }

    #[test]
    fn quickcheck_generation_is_deterministic() {
        fn p(rows: u8, columns: u8, seed: u64) -> bool {
            let config = config_2d(i64::from(rows % 16), i64::from(columns % 16), seed);
            match (generate_2d(&config), generate_2d(&config)) {
                (Ok(a), Ok(b)) => wall_bits(&a) == wall_bits(&b) && a.exits == b.exits,
                _ => false,
            }
        }
        quickcheck(p as fn(u8, u8, u64) -> bool);
    }

    #[derive(Debug, Default)]
    struct RecordingScene {
        teardowns: usize,
        placed: Vec<(String, [f32; 3], WallSet, bool)>,
        agents: Vec<[f32; 3]>,
    }

    impl SceneRoot for RecordingScene {
        fn teardown(&mut self) {
            self.teardowns += 1;
            self.placed.clear();
            self.agents.clear();
        }
    }

    impl MazeScene<Cartesian2DCoordinate> for RecordingScene {
        fn place_cell(&mut self,
                      coord: Cartesian2DCoordinate,
                      position: [f32; 3],
                      walls: WallSet,
                      sprite_disabled: bool) {
            self.placed.push((coord.to_string(), position, walls, sprite_disabled));
        }
    }

    impl MazeScene<Cartesian3DCoordinate> for RecordingScene {
        fn place_cell(&mut self,
                      coord: Cartesian3DCoordinate,
                      position: [f32; 3],
                      walls: WallSet,
                      sprite_disabled: bool) {
            self.placed.push((coord.to_string(), position, walls, sprite_disabled));
        }

        fn spawn_agent(&mut self, _coord: Cartesian3DCoordinate, position: [f32; 3]) {
            self.agents.push(position);
        }
    }

    #[test]
    fn generator_places_every_cell() {
        let config = MazeConfig::builder().rows(4).columns(4).disable_cell_sprite(true).build();
        let mut generator = MazeGenerator::new(config, RecordingScene::default());
        let maze = generator.generate_2d().unwrap();

        let scene = generator.scene();
        assert_eq!(scene.teardowns, 0);
        assert_eq!(scene.placed.len(), 16);
        assert!(scene.placed.iter().all(|placed| placed.3));
        assert_eq!(scene.placed[0].1, [-1.5, -1.5, 0.0]);
        let walls = maze.grid.iter().map(|cell| cell.walls()).collect::<Vec<_>>();
        assert_eq!(scene.placed.iter().map(|placed| placed.2).collect::<Vec<_>>(), walls);
        assert!(scene.agents.is_empty());
    }

    #[test]
    fn regeneration_tears_down_the_previous_maze() {
        let config = config_3d(4, 4, 4, 8);
        let mut generator = MazeGenerator::new(config, RecordingScene::default());
        let _ = generator.generate_3d().unwrap();
        assert_eq!(generator.scene().teardowns, 0);
        assert_eq!(generator.scene().agents, vec![[-1.5, -1.5, -1.5]]);

        generator.set_config(config_3d(6, 4, 4, 9));
        let maze = generator.generate_3d().unwrap();
        let scene = generator.into_scene();
        assert_eq!(scene.teardowns, 1);
        assert_eq!(scene.placed.len(), maze.grid.size());
        assert_eq!(scene.placed.len(), 96);
        assert_eq!(scene.agents.len(), 1);
    }
}
