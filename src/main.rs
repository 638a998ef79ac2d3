use docopt::Docopt;
use log::{info, trace};
use perfect_mazes::{
    cells::{Cartesian2DCoordinate, Cartesian3DCoordinate, Coordinate},
    grid_traits::{MazeScene, SceneRoot},
    mazes::{MazeConfig, MazeGenerator},
    walls::WallSet,
};
use serde_derive::Deserialize;
use std::{
    fs::File,
    io,
    io::prelude::*,
};

const USAGE: &str = "Perfect mazes

Usage:
    maze_driver -h | --help
    maze_driver [--rows=<r>] [--columns=<c>] [--seed=<s>] [--disable-cell-sprite] [--text-out=<path>]
    maze_driver cube [--rows=<r>] [--columns=<c>] [--layers=<l>] [--seed=<s>] [--disable-cell-sprite] [--text-out=<path>]

Options:
    -h --help               Show this screen.
    --rows=<r>              Rows in the maze. Odd counts drop by one, the minimum is 4 [default: 10].
    --columns=<c>           Columns in the maze. Odd counts drop by one, the minimum is 4 [default: 10].
    --layers=<l>            Layers in a cube maze. Odd counts drop by one, the minimum is 4 [default: 10].
    --seed=<s>              Seed for the random number generator. A random seed is used if not given.
    --disable-cell-sprite   Place cells without their floor sprite.
    --text-out=<path>       Output file path for a textual rendering of the maze instead of stdout.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_cube: bool,
    flag_rows: i64,
    flag_columns: i64,
    flag_layers: i64,
    flag_seed: Option<u64>,
    flag_disable_cell_sprite: bool,
    flag_text_out: String,
}

mod errors {
    use error_chain::*;
    error_chain! {

        links {
            Maze(::perfect_mazes::errors::Error, ::perfect_mazes::errors::ErrorKind);
        }

        foreign_links {
            DocOptFailure(::docopt::Error);
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

/// Stands in for a real scene: logs each placement and keeps a tally.
#[derive(Debug, Default)]
struct LoggingScene {
    cells_placed: usize,
    closed_walls: usize,
}

impl SceneRoot for LoggingScene {
    fn teardown(&mut self) {
        self.cells_placed = 0;
        self.closed_walls = 0;
    }
}

impl LoggingScene {
    fn place<C: Coordinate>(&mut self, coord: C, position: [f32; 3], walls: WallSet, walls_count: usize) {
        trace!("cell {:?} at {:?}, open walls {:?}", coord, position, walls);
        self.cells_placed += 1;
        self.closed_walls += walls_count - walls.open_count();
    }
}

impl MazeScene<Cartesian2DCoordinate> for LoggingScene {
    fn place_cell(&mut self,
                  coord: Cartesian2DCoordinate,
                  position: [f32; 3],
                  walls: WallSet,
                  _sprite_disabled: bool) {
        self.place(coord, position, walls, 4);
    }
}

impl MazeScene<Cartesian3DCoordinate> for LoggingScene {
    fn place_cell(&mut self,
                  coord: Cartesian3DCoordinate,
                  position: [f32; 3],
                  walls: WallSet,
                  _sprite_disabled: bool) {
        self.place(coord, position, walls, 6);
    }

    fn spawn_agent(&mut self, coord: Cartesian3DCoordinate, position: [f32; 3]) {
        info!("agent spawned at {} {:?}", coord, position);
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args: MazeArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())?;

    let seed = args.flag_seed.unwrap_or_else(|| {
        let seed = rand::random::<u64>();
        info!("no seed given, using {}", seed);
        seed
    });
    let config = MazeConfig::builder()
        .rows(args.flag_rows)
        .columns(args.flag_columns)
        .layers(args.flag_layers)
        .seed(seed)
        .disable_cell_sprite(args.flag_disable_cell_sprite)
        .build();

    let mut generator = MazeGenerator::new(config, LoggingScene::default());
    let rendering = if args.cmd_cube {
        let maze = generator.generate_3d()?;
        format!("{}", maze.grid)
    } else {
        let maze = generator.generate_2d()?;
        format!("{}", maze.grid)
    };
    let scene = generator.into_scene();
    info!("placed {} cells with {} closed walls (cell sprite disabled: {})",
          scene.cells_placed,
          scene.closed_walls,
          args.flag_disable_cell_sprite);

    if args.flag_text_out.is_empty() {
        println!("{}", rendering);
    } else {
        write_text_to_file(&rendering, &args.flag_text_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_text_out))?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let mut f = File::create(file_name)?;
    f.write_all(data.as_bytes())?;
    Ok(())
}
