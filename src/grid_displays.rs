use std::fmt;

use crate::cells::{Cartesian2DCoordinate, Cartesian3DCoordinate, CubeCell, SquareCell};
use crate::grid::Grid;
use crate::units::{ColumnsCount, LayersCount, RowsCount};
use crate::walls::Direction;

const WALL_L: &str = "╴";
const WALL_R: &str = "╶";
const WALL_U: &str = "╵";
const WALL_D: &str = "╷";
const WALL_LR_3: &str = "───";
const WALL_LR: &str = "─";
const WALL_UD: &str = "│";
const WALL_LD: &str = "┐";
const WALL_RU: &str = "└";
const WALL_LU: &str = "┘";
const WALL_RD: &str = "┌";
const WALL_LRU: &str = "┴";
const WALL_LRD: &str = "┬";
const WALL_LRUD: &str = "┼";
const WALL_RUD: &str = "├";
const WALL_LUD: &str = "┤";
const DEFAULT_CELL_BODY: &str = "   ";

fn corner_glyph(left: bool, right: bool, up: bool, down: bool) -> &'static str {
    match (left, right, up, down) {
        (true, true, true, true) => WALL_LRUD,
        (true, true, true, false) => WALL_LRU,
        (true, true, false, true) => WALL_LRD,
        (true, false, true, true) => WALL_LUD,
        (false, true, true, true) => WALL_RUD,
        (true, true, false, false) => WALL_LR,
        (false, false, true, true) => WALL_UD,
        (false, true, true, false) => WALL_RU,
        (true, false, false, true) => WALL_LD,
        (true, false, true, false) => WALL_LU,
        (false, true, false, true) => WALL_RD,
        (true, false, false, false) => WALL_L,
        (false, true, false, false) => WALL_R,
        (false, false, true, false) => WALL_U,
        (false, false, false, true) => WALL_D,
        _ => " ",
    }
}

/// Draw one rectangular slice of cells, `y = rows` at the top.
///
/// `is_open(x, y, direction)` answers for cells of the slice, `body(x, y)` fills each cell.
fn render_slice<O, B>(columns: u32, rows: u32, is_open: O, body: B) -> String
    where O: Fn(u32, u32, Direction) -> bool,
          B: Fn(u32, u32) -> &'static str
{
    // Horizontal wall of column `x` on the line between row `line` and row `line + 1`.
    let h_wall = |x: u32, line: u32| if line == rows {
        !is_open(x, rows, Direction::Up)
    } else {
        !is_open(x, line + 1, Direction::Down)
    };
    // Vertical wall of row `y` on the line between column `line` and column `line + 1`.
    let v_wall = |line: u32, y: u32| if line == columns {
        !is_open(columns, y, Direction::Right)
    } else {
        !is_open(line + 1, y, Direction::Left)
    };

    let mut output = String::new();
    for line in (0..rows + 1).rev() {
        for x_line in 0..columns + 1 {
            let left = x_line >= 1 && h_wall(x_line, line);
            let right = x_line < columns && h_wall(x_line + 1, line);
            let up = line < rows && v_wall(x_line, line + 1);
            let down = line >= 1 && v_wall(x_line, line);
            output.push_str(corner_glyph(left, right, up, down));
            if x_line < columns {
                output.push_str(if right { WALL_LR_3 } else { DEFAULT_CELL_BODY });
            }
        }
        output.push('\n');

        if line >= 1 {
            for x_line in 0..columns + 1 {
                output.push_str(if v_wall(x_line, line) { WALL_UD } else { " " });
                if x_line < columns {
                    output.push_str(body(x_line + 1, line));
                }
            }
            output.push('\n');
        }
    }
    output
}

impl fmt::Display for Grid<SquareCell> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ColumnsCount(columns) = self.dimensions().columns();
        let RowsCount(rows) = self.dimensions().rows();
        let output = render_slice(columns as u32,
                                  rows as u32,
                                  |x, y, dir| self.is_open(Cartesian2DCoordinate::new(x, y), dir),
                                  |_, _| DEFAULT_CELL_BODY);
        write!(f, "{}", output)
    }
}

/// Each layer is drawn as its own slice, nearest layer first.
/// Cell bodies show passages between layers: `F` forward, `B` back, `X` both.
impl fmt::Display for Grid<CubeCell> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let ColumnsCount(columns) = self.dimensions().columns();
        let RowsCount(rows) = self.dimensions().rows();
        let LayersCount(layers) = self.dimensions().layers();

        for z in 1..layers as u32 + 1 {
            let is_open = |x, y, dir| self.is_open(Cartesian3DCoordinate::new(x, y, z), dir);
            let body = |x, y| {
                let coord = Cartesian3DCoordinate::new(x, y, z);
                match (self.is_open(coord, Direction::Forward), self.is_open(coord, Direction::Back)) {
                    (true, true) => " X ",
                    (true, false) => " F ",
                    (false, true) => " B ",
                    (false, false) => DEFAULT_CELL_BODY,
                }
            };
            writeln!(f, "layer {}", z)?;
            write!(f, "{}", render_slice(columns as u32, rows as u32, is_open, body))?;
        }
        Ok(())
    }
}
