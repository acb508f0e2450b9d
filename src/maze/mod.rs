pub mod generate;
mod io;

pub use generate::GeneratorConfig;

use crate::geometry::Position;

use serde::{Deserialize, Serialize};
use std::fmt;


/// Successor offsets in canonical order: right, down, left, up
/// Exploration order and tie-breaking in every strategy depend on this order
pub const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];


/// State of a single grid cell
/// Persisted as 0 (free) or 1 (wall); any other integer loads as a wall
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum Cell {
    Free,
    Wall,
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        match value {
            0 => Cell::Free,
            _ => Cell::Wall,
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Free => 0,
            Cell::Wall => 1,
        }
    }
}


/// 2D grid maze with a start and a goal cell
/// Cells are addressed as `rows[y][x]`; the maze is never mutated by a search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    rows: Vec<Vec<Cell>>,
    width: usize, // length of the first row
    height: usize,
    start: Position,
    goal: Position,
}

impl Maze {

    /// Build a maze from rows of cells
    /// No validation is done: rows may be jagged and start/goal may be walls
    pub fn new(rows: Vec<Vec<Cell>>, start: Position, goal: Position) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        Self { rows, width, height, start, goal }
    }

    /// Build a maze from a text picture: `#` is a wall, anything else is free
    pub fn from_ascii(picture: &str, start: Position, goal: Position) -> Self {
        let rows = picture
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().map(|c| if c == '#' { Cell::Wall } else { Cell::Free }).collect())
            .collect();
        Self::new(rows, start, goal)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cell at (x, y), None when outside the grid
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x as usize >= self.width {
            return None;
        }
        self.rows.get(y as usize)?.get(x as usize).copied()
    }

    /// True if (x, y) lies inside the grid and is not a wall
    pub fn is_valid_position(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(Cell::Free)
    }

    /// Successor function
    /// Yields up to four free neighbors in canonical order (right, down, left, up)
    /// Steps past the i32 range are dropped
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dx, dy)| position.checked_offset(dx, dy))
            .filter(|p| self.is_valid_position(p.x, p.y))
    }

    /// Number of free cells in the grid
    pub fn free_cells(&self) -> usize {
        self.rows.iter().flatten().filter(|&&c| c == Cell::Free).count()
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let here = Position::new(x as i32, y as i32);
                let symbol = if here == self.start {
                    'S'
                } else if here == self.goal {
                    'G'
                } else if *cell == Cell::Wall {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
