//! Core maze engine: grid model, procedural generation, reachability
//! validation, and session control.
//!
//! The crate is pure with respect to the terminal: rendering and input live
//! in the `maze-tui` crate, which consumes the types exported here.

mod generator;
mod reachability;
mod session;

pub use generator::{Generator, GeneratorConfig};
pub use reachability::is_reachable;
pub use session::{new_maze, MoveOutcome, Phase, Session};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced by the maze engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Dimensions too small for a walled border with distinct start and
    /// goal interior cells
    #[error("invalid maze dimensions {rows}x{cols}: need at least 3x3 with distinct start and goal cells")]
    InvalidDimensions { rows: usize, cols: usize },
    /// The regeneration loop hit its attempt ceiling without producing a
    /// reachable maze
    #[error("no reachable maze found after {attempts} attempts")]
    Exhausted { attempts: usize },
}

/// State of a single maze cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Impassable wall (border or obstacle)
    Wall,
    /// Open floor
    Open,
    /// The player's starting cell
    Start,
    /// The goal cell
    Goal,
}

impl Cell {
    /// Whether the player may occupy this cell
    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Wall)
    }

    /// ASCII form used by `Grid`'s `Display` impl
    pub fn as_char(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => ' ',
            Cell::Start => 'S',
            Cell::Goal => 'E',
        }
    }
}

/// A (row, col) coordinate into a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A 4-directional movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in BFS traversal order
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/col delta for this direction
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// A rectangular maze grid
///
/// Cells are stored row-major. Generated grids satisfy the invariants of
/// the generator: an unbroken `Wall` border, a unique `Start` at (1,1), and
/// a unique `Goal` at (rows-2, cols-2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with a `Wall` border and an `Open` interior
    pub fn bordered(rows: usize, cols: usize) -> Self {
        let mut cells = vec![Cell::Wall; rows * cols];
        for row in 1..rows.saturating_sub(1) {
            for col in 1..cols.saturating_sub(1) {
                cells[row * cols + col] = Cell::Open;
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// Cell at `pos`, or `None` out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `pos`; out-of-bounds positions panic
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let i = pos.row * self.cols + pos.col;
        self.cells[i] = cell;
    }

    /// Whether `pos` is in bounds and not a wall
    pub fn is_passable(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(Cell::is_passable)
    }

    /// The in-bounds neighbour of `pos` in `dir`, if any
    pub fn neighbor(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.offset();
        let row = pos.row.checked_add_signed(dr)?;
        let col = pos.col.checked_add_signed(dc)?;
        let next = Position::new(row, col);
        self.index(next).map(|_| next)
    }

    /// Locate the first cell equal to `target`, scanning row-major
    pub fn find(&self, target: Cell) -> Option<Position> {
        self.cells
            .iter()
            .position(|&c| c == target)
            .map(|i| Position::new(i / self.cols, i % self.cols))
    }

    /// Number of cells equal to `target`
    pub fn count(&self, target: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == target).count()
    }

    /// All interior (non-border) positions, row-major
    pub fn interior(&self) -> impl Iterator<Item = Position> + '_ {
        (1..self.rows.saturating_sub(1)).flat_map(move |row| {
            (1..self.cols.saturating_sub(1)).map(move |col| Position::new(row, col))
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.cells[row * self.cols + col].as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
