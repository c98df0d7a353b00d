// maze.rs
// ──────────────────────────────────────────────────────────────────────────────
// Immutable occupancy grid. Every cell is either a wall or open; the open
// cells form an undirected graph under 4-directional moves. The degree of
// every cell (number of open neighbors) is computed once at construction so
// that the decomposer can ask for it in O(1).
// ──────────────────────────────────────────────────────────────────────────────
use serde::Serialize;
use std::fmt;

use super::error::MazeError;

/// A `(row, col)` grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One 4-directional move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Search priority order, also used for tie-breaking.
    pub const SEARCH_ORDER: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Order in which the decomposer walks neighbors.
    pub const WALK_ORDER: [Direction; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    pub fn label(self) -> &'static str {
        match self {
            Self::Up => "UP",
            Self::Right => "RIGHT",
            Self::Down => "DOWN",
            Self::Left => "LEFT",
        }
    }

    /// Applies the move to `pos`. Returns `None` when the move would leave
    /// the grid on the top or left side; bounds on the other sides are the
    /// caller's business.
    pub fn step(self, pos: Position) -> Option<Position> {
        match self {
            Self::Up => pos.row.checked_sub(1).map(|row| Position::new(row, pos.col)),
            Self::Right => Some(Position::new(pos.row, pos.col + 1)),
            Self::Down => Some(Position::new(pos.row + 1, pos.col)),
            Self::Left => pos.col.checked_sub(1).map(|col| Position::new(pos.row, col)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Wall,
    Open,
}

/// Represents a rectangular maze with a designated start and end cell.
#[derive(Clone, Debug, Serialize)]
pub struct GridMaze {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    start: Position,
    end: Position,
    #[serde(skip)]
    degrees: Vec<u8>,
}

// The maze bundled with the suite (1 = wall, 0 = open).
const BUILTIN_LAYOUT: [[u8; 15]; 15] = [
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1, 0, 1],
    [1, 0, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1],
    [1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1],
    [1, 0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1],
    [1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1],
];

impl GridMaze {
    /// Builds a maze from row-major cells.
    ///
    /// # Errors
    /// Returns `MazeError` if the grid is empty or ragged, or if `start` or
    /// `end` is not an open cell.
    pub fn new(cells: Vec<Vec<Cell>>, start: Position, end: Position) -> Result<Self, MazeError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MazeError::Empty);
        }
        for (row, line) in cells.iter().enumerate() {
            if line.len() != cols {
                return Err(MazeError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
        }

        let mut maze = Self {
            rows,
            cols,
            cells: cells.into_iter().flatten().collect(),
            start,
            end,
            degrees: Vec::new(),
        };
        if !maze.is_open(start) {
            return Err(MazeError::InvalidStart(start));
        }
        if !maze.is_open(end) {
            return Err(MazeError::InvalidEnd(end));
        }

        let degrees = (0..rows * cols)
            .map(|idx| {
                let pos = Position::new(idx / cols, idx % cols);
                if maze.is_open(pos) {
                    maze.open_neighbors(pos, Direction::WALK_ORDER).count() as u8
                } else {
                    0
                }
            })
            .collect();
        maze.degrees = degrees;
        Ok(maze)
    }

    /// Builds a maze from a `1` = wall / `0` = open matrix.
    pub fn from_bits<const C: usize>(
        bits: &[[u8; C]],
        start: Position,
        end: Position,
    ) -> Result<Self, MazeError> {
        let cells = bits
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&b| if b == 0 { Cell::Open } else { Cell::Wall })
                    .collect()
            })
            .collect();
        Self::new(cells, start, end)
    }

    /// Returns the 15×15 maze bundled with the suite.
    pub fn builtin() -> Self {
        Self::from_bits(&BUILTIN_LAYOUT, Position::new(0, 1), Position::new(14, 13))
            .unwrap_or_else(|e| unreachable!("bundled maze is valid: {e}"))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    /// Returns the cell at `pos`, or `None` when `pos` lies outside the grid.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(self.cells[pos.row * self.cols + pos.col])
        } else {
            None
        }
    }

    pub fn is_open(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Open)
    }

    /// Returns the open 4-directional neighbors of `pos` in walk order
    /// (up, left, down, right).
    pub fn neighbors_of(&self, pos: Position) -> Vec<Position> {
        self.open_neighbors(pos, Direction::WALK_ORDER).map(|(_, p)| p).collect()
    }

    /// Number of open neighbors of `pos` (0 for walls and out-of-bounds cells).
    pub fn degree(&self, pos: Position) -> usize {
        if pos.row < self.rows && pos.col < self.cols {
            self.degrees[pos.row * self.cols + pos.col] as usize
        } else {
            0
        }
    }

    /// Iterates the open neighbors of `pos` in the given direction order,
    /// yielding the move together with the reached cell.
    pub fn open_neighbors(
        &self,
        pos: Position,
        order: [Direction; 4],
    ) -> impl Iterator<Item = (Direction, Position)> + '_ {
        order
            .into_iter()
            .filter_map(move |dir| dir.step(pos).map(|next| (dir, next)))
            .filter(move |(_, next)| self.is_open(*next))
    }

    /// All open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows * self.cols)
            .map(move |idx| Position::new(idx / self.cols, idx % self.cols))
            .filter(move |pos| self.is_open(*pos))
    }
}
