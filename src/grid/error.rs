use super::Position;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for maze construction.
/// All variants are configuration errors: the maze cannot be used at all.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Error when the grid has no rows or no columns.
    #[error("Maze grid is empty.")]
    Empty,

    /// Error when a row does not have the same width as the first row.
    #[error("Maze row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Error when the start cell is outside the grid or is a wall.
    #[error("Start cell {0} is not an open cell of the maze")]
    InvalidStart(Position),

    /// Error when the end cell is outside the grid or is a wall.
    #[error("End cell {0} is not an open cell of the maze")]
    InvalidEnd(Position),
}

/// Error type for loading a maze from its text form.
#[derive(Error, Debug)]
pub enum LoaderError {
    /// Error when reading a file.
    #[error("Failed to read maze file '{0}': {1}")]
    ReadFile(String, std::io::Error),

    /// Error when a character has no cell meaning.
    #[error("Unknown cell character {ch:?} at line {line}, column {column}")]
    UnknownCell { line: usize, column: usize, ch: char },

    /// Error when `S` or `E` appears more than once.
    #[error("Marker '{0}' appears more than once in the maze")]
    DuplicateMarker(char),

    /// Error when no marker is given and the border has no opening to default to.
    #[error("No '{0}' marker and no opening on the maze border to use instead")]
    NoDefaultOpening(char),

    /// Error when the parsed grid is not a valid maze.
    #[error("Invalid maze: {0}")]
    Maze(#[from] MazeError),
}
