use crate::grid::Position;
use thiserror::Error;

// Error type for corridor decomposition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    /// Error when the walk is asked to visit a wall or out-of-bounds cell.
    /// This is a bug in the caller, not a problem with the maze.
    #[error("Decomposition visited {0}, which is not an open cell")]
    InvalidCell(Position),

    /// Error when the maze has more corridor runs than the palette has colors.
    #[error("Color palette exhausted after {used} corridor runs")]
    OutOfColors { used: usize },

    /// Error when some open cells cannot be reached from the entry cell.
    #[error("Maze is disconnected: {unreached} open cell(s) unreachable from the entry")]
    Disconnected { unreached: usize },
}

impl DecomposeError {
    /// `true` for programming errors, `false` for unusable maze configurations.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Self::InvalidCell(_))
    }
}
