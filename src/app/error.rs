use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Maze loading error: {0}")]
    MazeLoad(#[from] crate::grid::LoaderError),
    #[error("Decomposition error: {0}")]
    Decompose(#[from] crate::decompose::DecomposeError),
    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// `true` when the error points at a bug rather than at bad input.
    pub fn is_contract_violation(&self) -> bool {
        match self {
            Self::Decompose(e) => e.is_contract_violation(),
            _ => false,
        }
    }

    /// Short label for messages: a bug in the engine or a problem with the
    /// maze, files or environment the run was given.
    pub fn kind(&self) -> &'static str {
        if self.is_contract_violation() {
            "internal error"
        } else {
            "configuration error"
        }
    }
}
