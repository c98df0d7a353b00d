// error module
mod error;
// loader module
mod loader;
// maze module
mod maze;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the grid modules.
//─────────────────────────────────────────────────────────────────────────────
pub use error::{LoaderError, MazeError};
pub use loader::{load_maze, parse_maze};
pub use maze::{Cell, Direction, GridMaze, Position};
