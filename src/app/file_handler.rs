//! File system helpers for the application: choosing the maze source and
//! writing the JSON trace export.

use serde_json::json;
use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::{verbose_eprintln, verbose_println};
use crate::decompose::Decomposition;
use crate::grid::{self, GridMaze};
use crate::search::SearchResult;

/// Loads the maze from `maze_file`, or returns the bundled maze when no file
/// is given.
///
/// # Errors
/// Returns `AppError::MazeLoad` if the file cannot be read or parsed.
pub fn resolve_maze(maze_file: Option<&Path>, quiet_mode: bool) -> Result<GridMaze, AppError> {
    match maze_file {
        Some(path) => {
            verbose_println!(quiet_mode, "Loading maze from {}", path.display());
            grid::load_maze(path).map_err(|e| {
                verbose_eprintln!(quiet_mode, "Input Error: {}", e);
                AppError::MazeLoad(e)
            })
        }
        None => {
            verbose_println!(quiet_mode, "Using the bundled 15x15 maze");
            Ok(GridMaze::builtin())
        }
    }
}

/// Writes string content to a specified file, creating or overwriting it.
///
/// # Errors
/// Returns an `IoError` if opening, writing or flushing fails.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Builds the JSON document for a maze, its decomposition and search traces.
pub fn trace_json(
    maze: &GridMaze,
    decomposition: &Decomposition,
    searches: &[SearchResult],
) -> serde_json::Value {
    // Positions are not valid JSON object keys, so the maps become lists.
    let tiles: Vec<_> = decomposition.tiles().values().collect();
    let node_map: Vec<_> = decomposition
        .node_map()
        .iter()
        .map(|(pos, node)| json!({ "position": pos, "node": node }))
        .collect();

    json!({
        "maze": maze,
        "decomposition": {
            "entry": decomposition.entry(),
            "colors_used": decomposition.colors_used(),
            "tiles": tiles,
            "nodes": decomposition.tree().nodes(),
            "node_map": node_map,
        },
        "searches": searches,
    })
}

/// Writes the JSON trace export (pretty-printed) to `file_path`.
///
/// # Errors
/// Returns `AppError::Json` on serialization failure, `AppError::Io` on write failure.
pub fn write_trace_json(
    file_path: &Path,
    maze: &GridMaze,
    decomposition: &Decomposition,
    searches: &[SearchResult],
) -> Result<(), AppError> {
    let content = serde_json::to_string_pretty(&trace_json(maze, decomposition, searches))?;
    write_content_to_file(file_path, &content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose::{decompose, ColorAllocator};
    use crate::search::breadth_first_search;

    #[test]
    fn trace_json_lists_tiles_and_searches() {
        let maze = GridMaze::builtin();
        let decomposition = decompose(&maze, &mut ColorAllocator::default()).unwrap();
        let searches = vec![breadth_first_search(&maze)];

        let value = trace_json(&maze, &decomposition, &searches);

        assert_eq!(value["decomposition"]["tiles"].as_array().unwrap().len(), 100);
        assert_eq!(value["decomposition"]["node_map"].as_array().unwrap().len(), 100);
        assert_eq!(value["maze"]["start"], json!({ "row": 0, "col": 1 }));
        assert_eq!(value["searches"][0]["algorithm"], json!("breadth_first"));
        assert_eq!(value["searches"][0]["move_sequence"][0], json!("DOWN"));
    }

    #[test]
    fn missing_maze_file_is_a_load_error() {
        let err = resolve_maze(Some(Path::new("/nonexistent/maze.txt")), true).unwrap_err();
        assert!(matches!(err, AppError::MazeLoad(_)));
    }
}
