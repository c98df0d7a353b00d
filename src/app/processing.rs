//! Runs the engine stages for one maze: decomposition with tree layout, and
//! the individual searches. Each stage logs a summary to the verbose log.

use super::error::AppError;
use super::verbose_println;
use crate::decompose::{decompose, ColorAllocator, Decomposition};
use crate::grid::GridMaze;
use crate::layout::{layout_tree, LayoutConfig};
use crate::search::{SearchAlgorithm, SearchResult};

/// Horizontal space per maze column handed to the tree layout.
const LAYOUT_UNITS_PER_COLUMN: f64 = 40.0;

/// Decomposes the maze into corridor runs and lays out the run tree.
///
/// # Errors
/// Returns `AppError::Decompose` for disconnected mazes, palette exhaustion or
/// an internal walk error.
pub fn build_decomposition(maze: &GridMaze, quiet_mode: bool) -> Result<Decomposition, AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Decomposing maze into corridor runs...");
    let mut colors = ColorAllocator::default();
    let mut decomposition = decompose(maze, &mut colors)?;

    let branch_cells = maze.open_cells().filter(|&p| maze.degree(p) > 2).count();
    verbose_println!(
        quiet_mode,
        "   => {} tiles, {} runs, {} branch cells, {} colors left",
        decomposition.tiles().len(),
        decomposition.tree().len(),
        branch_cells,
        colors.remaining()
    );

    verbose_println!(quiet_mode, "[STEP 2] Laying out run tree...");
    let width = maze.cols() as f64 * LAYOUT_UNITS_PER_COLUMN;
    layout_tree(decomposition.tree_mut(), &LayoutConfig::default(), width);

    for (id, node) in decomposition.tree().nodes().iter().enumerate() {
        verbose_println!(
            quiet_mode,
            "   Node {} at {} color {} -> ({:.1}, {:.1}) domain [{:.1}, {:.1}] children {:?}{}{}",
            id,
            node.position,
            node.color,
            node.display_x,
            node.display_y,
            node.left_domain,
            node.right_domain,
            node.children,
            if node.is_start { " [start]" } else { "" },
            if node.is_end { " [end]" } else { "" }
        );
    }
    Ok(decomposition)
}

/// Runs one search and logs its outcome.
pub fn run_search(maze: &GridMaze, algorithm: SearchAlgorithm, quiet_mode: bool) -> SearchResult {
    verbose_println!(quiet_mode, "[STEP 3] Running {} search...", algorithm);
    let result = algorithm.run(maze);
    if result.found_path() {
        let moves: Vec<&str> = result.move_sequence.iter().map(|d| d.label()).collect();
        verbose_println!(
            quiet_mode,
            "   => {} moves, {} exploration frames: {}",
            result.move_sequence.len(),
            result.history.len(),
            moves.join(" ")
        );
    } else {
        verbose_println!(
            quiet_mode,
            "   => No path from {} to {} ({} exploration frames)",
            maze.start(),
            maze.end(),
            result.history.len()
        );
    }
    result
}
