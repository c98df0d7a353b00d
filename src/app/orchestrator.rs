//! Main application orchestrator.
//!
//! Coordinates one run of the maze engine:
//! 1. Initializes logging.
//! 2. Loads the maze (file or bundled).
//! 3. Decomposes it into corridor runs and lays out the run tree.
//! 4. Runs the selected searches.
//! 5. Optionally exports everything as JSON.
//! 6. Replays each search in the terminal unless `--no-replay` is given.

use std::io::{self, Write};
use std::time::Duration;

use super::cli::Cli;
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::replay::{self, IntervalTicker};
use super::{verbose_eprintln, verbose_println};

const LOG_FILE: &str = "maze-trace.log";

/// Runs the application for the parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for unusable mazes, decomposition failures, or failed
/// JSON/terminal output. A search that finds no path is not an error.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(LOG_FILE) {
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                LOG_FILE, e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to {}", LOG_FILE);
        }
    }

    let maze = file_handler::resolve_maze(cli.maze_file.as_deref(), quiet_mode)?;
    verbose_println!(
        quiet_mode,
        "Maze {}x{}, start {}, end {}, {} open cells",
        maze.rows(),
        maze.cols(),
        maze.start(),
        maze.end(),
        maze.open_cells().count()
    );

    let decomposition = processing::build_decomposition(&maze, quiet_mode).inspect_err(|e| {
        verbose_eprintln!(quiet_mode, "[ERROR] Decomposition failed ({}): {}", e.kind(), e);
        eprintln!("Decomposition failed ({}): {}", e.kind(), e);
        flush_log(quiet_mode);
    })?;
    println!(
        "Decomposed {} open cells into {} corridor runs.",
        decomposition.tiles().len(),
        decomposition.tree().len()
    );

    let searches: Vec<_> = cli
        .algorithm
        .algorithms()
        .into_iter()
        .map(|algorithm| processing::run_search(&maze, algorithm, quiet_mode))
        .collect();
    for result in &searches {
        if result.found_path() {
            println!(
                "{}: path of {} moves after {} exploration frames.",
                result.algorithm,
                result.move_sequence.len(),
                result.history.len()
            );
        } else {
            println!(
                "{}: no path after {} exploration frames.",
                result.algorithm,
                result.history.len()
            );
        }
    }
    flush_log(quiet_mode);

    if let Some(json_path) = &cli.json {
        file_handler::write_trace_json(json_path, &maze, &decomposition, &searches)?;
        verbose_println!(quiet_mode, "\n[INFO] Trace written to {}", json_path.display());
        println!("Trace written to {}.", json_path.display());
    }

    if !cli.no_replay {
        let mut ticker = IntervalTicker::new(Duration::from_millis(cli.tick_ms));
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for result in &searches {
            let ticks = replay::replay_to_writer(&maze, result, &mut ticker, &mut out)?;
            verbose_println!(quiet_mode, "Replayed {} in {} ticks", result.algorithm, ticks);
        }
        out.flush()?;
    }

    flush_log(quiet_mode);
    if quiet_mode {
        println!("Done.");
    } else {
        println!("\nFinished. See '{}' for verbose output.", LOG_FILE);
    }
    Ok(())
}

fn flush_log(quiet_mode: bool) {
    if quiet_mode {
        return;
    }
    if let Err(e) = logger::flush_global_logger() {
        eprintln!("[WARNING] Failed to flush {}: {}", LOG_FILE, e);
    }
}
