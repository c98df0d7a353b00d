//! Terminal replay of a search trace. A [`TickSource`] paces the playback
//! controller; each tick is followed by an ASCII frame of the maze.

use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::grid::{GridMaze, Position};
use crate::playback::{PlaybackController, PlaybackState};
use crate::search::SearchResult;

/// Waits until the next playback tick is due.
pub trait TickSource {
    fn wait(&mut self);
}

/// Fixed-interval ticks backed by `thread::sleep`.
#[derive(Clone, Copy, Debug)]
pub struct IntervalTicker {
    interval: Duration,
}

impl IntervalTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl TickSource for IntervalTicker {
    fn wait(&mut self) {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
    }
}

/// Writes one ASCII frame: `#` wall, `.` open, `o` visited, `+` frontier,
/// `*` final path, `@` marker.
pub fn render_frame(
    maze: &GridMaze,
    playback: &PlaybackController,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    for row in 0..maze.rows() {
        let line: String = (0..maze.cols())
            .map(|col| {
                let pos = Position::new(row, col);
                if pos == playback.marker() {
                    '@'
                } else if !maze.is_open(pos) {
                    '#'
                } else if playback.final_path_cells().contains(&pos) {
                    '*'
                } else if playback.frontier().contains(&pos) {
                    '+'
                } else if playback.visited().contains(&pos) {
                    'o'
                } else {
                    '.'
                }
            })
            .collect();
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}

/// Replays `result` until playback goes idle, one frame per tick.
/// Returns the number of ticks taken.
pub fn replay_to_writer(
    maze: &GridMaze,
    result: &SearchResult,
    ticker: &mut dyn TickSource,
    writer: &mut dyn Write,
) -> std::io::Result<usize> {
    let mut playback = PlaybackController::new(maze.start());
    playback.start(result.clone());

    writeln!(writer, "=== {} REPLAY ===", result.algorithm)?;
    let mut ticks = 0;
    while playback.state() != PlaybackState::Idle {
        ticker.wait();
        playback.tick();
        ticks += 1;

        let phase = match playback.state() {
            PlaybackState::Exploring => "exploring",
            PlaybackState::PathWalking => "walking path",
            PlaybackState::Idle => "done",
        };
        writeln!(writer, "tick {} ({})", ticks, phase)?;
        render_frame(maze, &playback, writer)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(ticks)
}
