use serde::Serialize;
use std::collections::BTreeSet;

use super::error::PlaybackError;
use crate::grid::Position;
use crate::search::SearchResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlaybackState {
    Idle,
    /// Replaying exploration frames.
    Exploring,
    /// Walking the marker along the found path.
    PathWalking,
}

/// Replays a [`SearchResult`] one tick at a time: first every exploration
/// frame, then the path move by move.
///
/// The controller never sleeps; whoever owns it calls [`tick`](Self::tick)
/// at a fixed interval and reads the overlays afterwards.
#[derive(Clone, Debug)]
pub struct PlaybackController {
    state: PlaybackState,
    home: Position,
    session: Option<SearchResult>,
    history_index: usize,
    path_index: usize,
    paused: bool,
    step_requested: bool,
    marker: Position,
    visited: BTreeSet<Position>,
    frontier: BTreeSet<Position>,
    final_path_cells: BTreeSet<Position>,
}

impl PlaybackController {
    /// Creates an idle controller with the marker at `home`.
    pub fn new(home: Position) -> Self {
        Self {
            state: PlaybackState::Idle,
            home,
            session: None,
            history_index: 0,
            path_index: 0,
            paused: false,
            step_requested: false,
            marker: home,
            visited: BTreeSet::new(),
            frontier: BTreeSet::new(),
            final_path_cells: BTreeSet::new(),
        }
    }

    /// Starts replaying `result`, replacing any running session.
    pub fn start(&mut self, result: SearchResult) {
        self.home = result.start;
        self.marker = result.start;
        self.history_index = 0;
        self.path_index = 0;
        self.paused = false;
        self.step_requested = false;
        self.visited.clear();
        self.frontier.clear();
        self.final_path_cells.clear();

        let no_history = result.history.is_empty();
        self.session = Some(result);
        self.state = PlaybackState::Exploring;
        if no_history {
            self.enter_path_phase();
        }
    }

    /// Advances playback by one frame or move. Does nothing while idle, or
    /// while paused unless a single step was requested.
    pub fn tick(&mut self) {
        if self.state == PlaybackState::Idle || (self.paused && !self.step_requested) {
            return;
        }
        self.step_requested = false;

        let Some(session) = self.session.as_ref() else {
            self.state = PlaybackState::Idle;
            return;
        };
        match self.state {
            PlaybackState::Exploring => {
                if let Some(frame) = session.history.get(self.history_index) {
                    self.visited = frame.visited.clone();
                    self.frontier = frame.frontier.clone();
                    self.marker = frame.current;
                }
                self.history_index += 1;
                if self.history_index >= session.history.len() {
                    self.enter_path_phase();
                }
            }
            PlaybackState::PathWalking => {
                if let Some(next) = session
                    .move_sequence
                    .get(self.path_index)
                    .and_then(|dir| dir.step(self.marker))
                {
                    self.marker = next;
                }
                self.path_index += 1;
                if self.path_index >= session.move_sequence.len() {
                    self.state = PlaybackState::Idle;
                }
            }
            PlaybackState::Idle => {}
        }
    }

    /// # Errors
    /// Returns `PlaybackError::NotRunning` when idle.
    pub fn pause(&mut self) -> Result<(), PlaybackError> {
        self.ensure_running()?;
        self.paused = true;
        Ok(())
    }

    /// # Errors
    /// Returns `PlaybackError::NotRunning` when idle.
    pub fn resume(&mut self) -> Result<(), PlaybackError> {
        self.ensure_running()?;
        self.paused = false;
        self.step_requested = false;
        Ok(())
    }

    /// Pauses (if needed) and advances exactly one tick.
    ///
    /// # Errors
    /// Returns `PlaybackError::NotRunning` when idle.
    pub fn step(&mut self) -> Result<(), PlaybackError> {
        self.ensure_running()?;
        self.paused = true;
        self.step_requested = true;
        self.tick();
        Ok(())
    }

    /// Stops playback and clears every overlay. Calling it twice is the same
    /// as calling it once.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Idle;
        self.session = None;
        self.history_index = 0;
        self.path_index = 0;
        self.paused = false;
        self.step_requested = false;
        self.marker = self.home;
        self.visited.clear();
        self.frontier.clear();
        self.final_path_cells.clear();
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn marker(&self) -> Position {
        self.marker
    }

    pub fn visited(&self) -> &BTreeSet<Position> {
        &self.visited
    }

    pub fn frontier(&self) -> &BTreeSet<Position> {
        &self.frontier
    }

    pub fn final_path_cells(&self) -> &BTreeSet<Position> {
        &self.final_path_cells
    }

    pub fn history_index(&self) -> usize {
        self.history_index
    }

    pub fn path_index(&self) -> usize {
        self.path_index
    }

    fn ensure_running(&self) -> Result<(), PlaybackError> {
        if self.state == PlaybackState::Idle {
            Err(PlaybackError::NotRunning)
        } else {
            Ok(())
        }
    }

    /// Exploration is over: marker back home, path highlighted.
    fn enter_path_phase(&mut self) {
        self.marker = self.home;
        let has_moves = match self.session.as_ref() {
            Some(session) => {
                self.final_path_cells = session.final_path_cells.clone();
                !session.move_sequence.is_empty()
            }
            None => false,
        };
        self.state = if has_moves {
            PlaybackState::PathWalking
        } else {
            PlaybackState::Idle
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridMaze;
    use crate::search::breadth_first_search;

    fn corridor_result() -> SearchResult {
        let maze = GridMaze::from_bits(
            &[[1, 0, 1], [1, 0, 1], [1, 0, 1]],
            Position::new(0, 1),
            Position::new(2, 1),
        )
        .unwrap();
        breadth_first_search(&maze)
    }

    #[test]
    fn tick_while_idle_is_a_no_op() {
        let mut playback = PlaybackController::new(Position::new(0, 1));
        playback.tick();
        assert_eq!(playback.state(), PlaybackState::Idle);
        assert_eq!(playback.marker(), Position::new(0, 1));
    }

    #[test]
    fn controls_require_a_session() {
        let mut playback = PlaybackController::new(Position::new(0, 0));
        assert_eq!(playback.pause(), Err(PlaybackError::NotRunning));
        assert_eq!(playback.resume(), Err(PlaybackError::NotRunning));
        assert_eq!(playback.step(), Err(PlaybackError::NotRunning));
    }

    #[test]
    fn exploration_then_path_walk() {
        let result = corridor_result();
        // Frames: initial, (0,1) expanding to (1,1), (1,1) expanding to (2,1).
        assert_eq!(result.history.len(), 3);
        let mut playback = PlaybackController::new(result.start);
        playback.start(result);

        for _ in 0..3 {
            assert_eq!(playback.state(), PlaybackState::Exploring);
            playback.tick();
        }
        assert_eq!(playback.state(), PlaybackState::PathWalking);
        assert_eq!(playback.marker(), Position::new(0, 1));
        assert_eq!(playback.final_path_cells().len(), 3);

        playback.tick();
        assert_eq!(playback.marker(), Position::new(1, 1));
        playback.tick();
        assert_eq!(playback.marker(), Position::new(2, 1));
        assert_eq!(playback.state(), PlaybackState::Idle);
    }

    #[test]
    fn paused_tick_waits_for_step() {
        let mut playback = PlaybackController::new(Position::new(0, 1));
        playback.start(corridor_result());
        playback.pause().unwrap();
        playback.tick();
        assert_eq!(playback.history_index(), 0);

        playback.step().unwrap();
        assert_eq!(playback.history_index(), 1);
        assert!(playback.is_paused());
        playback.tick();
        assert_eq!(playback.history_index(), 1);

        playback.resume().unwrap();
        playback.tick();
        assert_eq!(playback.history_index(), 2);
    }

    #[test]
    fn step_pauses_a_running_session() {
        let mut playback = PlaybackController::new(Position::new(0, 1));
        playback.start(corridor_result());
        playback.step().unwrap();
        assert!(playback.is_paused());
        assert_eq!(playback.history_index(), 1);
    }

    #[test]
    fn restart_replaces_the_session() {
        let mut playback = PlaybackController::new(Position::new(0, 1));
        playback.start(corridor_result());
        playback.tick();
        playback.tick();
        playback.start(corridor_result());
        assert_eq!(playback.history_index(), 0);
        assert!(playback.visited().is_empty());
        assert_eq!(playback.state(), PlaybackState::Exploring);
    }
}
