use serde::Serialize;
use std::collections::{BTreeSet, VecDeque};
use std::fmt;
use std::str::FromStr;

use crate::grid::{Direction, GridMaze, Position};

/// One recorded snapshot of search progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExplorationFrame {
    /// Cells already claimed by the search when `current` was expanded.
    pub visited: BTreeSet<Position>,
    /// Unvisited open neighbors of `current` that this expansion claims.
    pub frontier: BTreeSet<Position>,
    pub current: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    BreadthFirst,
    DepthFirst,
}

impl SearchAlgorithm {
    pub fn run(self, maze: &GridMaze) -> SearchResult {
        match self {
            Self::BreadthFirst => breadth_first_search(maze),
            Self::DepthFirst => depth_first_search(maze),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
        })
    }
}

impl FromStr for SearchAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" => Ok(Self::DepthFirst),
            other => Err(format!("unknown search algorithm '{other}' (expected bfs or dfs)")),
        }
    }
}

/// Outcome of one search run: the moves from start to end (empty when the
/// end is unreachable), every exploration frame, and the cells of the path.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub algorithm: SearchAlgorithm,
    pub start: Position,
    pub end: Position,
    pub move_sequence: Vec<Direction>,
    pub history: Vec<ExplorationFrame>,
    pub final_path_cells: BTreeSet<Position>,
}

impl SearchResult {
    pub fn found_path(&self) -> bool {
        !self.final_path_cells.is_empty()
    }

    /// The path as an ordered list of cells, start first.
    pub fn path_walk(&self) -> Vec<Position> {
        if !self.found_path() {
            return Vec::new();
        }
        replay_moves(self.start, &self.move_sequence)
    }
}

/// Breadth-first search from the maze start to its end.
pub fn breadth_first_search(maze: &GridMaze) -> SearchResult {
    explore(maze, SearchAlgorithm::BreadthFirst)
}

/// Depth-first search from the maze start to its end. The path is valid but
/// not necessarily shortest.
pub fn depth_first_search(maze: &GridMaze) -> SearchResult {
    explore(maze, SearchAlgorithm::DepthFirst)
}

/// Shared search loop. BFS takes from the front of the frontier, DFS from
/// the back; DFS pushes moves in reverse priority so `Up` is expanded first.
fn explore(maze: &GridMaze, algorithm: SearchAlgorithm) -> SearchResult {
    let start = maze.start();
    let end = maze.end();

    let mut visited: BTreeSet<Position> = BTreeSet::from([start]);
    let mut history = vec![ExplorationFrame {
        visited: visited.clone(),
        frontier: BTreeSet::new(),
        current: start,
    }];
    // Each entry holds the cell and the moves taken to reach it.
    let mut frontier: VecDeque<(Position, Vec<Direction>)> = VecDeque::from([(start, Vec::new())]);

    loop {
        let next = match algorithm {
            SearchAlgorithm::BreadthFirst => frontier.pop_front(),
            SearchAlgorithm::DepthFirst => frontier.pop_back(),
        };
        let Some((current, moves)) = next else {
            break;
        };

        if current == end {
            let final_path_cells = replay_moves(start, &moves).into_iter().collect();
            return SearchResult {
                algorithm,
                start,
                end,
                move_sequence: moves,
                history,
                final_path_cells,
            };
        }

        let mut candidates: Vec<(Direction, Position)> = maze
            .open_neighbors(current, Direction::SEARCH_ORDER)
            .filter(|(_, pos)| !visited.contains(pos))
            .collect();
        if candidates.is_empty() {
            continue;
        }
        history.push(ExplorationFrame {
            visited: visited.clone(),
            frontier: candidates.iter().map(|(_, pos)| *pos).collect(),
            current,
        });

        if algorithm == SearchAlgorithm::DepthFirst {
            candidates.reverse();
        }
        for (dir, pos) in candidates {
            visited.insert(pos);
            let mut next_moves = moves.clone();
            next_moves.push(dir);
            frontier.push_back((pos, next_moves));
        }
    }

    SearchResult {
        algorithm,
        start,
        end,
        move_sequence: Vec::new(),
        history,
        final_path_cells: BTreeSet::new(),
    }
}

/// Cells visited by following `moves` from `start`, `start` included.
fn replay_moves(start: Position, moves: &[Direction]) -> Vec<Position> {
    let mut cells = Vec::with_capacity(moves.len() + 1);
    cells.push(start);
    let mut pos = start;
    for dir in moves {
        // Moves come from the search itself, so they never leave the grid.
        if let Some(next) = dir.step(pos) {
            pos = next;
            cells.push(pos);
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fork_maze() -> GridMaze {
        // Start top-left, end reachable by going right or down around a wall.
        GridMaze::from_bits(
            &[[0, 0, 0], [0, 1, 0], [0, 0, 0]],
            Position::new(0, 0),
            Position::new(2, 2),
        )
        .unwrap()
    }

    #[test]
    fn first_frame_is_the_start() {
        let result = breadth_first_search(&fork_maze());
        let first = &result.history[0];
        assert_eq!(first.current, Position::new(0, 0));
        assert_eq!(first.visited, BTreeSet::from([Position::new(0, 0)]));
        assert!(first.frontier.is_empty());
    }

    #[test]
    fn bfs_prefers_right_over_down_on_ties() {
        let result = breadth_first_search(&fork_maze());
        assert_eq!(
            result.move_sequence,
            vec![Direction::Right, Direction::Right, Direction::Down, Direction::Down]
        );
        assert_eq!(result.path_walk().last(), Some(&Position::new(2, 2)));
    }

    #[test]
    fn dfs_expands_up_first_then_right() {
        let result = depth_first_search(&fork_maze());
        assert_eq!(result.move_sequence.len(), 4);
        assert_eq!(result.move_sequence[0], Direction::Right);
        assert_eq!(result.history[1].current, Position::new(0, 0));
        assert_eq!(result.history[2].current, Position::new(0, 1));
    }

    #[test]
    fn unreachable_end_is_an_empty_result() {
        let maze = GridMaze::from_bits(&[[0, 1, 0]], Position::new(0, 0), Position::new(0, 2))
            .unwrap();
        for result in [breadth_first_search(&maze), depth_first_search(&maze)] {
            assert!(result.move_sequence.is_empty());
            assert!(result.final_path_cells.is_empty());
            assert!(!result.found_path());
            assert_eq!(result.history.len(), 1);
        }
    }

    #[test]
    fn start_equal_to_end_needs_no_moves() {
        let maze = GridMaze::from_bits(&[[0, 0]], Position::new(0, 0), Position::new(0, 0))
            .unwrap();
        let result = depth_first_search(&maze);
        assert!(result.move_sequence.is_empty());
        assert_eq!(result.final_path_cells, BTreeSet::from([Position::new(0, 0)]));
    }

    #[test]
    fn parses_algorithm_names() {
        assert_eq!("BFS".parse::<SearchAlgorithm>(), Ok(SearchAlgorithm::BreadthFirst));
        assert_eq!("dfs".parse::<SearchAlgorithm>(), Ok(SearchAlgorithm::DepthFirst));
        assert!("astar".parse::<SearchAlgorithm>().is_err());
    }
}
