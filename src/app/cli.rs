use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::search::SearchAlgorithm;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Decomposes a grid maze into corridor runs and replays BFS/DFS exploration.", long_about = None)]
pub struct Cli {
    /// Maze text file ('#' wall, '.' open, 'S' start, 'E' end). The bundled 15x15 maze is used when omitted.
    pub maze_file: Option<PathBuf>,

    /// Which search to run.
    #[clap(short, long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,

    /// Milliseconds between playback ticks.
    #[clap(short, long, default_value_t = 200)]
    pub tick_ms: u64,

    /// Write the decomposition and search traces as JSON to this file.
    #[clap(long)]
    pub json: Option<PathBuf>,

    /// Skip the terminal replay and only print summaries.
    #[clap(long)]
    pub no_replay: bool,

    /// Suppress verbose output, only printing summaries and errors.
    #[clap(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Bfs,
    Dfs,
    Both,
}

impl AlgorithmChoice {
    pub fn algorithms(self) -> Vec<SearchAlgorithm> {
        match self {
            Self::Bfs => vec![SearchAlgorithm::BreadthFirst],
            Self::Dfs => vec![SearchAlgorithm::DepthFirst],
            Self::Both => vec![SearchAlgorithm::BreadthFirst, SearchAlgorithm::DepthFirst],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_both_searches() {
        let cli = Cli::parse_from(["maze-trace"]);
        assert_eq!(cli.algorithm, AlgorithmChoice::Both);
        assert_eq!(cli.tick_ms, 200);
        assert!(cli.maze_file.is_none());
        assert!(!cli.no_replay);
    }

    #[test]
    fn parses_file_and_flags() {
        let cli = Cli::parse_from([
            "maze-trace",
            "maze.txt",
            "--algorithm",
            "dfs",
            "--tick-ms",
            "50",
            "--json",
            "trace.json",
            "--no-replay",
            "-q",
        ]);
        assert_eq!(cli.maze_file, Some(PathBuf::from("maze.txt")));
        assert_eq!(cli.algorithm.algorithms(), vec![SearchAlgorithm::DepthFirst]);
        assert_eq!(cli.tick_ms, 50);
        assert_eq!(cli.json, Some(PathBuf::from("trace.json")));
        assert!(cli.no_replay && cli.quiet);
    }
}
