// explorer module
mod explorer;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the explorer module.
//─────────────────────────────────────────────────────────────────────────────
pub use explorer::{
    breadth_first_search, depth_first_search, ExplorationFrame, SearchAlgorithm, SearchResult,
};
