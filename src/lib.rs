//! Maze decomposition and search replay.
//!
//! A grid maze is split into corridor runs (colored tiles plus a run tree),
//! the tree is laid out for display, and breadth-first / depth-first searches
//! record every exploration step so a [`playback::PlaybackController`] can
//! replay them tick by tick.

pub mod app;
pub mod decompose;
pub mod grid;
pub mod layout;
pub mod playback;
pub mod search;
