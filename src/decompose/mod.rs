// color module
mod color;
// decomposer module
mod decomposer;
// error module
mod error;
// tree module
mod tree;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the decompose modules.
//─────────────────────────────────────────────────────────────────────────────
pub use color::{Color, ColorAllocator};
pub use decomposer::{decompose, Decomposition, Tile};
pub use error::DecomposeError;
pub use tree::{NodeId, NodeTree, TreeNode};
