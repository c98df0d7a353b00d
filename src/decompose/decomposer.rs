// decomposer.rs
// ──────────────────────────────────────────────────────────────────────────────
// Split the open cells of a maze into corridor runs. A single depth-first
// walk from the entry cell colors every open cell ("tile") and builds a tree
// with one node per run. Leaving a branch cell (degree > 2) into a cell that
// has not been seen yet starts a new run: a fresh color for the tile walk and
// a new child node for the node walk. Every other cell continues the run of
// the cell it was reached from.
//
// The walk is iterative. A frame stack stands in for the call stack, so the
// visiting order is exactly the recursive order (up, left, down, right) while
// large mazes cannot overflow.
// ──────────────────────────────────────────────────────────────────────────────
use std::collections::BTreeMap;

use super::color::{Color, ColorAllocator};
use super::error::DecomposeError;
use super::tree::{NodeId, NodeTree, TreeNode};
use crate::grid::{Direction, GridMaze, Position};

/// A colored open cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Tile {
    pub position: Position,
    pub color: Color,
}

/// Result of decomposing a maze: tile colors, the run tree, and the map from
/// every open cell to the node that owns its run.
#[derive(Clone, Debug)]
pub struct Decomposition {
    entry: Position,
    tiles: BTreeMap<Position, Tile>,
    node_map: BTreeMap<Position, NodeId>,
    tree: NodeTree,
    colors_used: usize,
}

impl Decomposition {
    /// The cell the walk started from; the tree root sits here.
    pub fn entry(&self) -> Position {
        self.entry
    }

    pub fn tiles(&self) -> &BTreeMap<Position, Tile> {
        &self.tiles
    }

    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.tiles.get(&pos)
    }

    pub fn node_map(&self) -> &BTreeMap<Position, NodeId> {
        &self.node_map
    }

    pub fn node_id_at(&self, pos: Position) -> Option<NodeId> {
        self.node_map.get(&pos).copied()
    }

    /// Returns the node owning the run that contains `pos`.
    pub fn node_at(&self, pos: Position) -> Option<&TreeNode> {
        self.node_id_at(pos).and_then(|id| self.tree.get(id))
    }

    pub fn tree(&self) -> &NodeTree {
        &self.tree
    }

    /// Mutable access for the layout pass; structure must not be changed.
    pub fn tree_mut(&mut self) -> &mut NodeTree {
        &mut self.tree
    }

    pub fn colors_used(&self) -> usize {
        self.colors_used
    }
}

/// Decomposes `maze` into corridor runs, starting from the maze's start cell.
///
/// # Errors
/// - `DecomposeError::OutOfColors` if `colors` runs dry.
/// - `DecomposeError::Disconnected` if some open cell is unreachable.
/// - `DecomposeError::InvalidCell` if the walk touches a wall.
pub fn decompose(
    maze: &GridMaze,
    colors: &mut ColorAllocator,
) -> Result<Decomposition, DecomposeError> {
    let entry = maze.start();
    let used_before = colors.used();
    let mut walker = CorridorWalker::new(maze);

    walk(maze, entry, |pos, mint, inherited| {
        walker.visit_tile(pos, mint, inherited, colors)
    })?;
    walk(maze, entry, |pos, mint, parent| {
        walker.visit_node(pos, mint, parent)
    })?;

    let open_cells = maze.open_cells().count();
    if walker.tiles.len() != open_cells {
        return Err(DecomposeError::Disconnected {
            unreached: open_cells - walker.tiles.len(),
        });
    }

    for (pos, flag) in [(maze.start(), true), (maze.end(), false)] {
        if let Some(node) = walker.node_map.get(&pos).and_then(|&id| walker.tree.get_mut(id)) {
            if flag {
                node.is_start = true;
            } else {
                node.is_end = true;
            }
        }
    }

    Ok(Decomposition {
        entry,
        tiles: walker.tiles,
        node_map: walker.node_map,
        tree: walker.tree,
        colors_used: colors.used() - used_before,
    })
}

struct CorridorWalker<'m> {
    maze: &'m GridMaze,
    tiles: BTreeMap<Position, Tile>,
    node_map: BTreeMap<Position, NodeId>,
    tree: NodeTree,
}

impl<'m> CorridorWalker<'m> {
    fn new(maze: &'m GridMaze) -> Self {
        Self {
            maze,
            tiles: BTreeMap::new(),
            node_map: BTreeMap::new(),
            tree: NodeTree::new(),
        }
    }

    /// Colors `pos`. Returns the color to hand on to its neighbors, or `None`
    /// if the cell was already colored.
    fn visit_tile(
        &mut self,
        pos: Position,
        mint_new_color: bool,
        inherited: Option<Color>,
        colors: &mut ColorAllocator,
    ) -> Result<Option<Color>, DecomposeError> {
        if !self.maze.is_open(pos) {
            return Err(DecomposeError::InvalidCell(pos));
        }
        if self.tiles.contains_key(&pos) {
            return Ok(None);
        }
        let color = match inherited {
            Some(color) if !mint_new_color => color,
            _ => colors.fresh()?,
        };
        self.tiles.insert(pos, Tile { position: pos, color });
        Ok(Some(color))
    }

    /// Maps `pos` to a node, creating one when a new run starts here.
    /// Returns the node neighbors should attach to, or `None` if `pos` was
    /// already mapped.
    fn visit_node(
        &mut self,
        pos: Position,
        mint_new_node: bool,
        parent: Option<NodeId>,
    ) -> Result<Option<NodeId>, DecomposeError> {
        if !self.maze.is_open(pos) {
            return Err(DecomposeError::InvalidCell(pos));
        }
        if self.node_map.contains_key(&pos) {
            return Ok(None);
        }
        let current = match parent {
            Some(parent) if !mint_new_node => parent,
            _ => {
                let color = self
                    .tiles
                    .get(&pos)
                    .map(|tile| tile.color)
                    .ok_or(DecomposeError::InvalidCell(pos))?;
                let id = self.tree.add_node(TreeNode::new(pos, color));
                if let Some(parent) = parent {
                    self.tree.add_child(parent, id);
                }
                id
            }
        };
        self.node_map.insert(pos, current);
        Ok(Some(current))
    }
}

/// One suspended visit: the cell, the value it hands to its neighbors, and
/// how many walk directions have been tried so far.
struct Frame<V> {
    pos: Position,
    value: V,
    next_dir: usize,
}

/// Depth-first walk over open cells in walk order.
///
/// `enter(pos, mint, inherited)` is called for every neighbor reached from a
/// visited cell (and once for the entry with `mint = true` and no inherited
/// value). It returns `Some(value)` when it accepted the cell, which is then
/// expanded with `value` as the neighbors' inherited value, or `None` when the
/// cell was seen before.
fn walk<V, F>(maze: &GridMaze, entry: Position, mut enter: F) -> Result<(), DecomposeError>
where
    V: Copy,
    F: FnMut(Position, bool, Option<V>) -> Result<Option<V>, DecomposeError>,
{
    let mut stack: Vec<Frame<V>> = Vec::new();
    if let Some(value) = enter(entry, true, None)? {
        stack.push(Frame {
            pos: entry,
            value,
            next_dir: 0,
        });
    }

    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = Direction::WALK_ORDER.get(frame.next_dir) else {
            stack.pop();
            continue;
        };
        frame.next_dir += 1;

        let Some(next) = dir.step(frame.pos).filter(|p| maze.is_open(*p)) else {
            continue;
        };
        let mint = maze.degree(frame.pos) > 2;
        let inherited = frame.value;
        if let Some(value) = enter(next, mint, Some(inherited))? {
            stack.push(Frame {
                pos: next,
                value,
                next_dir: 0,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plus_maze() -> GridMaze {
        // A 4-way junction at (1,1), entered from the top.
        GridMaze::from_bits(
            &[[1, 0, 1], [0, 0, 0], [1, 0, 1]],
            Position::new(0, 1),
            Position::new(2, 1),
        )
        .unwrap()
    }

    #[test]
    fn junction_splits_into_new_runs() {
        let maze = plus_maze();
        let mut colors = ColorAllocator::default();
        let dec = decompose(&maze, &mut colors).unwrap();

        // Run 1: (0,1),(1,1). Runs 2-4: one per junction exit.
        assert_eq!(dec.tree().len(), 4);
        assert_eq!(dec.colors_used(), 4);
        let root = dec.tree().get(0).unwrap();
        assert_eq!(root.children, vec![1, 2, 3]);
        assert_eq!(dec.node_id_at(Position::new(1, 1)), Some(0));
        assert_eq!(
            dec.tile(Position::new(0, 1)).unwrap().color,
            dec.tile(Position::new(1, 1)).unwrap().color
        );
        // Left, down, right in walk order.
        assert_eq!(dec.tree().get(1).unwrap().position, Position::new(1, 0));
        assert_eq!(dec.tree().get(2).unwrap().position, Position::new(2, 1));
        assert_eq!(dec.tree().get(3).unwrap().position, Position::new(1, 2));
        assert!(root.is_start);
        assert!(dec.tree().get(2).unwrap().is_end);
    }

    #[test]
    fn node_color_matches_tile_color() {
        let maze = GridMaze::builtin();
        let dec = decompose(&maze, &mut ColorAllocator::default()).unwrap();
        for node in dec.tree().nodes() {
            assert_eq!(dec.tile(node.position).unwrap().color, node.color);
        }
    }

    #[test]
    fn palette_exhaustion_is_fatal() {
        let maze = plus_maze();
        let mut colors = ColorAllocator::with_palette([Color::rgb(0, 0, 0), Color::rgb(1, 1, 1)]);
        let err = decompose(&maze, &mut colors).unwrap_err();
        assert_eq!(err, DecomposeError::OutOfColors { used: 2 });
        assert!(!err.is_contract_violation());
    }

    #[test]
    fn unreachable_cells_are_reported() {
        let maze = GridMaze::from_bits(
            &[[0, 1, 0], [0, 1, 0]],
            Position::new(0, 0),
            Position::new(1, 0),
        )
        .unwrap();
        let err = decompose(&maze, &mut ColorAllocator::default()).unwrap_err();
        assert_eq!(err, DecomposeError::Disconnected { unreached: 2 });
    }

    #[test]
    fn tile_visit_on_a_wall_is_a_contract_violation() {
        let maze = plus_maze();
        let mut walker = CorridorWalker::new(&maze);
        let mut colors = ColorAllocator::default();
        let wall = Position::new(0, 0);

        let err = walker.visit_tile(wall, true, None, &mut colors).unwrap_err();
        assert_eq!(err, DecomposeError::InvalidCell(wall));
        assert!(err.is_contract_violation());
        assert!(walker.tiles.is_empty());
        assert_eq!(colors.used(), 0);
    }

    #[test]
    fn node_visit_on_a_wall_is_a_contract_violation() {
        let maze = plus_maze();
        let mut walker = CorridorWalker::new(&maze);
        let wall = Position::new(2, 2);

        let err = walker.visit_node(wall, true, None).unwrap_err();
        assert_eq!(err, DecomposeError::InvalidCell(wall));
        assert!(err.is_contract_violation());
        assert!(walker.tree.is_empty());
    }

    #[test]
    fn node_visit_needs_a_colored_tile() {
        let maze = plus_maze();
        let mut walker = CorridorWalker::new(&maze);
        let err = walker.visit_node(maze.start(), true, None).unwrap_err();
        assert_eq!(err, DecomposeError::InvalidCell(maze.start()));
    }
}
