use serde::Serialize;

use super::color::Color;
use crate::grid::Position;

/// Index of a node inside a [`NodeTree`].
pub type NodeId = usize;

/// One corridor run of the decomposition, drawn as a node of the tree.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TreeNode {
    pub position: Position,
    pub color: Color,
    pub display_x: f64,
    pub display_y: f64,
    pub left_domain: f64,
    pub right_domain: f64,
    /// Child nodes in walk order.
    pub children: Vec<NodeId>,
    pub is_start: bool,
    pub is_end: bool,
}

impl TreeNode {
    pub fn new(position: Position, color: Color) -> Self {
        Self {
            position,
            color,
            display_x: 0.0,
            display_y: 0.0,
            left_domain: 0.0,
            right_domain: 0.0,
            children: Vec::new(),
            is_start: false,
            is_end: false,
        }
    }
}

/// Arena of tree nodes. Node 0, when present, is the root.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NodeTree {
    nodes: Vec<TreeNode>,
}

impl NodeTree {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Adds a node and returns its ID.
    pub fn add_node(&mut self, node: TreeNode) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    /// Appends `child` to `parent`'s children. Unknown parents are ignored.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TreeNode> {
        self.nodes.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Total number of parent→child links.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.children.len()).sum()
    }
}
