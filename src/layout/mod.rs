//! Display coordinates for the corridor tree.
//!
//! Each node owns a horizontal interval (its domain). The interval is split
//! evenly between the node's children, left to right in walk order, and each
//! child is centered in its share one level further down.

use crate::decompose::{NodeId, NodeTree};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Vertical distance between a node and its children.
    pub vertical_step: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            vertical_step: 60.0,
        }
    }
}

/// Places `root` at `(x, y)` with domain `[left_domain, right_domain]` and
/// lays out its subtree below it. Unknown ids are ignored.
pub fn layout(
    tree: &mut NodeTree,
    root: NodeId,
    x: f64,
    y: f64,
    left_domain: f64,
    right_domain: f64,
    config: &LayoutConfig,
) {
    // (node, x, y, left, right); explicit stack so deep trees cannot overflow.
    let mut pending = vec![(root, x, y, left_domain, right_domain)];

    while let Some((id, x, y, left, right)) = pending.pop() {
        let Some(node) = tree.get_mut(id) else {
            continue;
        };
        node.display_x = x;
        node.display_y = y;
        node.left_domain = left;
        node.right_domain = right;

        let count = node.children.len();
        if count == 0 {
            continue;
        }
        let share = (right - left) / count as f64;
        for (i, &child) in node.children.iter().enumerate() {
            let child_left = left + share * i as f64;
            let child_right = child_left + share;
            pending.push((
                child,
                (child_left + child_right) / 2.0,
                y + config.vertical_step,
                child_left,
                child_right,
            ));
        }
    }
}

/// Lays out the whole tree from its root, centered in `[0, width]`.
pub fn layout_tree(tree: &mut NodeTree, config: &LayoutConfig, width: f64) {
    if let Some(root) = tree.root() {
        layout(tree, root, width / 2.0, 0.0, 0.0, width, config);
    }
}
