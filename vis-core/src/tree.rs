//! Arena tree and the [`TreeSource`] capability the layout consumes.

use crate::types::{NodeId, NodeKind};
use rand::Rng;
use std::{fmt::Debug, hash::Hash};

/// Read-only view of a tree as the layout sees it.
///
/// The layout only ever asks for a node's ordered children (and, for
/// coloring, its kind). Child order is significant: it decides which
/// side of the parent a child lands on.
pub trait TreeSource {
    /// Handle to a tree element.
    type Node: Copy + Eq + Hash + Debug;

    /// Returns the ordered children of `node`, or `None` if the handle
    /// does not belong to this source.
    fn children(&self, node: Self::Node) -> Option<Vec<Self::Node>>;

    fn kind(&self, _node: Self::Node) -> NodeKind {
        NodeKind::Declaration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub kind: NodeKind,
    pub label: String,
    /// Generated by the producer rather than written by a user; hidden
    /// from [`TreeSource::children`].
    pub implicit: bool,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Arena-backed tree whose root is always [`NodeId`] `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new_root(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            implicit: false,
            parent: None,
            children: Vec::with_capacity(4),
        }
    }

    pub fn new_child(kind: NodeKind, label: impl Into<String>, parent: NodeId) -> Self {
        Self {
            kind,
            label: label.into(),
            implicit: false,
            parent: Some(parent),
            children: Vec::with_capacity(4),
        }
    }
}

impl Tree {
    pub fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            nodes: vec![TreeNode::new_root(kind, label)],
        }
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Appends a child to `parent` and returns its id.
    ///
    /// ### Panics
    /// Panics if `parent` is not a node of this tree.
    pub fn add_child(&mut self, parent: NodeId, kind: NodeKind, label: impl Into<String>) -> NodeId {
        let id: usize = self.nodes.len();
        self.nodes.push(TreeNode::new_child(kind, label, parent));
        self.nodes[parent].children.push(id);
        id
    }

    /// Like [`Tree::add_child`], but marks the child as implicit.
    pub fn add_implicit_child(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        label: impl Into<String>,
    ) -> NodeId {
        let id = self.add_child(parent, kind, label);
        self.nodes[id].implicit = true;
        id
    }

    /// Number of levels below and including the root, ignoring implicit
    /// nodes. An empty tree has depth `0`, a lone root depth `1`.
    pub fn depth(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut deepest = 0;
        let mut stack = vec![(self.root(), 1usize)];
        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            for child in self.visible_children(id) {
                stack.push((child, level + 1));
            }
        }
        deepest
    }

    /// Number of nodes reachable from the root without passing through
    /// an implicit node. This is exactly the set a layout pass places.
    pub fn visible_len(&self) -> usize {
        if self.nodes.is_empty() {
            return 0;
        }
        let mut count = 0;
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            count += 1;
            stack.extend(self.visible_children(id));
        }
        count
    }

    fn visible_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes[id]
            .children
            .iter()
            .copied()
            .filter(|&c| !self.nodes[c].implicit)
    }

    /// The demo tree: a root with three children, each holding two leaves.
    pub fn sample() -> Self {
        let mut tree = Tree::new(NodeKind::Declaration, "root");
        for name in ["a", "b", "c"] {
            let id = tree.add_child(tree.root(), NodeKind::Function, name);
            tree.add_child(id, NodeKind::Statement, format!("{name}x"));
            tree.add_child(id, NodeKind::Statement, format!("{name}y"));
        }
        tree
    }

    /// Builds a random tree.
    ///
    /// Every node above `max_depth` levels receives between `0` and
    /// `max_children` children; the root always gets at least one so the
    /// result is never a lone point unless `max_depth <= 1`.
    pub fn random(rng: &mut impl Rng, max_depth: usize, max_children: usize) -> Self {
        let mut tree = Tree::new(NodeKind::Declaration, "root");
        let mut stack = vec![(tree.root(), 1usize)];

        while let Some((id, level)) = stack.pop() {
            if level >= max_depth || max_children == 0 {
                continue;
            }
            let min = if id == tree.root() { 1 } else { 0 };
            let count = rng.random_range(min..=max_children);
            for i in 0..count {
                let kind = match rng.random_range(0..3) {
                    0 => NodeKind::Declaration,
                    1 => NodeKind::Function,
                    _ => NodeKind::Statement,
                };
                let child = tree.add_child(id, kind, format!("n{}_{i}", tree.len()));
                stack.push((child, level + 1));
            }
        }
        tree
    }
}

impl TreeSource for Tree {
    type Node = NodeId;

    fn children(&self, node: NodeId) -> Option<Vec<NodeId>> {
        self.nodes
            .get(node)
            .map(|_| self.visible_children(node).collect())
    }

    fn kind(&self, node: NodeId) -> NodeKind {
        self.nodes.get(node).map(|n| n.kind).unwrap_or_default()
    }
}
