//! Reading trees from nested TOML documents.
//!
//! The document root is the tree root; each node may carry a `kind`,
//! a `label`, an `implicit` flag and a `[[children]]` array:
//!
//! ```toml
//! kind = "declaration"
//! label = "unit"
//!
//! [[children]]
//! kind = "function"
//! label = "main"
//!
//! [[children.children]]
//! kind = "statement"
//! ```

use crate::{
    error::TreeError,
    tree::Tree,
    types::{NodeId, NodeKind},
};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, instrument};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct NodeSpec {
    kind: NodeKind,
    label: String,
    implicit: bool,
    children: Vec<NodeSpec>,
}

/// Parses a tree document.
pub fn parse_tree(input: &str) -> Result<Tree, TreeError> {
    let spec: NodeSpec = toml::from_str(input)?;

    let mut tree = Tree::new(spec.kind, spec.label);
    tree.nodes[0].implicit = spec.implicit;

    let mut pending: Vec<(NodeId, Vec<NodeSpec>)> = vec![(tree.root(), spec.children)];
    while let Some((parent, children)) = pending.pop() {
        for child in children {
            let id = if child.implicit {
                tree.add_implicit_child(parent, child.kind, child.label)
            } else {
                tree.add_child(parent, child.kind, child.label)
            };
            pending.push((id, child.children));
        }
    }
    Ok(tree)
}

/// Reads and parses a tree document from disk.
#[instrument(level = "debug")]
pub fn load_tree(path: &Path) -> Result<Tree, TreeError> {
    let input = std::fs::read_to_string(path).map_err(|source| TreeError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let tree = parse_tree(&input)?;
    debug!(nodes = tree.len(), "loaded tree");
    Ok(tree)
}
