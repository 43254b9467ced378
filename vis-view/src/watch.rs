//! File-backed tree that is re-read when the file changes on disk.

use std::{
    path::{Path, PathBuf},
    time::SystemTime,
};
use tracing::{info, warn};
use vis_core::{error::TreeError, loader::load_tree, tree::Tree};

/// Caches the last successfully loaded tree of a document.
///
/// [`WatchedTree::refresh`] is cheap enough to call every frame: it only
/// stats the file and re-parses it when the modification time moved.
#[derive(Debug)]
pub struct WatchedTree {
    path: PathBuf,
    modified: Option<SystemTime>,
    tree: Tree,
}

fn modified_time(path: &Path) -> Result<SystemTime, TreeError> {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|source| TreeError::Io {
            path: path.to_path_buf(),
            source,
        })
}

impl WatchedTree {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, TreeError> {
        let path = path.into();
        let modified = modified_time(&path).ok();
        let tree = load_tree(&path)?;
        Ok(Self {
            path,
            modified,
            tree,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Reloads the document if it changed since the last look.
    ///
    /// ### Returns
    /// - `Ok(true)` if a new tree was loaded.
    /// - `Ok(false)` if the file is unchanged.
    /// - `Err` if the file changed but could not be read or parsed. The
    ///   previous tree is kept and the same revision is not retried.
    pub fn refresh(&mut self) -> Result<bool, TreeError> {
        let modified = modified_time(&self.path)?;
        if self.modified == Some(modified) {
            return Ok(false);
        }
        self.modified = Some(modified);
        self.reload()?;
        Ok(true)
    }

    /// Re-reads the document unconditionally.
    pub fn reload(&mut self) -> Result<(), TreeError> {
        match load_tree(&self.path) {
            Ok(tree) => {
                info!(path = %self.path.display(), nodes = tree.len(), "tree reloaded");
                self.tree = tree;
                Ok(())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "keeping previous tree");
                Err(e)
            }
        }
    }
}
