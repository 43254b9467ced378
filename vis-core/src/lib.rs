//! Recursive layout and rendering of arbitrary rooted trees.
//!
//! Main components:
//! - [`tree`] — the [`tree::TreeSource`] capability and an arena tree.
//! - [`loader`] — reading trees from TOML documents.
//! - [`layout`] — the recursive position assignment.
//! - [`render`] — per-frame driver emitting draw calls onto a surface.
//! - [`config`] — layout and rendering parameters.
//! - [`error`] — error types.
//! - [`types`] — shared ids, node kinds and colors.

pub mod config;
pub mod error;
pub mod layout;
pub mod loader;
pub mod render;
pub mod tree;
pub mod types;
