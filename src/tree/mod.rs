//! Category tree assembled from a [`Classification`](crate::classify::Classification).
//!
//! Nodes live in an arena owned by [`CategoryTree`] and are addressed by
//! [`NodeId`]. A node stores its parent's id, never a reference, so walking up
//! for attribute inheritance needs no shared ownership.
//!
//! After construction every non-root node is either internal (children, no
//! filenames) or a leaf (filenames, no children). [`CategoryTree::check_shape`]
//! verifies this before anything is rendered.

pub mod build;
pub mod node;

pub use build::CategoryTree;
pub use node::{CategoryNode, NodeId};
