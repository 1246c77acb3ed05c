//! A rooted tree whose nodes carry a colour and the maximum colour found
//! anywhere in their subtree, kept up to date under every edit.
mod alloc;
mod colour;
mod error;
mod iter;
mod node;
mod query;
mod tree;

use std::fmt::{self, Display};

use crate::alloc::Slab;

pub use colour::Colour;
pub use error::{Result, TreeError};
pub use iter::{Ancestors, Descendants};
pub use query::Until;

/// A handle to a node stored in a [`Tree`].
///
/// Handles are plain copyable values and never own the node. Once the node is
/// removed the handle goes stale: its slot may be reused, but with a new
/// generation, so the old handle is rejected instead of aliasing the new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

/// A vertex of a [`Tree`], read through [`Tree::get`] or indexing.
///
/// Nodes are only changed through the tree: [`Tree::update_node_colour`]
/// recolours, [`Tree::put`] attaches, and [`Tree::rm`] and [`Tree::swap`]
/// detach. Each of them restores the propagated colours before returning.
#[derive(Clone, PartialEq)]
pub struct Node<C> {
    colour: C,
    // max(colour, children's propagated_colour)
    propagated_colour: C,
    parent: Option<NodeId>,
    // Unordered.
    children: Vec<NodeId>,
}

/// How far a change walks up the ancestor chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Propagation {
    /// Recompute every ancestor up to the root.
    #[default]
    Full,
    /// Stop at the first ancestor whose aggregate did not change.
    UntilStable,
}

/// A colour tree.
/// C is the colour domain; any total order works.
pub struct Tree<C = Colour> {
    root: Option<NodeId>,
    nodes: Slab<C>,
}
