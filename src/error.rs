use thiserror::Error;

use crate::NodeId;

/// Invalid arguments rejected by [`crate::Tree`] operations.
///
/// A call that returns an error has not touched the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The handle refers to a node that has been removed.
    #[error("node {0} has been removed")]
    StaleNode(NodeId),

    /// `put` was given a child that already hangs under a parent.
    #[error("node {0} is already attached to a parent")]
    AlreadyAttached(NodeId),

    /// `put` was given the tree root as the child; the root never gets a parent.
    #[error("node {0} is the tree root and cannot be attached under another node")]
    RootNotAttachable(NodeId),

    /// `put` would make a node its own ancestor.
    #[error("attaching {child} under {parent} would create a cycle")]
    WouldCycle { parent: NodeId, child: NodeId },

    /// `swap` was given a root or a detached node.
    #[error("node {0} has no parent")]
    Parentless(NodeId),

    /// `swap` was given two subtrees where one contains the other.
    #[error("{descendant} lies inside the subtree of {ancestor}")]
    NestedSubtrees { ancestor: NodeId, descendant: NodeId },
}

pub type Result<T> = std::result::Result<T, TreeError>;
