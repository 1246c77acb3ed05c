use std::ops::Index;

use log::{debug, trace};

use crate::{
    Descendants, Node, NodeId, Propagation, Result, Tree, TreeError, alloc::Slab,
};

impl<C: Ord + Copy> Tree<C> {
    /// Creates a tree holding a single root of the given colour.
    pub fn new(colour: C) -> Self {
        Self::with_propagation(colour, Propagation::default())
    }

    pub fn with_propagation(colour: C, propagation: Propagation) -> Self {
        let mut nodes = Slab::new(propagation);
        let root = nodes.alloc(Node::new(colour));
        Tree {
            root: Some(root),
            nodes,
        }
    }

    /// Allocates a standalone node: no parent, no children. Hang it somewhere
    /// with [`Tree::put`].
    pub fn node(&mut self, colour: C) -> NodeId {
        self.nodes.alloc(Node::new(colour))
    }

    /// Sets the colour of `n` and rederives the propagated colour of `n` and
    /// every ancestor.
    pub fn update_node_colour(&mut self, n: NodeId, colour: C) -> Result<()> {
        self.nodes
            .set_colour(n, colour)
            .inspect_err(|e| debug!("recolour rejected: {e}"))
    }

    /// Hangs `child` under `parent`.
    ///
    /// `child` must not have a parent yet, must not be the tree root and must
    /// not be `parent` or one of its ancestors.
    pub fn put(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check_put(parent, child)
            .inspect_err(|e| debug!("put rejected: {e}"))?;
        self.nodes.attach_child(parent, child)
    }

    fn check_put(&self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node_ref(parent)?;
        if self.node_ref(child)?.parent().is_some() {
            return Err(TreeError::AlreadyAttached(child));
        }
        if self.root == Some(child) {
            return Err(TreeError::RootNotAttachable(child));
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(TreeError::WouldCycle { parent, child });
        }
        Ok(())
    }

    /// Removes `child` together with its whole subtree.
    ///
    /// Removing the root discards the entire tree and leaves it empty.
    /// Handles to every removed node go stale.
    pub fn rm(&mut self, child: NodeId) -> Result<()> {
        let parent = self
            .node_ref(child)
            .inspect_err(|e| debug!("rm rejected: {e}"))?
            .parent();
        if self.root == Some(child) {
            debug!("removing root {child}, tree is now empty");
            self.root = None;
        }
        if let Some(parent) = parent {
            self.nodes.detach_child(parent, child)?;
        }
        self.free_subtree(child);
        if let Some(parent) = parent {
            self.nodes.propagate(parent);
        }
        Ok(())
    }

    fn free_subtree(&mut self, id: NodeId) {
        let doomed: Vec<NodeId> = Descendants::new(&self.nodes, id)
            .map(|(id, _)| id)
            .collect();
        trace!("freeing {} nodes under {id}", doomed.len());
        for id in doomed {
            self.nodes.free(id);
        }
    }

    /// Exchanges the positions of the subtrees rooted at `a` and `b`.
    ///
    /// Swapping siblings, or a node with itself, changes nothing and succeeds.
    pub fn swap(&mut self, a: NodeId, b: NodeId) -> Result<()> {
        let (pa, pb) = self
            .check_swap(a, b)
            .inspect_err(|e| debug!("swap rejected: {e}"))?;
        if pa == pb {
            debug!("swap of siblings {a} and {b} is a no-op");
            return Ok(());
        }
        self.nodes.detach_child(pa, a)?;
        self.nodes.detach_child(pb, b)?;
        self.put(pb, a)?;
        self.put(pa, b)
    }

    fn check_swap(&self, a: NodeId, b: NodeId) -> Result<(NodeId, NodeId)> {
        let pa = self.node_ref(a)?.parent().ok_or(TreeError::Parentless(a))?;
        let pb = self.node_ref(b)?.parent().ok_or(TreeError::Parentless(b))?;
        if pa != pb {
            if self.is_ancestor(a, b) {
                return Err(TreeError::NestedSubtrees {
                    ancestor: a,
                    descendant: b,
                });
            }
            if self.is_ancestor(b, a) {
                return Err(TreeError::NestedSubtrees {
                    ancestor: b,
                    descendant: a,
                });
            }
        }
        Ok((pa, pb))
    }
}

impl<C> Tree<C> {
    /// The root, or `None` once the root has been removed.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of live nodes, counting standalone ones not yet attached.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node<C>> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some()
    }

    pub fn propagation(&self) -> Propagation {
        self.nodes.propagation
    }

    pub(crate) fn node_ref(&self, id: NodeId) -> Result<&Node<C>> {
        self.nodes.get(id).ok_or(TreeError::StaleNode(id))
    }
}

impl<C> Index<NodeId> for Tree<C> {
    type Output = Node<C>;

    /// Returns the node behind the handle.
    ///
    /// # Panics
    ///
    /// Panics if the node has been removed.
    #[inline]
    fn index(&self, id: NodeId) -> &Node<C> {
        self.get(id).expect("no node found for id")
    }
}
