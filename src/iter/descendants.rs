use std::{collections::VecDeque, iter::FusedIterator};

use crate::{NodeId, Result, Tree, alloc::Slab};

/// A breadth-first iterator over a subtree.
///
/// Yields `(node, depth)` pairs, the starting node first at depth 0. Every
/// node of depth `d` comes before any node of depth `d + 1`, so callers can
/// cut the walk short with `take_while` on the depth.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Descendants<'a, C> {
    nodes: &'a Slab<C>,
    queue: VecDeque<(NodeId, usize)>,
}

impl<'a, C> Descendants<'a, C> {
    pub(crate) fn new(nodes: &'a Slab<C>, id: NodeId) -> Self {
        let mut queue = VecDeque::new();
        if nodes.get(id).is_some() {
            queue.push_back((id, 0));
        }
        Descendants { nodes, queue }
    }
}

impl<C> Iterator for Descendants<'_, C> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        // Children are only expanded when their parent is yielded.
        let (id, depth) = self.queue.pop_front()?;
        if let Some(node) = self.nodes.get(id) {
            self.queue
                .extend(node.children().iter().map(|&child| (child, depth + 1)));
        }
        Some((id, depth))
    }
}

impl<C> FusedIterator for Descendants<'_, C> {}

impl<C> Tree<C> {
    /// Walks the subtree rooted at `id` breadth-first, `id` included.
    pub fn descendants(&self, id: NodeId) -> Result<Descendants<'_, C>> {
        self.node_ref(id)?;
        Ok(Descendants::new(&self.nodes, id))
    }
}
