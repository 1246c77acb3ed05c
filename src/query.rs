use log::trace;

use crate::{NodeId, Result, Tree};

/// Outcome of [`Tree::is_colour_until_condition`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Until {
    Holds,
    /// The path from the start node down to one offending node, start first.
    Violated(Vec<NodeId>),
}

impl Until {
    pub fn holds(&self) -> bool {
        matches!(self, Until::Holds)
    }

    pub fn witness(&self) -> Option<&[NodeId]> {
        match self {
            Until::Holds => None,
            Until::Violated(path) => Some(path),
        }
    }
}

impl<C: Ord + Copy> Tree<C> {
    /// Checks that every node of the subtree at `start`, down to and including
    /// depth `k`, has its own colour equal to `colour`, and that no branch ends
    /// in a leaf before reaching depth `k`.
    ///
    /// Nodes deeper than `k` are never looked at.
    ///
    /// ```
    /// use colourtree::{Colour::*, Tree};
    ///
    /// let mut tree = Tree::new(Red);
    /// let root = tree.root().unwrap();
    /// let child = tree.node(Red);
    /// tree.put(root, child).unwrap();
    ///
    /// assert!(tree.is_coloured_to_depth_k(root, Red, 1).unwrap());
    /// assert!(!tree.is_coloured_to_depth_k(root, Red, 2).unwrap());
    /// ```
    pub fn is_coloured_to_depth_k(&self, start: NodeId, colour: C, k: usize) -> Result<bool> {
        Ok(self
            .descendants(start)?
            .take_while(|&(_, depth)| depth <= k)
            .all(|(id, depth)| {
                self.get(id).is_some_and(|node| {
                    node.colour().cmp(&colour).is_eq() && !(node.is_leaf() && depth < k)
                })
            }))
    }

    /// Checks that every path from `start` down to a leaf reads as zero or
    /// more `colour_a` nodes followed by one or more `colour_b` nodes.
    ///
    /// Once a path reaches `colour_b` it has to stay `colour_b` all the way
    /// down, including when `start` itself is `colour_b`. A node of any other
    /// colour, a `colour_a` leaf, or a `colour_a` node below a `colour_b` one
    /// breaks the condition, and the path to it is returned as the witness.
    pub fn is_colour_until_condition(
        &self,
        start: NodeId,
        colour_a: C,
        colour_b: C,
    ) -> Result<Until> {
        self.node_ref(start)?;
        // (node, a colour_b node lies above it on this path)
        let mut stack = vec![(start, false)];
        while let Some((id, past_b)) = stack.pop() {
            let Some(node) = self.get(id) else {
                continue;
            };
            let is_a = node.colour().cmp(&colour_a).is_eq();
            let is_b = node.colour().cmp(&colour_b).is_eq();
            let ok = is_b || (!past_b && is_a && !node.is_leaf());
            if !ok {
                let witness = self.path_between(start, id);
                trace!("colour-until fails at {id}, witness of {} nodes", witness.len());
                return Ok(Until::Violated(witness));
            }
            stack.extend(node.children().iter().map(|&child| (child, is_b)));
        }
        Ok(Until::Holds)
    }
}
