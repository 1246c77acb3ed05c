use std::iter::FusedIterator;

use crate::{Node, NodeId, Result, Tree, alloc::Slab};

/// An iterator over the ancestors of a node, nearest first.
///
/// The starting node itself is not yielded.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Ancestors<'a, C> {
    nodes: &'a Slab<C>,
    current: Option<NodeId>,
}

impl<'a, C> Ancestors<'a, C> {
    pub(crate) fn new(nodes: &'a Slab<C>, id: NodeId) -> Self {
        Ancestors {
            nodes,
            current: nodes.get(id).and_then(Node::parent),
        }
    }
}

impl<C> Iterator for Ancestors<'_, C> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = self.nodes.get(current).and_then(Node::parent);
        Some(current)
    }
}

impl<C> FusedIterator for Ancestors<'_, C> {}

impl<C> Tree<C> {
    /// Walks from the parent of `id` up to the root of its tree.
    pub fn ancestors(&self, id: NodeId) -> Result<Ancestors<'_, C>> {
        self.node_ref(id)?;
        Ok(Ancestors::new(&self.nodes, id))
    }

    /// Number of edges between `id` and the root of its tree.
    pub fn depth(&self, id: NodeId) -> Result<usize> {
        Ok(self.ancestors(id)?.count())
    }

    /// The nodes from the root of its tree down to `id`, both included.
    pub fn path_to(&self, id: NodeId) -> Result<Vec<NodeId>> {
        let mut path: Vec<NodeId> = self.ancestors(id)?.collect();
        path.reverse();
        path.push(id);
        Ok(path)
    }

    /// True when `ancestor` lies strictly above `id`.
    pub(crate) fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        Ancestors::new(&self.nodes, id).any(|a| a == ancestor)
    }

    /// The path from `from` down to `to`, which must lie in its subtree.
    pub(crate) fn path_between(&self, from: NodeId, to: NodeId) -> Vec<NodeId> {
        let mut path = vec![to];
        if to != from {
            path.extend(Ancestors::new(&self.nodes, to).take_while(|&a| a != from));
            path.push(from);
        }
        path.reverse();
        path
    }
}

#[cfg(test)]
mod test {
    use crate::{Colour::*, Tree, TreeError};
    use pretty_assertions::assert_eq;

    #[test]
    fn ancestors_of_root_is_empty() {
        let tree = Tree::new(Green);
        let root = tree.root().unwrap();
        assert_eq!(0, tree.ancestors(root).unwrap().count());
        assert_eq!(0, tree.depth(root).unwrap());
        assert_eq!(vec![root], tree.path_to(root).unwrap());
    }

    #[test]
    fn ancestors_nearest_first() {
        let mut tree = Tree::new(Green);
        let root = tree.root().unwrap();
        let a = tree.node(Blue);
        let b = tree.node(Yellow);
        let c = tree.node(Red);
        tree.put(root, a).unwrap();
        tree.put(a, b).unwrap();
        tree.put(b, c).unwrap();

        assert_eq!(
            vec![b, a, root],
            tree.ancestors(c).unwrap().collect::<Vec<_>>()
        );
        assert_eq!(3, tree.depth(c).unwrap());
        assert_eq!(vec![root, a, b, c], tree.path_to(c).unwrap());
        assert_eq!(vec![a, b, c], tree.path_between(a, c));
        assert_eq!(vec![b], tree.path_between(b, b));
        assert!(tree.is_ancestor(root, c));
        assert!(!tree.is_ancestor(c, root));
        assert!(!tree.is_ancestor(c, c));
    }

    #[test]
    fn stale_start() {
        let mut tree = Tree::new(Green);
        let root = tree.root().unwrap();
        let a = tree.node(Blue);
        tree.put(root, a).unwrap();
        tree.rm(a).unwrap();
        assert_eq!(Err(TreeError::StaleNode(a)), tree.depth(a));
        assert!(tree.ancestors(a).is_err());
    }
}
