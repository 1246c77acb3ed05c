use std::{
    cmp::Ordering,
    fmt::{self, Debug},
};

use log::trace;

use crate::{Node, NodeId, Propagation, Result, TreeError, alloc::Slab};

// Public API.
impl<C> Node<C> {
    pub(crate) fn new(colour: C) -> Self
    where
        C: Copy,
    {
        Node {
            colour,
            propagated_colour: colour,
            parent: None,
            children: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn colour(&self) -> C
    where
        C: Copy,
    {
        self.colour
    }

    /// The maximum colour of this node and everything below it.
    #[inline(always)]
    pub fn propagated_colour(&self) -> C
    where
        C: Copy,
    {
        self.propagated_colour
    }

    #[inline(always)]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The children, in no particular order.
    #[inline(always)]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True for the tree root and for nodes that are not attached anywhere.
    #[inline(always)]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<C: Debug> Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "{:?}^{:?}({} children)",
            self.colour,
            self.propagated_colour,
            self.children.len()
        ))
    }
}

// Link primitives. They keep parent and children lists consistent; only
// set_colour and attach_child restore the propagated colours on their own.
impl<C: Ord + Copy> Slab<C> {
    pub(crate) fn set_colour(&mut self, id: NodeId, colour: C) -> Result<()> {
        self.get_mut(id).ok_or(TreeError::StaleNode(id))?.colour = colour;
        self.propagate(id);
        Ok(())
    }

    /// The caller detaches `child` from any previous parent first.
    pub(crate) fn attach_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if self.get(child).is_none() {
            return Err(TreeError::StaleNode(child));
        }
        self.get_mut(parent)
            .ok_or(TreeError::StaleNode(parent))?
            .children
            .push(child);
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        self.propagate(parent);
        Ok(())
    }

    /// Unlinks `child` from `parent`, returning whether it was listed there.
    /// Propagated colours above `parent` are left stale.
    pub(crate) fn detach_child(&mut self, parent: NodeId, child: NodeId) -> Result<bool> {
        let children = &mut self
            .get_mut(parent)
            .ok_or(TreeError::StaleNode(parent))?
            .children;
        let Some(position) = children.iter().position(|&c| c == child) else {
            return Ok(false);
        };
        children.swap_remove(position);
        if let Some(node) = self.get_mut(child) {
            node.parent = None;
        }
        Ok(true)
    }

    /// Recomputes `id` and then its ancestors, bottom-up.
    pub(crate) fn propagate(&mut self, id: NodeId) {
        let mut current = Some(id);
        while let Some(id) = current {
            let Some((old, new)) = self.recompute(id) else {
                break;
            };
            if self.propagation == Propagation::UntilStable && old.cmp(&new).is_eq() {
                break;
            }
            current = self.get(id).and_then(Node::parent);
        }
    }

    /// Rederives one node's aggregate from its own colour and its children.
    fn recompute(&mut self, id: NodeId) -> Option<(C, C)> {
        let node = self.get(id)?;
        let new = node
            .children
            .iter()
            .filter_map(|&child| self.get(child))
            .map(|child| child.propagated_colour)
            .fold(node.colour, Ord::max);
        let node = self.get_mut(id)?;
        let old = std::mem::replace(&mut node.propagated_colour, new);
        trace!("node {id}: propagated colour {}", shift(old, new));
        Some((old, new))
    }
}

fn shift<C: Ord>(old: C, new: C) -> &'static str {
    match new.cmp(&old) {
        Ordering::Less => "lowered",
        Ordering::Equal => "unchanged",
        Ordering::Greater => "raised",
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Colour::*;
    use pretty_assertions::assert_eq;

    fn slab(propagation: Propagation) -> Slab<crate::Colour> {
        Slab::new(propagation)
    }

    #[test]
    fn new_node_is_standalone() {
        let node = Node::new(Green);
        assert_eq!(Green, node.colour());
        assert_eq!(Green, node.propagated_colour());
        assert!(node.is_leaf());
        assert!(node.is_root());
        assert_eq!(None, node.parent());
    }

    #[test]
    fn attach_folds_child_into_ancestors() {
        let mut nodes = slab(Propagation::Full);
        let root = nodes.alloc(Node::new(Blue));
        let mid = nodes.alloc(Node::new(Green));
        let leaf = nodes.alloc(Node::new(Red));
        nodes.attach_child(root, mid).unwrap();
        nodes.attach_child(mid, leaf).unwrap();

        assert_eq!(Some(mid), nodes.get(leaf).unwrap().parent());
        assert_eq!(&[leaf], nodes.get(mid).unwrap().children());
        assert_eq!(Red, nodes.get(mid).unwrap().propagated_colour());
        assert_eq!(Red, nodes.get(root).unwrap().propagated_colour());
        assert!(!nodes.get(root).unwrap().is_leaf());
        assert!(!nodes.get(mid).unwrap().is_root());
    }

    #[test]
    fn lowering_a_colour_lowers_ancestors() {
        for propagation in [Propagation::Full, Propagation::UntilStable] {
            let mut nodes = slab(propagation);
            let root = nodes.alloc(Node::new(Blue));
            let left = nodes.alloc(Node::new(Red));
            let right = nodes.alloc(Node::new(Yellow));
            nodes.attach_child(root, left).unwrap();
            nodes.attach_child(root, right).unwrap();
            assert_eq!(Red, nodes.get(root).unwrap().propagated_colour());

            nodes.set_colour(left, Green).unwrap();
            assert_eq!(Green, nodes.get(left).unwrap().propagated_colour());
            assert_eq!(Yellow, nodes.get(root).unwrap().propagated_colour());
        }
    }

    #[test]
    fn shift_names_direction() {
        assert_eq!("raised", shift(Blue, Red));
        assert_eq!("lowered", shift(Red, Green));
        assert_eq!("unchanged", shift(Yellow, Yellow));
    }

    #[test]
    fn detach_leaves_aggregate_stale() {
        let mut nodes = slab(Propagation::Full);
        let root = nodes.alloc(Node::new(Blue));
        let child = nodes.alloc(Node::new(Red));
        nodes.attach_child(root, child).unwrap();

        assert_eq!(Ok(true), nodes.detach_child(root, child));
        assert!(nodes.get(root).unwrap().is_leaf());
        assert!(nodes.get(child).unwrap().is_root());
        assert_eq!(Red, nodes.get(root).unwrap().propagated_colour());

        nodes.propagate(root);
        assert_eq!(Blue, nodes.get(root).unwrap().propagated_colour());
    }

    #[test]
    fn detach_unknown_child_is_noop() {
        let mut nodes = slab(Propagation::Full);
        let root = nodes.alloc(Node::new(Blue));
        let stranger = nodes.alloc(Node::new(Red));
        assert_eq!(Ok(false), nodes.detach_child(root, stranger));
        assert!(nodes.get(root).unwrap().is_leaf());
    }

    #[test]
    fn stale_handles_are_rejected() {
        let mut nodes = slab(Propagation::Full);
        let root = nodes.alloc(Node::new(Blue));
        let gone = nodes.alloc(Node::new(Red));
        nodes.free(gone);
        assert_eq!(Err(TreeError::StaleNode(gone)), nodes.set_colour(gone, Green));
        assert_eq!(
            Err(TreeError::StaleNode(gone)),
            nodes.attach_child(root, gone)
        );
        assert_eq!(
            Err(TreeError::StaleNode(gone)),
            nodes.detach_child(gone, root)
        );
        assert!(nodes.get(root).unwrap().is_leaf());
    }
}
