use log::trace;

use crate::{Node, NodeId, Propagation};

struct Slot<C> {
    generation: u32,
    node: Option<Node<C>>,
}

/// Owns every node of a tree, attached or not.
///
/// Freed slots are recycled; bumping the generation on free is what makes
/// outstanding handles to the old node stale.
pub(crate) struct Slab<C> {
    slots: Vec<Slot<C>>,
    free: Vec<usize>,
    len: usize,
    pub(crate) propagation: Propagation,
}

impl<C> Slab<C> {
    pub(crate) fn new(propagation: Propagation) -> Self {
        Slab {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
            propagation,
        }
    }

    pub(crate) fn alloc(&mut self, node: Node<C>) -> NodeId {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    /// Drops the node behind `id`; its links are not touched.
    pub(crate) fn free(&mut self, id: NodeId) -> Option<Node<C>> {
        let slot = self
            .slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)?;
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        self.len -= 1;
        trace!("freed node {id}");
        Some(node)
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<C>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<C>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
