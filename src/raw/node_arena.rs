use std::ops::{Index, IndexMut};

/// Handle to a node slot inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

pub struct Node<T> {
    pub elem: T,
    pub next: Option<NodeId>,
}

enum Slot<T> {
    Occupied(Node<T>),
    // link to the next free slot
    Vacant(Option<NodeId>),
}

/// Slot storage for singly linked nodes.
///
/// Released slots are threaded onto a free list and handed out again by
/// `alloc`, so a steady enqueue/dequeue workload does not grow the backing
/// vector. Links between nodes are plain indices; a node is owned by exactly
/// one slot.
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
}

impl<T> NodeArena<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
        }
    }

    pub fn alloc(&mut self, elem: T) -> NodeId {
        let node = Node { elem, next: None };
        match self.free {
            Some(id) => {
                let slot = &mut self.slots[id.0];
                match *slot {
                    Slot::Vacant(next_free) => self.free = next_free,
                    Slot::Occupied(_) => panic!("free list points at an occupied slot"),
                }
                *slot = Slot::Occupied(node);
                id
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    // cond: nothing links to `id` any more
    pub fn consume(&mut self, id: NodeId) -> T {
        let old = std::mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free));
        match old {
            Slot::Occupied(node) => {
                self.free = Some(id);
                node.elem
            }
            Slot::Vacant(next_free) => {
                self.slots[id.0] = Slot::Vacant(next_free);
                panic!("node released twice")
            }
        }
    }

    /// Drops the slot vector and the free list.
    ///
    /// Only meaningful once every node has been consumed; any node still
    /// occupying a slot is dropped with it.
    pub fn reset(&mut self) {
        self.slots.clear();
        self.free = None;
    }

    #[cfg(test)]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = Node<T>;
    fn index(&self, id: NodeId) -> &Node<T> {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => node,
            _ => panic!("dangling node id"),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Node<T> {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => node,
            _ => panic!("dangling node id"),
        }
    }
}
