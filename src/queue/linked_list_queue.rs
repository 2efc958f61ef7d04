use crate::error::QueueError;
use crate::raw::{NodeArena, NodeId};

use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// FIFO queue on a singly linked list.
///
/// Elements are enqueued at the tail and dequeued from the head. Every node
/// carries a single forward link, so [`reverse`](LinkedListQueue::reverse)
/// walks the chain backwards by rescanning it from the head.
pub struct LinkedListQueue<T> {
    nodes: NodeArena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
    // invariant: len == 0 <=> head.is_none() <=> tail.is_none()
}

impl<T> LinkedListQueue<T> {
    pub fn new() -> Self {
        Self {
            nodes: NodeArena::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn clear(&mut self) {
        let len = self.len;
        while self.dequeue().is_ok() {}
        trace!("clear: released {} nodes", len);
    }

    pub fn enqueue(&mut self, elem: T) {
        let id = self.nodes.alloc(elem);
        match self.tail {
            None => self.head = Some(id),
            Some(tail) => self.nodes[tail].next = Some(id),
        }
        self.tail = Some(id);
        self.len += 1;
    }

    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        let head = self.head.ok_or(QueueError::EmptyDequeue)?;
        self.head = self.nodes[head].next;
        let elem = self.nodes.consume(head);
        self.len -= 1;
        if self.head.is_none() {
            self.tail = None;
            self.nodes.reset();
        }
        Ok(elem)
    }

    pub fn peek(&self) -> Result<&T, QueueError> {
        self.head
            .map(|head| &self.nodes[head].elem)
            .ok_or(QueueError::EmptyPeek)
    }

    /// Reverses the queue in place.
    ///
    /// Starting from the tail, each node's link is pointed at its predecessor,
    /// found by scanning forward from the head. Takes O(n²) time and allocates
    /// nothing.
    pub fn reverse(&mut self) {
        let head = match self.head {
            Some(head) => head,
            None => return,
        };

        let mut scans = 0usize;
        let mut cp = self.tail;
        while cp != self.head {
            let p = self.prev(cp);
            debug_assert!(p.is_some(), "node is not linked from head");
            if let Some(id) = cp {
                self.nodes[id].next = p;
            }
            cp = p;
            scans += 1;
        }
        self.nodes[head].next = None;

        std::mem::swap(&mut self.head, &mut self.tail);
        trace!("reverse: {} nodes, {} predecessor scans", self.len, scans);
    }

    // Returns the node linking to `cp`, or head itself when `cp` is head.
    // cond: `cp` is reachable from head
    fn prev(&self, cp: Option<NodeId>) -> Option<NodeId> {
        let cp = cp?;
        if Some(cp) == self.head {
            return self.head;
        }

        let mut prev = self.head;
        while let Some(id) = prev {
            let next = self.nodes[id].next;
            if next == Some(cp) {
                break;
            }
            prev = next;
        }
        prev
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            len: self.len,
        }
    }

    /// Replaces the contents with a copy of `src`, returning `self`.
    pub fn assign(&mut self, src: &Self) -> &mut Self
    where
        T: Clone,
    {
        self.clear();
        self.extend(src.iter().cloned());
        trace!("assign: copied {} nodes", self.len);
        self
    }
}

impl<T> Default for LinkedListQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedListQueue<T> {
    fn drop(&mut self) {
        self.clear()
    }
}

impl<T: Clone> Clone for LinkedListQueue<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl<T> FromIterator<T> for LinkedListQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for LinkedListQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.enqueue(elem);
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedListQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for elem in self {
            write!(f, "{} ", elem)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedListQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedListQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedListQueue<T> {}

// --------------------------------
// begin: IterOwned

pub struct IterOwned<T>(LinkedListQueue<T>);

impl<T> Iterator for IterOwned<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.0.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<T> IntoIterator for LinkedListQueue<T> {
    type Item = T;
    type IntoIter = IterOwned<T>;
    fn into_iter(self) -> IterOwned<T> {
        IterOwned(self)
    }
}

impl<T> ExactSizeIterator for IterOwned<T> {
    fn len(&self) -> usize {
        self.0.len
    }
}

impl<T> FusedIterator for IterOwned<T> {}

// end: IterOwned
// ------------------------------------------

// ------------------------------------------
// begin: Iter

pub struct Iter<'a, T> {
    nodes: &'a NodeArena<T>,
    cursor: Option<NodeId>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        let id = self.cursor?;
        let nodes = self.nodes;
        let node = &nodes[id];
        self.cursor = node.next;
        self.len -= 1;
        Some(&node.elem)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> IntoIterator for &'a LinkedListQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        self.len
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

// end: Iter
// ------------------------------------------
