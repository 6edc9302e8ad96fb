//! Traversal over a [`LinkedList`].
//!
//! A [`Cursor`] reproduces the first/next traversal protocol: `traverse(true)`
//! restarts at the head, `traverse(false)` advances. Both cursors and
//! iterators hold a shared borrow of their list, so the list cannot be
//! mutated while either is alive, and any number of them may run side by side.

use std::iter::FusedIterator;

use linkint_memory::NodeId;

use crate::list::LinkedList;

/// Restartable first/next cursor over a list.
pub struct Cursor<'a, T: Default> {
    list: &'a LinkedList<T>,
    current: Option<NodeId>,
    started: bool,
}

impl<'a, T: Default> Cursor<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            list,
            current: None,
            started: false,
        }
    }
}

impl<T: Default + Clone> Cursor<'_, T> {
    /// With `first == true`, move to the head. Otherwise advance one node.
    ///
    /// Returns the element under the cursor, or `None` when the list is
    /// empty, the cursor has run off the tail, or it was advanced before ever
    /// being started.
    pub fn traverse(&mut self, first: bool) -> Option<T> {
        if first {
            self.current = self.list.head_node();
            self.started = true;
        } else if !self.started {
            return None;
        } else if let Some(id) = self.current {
            self.current = self.list.next_node(id);
        }
        self.get()
    }

    /// Element under the cursor without moving it.
    #[must_use]
    pub fn get(&self) -> Option<T> {
        self.current.map(|id| self.list.node_item(id))
    }
}

/// Iterator over a list's elements, head first. Yields clones.
pub struct Iter<'a, T: Default> {
    list: &'a LinkedList<T>,
    next: Option<NodeId>,
    remaining: usize,
}

impl<'a, T: Default> Iter<'a, T> {
    pub(crate) fn new(list: &'a LinkedList<T>) -> Self {
        Self {
            list,
            next: list.head_node(),
            remaining: list.len(),
        }
    }
}

impl<T: Default + Clone> Iterator for Iter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let id = self.next?;
        let (item, next) = self.list.step(id);
        self.next = next;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Default + Clone> ExactSizeIterator for Iter<'_, T> {}

impl<T: Default + Clone> FusedIterator for Iter<'_, T> {}
