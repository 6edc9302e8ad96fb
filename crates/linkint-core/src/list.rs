//! Pool-backed singly-linked list.
//!
//! `LinkedList<T>` owns a chain of nodes that live in a shared
//! [`NodePool`](linkint_memory::NodePool).
//! Positions in the public API are 1-based. Nodes removed from a list go back
//! to the pool's free chain and are handed out again to whichever list on the
//! same pool next needs one.
//!
//! Every method takes its own short borrow of the pool, so several lists on
//! one pool can be read and written in an interleaved way (for example while
//! iterating two operands and pushing into a third list).

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use linkint_memory::{local_pool, NodeId, PoolHandle};

use crate::cursor::{Cursor, Iter};
use crate::error::ListError;

/// Singly-linked list whose nodes are recycled through a
/// [`NodePool`](linkint_memory::NodePool).
pub struct LinkedList<T: Default> {
    pool: PoolHandle<T>,
    head: Option<NodeId>,
    len: usize,
}

impl<T: Default + 'static> LinkedList<T> {
    /// Create an empty list on this thread's default pool for `T`.
    #[must_use]
    pub fn new() -> Self {
        Self::new_in(local_pool::<T>())
    }
}

impl<T: Default + 'static> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> LinkedList<T> {
    /// Create an empty list drawing nodes from `pool`.
    #[must_use]
    pub fn new_in(pool: PoolHandle<T>) -> Self {
        Self {
            pool,
            head: None,
            len: 0,
        }
    }

    /// The pool this list allocates from.
    #[must_use]
    pub fn pool(&self) -> &PoolHandle<T> {
        &self.pool
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `item` at the head. O(1).
    pub fn push(&mut self, item: T) {
        let mut pool = self.pool.borrow_mut();
        let id = pool.acquire(item);
        pool.set_next(id, self.head);
        self.head = Some(id);
        self.len += 1;
    }

    /// Remove the head element, returning its node to the pool. O(1).
    pub fn pop(&mut self) -> Option<T> {
        let id = self.head?;
        let mut pool = self.pool.borrow_mut();
        self.head = pool.next(id);
        self.len -= 1;
        Some(pool.release(id))
    }

    /// Insert `item` so that it becomes the element at `position`.
    ///
    /// Valid positions are `1..=len + 1`.
    pub fn try_insert(&mut self, position: usize, item: T) -> Result<(), ListError> {
        self.check_position(position, self.len + 1)?;
        if position == 1 {
            self.push(item);
            return Ok(());
        }

        let prev = self.node_at(position - 1);
        let mut pool = self.pool.borrow_mut();
        let id = pool.acquire(item);
        let after = pool.next(prev);
        pool.set_next(id, after);
        pool.set_next(prev, Some(id));
        self.len += 1;
        Ok(())
    }

    /// Insert `item` so that it becomes the element at `position`.
    ///
    /// # Panics
    /// If `position` is outside `1..=len + 1`.
    pub fn insert(&mut self, position: usize, item: T) {
        if let Err(err) = self.try_insert(position, item) {
            panic!("{err}");
        }
    }

    /// Replace the element at `position` (valid range `1..=len`).
    pub fn try_set_entry(&mut self, position: usize, item: T) -> Result<(), ListError> {
        self.check_position(position, self.len)?;
        let id = self.node_at(position);
        self.pool.borrow_mut().set_item(id, item);
        Ok(())
    }

    /// Replace the element at `position`.
    ///
    /// # Panics
    /// If `position` is outside `1..=len`.
    pub fn set_entry(&mut self, position: usize, item: T) {
        if let Err(err) = self.try_set_entry(position, item) {
            panic!("{err}");
        }
    }

    /// Reverse the list in place by relinking its nodes. No node is
    /// reallocated.
    pub fn reverse(&mut self) {
        let mut pool = self.pool.borrow_mut();
        let mut prev = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            cur = pool.next(id);
            pool.set_next(id, prev);
            prev = Some(id);
        }
        self.head = prev;
    }

    /// Move every element of `other` onto the tail of `self`, leaving `other`
    /// empty.
    ///
    /// When both lists share a pool the nodes themselves are spliced;
    /// otherwise the items are moved into nodes from `self`'s pool.
    pub fn append(&mut self, other: &mut Self) {
        if other.is_empty() {
            return;
        }

        if Rc::ptr_eq(&self.pool, &other.pool) {
            let head = other.head.take();
            let moved = std::mem::take(&mut other.len);
            match self.tail() {
                Some(tail) => self.pool.borrow_mut().set_next(tail, head),
                None => self.head = head,
            }
            self.len += moved;
            return;
        }

        let mut items = Vec::with_capacity(other.len);
        while let Some(item) = other.pop() {
            items.push(item);
        }
        self.extend(items);
    }

    /// Release every node back to the pool.
    pub fn clear(&mut self) {
        let head = self.head.take();
        self.pool.borrow_mut().release_chain(head);
        self.len = 0;
    }

    /// First/next traversal cursor, not yet started.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Iterator over the elements, head first.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub(crate) fn head_node(&self) -> Option<NodeId> {
        self.head
    }

    pub(crate) fn next_node(&self, id: NodeId) -> Option<NodeId> {
        self.pool.borrow().next(id)
    }

    pub(crate) fn set_node_item(&mut self, id: NodeId, item: T) {
        self.pool.borrow_mut().set_item(id, item);
    }

    fn check_position(&self, position: usize, max: usize) -> Result<(), ListError> {
        if position == 0 || position > max {
            return Err(ListError::PositionOutOfRange {
                position,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Node at a position already validated against `1..=len`.
    fn node_at(&self, position: usize) -> NodeId {
        let pool = self.pool.borrow();
        let mut cur = self.head;
        for _ in 1..position {
            cur = cur.and_then(|id| pool.next(id));
        }
        match cur {
            Some(id) => id,
            None => unreachable!("chain shorter than its recorded length"),
        }
    }

    fn tail(&self) -> Option<NodeId> {
        let pool = self.pool.borrow();
        let mut cur = self.head?;
        while let Some(next) = pool.next(cur) {
            cur = next;
        }
        Some(cur)
    }
}

impl<T: Default + Clone> LinkedList<T> {
    /// Element at `position`, or `None` outside `1..=len`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<T> {
        self.check_position(position, self.len).ok()?;
        let id = self.node_at(position);
        Some(self.node_item(id))
    }

    /// Element at `position`.
    ///
    /// # Panics
    /// If `position` is outside `1..=len`.
    #[must_use]
    pub fn get_entry(&self, position: usize) -> T {
        match self.get(position) {
            Some(item) => item,
            None => panic!(
                "{}",
                ListError::PositionOutOfRange {
                    position,
                    len: self.len,
                }
            ),
        }
    }

    /// The head element.
    #[must_use]
    pub fn front(&self) -> Option<T> {
        self.head.map(|id| self.node_item(id))
    }

    /// Grow by appending `fill` at the tail, or shrink by releasing trailing
    /// nodes, until the list holds exactly `new_len` elements.
    pub fn resize(&mut self, new_len: usize, fill: T) {
        match new_len.cmp(&self.len) {
            Ordering::Equal => {}
            Ordering::Less if new_len == 0 => self.clear(),
            Ordering::Less => {
                let last = self.node_at(new_len);
                let mut pool = self.pool.borrow_mut();
                let cut = pool.next(last);
                pool.set_next(last, None);
                pool.release_chain(cut);
                self.len = new_len;
            }
            Ordering::Greater => {
                let extra = new_len - self.len;
                self.extend(std::iter::repeat(fill).take(extra));
            }
        }
    }

    /// Deep copy of `length` consecutive elements starting at `position`,
    /// on the same pool. The source is left untouched.
    ///
    /// Yields an empty list unless every position in
    /// `position..position + length` falls within `1..=len`.
    #[must_use]
    pub fn sub_list(&self, position: usize, length: usize) -> Self {
        let mut out = Self::new_in(Rc::clone(&self.pool));
        let in_range = position
            .checked_sub(1)
            .and_then(|start| start.checked_add(length))
            .is_some_and(|end| position <= self.len && end <= self.len);
        if !in_range {
            return out;
        }
        out.extend(self.iter().skip(position - 1).take(length));
        out
    }

    /// Copy the elements into a `Vec`, head first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    pub(crate) fn node_item(&self, id: NodeId) -> T {
        self.pool.borrow().item(id).clone()
    }

    /// Item and successor of a node, under a single pool borrow.
    pub(crate) fn step(&self, id: NodeId) -> (T, Option<NodeId>) {
        let pool = self.pool.borrow();
        (pool.item(id).clone(), pool.next(id))
    }
}

impl<T: Default + PartialEq> LinkedList<T> {
    /// Remove the first element equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        let mut pool = self.pool.borrow_mut();
        let mut prev = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            if pool.item(id) == item {
                break;
            }
            prev = Some(id);
            cur = pool.next(id);
        }

        let Some(id) = cur else {
            return false;
        };
        let after = pool.next(id);
        match prev {
            Some(prev) => pool.set_next(prev, after),
            None => self.head = after,
        }
        pool.release(id);
        self.len -= 1;
        true
    }

    /// Sequential search for `item`.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        let pool = self.pool.borrow();
        let mut cur = self.head;
        while let Some(id) = cur {
            if pool.item(id) == item {
                return true;
            }
            cur = pool.next(id);
        }
        false
    }
}

impl<T: Default + Ord> LinkedList<T> {
    /// Insert `item` before the first element not less than it. Keeps an
    /// ascending list ascending.
    pub fn insert_sorted(&mut self, item: T) {
        let mut pool = self.pool.borrow_mut();
        let mut prev = None;
        let mut cur = self.head;
        while let Some(id) = cur {
            if *pool.item(id) >= item {
                break;
            }
            prev = Some(id);
            cur = pool.next(id);
        }

        let id = pool.acquire(item);
        pool.set_next(id, cur);
        match prev {
            Some(prev) => pool.set_next(prev, Some(id)),
            None => self.head = Some(id),
        }
        self.len += 1;
    }
}

impl<T: Default + Clone + fmt::Display> LinkedList<T> {
    /// Write the elements head first, separated by single spaces.
    pub fn write_forward(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{item}")?;
        }
        Ok(())
    }

    /// Write the elements tail first, separated by single spaces.
    pub fn write_reverse(&self, out: &mut impl fmt::Write) -> fmt::Result {
        let items = self.to_vec();
        for (i, item) in items.iter().rev().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{item}")?;
        }
        Ok(())
    }
}

impl<T: Default> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut tail = self.tail();
        for item in iter {
            let mut pool = self.pool.borrow_mut();
            let id = pool.acquire(item);
            match tail {
                Some(tail) => pool.set_next(tail, Some(id)),
                None => self.head = Some(id),
            }
            tail = Some(id);
            self.len += 1;
        }
    }
}

impl<T: Default + 'static> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T: Default + Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::new_in(Rc::clone(&self.pool));
        copy.extend(self.iter());
        copy
    }
}

impl<T: Default + Clone + PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Default + Clone + Eq> Eq for LinkedList<T> {}

impl<T: Default + Clone + fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T: Default + Clone> IntoIterator for &'a LinkedList<T> {
    type Item = T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Default> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
