//! Free-list node arena.
//!
//! Nodes live in a growable slab and are addressed by [`NodeId`]. A released
//! node is pushed onto the head of an intrusive free chain and is the first
//! candidate for the next [`NodePool::acquire`]. Slots are never returned to
//! the allocator while the pool is alive.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::stats::{Counters, PoolStats};

/// Stable index of a node slot inside a [`NodePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Slot index inside the arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Shared handle to a pool. Every sequence built on the same handle recycles
/// through the same free chain.
pub type PoolHandle<T> = Rc<RefCell<NodePool<T>>>;

#[derive(Debug)]
struct Slot<T> {
    item: T,
    next: Option<NodeId>,
    live: bool,
}

/// Arena of singly-linked nodes with a last-released-first-reused free chain.
#[derive(Debug)]
pub struct NodePool<T> {
    slots: Vec<Slot<T>>,
    free: Option<NodeId>,
    free_len: usize,
    counters: Counters,
}

impl<T: Default> NodePool<T> {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            free_len: 0,
            counters: Counters::default(),
        }
    }

    /// Create an empty pool wrapped in a shareable handle.
    #[must_use]
    pub fn shared() -> PoolHandle<T> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Take a detached node holding `item`, reusing the most recently
    /// released slot when there is one.
    pub fn acquire(&mut self, item: T) -> NodeId {
        if let Some(id) = self.free {
            let slot = &mut self.slots[id.0];
            self.free = slot.next;
            self.free_len -= 1;
            slot.item = item;
            slot.next = None;
            slot.live = true;
            self.counters.record_hit();
            return id;
        }

        let id = NodeId(self.slots.len());
        self.slots.push(Slot {
            item,
            next: None,
            live: true,
        });
        self.counters.record_miss();
        trace!(slots = self.slots.len(), "node pool grew");
        id
    }

    /// Take a detached node holding `T::default()`.
    pub fn acquire_default(&mut self) -> NodeId {
        self.acquire(T::default())
    }

    /// Return a node to the free chain, handing back the payload it held.
    ///
    /// The slot's payload is reset to `T::default()`. Whatever `next` link the
    /// node had is discarded; use [`release_chain`](Self::release_chain) to
    /// return a whole chain.
    pub fn release(&mut self, id: NodeId) -> T {
        let free = self.free;
        let slot = self.live_slot_mut(id);
        let item = std::mem::take(&mut slot.item);
        slot.next = free;
        slot.live = false;
        self.free = Some(id);
        self.free_len += 1;
        self.counters.record_release();
        item
    }

    /// Release every node reachable from `head`. Returns the number released.
    pub fn release_chain(&mut self, head: Option<NodeId>) -> usize {
        let mut released = 0;
        let mut cur = head;
        while let Some(id) = cur {
            cur = self.next(id);
            self.release(id);
            released += 1;
        }
        released
    }

    /// Pre-populate the free chain so at least `count` nodes are available
    /// without growing the slab.
    pub fn warm(&mut self, count: usize) {
        let to_add = count.saturating_sub(self.free_len);
        self.slots.reserve(to_add);
        for _ in 0..to_add {
            let id = NodeId(self.slots.len());
            self.slots.push(Slot {
                item: T::default(),
                next: self.free,
                live: false,
            });
            self.free = Some(id);
            self.free_len += 1;
        }
    }

    /// Drop all storage if no node is live. Returns the number of slots freed.
    pub fn shrink(&mut self) -> usize {
        if self.live() != 0 {
            return 0;
        }
        let freed = self.slots.len();
        self.slots = Vec::new();
        self.free = None;
        self.free_len = 0;
        freed
    }
}

impl<T> NodePool<T> {
    fn live_slot(&self, id: NodeId) -> &Slot<T> {
        let slot = &self.slots[id.0];
        assert!(slot.live, "node {} is on the free chain", id.0);
        slot
    }

    fn live_slot_mut(&mut self, id: NodeId) -> &mut Slot<T> {
        let slot = &mut self.slots[id.0];
        assert!(slot.live, "node {} is on the free chain", id.0);
        slot
    }

    /// Borrow a live node's payload.
    #[must_use]
    pub fn item(&self, id: NodeId) -> &T {
        &self.live_slot(id).item
    }

    /// Mutably borrow a live node's payload.
    pub fn item_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.live_slot_mut(id).item
    }

    /// Replace a live node's payload.
    pub fn set_item(&mut self, id: NodeId, item: T) {
        self.live_slot_mut(id).item = item;
    }

    /// Successor of a live node.
    #[must_use]
    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.live_slot(id).next
    }

    /// Relink a live node.
    pub fn set_next(&mut self, id: NodeId, next: Option<NodeId>) {
        self.live_slot_mut(id).next = next;
    }

    /// Number of nodes currently linked into live chains.
    #[must_use]
    pub fn live(&self) -> usize {
        self.slots.len() - self.free_len
    }

    /// Number of nodes waiting on the free chain.
    #[must_use]
    pub fn free_len(&self) -> usize {
        self.free_len
    }

    /// Total number of slots the pool has allocated.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Snapshot of usage statistics.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.counters.snapshot(self.live(), self.free_len)
    }

    /// Reset hit/miss/release counters.
    pub fn reset_stats(&mut self) {
        self.counters.reset();
    }
}

impl<T: Default> Default for NodePool<T> {
    fn default() -> Self {
        Self::new()
    }
}
