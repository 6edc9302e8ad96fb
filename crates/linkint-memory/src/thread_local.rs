//! Per-thread default pools.
//!
//! One [`PoolHandle`] per element type per thread. Sequences that are not
//! given an explicit pool draw from here, so every `LinkedList<u8>` on a
//! thread recycles through the same free chain.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::pool::{NodePool, PoolHandle};

thread_local! {
    static POOLS: RefCell<HashMap<TypeId, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

/// Return this thread's default pool for element type `T`, creating it on
/// first use.
pub fn local_pool<T: Default + 'static>() -> PoolHandle<T> {
    POOLS.with(|pools| {
        let mut pools = pools.borrow_mut();
        let entry = pools
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(NodePool::<T>::shared()));
        match entry.downcast_ref::<PoolHandle<T>>() {
            Some(handle) => Rc::clone(handle),
            None => unreachable!("pool registry is keyed by TypeId"),
        }
    })
}
