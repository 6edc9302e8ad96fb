//! # linkint-memory
//!
//! Node storage for the `linkint` workspace.
//!
//! Provides a free-list node arena addressed by stable indices, usage
//! statistics, and a per-thread registry of default pools keyed by element type.
#![warn(missing_docs)]

pub mod pool;
pub mod stats;
pub mod thread_local;

pub use pool::{NodeId, NodePool, PoolHandle};
pub use stats::PoolStats;
pub use thread_local::local_pool;
