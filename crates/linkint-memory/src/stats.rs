//! Pool statistics for usage tracking.

use serde::{Deserialize, Serialize};

/// Snapshot of node pool usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolStats {
    /// Number of acquisitions served from the free chain.
    pub hits: u64,
    /// Number of acquisitions that required a fresh slot.
    pub misses: u64,
    /// Number of nodes returned to the free chain.
    pub releases: u64,
    /// Nodes currently linked into live chains.
    pub live: usize,
    /// Nodes currently waiting on the free chain.
    pub free: usize,
}

impl PoolStats {
    /// Fraction of acquisitions served by recycling, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            return 0.0;
        }
        self.hits as f64 / total as f64
    }

    /// Total slots ever allocated by the pool.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.live + self.free
    }
}

/// Running counters owned by a pool.
#[derive(Debug, Default)]
pub(crate) struct Counters {
    hits: u64,
    misses: u64,
    releases: u64,
}

impl Counters {
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_release(&mut self) {
        self.releases += 1;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn snapshot(&self, live: usize, free: usize) -> PoolStats {
        PoolStats {
            hits: self.hits,
            misses: self.misses,
            releases: self.releases,
            live,
            free,
        }
    }
}
