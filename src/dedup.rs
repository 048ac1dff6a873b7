//! Bounded deduplicating accumulator
//!
//! The only mutable shared state in the generation core: a set of unique
//! candidates capped at the batch size. The engine checks `is_full` after
//! every insertion and drains the set into a batch file, so the set never
//! grows past the cap.
//!
//! Draining clears membership: a candidate regenerated after a flush is
//! treated as new again. Uniqueness is scoped to one flush window.

use ahash::RandomState;
use hashbrown::HashSet;

/// Deduplicating accumulator bounded by the batch size.
#[derive(Debug)]
pub struct DedupSet {
    set: HashSet<String, RandomState>,
    batch_size: usize,
}

impl DedupSet {
    pub fn new(batch_size: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(batch_size, RandomState::new()),
            batch_size,
        }
    }

    /// Insert a candidate. Returns false if it was already present.
    #[inline]
    pub fn insert(&mut self, candidate: String) -> bool {
        self.set.insert(candidate)
    }

    /// Whether the set has reached the flush threshold.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.set.len() >= self.batch_size
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Take the current contents, leaving the set empty.
    ///
    /// Iteration order of the returned batch is unspecified.
    pub fn drain(&mut self) -> Vec<String> {
        self.set.drain().collect()
    }
}
