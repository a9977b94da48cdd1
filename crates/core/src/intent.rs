//! Edge-triggered intent queue
//!
//! The host pushes one intent per key press during a frame; the next advance
//! drains them in submission order. Storage is a fixed-capacity `ArrayVec`, so
//! the per-frame path never allocates.

use arrayvec::ArrayVec;
use log::warn;

use crate::types::{Intent, INTENT_QUEUE_CAPACITY};

/// Intents buffered for one advance
pub type IntentBatch = ArrayVec<Intent, INTENT_QUEUE_CAPACITY>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntentQueue {
    pending: IntentBatch,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an intent. Returns false (and drops it) when the queue is full.
    pub fn push(&mut self, intent: Intent) -> bool {
        if self.pending.try_push(intent).is_err() {
            warn!("intent queue full, dropping {}", intent.as_str());
            return false;
        }
        true
    }

    /// Take every pending intent, leaving the queue empty
    pub fn take(&mut self) -> IntentBatch {
        std::mem::take(&mut self.pending)
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
