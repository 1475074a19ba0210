//! Recency-approximate replacement policy.
//!
//! This reproduces the "LRU" of the interactive simulator the crate's
//! expected outputs come from: the victim is the resident page whose
//! **first** occurrence in the whole reference string comes latest.
//! The rule reads the full sequence, future included, and is not history
//! based. [`LruReplacer`](super::LruReplacer) is the history-based variant.

use crate::common::Result;
use crate::memory::replacer::{PolicyKind, ReplacementPolicy};
use crate::memory::{FrameSet, PageToken};

/// Evicts the resident page that first appears latest in the sequence.
pub struct RecencyReplacer<P> {
    frames: FrameSet<P>,
}

impl<P: PageToken> RecencyReplacer<P> {
    /// Create a new recency replacer with `capacity` frames.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            frames: FrameSet::new(capacity)?,
        })
    }
}

impl<P: PageToken> ReplacementPolicy<P> for RecencyReplacer<P> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Recency
    }

    fn frames(&self) -> &FrameSet<P> {
        &self.frames
    }

    fn frames_mut(&mut self) -> &mut FrameSet<P> {
        &mut self.frames
    }

    fn select_victim(&self, sequence: &[P], _position: usize) -> Option<usize> {
        let mut victim = None;
        let mut latest_first_use = None;

        for (index, page) in self.frames.iter().enumerate() {
            // Pages missing from the sequence are not candidates.
            let Some(first_use) = sequence.iter().position(|p| p == page) else {
                continue;
            };
            if latest_first_use.map_or(true, |latest| first_use > latest) {
                latest_first_use = Some(first_use);
                victim = Some(index);
            }
        }

        victim
    }
}
