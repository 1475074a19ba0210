//! FIFO (First-In-First-Out) replacement policy.

use crate::common::Result;
use crate::memory::replacer::{PolicyKind, ReplacementPolicy};
use crate::memory::{FrameSet, PageToken};

/// Evicts pages in the order they were brought in.
///
/// The frame set is used as a queue (front = oldest). Re-referencing a
/// resident page does not move it.
pub struct FifoReplacer<P> {
    frames: FrameSet<P>,
}

impl<P: PageToken> FifoReplacer<P> {
    /// Create a new FIFO replacer with `capacity` frames.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            frames: FrameSet::new(capacity)?,
        })
    }
}

impl<P: PageToken> ReplacementPolicy<P> for FifoReplacer<P> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Fifo
    }

    fn frames(&self) -> &FrameSet<P> {
        &self.frames
    }

    fn frames_mut(&mut self) -> &mut FrameSet<P> {
        &mut self.frames
    }

    fn select_victim(&self, _sequence: &[P], _position: usize) -> Option<usize> {
        // Insertion order is total: the front is always the oldest.
        if self.frames.is_empty() {
            None
        } else {
            Some(0)
        }
    }
}
