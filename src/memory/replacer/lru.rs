//! LRU (Least Recently Used) replacement policy, from past references only.
//!
//! Recency is read back from `sequence[..position]` instead of being
//! tracked by reordering frames, so a hit leaves the frame set untouched
//! here too.

use crate::common::Result;
use crate::memory::replacer::{PolicyKind, ReplacementPolicy};
use crate::memory::{FrameSet, PageToken};

/// Evicts the resident page whose latest past reference is oldest.
pub struct LruReplacer<P> {
    frames: FrameSet<P>,
}

impl<P: PageToken> LruReplacer<P> {
    /// Create a new LRU replacer with `capacity` frames.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            frames: FrameSet::new(capacity)?,
        })
    }
}

impl<P: PageToken> ReplacementPolicy<P> for LruReplacer<P> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn frames(&self) -> &FrameSet<P> {
        &self.frames
    }

    fn frames_mut(&mut self) -> &mut FrameSet<P> {
        &mut self.frames
    }

    fn select_victim(&self, sequence: &[P], position: usize) -> Option<usize> {
        let history = &sequence[..position.min(sequence.len())];

        // `None` (never referenced before) sorts first; ties keep the
        // earliest frame.
        self.frames
            .iter()
            .enumerate()
            .min_by_key(|(_, page)| history.iter().rposition(|p| p == *page))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(replacer: &mut LruReplacer<u32>, sequence: &[u32]) -> Vec<Option<u32>> {
        sequence
            .iter()
            .enumerate()
            .map(|(position, page)| replacer.admit(page, sequence, position).unwrap().evicted)
            .collect()
    }

    #[test]
    fn test_lru_evicts_least_recent() {
        let mut replacer = LruReplacer::new(2).unwrap();
        let evicted = run(&mut replacer, &[1, 2, 2, 3]);

        // last uses before position 3: 1@0, 2@2
        assert_eq!(evicted[3], Some(1));
        assert_eq!(replacer.frames().to_vec(), vec![2, 3]);
    }

    #[test]
    fn test_lru_hit_refreshes_recency_without_reordering() {
        let mut replacer = LruReplacer::new(2).unwrap();
        let evicted = run(&mut replacer, &[1, 2, 1, 3]);

        assert_eq!(evicted[3], Some(2));
        // frame order untouched by the hit on 1
        assert_eq!(replacer.frames().to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_lru_classic_trace() {
        let mut replacer = LruReplacer::new(3).unwrap();
        let sequence = [7, 0, 1, 2, 0, 3, 0, 4];
        let evicted = run(&mut replacer, &sequence);

        assert_eq!(
            evicted,
            vec![None, None, None, Some(7), None, Some(1), None, Some(2)]
        );
    }
}
