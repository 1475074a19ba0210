//! Optimal (Belady) replacement policy.
//!
//! Needs the whole reference string: the victim is the resident page whose
//! next use lies furthest ahead of the current position, and a page that
//! is never used again is evicted on sight.

use crate::common::Result;
use crate::memory::replacer::{PolicyKind, ReplacementPolicy};
use crate::memory::{FrameSet, PageToken};

/// Evicts the resident page needed furthest in the future.
///
/// # Tie-breaking
/// - the first resident page (in frame order) never referenced again wins
///   immediately, later frames are not examined
/// - otherwise the largest forward distance wins, earliest frame on ties
pub struct OptimalReplacer<P> {
    frames: FrameSet<P>,
}

impl<P: PageToken> OptimalReplacer<P> {
    /// Create a new optimal replacer with `capacity` frames.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            frames: FrameSet::new(capacity)?,
        })
    }
}

impl<P: PageToken> ReplacementPolicy<P> for OptimalReplacer<P> {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Optimal
    }

    fn frames(&self) -> &FrameSet<P> {
        &self.frames
    }

    fn frames_mut(&mut self) -> &mut FrameSet<P> {
        &mut self.frames
    }

    fn select_victim(&self, sequence: &[P], position: usize) -> Option<usize> {
        // Lookahead always starts at the current position, for every frame.
        let ahead = sequence.get(position + 1..).unwrap_or(&[]);

        let mut victim = None;
        let mut farthest = None;

        for (index, page) in self.frames.iter().enumerate() {
            match ahead.iter().position(|p| p == page) {
                None => return Some(index),
                Some(distance) => {
                    if farthest.map_or(true, |f| distance > f) {
                        farthest = Some(distance);
                        victim = Some(index);
                    }
                }
            }
        }

        victim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(replacer: &mut OptimalReplacer<u32>, sequence: &[u32]) -> Vec<Option<u32>> {
        sequence
            .iter()
            .enumerate()
            .map(|(position, page)| replacer.admit(page, sequence, position).unwrap().evicted)
            .collect()
    }

    #[test]
    fn test_evicts_farthest_next_use() {
        let mut replacer = OptimalReplacer::new(3).unwrap();
        let evicted = run(&mut replacer, &[1, 2, 3, 4, 1, 2, 3]);

        // next uses after position 3: 1@4, 2@5, 3@6
        assert_eq!(evicted[3], Some(3));
    }

    #[test]
    fn test_never_used_again_short_circuits() {
        let mut replacer = OptimalReplacer::new(3).unwrap();
        // Both 1 and 2 are dead after position 3; 1 is scanned first.
        let evicted = run(&mut replacer, &[1, 2, 3, 4, 3]);
        assert_eq!(evicted[3], Some(1));
        assert_eq!(replacer.frames().to_vec(), vec![2, 3, 4]);
    }

    #[test]
    fn test_anchor_is_simulation_position() {
        // Scanning from each frame's own index would hit the past uses of
        // both pages at distance 0 and pick page 2, scanned first.
        let mut replacer = OptimalReplacer::new(2).unwrap();
        let sequence = [2, 1, 3, 2, 1];
        let evicted = run(&mut replacer, &sequence);

        // next uses after position 2: 2@3, 1@4
        assert_eq!(evicted[2], Some(1));
        // nothing follows position 4, so the first frame goes
        assert_eq!(evicted[4], Some(2));
        assert_eq!(replacer.frames().to_vec(), vec![3, 1]);
    }

    #[test]
    fn test_classic_belady_trace() {
        let mut replacer = OptimalReplacer::new(3).unwrap();
        let sequence = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2];
        let evicted = run(&mut replacer, &sequence);

        let faults = evicted.iter().filter(|e| e.is_some()).count() + 3;
        assert_eq!(faults, 7);
        assert_eq!(evicted[3], Some(7));
        assert_eq!(evicted[5], Some(1));
        assert_eq!(evicted[7], Some(0));
    }
}
