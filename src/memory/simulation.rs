//! Simulation driver - replays a reference string through one policy.

use crate::common::Result;
use crate::memory::replacer::{PolicyHandle, PolicyKind};
use crate::memory::{FrameSet, PageToken, RunStats, StepOutcome};

/// A run in progress.
///
/// Yields one [`StepOutcome`] per reference, in sequence order. Between
/// steps the policy's frame set can be inspected with [`frames`](Self::frames).
/// After the first error the iterator is fused.
///
/// # Example
/// ```
/// use pagesim::memory::{new_policy, PolicyKind, Simulation};
///
/// let sequence = [1, 2, 1];
/// let policy = new_policy(PolicyKind::Fifo, 2).unwrap();
/// let mut run = Simulation::new(policy, &sequence);
///
/// let first = run.next().unwrap().unwrap();
/// assert!(first.fault);
/// assert_eq!(run.frames().to_vec(), vec![1]);
/// ```
pub struct Simulation<'a, P: PageToken> {
    policy: PolicyHandle<P>,
    sequence: &'a [P],
    position: usize,
    failed: bool,
}

impl<'a, P: PageToken> Simulation<'a, P> {
    /// Start replaying `sequence` through `policy`.
    pub fn new(policy: PolicyHandle<P>, sequence: &'a [P]) -> Self {
        Self {
            policy,
            sequence,
            position: 0,
            failed: false,
        }
    }

    /// Index of the next reference to process.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    #[inline]
    pub fn kind(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// The policy's resident pages right now.
    pub fn frames(&self) -> &FrameSet<P> {
        self.policy.frames()
    }

    /// Give the policy back, e.g. to look at its final frame set.
    pub fn into_policy(self) -> PolicyHandle<P> {
        self.policy
    }
}

impl<P: PageToken> Iterator for Simulation<'_, P> {
    type Item = Result<StepOutcome<P>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let sequence = self.sequence;
        let position = self.position;
        let page = sequence.get(position)?;
        self.position += 1;

        let result = self.policy.admit(page, sequence, position);
        match &result {
            Ok(outcome) => log::debug!(
                "{} step {}: page {:?} fault={} eviction={} frames={:?}",
                self.policy.kind(),
                position,
                outcome.page,
                outcome.fault,
                outcome.eviction,
                self.policy.frames().to_vec()
            ),
            Err(e) => {
                log::warn!("{} step {} failed: {}", self.policy.kind(), position, e);
                self.failed = true;
            }
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.sequence.len().saturating_sub(self.position);
        (0, Some(remaining))
    }
}

/// Replay `sequence` through `policy`, one outcome per reference.
///
/// Consumes the policy: a new run needs a fresh handle from
/// [`new_policy`](crate::memory::new_policy).
pub fn simulate<P: PageToken>(policy: PolicyHandle<P>, sequence: &[P]) -> Result<Vec<StepOutcome<P>>> {
    let kind = policy.kind();
    let capacity = policy.frames().capacity();
    let outcomes = Simulation::new(policy, sequence).collect::<Result<Vec<_>>>()?;

    log::debug!(
        "{} run with {} frames finished: {}",
        kind,
        capacity,
        RunStats::from_outcomes(&outcomes)
    );
    Ok(outcomes)
}
