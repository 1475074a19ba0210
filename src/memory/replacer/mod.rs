//! Replacement policy implementations (replacers).
//!
//! Every policy owns one [`FrameSet`] and shares the admission logic in
//! [`ReplacementPolicy::admit`]; they differ only in how the victim is
//! chosen once the frame set is full:
//! - [`FifoReplacer`] - oldest resident page
//! - [`RecencyReplacer`] - resident page first referenced latest in the sequence
//! - [`LruReplacer`] - resident page whose last past reference is oldest
//! - [`OptimalReplacer`] - resident page needed furthest in the future (Belady)

mod fifo;
mod lru;
mod optimal;
mod recency;

pub use fifo::FifoReplacer;
pub use lru::LruReplacer;
pub use optimal::OptimalReplacer;
pub use recency::RecencyReplacer;

use std::fmt;
use std::str::FromStr;

use crate::common::{Error, Result};
use crate::memory::{FrameSet, PageToken, StepOutcome};

/// Which replacement policy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// First-in-first-out.
    Fifo,
    /// Evicts by latest first occurrence over the whole sequence.
    Recency,
    /// Least recently used, from past references only.
    Lru,
    /// Belady's optimal lookahead.
    Optimal,
}

impl PolicyKind {
    /// All policies, in display order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fifo,
        PolicyKind::Recency,
        PolicyKind::Lru,
        PolicyKind::Optimal,
    ];

    /// Short lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Recency => "recency",
            PolicyKind::Lru => "lru",
            PolicyKind::Optimal => "opt",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "recency" => Ok(PolicyKind::Recency),
            "lru" => Ok(PolicyKind::Lru),
            "opt" | "optimal" => Ok(PolicyKind::Optimal),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

/// A replacement policy bound to one frame set.
///
/// Implementors supply storage and a victim rule; [`admit`](Self::admit)
/// is shared. A hit never touches the frame set in any policy.
pub trait ReplacementPolicy<P: PageToken> {
    /// Which policy this is.
    fn kind(&self) -> PolicyKind;

    /// The resident pages.
    fn frames(&self) -> &FrameSet<P>;

    fn frames_mut(&mut self) -> &mut FrameSet<P>;

    /// Pick the index (in frame-set order) of the page to evict.
    ///
    /// Only called when the frame set is full. `position` is the index of
    /// the faulting reference in `sequence`.
    fn select_victim(&self, sequence: &[P], position: usize) -> Option<usize>;

    /// Reference `page`, which sits at `position` in `sequence`.
    ///
    /// Fails with [`Error::SequencePositionMismatch`] (and changes nothing)
    /// when `sequence[position]` is not `page`.
    fn admit(&mut self, page: &P, sequence: &[P], position: usize) -> Result<StepOutcome<P>> {
        if sequence.get(position) != Some(page) {
            return Err(Error::SequencePositionMismatch {
                position,
                len: sequence.len(),
            });
        }

        if self.frames().contains(page) {
            return Ok(StepOutcome::hit(page.clone()));
        }

        if !self.frames().is_full() {
            self.frames_mut().push(page.clone());
            return Ok(StepOutcome::fault(page.clone()));
        }

        let index = self
            .select_victim(sequence, position)
            .ok_or(Error::NoEvictionCandidate)?;
        let victim = self
            .frames_mut()
            .remove(index)
            .ok_or(Error::NoEvictionCandidate)?;
        log::trace!(
            "{}: evicting {:?} from frame {} for {:?} at position {}",
            self.kind(),
            victim,
            index,
            page,
            position
        );
        self.frames_mut().push(page.clone());

        Ok(StepOutcome::replacement(page.clone(), victim))
    }
}

/// An owned, type-erased policy. Drop it and build a new one to start over.
pub type PolicyHandle<P> = Box<dyn ReplacementPolicy<P>>;

/// Build an empty policy of the given kind.
///
/// # Example
/// ```
/// use pagesim::memory::{new_policy, PolicyKind};
///
/// let policy = new_policy::<u32>(PolicyKind::Fifo, 3).unwrap();
/// assert_eq!(policy.frames().capacity(), 3);
/// assert!(new_policy::<u32>(PolicyKind::Fifo, 0).is_err());
/// ```
pub fn new_policy<P: PageToken>(kind: PolicyKind, capacity: usize) -> Result<PolicyHandle<P>> {
    let policy: PolicyHandle<P> = match kind {
        PolicyKind::Fifo => Box::new(FifoReplacer::new(capacity)?),
        PolicyKind::Recency => Box::new(RecencyReplacer::new(capacity)?),
        PolicyKind::Lru => Box::new(LruReplacer::new(capacity)?),
        PolicyKind::Optimal => Box::new(OptimalReplacer::new(capacity)?),
    };
    Ok(policy)
}
