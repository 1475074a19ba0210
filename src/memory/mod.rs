//! Resident-set management and page replacement.
//!
//! A simulation owns exactly one frame set, held by the policy that
//! decides what to evict from it.
//!
//! # Components
//! - [`FrameSet`] - Bounded set of resident pages
//! - [`replacer`] - Replacement policy trait and implementations
//! - [`StepOutcome`] - Result of admitting one reference
//! - [`Simulation`] / [`simulate`] - Replays a reference string
//! - [`RunStats`] - Summary counters for a run

mod frame_set;
mod outcome;
pub mod replacer;
mod simulation;
mod stats;

pub use frame_set::{FrameSet, PageToken};
pub use outcome::StepOutcome;
pub use replacer::{new_policy, PolicyHandle, PolicyKind, ReplacementPolicy};
pub use simulation::{simulate, Simulation};
pub use stats::RunStats;
