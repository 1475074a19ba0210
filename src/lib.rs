//! pagesim - A page replacement simulator with swappable eviction policies.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                            pagesim                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │            Caller (CLI binary, tests, benches)           │   │
//! │  │     reference string → SimulationConfig → outcomes       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │          Simulation driver (memory::simulation)          │   │
//! │  │        one admit() per reference → StepOutcome           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │       Replacement policy (memory::replacer)              │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │     FIFO | Recency | LRU | Optimal (Belady)     │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  │           owns one FrameSet (bounded, no dups)           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, Error, config)
//! - [`memory`] - Frame set, replacement policies and the simulation driver
//!
//! # Quick Start
//! ```
//! use pagesim::{new_policy, parse_reference_string, simulate, PolicyKind, RunStats};
//!
//! let sequence = parse_reference_string("1 2 3 4 1 2 5");
//! let policy = new_policy(PolicyKind::Fifo, 3).unwrap();
//! let outcomes = simulate(policy, &sequence).unwrap();
//!
//! let stats = RunStats::from_outcomes(&outcomes);
//! assert_eq!(stats.faults, 7);
//! assert_eq!(stats.evictions, 4);
//! ```

pub mod common;
pub mod memory;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_FRAME_COUNT;
pub use common::{load_reference_file, parse_reference_string, Error, PageId, Result, SimulationConfig};

pub use memory::{
    new_policy, simulate, FrameSet, PageToken, PolicyHandle, PolicyKind, ReplacementPolicy, RunStats,
    Simulation, StepOutcome,
};

/// Build the policy described by `config` and run `sequence` through it.
///
/// # Example
/// ```
/// use pagesim::{run, PolicyKind, SimulationConfig};
///
/// let config = SimulationConfig::new(PolicyKind::Optimal);
/// let outcomes = run(&config, &[1, 2, 3, 4, 1, 2]).unwrap();
/// assert_eq!(outcomes[3].evicted, Some(3));
/// ```
pub fn run<P: PageToken>(config: &SimulationConfig, sequence: &[P]) -> Result<Vec<StepOutcome<P>>> {
    config.validate()?;
    let policy = new_policy(config.kind, config.capacity)?;
    simulate(policy, sequence)
}
