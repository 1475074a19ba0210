//! Configuration for a simulation run.

use crate::common::{Error, Result};
use crate::memory::PolicyKind;

/// Number of frames used when the caller does not choose one.
///
/// Matches the fixed frame count of the classic three-frame textbook
/// exercises (and of the interactive simulator this crate replaces).
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Smallest capacity a frame set accepts.
pub const MIN_FRAME_COUNT: usize = 1;

/// Everything needed to build a policy for one run.
///
/// # Example
/// ```
/// use pagesim::common::config::SimulationConfig;
/// use pagesim::memory::PolicyKind;
///
/// let config = SimulationConfig::new(PolicyKind::Optimal).with_capacity(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Which replacement policy to run.
    pub kind: PolicyKind,

    /// Maximum number of resident pages.
    pub capacity: usize,
}

impl SimulationConfig {
    /// Create a config for `kind` with the default frame count.
    pub fn new(kind: PolicyKind) -> Self {
        Self {
            kind,
            capacity: DEFAULT_FRAME_COUNT,
        }
    }

    /// Override the frame count.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Reject configurations no policy can run with.
    pub fn validate(&self) -> Result<()> {
        if self.capacity < MIN_FRAME_COUNT {
            return Err(Error::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(PolicyKind::Fifo)
    }
}
