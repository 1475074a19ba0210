//! Run statistics.

use std::fmt;

use crate::memory::StepOutcome;

/// Counters summarizing one simulation run.
///
/// # Example
/// ```
/// use pagesim::memory::{RunStats, StepOutcome};
///
/// let outcomes = vec![StepOutcome::fault(1), StepOutcome::hit(1)];
/// let stats = RunStats::from_outcomes(&outcomes);
/// assert_eq!(stats.faults, 1);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Number of references processed.
    pub references: u64,

    /// References that found their page resident.
    pub hits: u64,

    /// References that did not.
    pub faults: u64,

    /// Faults that removed a resident page.
    pub evictions: u64,

    /// Evictions followed by insertion of the faulting page.
    pub replacements: u64,
}

impl RunStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a whole outcome stream.
    pub fn from_outcomes<P>(outcomes: &[StepOutcome<P>]) -> Self {
        let mut stats = Self::new();
        for outcome in outcomes {
            stats.record(outcome);
        }
        stats
    }

    /// Count one outcome.
    pub fn record<P>(&mut self, outcome: &StepOutcome<P>) {
        self.references += 1;
        if outcome.fault {
            self.faults += 1;
        } else {
            self.hits += 1;
        }
        if outcome.eviction {
            self.evictions += 1;
        }
        if outcome.replacement {
            self.replacements += 1;
        }
    }

    /// Hit rate (0.0 to 1.0); 0.0 for an empty run.
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fault rate (0.0 to 1.0); 0.0 for an empty run.
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, hits: {}, faults: {}, evictions: {}, fault_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.fault_rate() * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = RunStats::new();
        assert_eq!(stats.references, 0);
        assert_eq!(stats.hit_rate(), 0.0);
        assert_eq!(stats.fault_rate(), 0.0);
    }

    #[test]
    fn test_stats_record() {
        let mut stats = RunStats::new();
        stats.record(&StepOutcome::fault(1));
        stats.record(&StepOutcome::fault(2));
        stats.record(&StepOutcome::replacement(3, 1));
        stats.record(&StepOutcome::hit(2));

        assert_eq!(stats.references, 4);
        assert_eq!(stats.faults, 3);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.evictions, 1);
        assert_eq!(stats.replacements, 1);
        assert_eq!(stats.fault_rate(), 0.75);
    }

    #[test]
    fn test_stats_display() {
        let outcomes = vec![
            StepOutcome::fault('a'),
            StepOutcome::hit('a'),
            StepOutcome::hit('a'),
            StepOutcome::hit('a'),
        ];
        let display = format!("{}", RunStats::from_outcomes(&outcomes));

        assert!(display.contains("hits: 3"));
        assert!(display.contains("faults: 1"));
        assert!(display.contains("25.00%"));
    }
}
