//! Per-reference result of a replacement policy.

/// What happened when one reference was admitted.
///
/// `replacement` always equals `eviction`: a victim is only removed to make
/// room for the faulting page, which is inserted in the same step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome<P> {
    /// The page that was referenced.
    pub page: P,

    /// The page was not resident when the step started.
    pub fault: bool,

    /// A resident page was removed to make room.
    pub eviction: bool,

    /// The removed page was replaced by `page`.
    pub replacement: bool,

    /// The victim, when there was one.
    pub evicted: Option<P>,
}

impl<P> StepOutcome<P> {
    /// The page was already resident.
    pub fn hit(page: P) -> Self {
        Self {
            page,
            fault: false,
            eviction: false,
            replacement: false,
            evicted: None,
        }
    }

    /// The page faulted into a free frame.
    pub fn fault(page: P) -> Self {
        Self {
            page,
            fault: true,
            eviction: false,
            replacement: false,
            evicted: None,
        }
    }

    /// The page faulted and displaced `victim`.
    pub fn replacement(page: P, victim: P) -> Self {
        Self {
            page,
            fault: true,
            eviction: true,
            replacement: true,
            evicted: Some(victim),
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        !self.fault
    }

    /// Single-letter marker used in result tables: `P` for a page fault,
    /// `H` for a hit.
    pub fn fault_marker(&self) -> char {
        if self.fault {
            'P'
        } else {
            'H'
        }
    }
}
