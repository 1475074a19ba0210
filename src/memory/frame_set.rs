//! Frame set - the bounded collection of resident pages.
//!
//! A [`FrameSet`] is the only state a replacement policy owns. It holds
//! at most `capacity` distinct pages, in insertion order (front = oldest).

use std::collections::VecDeque;
use std::fmt;

use crate::common::{Error, Result};

/// Anything that can be referenced and held in a frame.
///
/// Blanket-implemented for every `Clone + PartialEq + Debug` type, so
/// integers, `&'static str` and [`PageId`](crate::PageId) all work.
pub trait PageToken: Clone + PartialEq + fmt::Debug + 'static {}

impl<T: Clone + PartialEq + fmt::Debug + 'static> PageToken for T {}

/// Resident pages of one simulation run.
///
/// # Invariants
/// - `len() <= capacity()` at all times
/// - no page appears twice
/// - order is insertion order; only FIFO gives it meaning
///
/// # Example
/// ```
/// use pagesim::memory::FrameSet;
///
/// let frames: FrameSet<u32> = FrameSet::new(3).unwrap();
/// assert!(frames.is_empty());
/// assert_eq!(frames.capacity(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct FrameSet<P> {
    /// Resident pages, oldest first.
    pages: VecDeque<P>,

    /// Maximum number of resident pages (immutable after construction).
    capacity: usize,
}

impl<P: PageToken> FrameSet<P> {
    /// Create an empty frame set.
    ///
    /// Fails with [`Error::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidCapacity(capacity));
        }
        Ok(Self {
            pages: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// True when admitting another page requires an eviction.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.pages.len() >= self.capacity
    }

    /// Check whether `page` is resident.
    pub fn contains(&self, page: &P) -> bool {
        self.pages.contains(page)
    }

    /// Iterate resident pages, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.pages.iter()
    }

    /// Resident pages as a plain vector, oldest first.
    pub fn to_vec(&self) -> Vec<P> {
        self.pages.iter().cloned().collect()
    }

    /// Append a page at the back.
    ///
    /// Callers must have made room and checked residency first.
    pub(crate) fn push(&mut self, page: P) {
        debug_assert!(!self.is_full(), "frame set overflow");
        debug_assert!(!self.contains(&page), "duplicate resident page");
        self.pages.push_back(page);
    }

    /// Remove the page at `index`, returning it.
    pub(crate) fn remove(&mut self, index: usize) -> Option<P> {
        self.pages.remove(index)
    }
}

impl<P: fmt::Display> fmt::Display for FrameSet<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, page) in self.pages.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", page)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        let result = FrameSet::<u32>::new(0);
        assert!(matches!(result, Err(Error::InvalidCapacity(0))));
    }

    #[test]
    fn test_push_until_full() {
        let mut frames = FrameSet::new(2).unwrap();
        frames.push(1);
        assert!(!frames.is_full());
        frames.push(2);
        assert!(frames.is_full());
        assert_eq!(frames.len(), 2);
        assert!(frames.contains(&1));
        assert!(!frames.contains(&3));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut frames = FrameSet::new(3).unwrap();
        frames.push(10);
        frames.push(20);
        frames.push(30);

        assert_eq!(frames.remove(1), Some(20));
        frames.push(40);
        assert_eq!(frames.to_vec(), vec![10, 30, 40]);
        assert_eq!(frames.remove(5), None);
    }

    #[test]
    fn test_display() {
        let mut frames = FrameSet::new(3).unwrap();
        assert_eq!(format!("{}", frames), "[]");
        frames.push(7);
        frames.push(0);
        assert_eq!(format!("{}", frames), "[7 0]");
    }
}
