//! Search termination states and the frozen result handed to consumers

use std::fmt;
use std::time::Duration;

use crate::spatial::Layout;

/// Why a search stopped short of a connected layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// Every candidate of the root word was tried, or the last word could
    /// only be placed through the disconnected fallback
    Exhausted,
    /// The time budget ran out
    TimedOut,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(f, "exhausted"),
            Self::TimedOut => write!(f, "timeout"),
        }
    }
}

/// How a search ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every word placed in one connected layout
    Complete,
    /// Every word placed, but some only through the disconnected fallback
    Degraded(StopReason),
    /// Not every word could be placed
    Partial(StopReason),
}

impl SearchStatus {
    /// Check whether every word was placed in one connected layout
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Reason the search stopped without a connected layout
    pub const fn reason(&self) -> Option<StopReason> {
        match self {
            Self::Complete => None,
            Self::Degraded(reason) | Self::Partial(reason) => Some(*reason),
        }
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Steps taken, one per candidate trial or backtrack
    pub steps: u64,
    /// Frames popped after running out of candidates
    pub backtracks: u64,
    /// Wall-clock time spent searching
    pub elapsed: Duration,
}

/// Best layout found together with how the search ended
#[derive(Debug, Clone)]
pub struct PlacementOutcome {
    /// Best layout reached: the solution on success, otherwise the layout with
    /// the most words placed (ties broken by most intersections)
    pub layout: Layout,
    /// How the search ended
    pub status: SearchStatus,
    /// Number of words in the input list
    pub word_count: usize,
    /// Search counters
    pub stats: SearchStats,
}

impl PlacementOutcome {
    /// Check whether every word was placed in one connected layout
    pub const fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Number of words in the returned layout
    pub fn placed_count(&self) -> usize {
        self.layout.len()
    }

    /// One-line description suitable for logs and reports
    pub fn summary(&self) -> String {
        let placed = self.placed_count();
        let total = self.word_count;
        match self.status {
            SearchStatus::Complete => format!("all {total} words placed"),
            SearchStatus::Degraded(reason) => format!(
                "degraded placement: all {total} words placed, {} without an intersection, reason: {reason}",
                self.layout.degraded_count()
            ),
            SearchStatus::Partial(reason) => format!(
                "partial placement: {placed} of {total} words placed, reason: {reason}"
            ),
        }
    }
}
