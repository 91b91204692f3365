//! Backtracking crossword layout for word and name lists
//!
//! Words are placed on a bounded grid so that every word crosses at least one
//! other word through a shared letter, with no accidental adjacency. The search
//! backtracks over candidate placements within a time budget and always returns
//! the best layout it reached, which the report module trims and renders.

#![forbid(unsafe_code)]

/// Placement search: candidates, feasibility rules, backtracking and outcomes
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Normalization and text rendering of finished layouts
pub mod report;
/// Letter grid, placements and layouts
pub mod spatial;

pub use algorithm::executor::{SearchConfig, place_all, place_all_with_config};
pub use algorithm::outcome::{PlacementOutcome, SearchStatus, StopReason};
pub use io::error::{LayoutError, Result};
