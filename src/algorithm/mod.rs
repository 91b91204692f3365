/// Explicit search stack frames holding candidates and applied diffs
pub mod backtrack;
/// Candidate enumeration, fallback scanning, and centrality ordering
pub mod candidates;
/// Step-driven backtracking search and its entry points
pub mod executor;
/// Placement rules: bounds, letter agreement, adjacency, and isolation
pub mod feasibility;
/// Word ordering for the search
pub mod ordering;
/// Search termination states and outcomes
pub mod outcome;
