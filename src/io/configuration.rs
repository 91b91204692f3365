//! Search defaults and runtime configuration constants

// Default values for configurable parameters
/// Default maximum extent of the grid on both axes
pub const DEFAULT_GRID_SIZE: usize = 20;

/// Default search time budget in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// Safety limit to keep candidate scans and rendered reports bounded
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1_000;

// A fallback placement is a last resort, so only the most central one is tried
/// Number of disconnected candidates tried for the final word
pub const FALLBACK_CANDIDATES: usize = 1;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Search steps between progress bar refreshes
pub const PROGRESS_REFRESH_STEPS: u64 = 256;

// Input settings
/// Extension of word list files picked up from a target directory
pub const WORD_LIST_EXTENSION: &str = "txt";
/// Prefix marking a comment line in a word list
pub const COMMENT_PREFIX: char = '#';

// Output settings
/// Suffix added to report filenames
pub const OUTPUT_SUFFIX: &str = "_layout";
/// Character used for empty cells in rendered grids
pub const EMPTY_CELL: char = '·';
/// Width of the rule under report headings
pub const REPORT_RULE_WIDTH: usize = 40;
