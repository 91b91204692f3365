//! Tests for search defaults and runtime configuration constants

#[cfg(test)]
mod tests {
    use crosstile::io::configuration::{
        COMMENT_PREFIX, DEFAULT_GRID_SIZE, DEFAULT_TIMEOUT_SECS, EMPTY_CELL, FALLBACK_CANDIDATES,
        MAX_GRID_DIMENSION, MAX_INDIVIDUAL_PROGRESS_BARS, OUTPUT_SUFFIX, WORD_LIST_EXTENSION,
    };

    // Tests default grid and timeout values
    // Verified by changing constant values
    #[test]
    fn test_search_defaults() {
        assert_eq!(DEFAULT_GRID_SIZE, 20);
        assert_eq!(DEFAULT_TIMEOUT_SECS, 30);
    }

    // Tests the default grid fits under the dimension limit
    // Verified by lowering the limit below the default
    #[test]
    fn test_grid_limit_covers_default() {
        assert!(DEFAULT_GRID_SIZE <= MAX_GRID_DIMENSION);
    }

    // Tests only one fallback position is tried
    // Verified by raising the fallback count
    #[test]
    fn test_fallback_candidates_value() {
        assert_eq!(FALLBACK_CANDIDATES, 1);
    }

    // Tests progress bar limit
    // Verified by increasing bar limit
    #[test]
    fn test_max_progress_bars_value() {
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }

    // Tests filesystem safety of suffix
    // Verified by adding special character
    #[test]
    fn test_output_suffix_no_special_chars() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
    }

    // Tests input and rendering markers
    // Verified by swapping the comment prefix
    #[test]
    fn test_markers() {
        assert_eq!(WORD_LIST_EXTENSION, "txt");
        assert_eq!(COMMENT_PREFIX, '#');
        assert!(!EMPTY_CELL.is_alphabetic());
    }
}
