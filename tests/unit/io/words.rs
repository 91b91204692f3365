//! Tests for word list parsing and loading

#[cfg(test)]
mod tests {
    use std::fs;

    use crosstile::LayoutError;
    use crosstile::io::words::{load_word_list, parse_word_list};
    use tempfile::TempDir;

    // Tests comments, blank lines and numbered entries
    // Verified by keeping the number before the colon
    #[test]
    fn test_parse_word_list() {
        let contents = "# family\n  david \n\n1: Debbie\n2:  beth\n#3: skipped\n4:\nSam\n";

        assert_eq!(
            parse_word_list(contents),
            vec!["DAVID", "DEBBIE", "BETH", "SAM"]
        );
    }

    // Tests only the first colon splits an entry
    // Verified by splitting on the last colon
    #[test]
    fn test_parse_keeps_text_after_first_colon() {
        assert_eq!(parse_word_list("7: ab:cd"), vec!["AB:CD"]);
    }

    // Tests loading a file from disk
    // Verified by reading from the wrong path
    #[test]
    fn test_load_word_list() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("names.txt");
        fs::write(&path, "cat\ncar\n").expect("Failed to write word list");

        let words = load_word_list(&path).expect("Failed to load word list");
        assert_eq!(words, vec!["CAT", "CAR"]);
    }

    // Tests a missing file reports the path
    // Verified by converting the error without context
    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("missing.txt");

        match load_word_list(&path) {
            Err(LayoutError::FileSystem {
                path: error_path,
                operation,
                ..
            }) => {
                assert_eq!(error_path, path);
                assert_eq!(operation, "read word list");
            }
            other => panic!("Expected FileSystem error, got {other:?}"),
        }
    }
}
