//! Word list loading
//!
//! A word list has one entry per line. Lines are trimmed, blank lines and
//! `#` comments are skipped, and a numbered `N: NAME` entry keeps only the
//! text after the first colon.

use std::fs;
use std::path::Path;

use crate::io::configuration::COMMENT_PREFIX;
use crate::io::error::{Result, WithPath};

/// Parse word list text into uppercase entries, in file order
pub fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
        .map(|line| line.split_once(':').map_or(line, |(_, name)| name.trim()))
        .filter(|name| !name.is_empty())
        .map(str::to_uppercase)
        .collect()
}

/// Read and parse a word list file
///
/// # Errors
///
/// Returns [`crate::LayoutError::FileSystem`] if the file cannot be read.
pub fn load_word_list(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).with_path(path, "read word list")?;
    let words = parse_word_list(&contents);
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
