/// Command-line interface and batch processing
pub mod cli;
/// Search defaults and runtime configuration constants
pub mod configuration;
/// Error types and path context
pub mod error;
/// Plain-text layout report export
pub mod export;
/// Multi-file progress display
pub mod progress;
/// Word list loading
pub mod words;
