//! Command-line interface for batch layout of word lists

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::algorithm::executor::{PlacementSearch, SearchConfig, StepResult};
use crate::io::configuration::{
    DEFAULT_GRID_SIZE, DEFAULT_TIMEOUT_SECS, OUTPUT_SUFFIX, PROGRESS_REFRESH_STEPS,
    WORD_LIST_EXTENSION,
};
use crate::io::error::{Result, WithPath, invalid_target};
use crate::io::export::write_layout_report;
use crate::io::progress::ProgressManager;
use crate::io::words::load_word_list;

#[derive(Parser, Debug)]
#[command(name = "crosstile")]
#[command(
    author,
    version,
    about = "Lay out word lists as connected crosswords"
)]
/// Command-line arguments for the layout tool
pub struct Cli {
    /// Word list file (.txt) or directory of word lists
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Maximum grid extent on both axes
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Search time budget in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Shuffle words of equal length with this seed
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Search configuration from the flags
    pub const fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_grid_size: self.grid_size,
            timeout: Duration::from_secs(self.timeout),
            seed: self.seed,
        }
    }
}

/// Orchestrates batch layout of word lists with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process word lists according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid, a word list cannot be read
    /// or is malformed, or a report cannot be written. An incomplete layout is
    /// not an error.
    pub fn process(&mut self) -> Result<()> {
        self.cli.search_config().validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            log::info!("nothing to do in {}", self.cli.target.display());
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
            log::debug!(
                "tracking {} word lists on {} bars{}",
                pm.file_count(),
                pm.bar_count(),
                if pm.is_batched() { " plus a batch bar" } else { "" }
            );
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    /// Word lists the run will lay out, sorted by path
    ///
    /// # Errors
    ///
    /// Returns an error if the target is not a `.txt` file or a readable
    /// directory.
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_word_list(target) {
                return Err(invalid_target(
                    target,
                    &format!("word list must be a .{WORD_LIST_EXTENSION} file"),
                ));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory entry")?.path();
                if path.is_file()
                    && is_word_list(&path)
                    && !is_layout_report(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_target(
                target,
                &"target must be a word list or a directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::info!("skipping {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let words = load_word_list(input_path)?;
        let mut search = PlacementSearch::new(&words, self.cli.search_config())?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, search.word_count());
        }

        while search.step() == StepResult::Continue {
            if search.stats().steps % PROGRESS_REFRESH_STEPS == 0
                && let Some(ref mut pm) = self.progress_manager
            {
                pm.update_placed(index, search.placed_count());
            }
        }

        let outcome = search.into_outcome();
        if outcome.is_success() {
            log::info!("{}: {}", input_path.display(), outcome.summary());
        } else {
            log::warn!(
                "could not place all words in {}: {}",
                input_path.display(),
                outcome.summary()
            );
        }

        write_layout_report(&outcome, &Self::get_output_path(input_path))?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index, outcome.placed_count());
        }

        Ok(())
    }

    /// Report path for a word list: `<stem>_layout.txt` next to the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            WORD_LIST_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_word_list(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(WORD_LIST_EXTENSION)
}

fn is_layout_report(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}
