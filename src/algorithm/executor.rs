use std::time::{Duration, Instant};

use crate::{
    algorithm::backtrack::SearchFrame,
    algorithm::candidates::{connected_candidates, fallback_candidates, root_candidate},
    algorithm::ordering::placement_order,
    algorithm::outcome::{PlacementOutcome, SearchStats, SearchStatus, StopReason},
    io::configuration::{
        DEFAULT_GRID_SIZE, DEFAULT_TIMEOUT_SECS, FALLBACK_CANDIDATES, MAX_GRID_DIMENSION,
    },
    io::error::{LayoutError, Result, invalid_parameter},
    spatial::{Layout, Word},
};

/// Search parameters, passed explicitly so independent searches never share state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Grid extent on both axes
    pub max_grid_size: usize,
    /// Wall-clock budget for the whole search
    pub timeout: Duration,
    /// Shuffle equal-length words with this seed instead of keeping input order
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_grid_size: DEFAULT_GRID_SIZE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Check the parameters before any search starts
    ///
    /// # Errors
    ///
    /// Returns an error if the grid size is zero or above
    /// [`MAX_GRID_DIMENSION`], or if the timeout is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_grid_size == 0 || self.max_grid_size > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "max_grid_size",
                &self.max_grid_size,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if self.timeout.is_zero() {
            return Err(invalid_parameter(
                "timeout",
                &format!("{:?}", self.timeout),
                &"must be positive",
            ));
        }
        Ok(())
    }
}

/// Result of advancing the search by one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// More work remains
    Continue,
    /// The search has ended
    Finished(SearchStatus),
}

/// Backtracking placement search driven one step at a time
///
/// The search keeps an explicit stack of [`SearchFrame`]s, one per placed
/// word plus one for the word being tried. Each call to
/// [`PlacementSearch::step`] samples the clock, then either tries the next
/// candidate of the top frame or pops the frame when its candidates run out.
/// The best layout seen so far is kept aside so a search that stops early
/// still returns something useful.
pub struct PlacementSearch {
    /// Normalized words in input order
    words: Vec<Word>,
    /// Indices into `words` in placement order
    order: Vec<usize>,
    config: SearchConfig,
    /// Layout under construction
    layout: Layout,
    /// One frame per word being placed
    stack: Vec<SearchFrame>,
    /// Best layout seen so far and its score
    best: Layout,
    best_score: (usize, usize),
    steps: u64,
    backtracks: u64,
    started: Option<Instant>,
    elapsed: Duration,
    status: Option<SearchStatus>,
}

impl PlacementSearch {
    /// Validate the input and prepare a search
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The word list is empty
    /// - A word is blank or contains whitespace
    /// - A word is longer than the grid
    pub fn new<S: AsRef<str>>(words: &[S], config: SearchConfig) -> Result<Self> {
        config.validate()?;

        if words.is_empty() {
            return Err(LayoutError::EmptyWordList);
        }

        let words = words
            .iter()
            .enumerate()
            .map(|(index, raw)| normalize_word(index, raw.as_ref(), config.max_grid_size))
            .collect::<Result<Vec<_>>>()?;

        let order = placement_order(&words, config.seed);
        let root = order
            .first()
            .and_then(|&index| words.get(index))
            .map(|word| {
                SearchFrame::new(
                    word.index,
                    vec![root_candidate(word, config.max_grid_size)],
                )
            })
            .ok_or(LayoutError::EmptyWordList)?;

        Ok(Self {
            words,
            order,
            config,
            layout: Layout::new(config.max_grid_size),
            stack: vec![root],
            best: Layout::new(config.max_grid_size),
            best_score: (0, 0),
            steps: 0,
            backtracks: 0,
            started: None,
            elapsed: Duration::ZERO,
            status: None,
        })
    }

    /// Normalized words in input order
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Indices into [`PlacementSearch::words`] in placement order
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Layout currently under construction
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Number of words in the input
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of words currently on the grid
    pub fn placed_count(&self) -> usize {
        self.layout.len()
    }

    /// Largest number of words placed at any point so far
    pub const fn best_count(&self) -> usize {
        self.best_score.0
    }

    /// Final status, once the search has ended
    pub const fn status(&self) -> Option<SearchStatus> {
        self.status
    }

    /// Counters collected so far
    pub const fn stats(&self) -> SearchStats {
        SearchStats {
            steps: self.steps,
            backtracks: self.backtracks,
            elapsed: self.elapsed,
        }
    }

    /// Advance the search by one candidate trial or one backtrack
    pub fn step(&mut self) -> StepResult {
        if let Some(status) = self.status {
            return StepResult::Finished(status);
        }

        let started = *self.started.get_or_insert_with(Instant::now);
        self.elapsed = started.elapsed();
        if self.elapsed > self.config.timeout {
            return self.finish(StopReason::TimedOut);
        }
        self.steps += 1;

        let Some(frame) = self.stack.last_mut() else {
            return self.finish(StopReason::Exhausted);
        };

        // Undo the previous trial of this frame before trying the next one
        frame.retract(&mut self.layout);

        let Some(candidate) = frame.next_candidate() else {
            let tried = frame.candidate_count();
            self.stack.pop();
            self.backtracks += 1;
            log::trace!(
                "backtracking to depth {} after {tried} candidates",
                self.stack.len()
            );
            return StepResult::Continue;
        };

        let Some(word) = self.words.get(frame.word_index) else {
            self.stack.pop();
            return StepResult::Continue;
        };

        match self.layout.try_place(candidate.placement(word)) {
            Ok(written) => frame.commit(written),
            Err(rejection) => {
                log::trace!(
                    "{} rejected at {:?}: {rejection:?} ({} left)",
                    word.text,
                    candidate.anchor,
                    frame.remaining()
                );
                return StepResult::Continue;
            }
        }

        self.record_best();

        if self.layout.len() == self.words.len() {
            if self.layout.degraded_count() == 0 {
                return self.finish_complete();
            }
            log::debug!("all words placed using the fallback");
            return self.finish(StopReason::Exhausted);
        }

        self.push_next_frame();
        StepResult::Continue
    }

    /// Step until the search ends and return the outcome
    pub fn run(mut self) -> PlacementOutcome {
        while self.step() == StepResult::Continue {}
        self.into_outcome()
    }

    /// Freeze the search into its outcome
    ///
    /// A search abandoned before it ended reports its best layout as timed out.
    pub fn into_outcome(self) -> PlacementOutcome {
        let stats = self.stats();
        PlacementOutcome {
            status: self
                .status
                .unwrap_or(SearchStatus::Partial(StopReason::TimedOut)),
            word_count: self.words.len(),
            layout: self.best,
            stats,
        }
    }

    fn push_next_frame(&mut self) {
        let depth = self.layout.len();
        let Some(word) = self
            .order
            .get(depth)
            .and_then(|&index| self.words.get(index))
        else {
            return;
        };

        let mut candidates = connected_candidates(&self.layout, word);
        if candidates.is_empty() && depth + 1 == self.words.len() {
            candidates = fallback_candidates(&self.layout, word, FALLBACK_CANDIDATES);
            log::debug!("{} has no crossing; trying a disconnected position", word.text);
        }

        log::debug!(
            "placing word {}/{}: {} ({} candidates)",
            depth + 1,
            self.words.len(),
            word.text,
            candidates.len()
        );

        self.stack.push(SearchFrame::new(word.index, candidates));
    }

    fn record_best(&mut self) {
        let score = self.layout.score();
        if score > self.best_score {
            self.best_score = score;
            self.best = self.layout.clone();
        }
    }

    fn finish_complete(&mut self) -> StepResult {
        self.best_score = self.layout.score();
        self.best = self.layout.clone();
        self.status = Some(SearchStatus::Complete);
        log::info!(
            "placed all {} words in {:.2?} ({} steps, {} backtracks)",
            self.words.len(),
            self.elapsed,
            self.steps,
            self.backtracks
        );
        StepResult::Finished(SearchStatus::Complete)
    }

    fn finish(&mut self, reason: StopReason) -> StepResult {
        let status = if self.best.len() == self.words.len() {
            SearchStatus::Degraded(reason)
        } else {
            SearchStatus::Partial(reason)
        };
        match reason {
            StopReason::TimedOut => log::warn!(
                "timed out after {:.2?}: best layout has {}/{} words",
                self.config.timeout,
                self.best.len(),
                self.words.len()
            ),
            StopReason::Exhausted => log::info!(
                "search exhausted after {} steps: best layout has {}/{} words",
                self.steps,
                self.best.len(),
                self.words.len()
            ),
        }
        self.status = Some(status);
        StepResult::Finished(status)
    }
}

/// Place every word on a grid of `max_grid_size` within `timeout`
///
/// # Errors
///
/// Returns an error for malformed input only; an incomplete search is reported
/// through the outcome's status.
pub fn place_all<S: AsRef<str>>(
    words: &[S],
    max_grid_size: usize,
    timeout: Duration,
) -> Result<PlacementOutcome> {
    place_all_with_config(
        words,
        &SearchConfig {
            max_grid_size,
            timeout,
            seed: None,
        },
    )
}

/// Place every word using a full configuration
///
/// # Errors
///
/// Returns an error for malformed input only.
pub fn place_all_with_config<S: AsRef<str>>(
    words: &[S],
    config: &SearchConfig,
) -> Result<PlacementOutcome> {
    Ok(PlacementSearch::new(words, *config)?.run())
}

fn normalize_word(index: usize, raw: &str, max_grid_size: usize) -> Result<Word> {
    if raw.trim().is_empty() {
        return Err(LayoutError::InvalidWord {
            index,
            word: raw.to_string(),
            reason: "word is blank".to_string(),
        });
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(LayoutError::InvalidWord {
            index,
            word: raw.to_string(),
            reason: "word contains whitespace".to_string(),
        });
    }

    let word = Word::new(index, raw);
    if word.len() > max_grid_size {
        return Err(LayoutError::WordTooLong {
            length: word.len(),
            word: word.text,
            max_grid_size,
        });
    }
    Ok(word)
}
