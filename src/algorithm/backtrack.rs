use crate::{algorithm::candidates::Candidate, spatial::Layout};

/// One level of the explicit search stack
///
/// A frame owns the ordered candidates for one word, a cursor into them, and
/// the grid diff of the candidate currently applied. Retracting the frame
/// clears exactly that diff, which leaves the layout as it was when the frame
/// was pushed.
#[derive(Debug, Clone)]
pub struct SearchFrame {
    /// Index of the word (in input order) this frame places
    pub word_index: usize,
    candidates: Vec<Candidate>,
    cursor: usize,
    written: Option<Vec<[i32; 2]>>,
}

impl SearchFrame {
    /// Create a frame with candidates already in trial order
    pub const fn new(word_index: usize, candidates: Vec<Candidate>) -> Self {
        Self {
            word_index,
            candidates,
            cursor: 0,
            written: None,
        }
    }

    /// Take the next untried candidate
    pub fn next_candidate(&mut self) -> Option<Candidate> {
        let candidate = self.candidates.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(candidate)
    }

    /// Number of candidates not yet tried
    pub fn remaining(&self) -> usize {
        self.candidates.len().saturating_sub(self.cursor)
    }

    /// Total number of candidates the frame started with
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Record the cells written by the candidate just applied
    pub fn commit(&mut self, written: Vec<[i32; 2]>) {
        self.written = Some(written);
    }

    /// Undo the applied candidate, if any
    ///
    /// Returns `true` when a placement was removed from the layout.
    pub fn retract(&mut self, layout: &mut Layout) -> bool {
        self.written
            .take()
            .is_some_and(|written| layout.retract(&written).is_some())
    }
}
