//! Words, orientations and the placement records derived from them

use std::fmt;

/// Direction a word is read in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    /// Left to right along a row
    Horizontal,
    /// Top to bottom along a column
    Vertical,
}

impl Orientation {
    /// Both orientations, in candidate enumeration order
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// Unit step between consecutive letters
    pub const fn step(self) -> [i32; 2] {
        match self {
            Self::Horizontal => [0, 1],
            Self::Vertical => [1, 0],
        }
    }

    /// The crossing orientation
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Cell `offset` letters away from `anchor` (negative offsets walk backwards)
    pub const fn cell_at(self, anchor: [i32; 2], offset: i32) -> [i32; 2] {
        let step = self.step();
        [anchor[0] + step[0] * offset, anchor[1] + step[1] * offset]
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => write!(f, "across"),
            Self::Vertical => write!(f, "down"),
        }
    }
}

/// A normalized input word
///
/// Each entry of the input list becomes its own word, so duplicates are kept
/// apart by their input index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Position in the input list
    pub index: usize,
    /// Uppercased text
    pub text: String,
    /// Letters of `text`, one per grid cell
    pub letters: Vec<char>,
}

impl Word {
    /// Normalize a raw input entry to uppercase
    pub fn new(index: usize, raw: &str) -> Self {
        let text = raw.to_uppercase();
        let letters = text.chars().collect();
        Self {
            index,
            text,
            letters,
        }
    }

    /// Number of letters (and therefore cells)
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Check whether the word has no letters
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Immutable record of one word placed on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Uppercased word text
    pub word: String,
    /// Position of the word in the input list
    pub word_index: usize,
    /// Reading direction
    pub orientation: Orientation,
    /// Cell of the first letter as `[row, col]`
    pub anchor: [i32; 2],
    /// Placed by the disconnected fallback rather than through an intersection
    pub degraded: bool,
}

impl Placement {
    /// Place a word at an anchor
    pub fn new(word: &Word, orientation: Orientation, anchor: [i32; 2]) -> Self {
        Self {
            word: word.text.clone(),
            word_index: word.index,
            orientation,
            anchor,
            degraded: false,
        }
    }

    /// Mark the placement as a disconnected fallback
    #[must_use]
    pub const fn into_degraded(mut self) -> Self {
        self.degraded = true;
        self
    }

    /// Number of cells the word covers
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Check whether the placement covers no cells
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cells covered, from the anchor onwards
    pub fn cells(&self) -> impl Iterator<Item = [i32; 2]> + '_ {
        self.letters().map(|(cell, _)| cell)
    }

    /// Cells covered paired with the letter each must hold
    pub fn letters(&self) -> impl Iterator<Item = ([i32; 2], char)> + '_ {
        self.word.chars().enumerate().map(|(offset, letter)| {
            (
                self.orientation.cell_at(self.anchor, offset as i32),
                letter,
            )
        })
    }

    /// Check whether the placement covers a cell
    pub fn covers(&self, cell: [i32; 2]) -> bool {
        self.cells().any(|covered| covered == cell)
    }

    /// Same placement shifted by `delta`
    #[must_use]
    pub fn translated(&self, delta: [i32; 2]) -> Self {
        Self {
            anchor: [self.anchor[0] + delta[0], self.anchor[1] + delta[1]],
            ..self.clone()
        }
    }
}
