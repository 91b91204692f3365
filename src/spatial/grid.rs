//! Sparse letter grid with fixed bounds
//!
//! Cells are addressed as `[row, col]`. Only occupied cells are stored, in an
//! ordered map so that every scan over the grid visits cells in the same order.
//! The grid never holds two letters in one cell: a write to an occupied cell is
//! refused rather than overwriting it.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Offsets of the four orthogonal neighbours of a cell
pub const ORTHOGONAL_OFFSETS: [[i32; 2]; 4] = [[-1, 0], [1, 0], [0, -1], [0, 1]];

/// Axis-aligned bounding box over grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: [i32; 2],
    /// Maximum coordinates (inclusive)
    pub max: [i32; 2],
}

impl BoundingBox {
    /// Check if a position is within the bounds
    pub const fn contains(&self, pos: [i32; 2]) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
    }

    /// Number of rows covered
    pub const fn rows(&self) -> usize {
        (self.max[0] - self.min[0] + 1) as usize
    }

    /// Number of columns covered
    pub const fn cols(&self) -> usize {
        (self.max[1] - self.min[1] + 1) as usize
    }

    /// Grow the box to cover a position
    pub fn include(&mut self, pos: [i32; 2]) {
        self.min = [self.min[0].min(pos[0]), self.min[1].min(pos[1])];
        self.max = [self.max[0].max(pos[0]), self.max[1].max(pos[1])];
    }
}

/// Sparse mapping from cells to uppercase letters within a square extent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    cells: BTreeMap<[i32; 2], char>,
    max_size: usize,
}

impl LetterGrid {
    /// Create an empty grid spanning `[0, max_size)` on both axes
    pub const fn new(max_size: usize) -> Self {
        Self {
            cells: BTreeMap::new(),
            max_size,
        }
    }

    /// Maximum extent on both axes
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Check that a cell lies inside the grid extent
    pub fn in_bounds(&self, cell: [i32; 2]) -> bool {
        let limit = i32::try_from(self.max_size).unwrap_or(i32::MAX);
        (0..limit).contains(&cell[0]) && (0..limit).contains(&cell[1])
    }

    /// Letter stored at a cell
    pub fn get(&self, cell: [i32; 2]) -> Option<char> {
        self.cells.get(&cell).copied()
    }

    /// Check whether a cell holds a letter
    pub fn is_occupied(&self, cell: [i32; 2]) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Check whether any orthogonal neighbour of a cell holds a letter
    pub fn has_orthogonal_neighbour(&self, cell: [i32; 2]) -> bool {
        ORTHOGONAL_OFFSETS
            .iter()
            .any(|offset| self.is_occupied([cell[0] + offset[0], cell[1] + offset[1]]))
    }

    /// Write a letter to an empty cell
    ///
    /// Returns `false` without touching the grid when the cell is already
    /// occupied, whatever letter it holds.
    pub fn insert(&mut self, cell: [i32; 2], letter: char) -> bool {
        match self.cells.entry(cell) {
            Entry::Vacant(entry) => {
                entry.insert(letter);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Clear a cell, returning the letter it held
    pub fn remove(&mut self, cell: [i32; 2]) -> Option<char> {
        self.cells.remove(&cell)
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = ([i32; 2], char)> + '_ {
        self.cells.iter().map(|(&cell, &letter)| (cell, letter))
    }

    /// Minimal rectangle containing every occupied cell
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        let mut cells = self.cells.keys();
        let first = *cells.next()?;
        let mut bounds = BoundingBox {
            min: first,
            max: first,
        };
        for &cell in cells {
            bounds.include(cell);
        }
        Some(bounds)
    }

    /// Sum of occupied coordinates along each axis, with the cell count
    ///
    /// Kept as integers so centroid comparisons stay exact.
    pub fn coordinate_sums(&self) -> ([i64; 2], i64) {
        let mut sums = [0_i64; 2];
        for cell in self.cells.keys() {
            sums[0] += i64::from(cell[0]);
            sums[1] += i64::from(cell[1]);
        }
        (sums, self.cells.len() as i64)
    }
}
