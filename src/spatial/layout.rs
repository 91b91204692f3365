//! Ordered placements together with the grid they produce
//!
//! The layout is the only owner of grid mutation. Every placement is checked
//! against the current grid before a single cell is written, and retracting a
//! placement clears exactly the cells it wrote, so crossings shared with
//! earlier words survive backtracking.

use std::collections::{BTreeMap, BTreeSet};

use bitvec::prelude::*;

use crate::algorithm::feasibility::{Fit, Rejection, check_isolated, check_placement};
use crate::spatial::grid::LetterGrid;
use crate::spatial::placement::Placement;

// A cell is shared by at most an across word and a down word
const MAX_CLAIMS_PER_CELL: usize = 2;

/// Placements in the order they were made plus the resulting letter grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    grid: LetterGrid,
    placements: Vec<Placement>,
}

impl Layout {
    /// Create an empty layout on a grid of the given extent
    pub const fn new(max_size: usize) -> Self {
        Self {
            grid: LetterGrid::new(max_size),
            placements: Vec::new(),
        }
    }

    /// Letter grid produced by the placements
    pub const fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    /// Placements in placement order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of placed words
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Check whether no word has been placed
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Check a placement against the current grid without mutating anything
    ///
    /// Degraded placements must additionally be isolated from every existing
    /// letter.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] explaining why the placement does not fit.
    pub fn check(&self, placement: &Placement) -> Result<Fit, Rejection> {
        let letters: Vec<char> = placement.word.chars().collect();
        let fit = if placement.degraded {
            check_isolated(
                &self.grid,
                &letters,
                placement.orientation,
                placement.anchor,
            )?
        } else {
            check_placement(
                &self.grid,
                &letters,
                placement.orientation,
                placement.anchor,
            )?
        };

        // Only a single letter can land on a cell without writing anything
        if fit.new_cells == 0
            && self.claim_count(placement.anchor) >= MAX_CLAIMS_PER_CELL
        {
            return Err(Rejection::Saturated {
                cell: placement.anchor,
            });
        }

        Ok(fit)
    }

    /// Check and apply a placement
    ///
    /// Returns the cells newly written, which is the diff needed to retract
    /// the placement later.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] from [`Layout::check`]; the layout is left
    /// untouched in that case.
    pub fn try_place(&mut self, placement: Placement) -> Result<Vec<[i32; 2]>, Rejection> {
        self.check(&placement)?;

        let mut written = Vec::with_capacity(placement.len());
        for (cell, letter) in placement.letters() {
            if self.grid.insert(cell, letter) {
                written.push(cell);
            }
        }
        self.placements.push(placement);

        Ok(written)
    }

    /// Undo the most recent placement given the cells it wrote
    pub fn retract(&mut self, written: &[[i32; 2]]) -> Option<Placement> {
        let placement = self.placements.pop()?;
        for &cell in written {
            self.grid.remove(cell);
        }
        Some(placement)
    }

    /// Number of placements covering a cell
    pub fn claim_count(&self, cell: [i32; 2]) -> usize {
        self.placements
            .iter()
            .filter(|placement| placement.covers(cell))
            .count()
    }

    /// Cells covered by more than one placement, with the covering placement indices
    pub fn shared_cells(&self) -> BTreeMap<[i32; 2], Vec<usize>> {
        let mut claims: BTreeMap<[i32; 2], Vec<usize>> = BTreeMap::new();
        for (index, placement) in self.placements.iter().enumerate() {
            for cell in placement.cells() {
                claims.entry(cell).or_default().push(index);
            }
        }
        claims.retain(|_, owners| owners.len() > 1);
        claims
    }

    /// Number of intersection cells
    pub fn intersection_count(&self) -> usize {
        self.shared_cells().len()
    }

    /// Number of placements made by the disconnected fallback
    pub fn degraded_count(&self) -> usize {
        self.placements.iter().filter(|p| p.degraded).count()
    }

    /// Ranking used to keep the best layout: words placed, then intersections
    pub fn score(&self) -> (usize, usize) {
        (self.len(), self.intersection_count())
    }

    /// Check that every non-degraded placement is reachable from every other
    /// through shared cells
    pub fn is_connected(&self) -> bool {
        let members: Vec<usize> = self
            .placements
            .iter()
            .enumerate()
            .filter(|(_, placement)| !placement.degraded)
            .map(|(index, _)| index)
            .collect();
        let Some(&start) = members.first() else {
            return true;
        };

        let cell_sets: Vec<BTreeSet<[i32; 2]>> = self
            .placements
            .iter()
            .map(|placement| placement.cells().collect())
            .collect();

        let mut visited = bitvec![0; self.placements.len()];
        visited.set(start, true);
        let mut pending = vec![start];

        while let Some(current) = pending.pop() {
            let Some(current_cells) = cell_sets.get(current) else {
                continue;
            };
            for &other in &members {
                if visited.get(other).as_deref() == Some(&true) {
                    continue;
                }
                let touches = cell_sets
                    .get(other)
                    .is_some_and(|cells| !cells.is_disjoint(current_cells));
                if touches {
                    visited.set(other, true);
                    pending.push(other);
                }
            }
        }

        members
            .iter()
            .all(|&index| visited.get(index).as_deref() == Some(&true))
    }

    /// Letters read from the grid along a placement's cells
    ///
    /// Empty cells read as spaces, so a faithful placement reads back as its
    /// own word.
    pub fn read_word(&self, placement: &Placement) -> String {
        placement
            .cells()
            .map(|cell| self.grid.get(cell).unwrap_or(' '))
            .collect()
    }

    /// Same layout with every cell shifted by `delta`
    ///
    /// Callers must keep the shifted cells inside the grid extent.
    #[must_use]
    pub fn translated(&self, delta: [i32; 2]) -> Self {
        let mut grid = LetterGrid::new(self.grid.max_size());
        for (cell, letter) in self.grid.iter() {
            grid.insert([cell[0] + delta[0], cell[1] + delta[1]], letter);
        }
        Self {
            grid,
            placements: self
                .placements
                .iter()
                .map(|placement| placement.translated(delta))
                .collect(),
        }
    }
}
