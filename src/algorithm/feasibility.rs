//! Conflict and adjacency checks run before any cell is written
//!
//! A word may touch the letters already on the grid only where it crosses
//! them. Everything else about a candidate (bounds, letter agreement, cells at
//! either end, letters beside newly written cells) is checked here, so a
//! rejected candidate never mutates the grid.

use crate::spatial::grid::LetterGrid;
use crate::spatial::placement::Orientation;

/// Result of a successful placement check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fit {
    /// Cells shared with letters already on the grid
    pub intersections: usize,
    /// Cells the placement would newly write
    pub new_cells: usize,
}

impl Fit {
    /// Check whether the placement touches nothing already on the grid
    pub const fn is_isolated(&self) -> bool {
        self.intersections == 0
    }
}

/// Reason a candidate placement was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A cell lies outside the grid extent
    OutOfBounds {
        /// The offending cell
        cell: [i32; 2],
    },
    /// A cell already holds a different letter
    LetterConflict {
        /// The contested cell
        cell: [i32; 2],
        /// Letter already on the grid
        existing: char,
        /// Letter the candidate needs there
        wanted: char,
    },
    /// The cell just before the first or after the last letter is occupied
    BlockedEnd {
        /// The occupied end cell
        cell: [i32; 2],
    },
    /// A newly written cell would sit beside an existing letter
    SideContact {
        /// The newly written cell
        cell: [i32; 2],
    },
    /// Two consecutive letters would both reuse existing cells
    CollinearOverlap {
        /// Second of the two reused cells
        cell: [i32; 2],
    },
    /// The placement would write nothing new
    NoNewCells,
    /// A cell is already shared by as many words as it can hold
    Saturated {
        /// The saturated cell
        cell: [i32; 2],
    },
}

/// Check whether `letters` fit at `anchor` reading along `orientation`
///
/// Single-letter words are allowed to sit entirely on an existing matching
/// letter; any longer word must write at least one new cell.
///
/// # Errors
///
/// Returns the first [`Rejection`] found. Rejections are ordinary search
/// control flow and never reach callers of the engine.
pub fn check_placement(
    grid: &LetterGrid,
    letters: &[char],
    orientation: Orientation,
    anchor: [i32; 2],
) -> Result<Fit, Rejection> {
    if letters.is_empty() {
        return Err(Rejection::NoNewCells);
    }

    let side = orientation.perpendicular().step();
    let mut intersections = 0;
    let mut new_cells = 0;
    let mut previous_reused = false;

    for (offset, &wanted) in letters.iter().enumerate() {
        let cell = orientation.cell_at(anchor, offset as i32);
        if !grid.in_bounds(cell) {
            return Err(Rejection::OutOfBounds { cell });
        }

        match grid.get(cell) {
            Some(existing) if existing != wanted => {
                return Err(Rejection::LetterConflict {
                    cell,
                    existing,
                    wanted,
                });
            }
            Some(_) => {
                if previous_reused {
                    return Err(Rejection::CollinearOverlap { cell });
                }
                intersections += 1;
                previous_reused = true;
            }
            None => {
                let before = [cell[0] - side[0], cell[1] - side[1]];
                let after = [cell[0] + side[0], cell[1] + side[1]];
                if grid.is_occupied(before) || grid.is_occupied(after) {
                    return Err(Rejection::SideContact { cell });
                }
                new_cells += 1;
                previous_reused = false;
            }
        }
    }

    for end in [
        orientation.cell_at(anchor, -1),
        orientation.cell_at(anchor, letters.len() as i32),
    ] {
        if grid.is_occupied(end) {
            return Err(Rejection::BlockedEnd { cell: end });
        }
    }

    if new_cells == 0 && letters.len() > 1 {
        return Err(Rejection::NoNewCells);
    }

    Ok(Fit {
        intersections,
        new_cells,
    })
}

/// Check whether `letters` fit at `anchor` without touching any existing letter
///
/// Used for disconnected fallback placements: besides passing
/// [`check_placement`], no cell may be shared and no cell may have an occupied
/// orthogonal neighbour. Diagonal contact is permitted.
///
/// # Errors
///
/// Returns the first [`Rejection`] found.
pub fn check_isolated(
    grid: &LetterGrid,
    letters: &[char],
    orientation: Orientation,
    anchor: [i32; 2],
) -> Result<Fit, Rejection> {
    let fit = check_placement(grid, letters, orientation, anchor)?;
    for offset in 0..letters.len() {
        let cell = orientation.cell_at(anchor, offset as i32);
        if grid.is_occupied(cell) {
            return Err(Rejection::NoNewCells);
        }
        if grid.has_orthogonal_neighbour(cell) {
            return Err(Rejection::SideContact { cell });
        }
    }
    Ok(fit)
}
