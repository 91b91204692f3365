//! Candidate enumeration and centrality ordering
//!
//! Connected candidates come from letter matches between the next word and
//! every placed word. Each match fixes an anchor in both orientations; the
//! anchor is kept only if the layout accepts the placement. Candidates are
//! ordered so the layout grows around its centroid.

use std::cmp::Reverse;
use std::collections::BTreeSet;

use crate::spatial::{Layout, Orientation, Placement, Word};

/// One way of placing a word, scored against the layout it was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Cell of the first letter
    pub anchor: [i32; 2],
    /// Reading direction
    pub orientation: Orientation,
    /// Cells shared with placed words
    pub intersections: usize,
    /// Manhattan distance from the word midpoint to the layout centroid,
    /// scaled by twice the occupied cell count to stay integral
    pub distance: i64,
    /// Disconnected fallback placement
    pub degraded: bool,
}

impl Candidate {
    /// Build the placement this candidate describes
    pub fn placement(&self, word: &Word) -> Placement {
        let placement = Placement::new(word, self.orientation, self.anchor);
        if self.degraded {
            placement.into_degraded()
        } else {
            placement
        }
    }
}

/// Fixed starting position for the first word: horizontal, near the centre
pub fn root_candidate(word: &Word, max_size: usize) -> Candidate {
    let row = max_size / 2;
    let col = max_size.saturating_sub(word.len()) / 2;
    Candidate {
        anchor: [
            i32::try_from(row).unwrap_or(i32::MAX),
            i32::try_from(col).unwrap_or(i32::MAX),
        ],
        orientation: Orientation::Horizontal,
        intersections: 0,
        distance: 0,
        degraded: false,
    }
}

/// Scaled distance between a word's midpoint and the layout centroid
///
/// With `n` occupied cells summing to `sums`, the centroid is `sums / n` and
/// the midpoint is `anchor + (len - 1) / 2 * step`. Both are multiplied by
/// `2n` so the comparison needs no floating point.
pub fn centroid_distance(
    sums: [i64; 2],
    count: i64,
    word_len: usize,
    orientation: Orientation,
    anchor: [i32; 2],
) -> i64 {
    if count == 0 {
        return 0;
    }
    let step = orientation.step();
    let span = word_len.saturating_sub(1) as i64;
    let axis = |k: usize| {
        let anchor_k = i64::from(anchor.get(k).copied().unwrap_or(0));
        let step_k = i64::from(step.get(k).copied().unwrap_or(0));
        let sum_k = sums.get(k).copied().unwrap_or(0);
        (count * (2 * anchor_k + span * step_k) - 2 * sum_k).abs()
    };
    axis(0) + axis(1)
}

/// Order candidates: closest to the centroid first, then most intersections,
/// then by position so the order never depends on enumeration details
pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by_key(|candidate| {
        (
            candidate.distance,
            Reverse(candidate.intersections),
            candidate.anchor,
            candidate.orientation,
        )
    });
}

/// Every placement of `word` that crosses at least one placed word
pub fn connected_candidates(layout: &Layout, word: &Word) -> Vec<Candidate> {
    let (sums, count) = layout.grid().coordinate_sums();
    let mut seen = BTreeSet::new();
    let mut candidates = Vec::new();
    let mut rejected = 0_usize;

    for placed in layout.placements() {
        for (cell, letter) in placed.letters() {
            for (offset, _) in word
                .letters
                .iter()
                .enumerate()
                .filter(|&(_, &wanted)| wanted == letter)
            {
                for orientation in Orientation::ALL {
                    let anchor = orientation.cell_at(cell, -(offset as i32));
                    if !seen.insert((anchor, orientation)) {
                        continue;
                    }

                    let placement = Placement::new(word, orientation, anchor);
                    match layout.check(&placement) {
                        Ok(fit) if !fit.is_isolated() => candidates.push(Candidate {
                            anchor,
                            orientation,
                            intersections: fit.intersections,
                            distance: centroid_distance(
                                sums,
                                count,
                                word.len(),
                                orientation,
                                anchor,
                            ),
                            degraded: false,
                        }),
                        Ok(_) | Err(_) => rejected += 1,
                    }
                }
            }
        }
    }

    log::trace!(
        "{}: {} connected candidates, {rejected} rejected",
        word.text,
        candidates.len()
    );

    sort_candidates(&mut candidates);
    candidates
}

/// The most central placements of `word` that touch nothing on the grid
///
/// At most `limit` candidates are returned, each flagged as degraded.
pub fn fallback_candidates(layout: &Layout, word: &Word, limit: usize) -> Vec<Candidate> {
    let (sums, count) = layout.grid().coordinate_sums();
    let extent = i32::try_from(layout.grid().max_size()).unwrap_or(i32::MAX);
    let mut candidates = Vec::new();

    for row in 0..extent {
        for col in 0..extent {
            for orientation in Orientation::ALL {
                let anchor = [row, col];
                let placement = Placement::new(word, orientation, anchor).into_degraded();
                if layout.check(&placement).is_ok() {
                    candidates.push(Candidate {
                        anchor,
                        orientation,
                        intersections: 0,
                        distance: centroid_distance(sums, count, word.len(), orientation, anchor),
                        degraded: true,
                    });
                }
            }
        }
    }

    log::trace!(
        "{}: {} fallback positions available",
        word.text,
        candidates.len()
    );

    sort_candidates(&mut candidates);
    candidates.truncate(limit);
    candidates
}
