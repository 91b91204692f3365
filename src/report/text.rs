//! Plain-text rendering of a normalized layout

use crate::io::configuration::EMPTY_CELL;
use crate::report::normalize::{Crossing, NormalizedLayout};

/// One line per placed word: number, text, orientation, start and crossings
///
/// ```text
/// 1. CAT across at (1, 0), crosses CAR at (1, 1)
/// 2. CAR down at (0, 1), crosses CAT at (1, 1)
/// ```
pub fn report_lines(normalized: &NormalizedLayout) -> Vec<String> {
    normalized
        .placements()
        .iter()
        .enumerate()
        .map(|(index, placement)| {
            let mut line = format!(
                "{}. {} {} at ({}, {})",
                index + 1,
                placement.word,
                placement.orientation,
                placement.anchor[0],
                placement.anchor[1]
            );

            let crossings = normalized.crossings(index);
            if !crossings.is_empty() {
                line.push_str(", crosses ");
                line.push_str(&describe_crossings(crossings));
            }
            if placement.degraded {
                line.push_str(", disconnected");
            }
            line
        })
        .collect()
}

fn describe_crossings(crossings: &[Crossing]) -> String {
    crossings
        .iter()
        .map(|crossing| {
            format!(
                "{} at ({}, {})",
                crossing.words.join("/"),
                crossing.cell[0],
                crossing.cell[1]
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Rows of the trimmed grid, letters separated by spaces
///
/// Empty cells are drawn as [`EMPTY_CELL`]. An empty layout renders no rows.
pub fn render_grid(normalized: &NormalizedLayout) -> Vec<String> {
    normalized
        .to_matrix()
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.unwrap_or(EMPTY_CELL).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
