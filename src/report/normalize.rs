use ndarray::Array2;

use crate::spatial::{Layout, Placement};

/// A cell shared with other words, seen from one placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossing {
    /// Shared cell in normalized coordinates
    pub cell: [i32; 2],
    /// The other words claiming the cell
    pub words: Vec<String>,
}

/// Layout shifted so its top-left occupied cell is `[0, 0]`
///
/// Holds the shifted layout, the crossings of every placement (indexed like
/// [`Layout::placements`]) and the trimmed dimensions as `(rows, cols)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedLayout {
    layout: Layout,
    crossings: Vec<Vec<Crossing>>,
    dimensions: (usize, usize),
}

impl NormalizedLayout {
    /// Shifted layout
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Shifted placements in placement order
    pub fn placements(&self) -> &[Placement] {
        self.layout.placements()
    }

    /// Crossings of the placement at `index`, ordered by cell
    pub fn crossings(&self, index: usize) -> &[Crossing] {
        self.crossings.get(index).map(Vec::as_slice).unwrap_or_default()
    }

    /// Trimmed extent as `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    /// Check whether the layout holds no words
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }

    /// Letter at a normalized cell
    pub fn letter(&self, cell: [i32; 2]) -> Option<char> {
        self.layout.grid().get(cell)
    }

    /// Dense matrix of the trimmed grid, `None` for empty cells
    pub fn to_matrix(&self) -> Array2<Option<char>> {
        let mut matrix = Array2::from_elem(self.dimensions, None);
        for (cell, letter) in self.layout.grid().iter() {
            if let Some(slot) = matrix.get_mut([cell[0] as usize, cell[1] as usize]) {
                *slot = Some(letter);
            }
        }
        matrix
    }
}

/// Trim a layout to its bounding box and collect per-word crossings
///
/// The input layout is left untouched. Normalizing an already normalized
/// layout yields an equal value.
pub fn normalize(layout: &Layout) -> NormalizedLayout {
    let Some(bounds) = layout.grid().bounding_box() else {
        return NormalizedLayout {
            layout: layout.clone(),
            crossings: vec![Vec::new(); layout.len()],
            dimensions: (0, 0),
        };
    };

    let shifted = layout.translated([-bounds.min[0], -bounds.min[1]]);
    let placements = shifted.placements();

    let mut crossings = vec![Vec::new(); placements.len()];
    for (cell, owners) in shifted.shared_cells() {
        for &owner in &owners {
            let words = owners
                .iter()
                .filter(|&&other| other != owner)
                .filter_map(|&other| placements.get(other))
                .map(|placement| placement.word.clone())
                .collect();
            if let Some(list) = crossings.get_mut(owner) {
                list.push(Crossing { cell, words });
            }
        }
    }

    NormalizedLayout {
        dimensions: (bounds.rows(), bounds.cols()),
        layout: shifted,
        crossings,
    }
}
