//! Spatial data structures for word layouts
//!
//! This module contains spatial-related functionality including:
//! - The sparse letter grid and bounding boxes
//! - Words, orientations and placement records
//! - Layouts combining placements with the grid they produce

/// Sparse letter grid and bounding boxes
pub mod grid;
/// Ordered placements and the grid they produce
pub mod layout;
/// Words, orientations and placement records
pub mod placement;

pub use grid::LetterGrid;
pub use layout::Layout;
pub use placement::{Orientation, Placement, Word};
