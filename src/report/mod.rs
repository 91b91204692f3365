//! Layout reporting
//!
//! Turns a finished (or partial) layout into a bounds-trimmed form anchored at
//! the origin, and renders it as placement lines and a text grid. Nothing here
//! searches or mutates the layout it was given.

/// Bounds trimming and crossing extraction
pub mod normalize;
/// Placement lines and grid rendering
pub mod text;

pub use normalize::{Crossing, NormalizedLayout, normalize};
pub use text::{render_grid, report_lines};
