//! The bitmap grid.
//!
//! A [`Grid`] is a fixed-size 2D buffer of [`Colour`] cells addressed with
//! 1-based `(x, y)` coordinates. Every mutating operation validates all of
//! its inputs before touching a cell, so a failed call leaves the grid
//! exactly as it was.

mod fill;
mod grid;

pub use bitmap_types::Colour;
pub use grid::{Grid, MAX_SIZE, MIN_SIZE};
