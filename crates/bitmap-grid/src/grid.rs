//! Grid storage and the drawing operations.

use std::fmt;

use bitmap_types::error::{BitmapError, Result};
use bitmap_types::Colour;

use crate::fill::flood;

/// Smallest accepted width or height.
pub const MIN_SIZE: i64 = 1;
/// Largest accepted width or height.
pub const MAX_SIZE: i64 = 250;

/// A `width` x `height` buffer of colour codes.
///
/// Cells are stored row-major. The public coordinate space is 1-based:
/// `x` selects the column, `y` the row, and `(1, 1)` is the top-left cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Colour>,
}

impl Grid {
    /// Allocate a grid with every cell set to [`Colour::DEFAULT`].
    ///
    /// Both dimensions must lie in `MIN_SIZE..=MAX_SIZE`.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        let valid = MIN_SIZE..=MAX_SIZE;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(BitmapError::Size { width, height });
        }
        let (width, height) = (width as usize, height as usize);
        log::debug!("Allocating {width}x{height} grid");
        Ok(Self {
            width,
            height,
            cells: vec![Colour::DEFAULT; width * height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Colour at `(x, y)`.
    pub fn pixel(&self, x: i64, y: i64) -> Result<Colour> {
        let idx = self.index(x, y)?;
        Ok(self.cells[idx])
    }

    /// Reset every cell to the default colour.
    pub fn clear(&mut self) {
        self.cells.fill(Colour::DEFAULT);
    }

    /// Colour a single cell.
    pub fn set_pixel(&mut self, x: i64, y: i64, colour: char) -> Result<()> {
        let idx = self.index(x, y)?;
        let colour = Colour::new(colour)?;
        self.cells[idx] = colour;
        Ok(())
    }

    /// Colour column `x` from row `y1` to row `y2`, inclusive.
    pub fn draw_vertical_line(&mut self, x: i64, y1: i64, y2: i64, colour: char) -> Result<()> {
        if y1 > y2 {
            return Err(BitmapError::Order { start: y1, end: y2 });
        }
        let last = self.index(x, y2)?;
        let first = self.index(x, y1)?;
        let colour = Colour::new(colour)?;
        for idx in (first..=last).step_by(self.width) {
            self.cells[idx] = colour;
        }
        Ok(())
    }

    /// Colour row `y` from column `x1` to column `x2`, inclusive.
    pub fn draw_horizontal_line(&mut self, x1: i64, x2: i64, y: i64, colour: char) -> Result<()> {
        if x1 > x2 {
            return Err(BitmapError::Order { start: x1, end: x2 });
        }
        let last = self.index(x2, y)?;
        let first = self.index(x1, y)?;
        let colour = Colour::new(colour)?;
        self.cells[first..=last].fill(colour);
        Ok(())
    }

    /// Flood-fill the 4-connected region containing `(x, y)`.
    ///
    /// Every cell reachable from the seed through up/down/left/right steps
    /// over cells of the seed's original colour is repainted. Returns the
    /// number of cells painted.
    pub fn fill(&mut self, x: i64, y: i64, colour: char) -> Result<usize> {
        let seed = self.index(x, y)?;
        let colour = Colour::new(colour)?;
        let painted = flood(&mut self.cells, self.width, seed, colour);
        log::trace!("Fill at ({x}, {y}) painted {painted} cells with {colour}");
        Ok(painted)
    }

    /// The grid as text: one line per row, top row first, no trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (i, row) in self.cells.chunks(self.width).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(|c| c.as_char()));
        }
        out
    }

    /// Map a 1-based coordinate to a cell index.
    fn index(&self, x: i64, y: i64) -> Result<usize> {
        let in_x = (1..=self.width as i64).contains(&x);
        let in_y = (1..=self.height as i64).contains(&y);
        if !in_x || !in_y {
            return Err(BitmapError::Bounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize - 1) * self.width + (x as usize - 1))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
