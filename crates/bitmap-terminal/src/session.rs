//! The editing session: owns the current grid, if any.

use bitmap_grid::Grid;
use bitmap_types::error::{BitmapError, Result};

use crate::interpreter::{Command, CommandOutput};

/// Holds the grid being edited.
///
/// A session starts without a grid. `create_grid` is the only operation
/// available until a grid exists; every other operation fails with
/// [`BitmapError::NoGrid`]. A later `create_grid` replaces the grid.
#[derive(Debug, Default)]
pub struct Session {
    grid: Option<Grid>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current grid, if one has been created.
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// Create a new grid, replacing any existing one.
    ///
    /// On failure the previous grid (if any) is kept.
    pub fn create_grid(&mut self, width: i64, height: i64) -> Result<()> {
        let grid = Grid::new(width, height)?;
        if self.grid.replace(grid).is_some() {
            log::debug!("Replaced existing grid with {width}x{height}");
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.grid_mut()?.clear();
        Ok(())
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, colour: char) -> Result<()> {
        self.grid_mut()?.set_pixel(x, y, colour)
    }

    pub fn draw_vertical_line(&mut self, x: i64, y1: i64, y2: i64, colour: char) -> Result<()> {
        self.grid_mut()?.draw_vertical_line(x, y1, y2, colour)
    }

    pub fn draw_horizontal_line(&mut self, x1: i64, x2: i64, y: i64, colour: char) -> Result<()> {
        self.grid_mut()?.draw_horizontal_line(x1, x2, y, colour)
    }

    /// Flood-fill from `(x, y)`. Returns the number of cells painted.
    pub fn fill(&mut self, x: i64, y: i64, colour: char) -> Result<usize> {
        self.grid_mut()?.fill(x, y, colour)
    }

    pub fn render(&self) -> Result<String> {
        self.grid
            .as_ref()
            .map(Grid::render)
            .ok_or(BitmapError::NoGrid)
    }

    /// Apply an already-parsed command.
    pub fn apply(&mut self, cmd: Command) -> Result<CommandOutput> {
        match cmd {
            Command::Create { width, height } => self.create_grid(width, height)?,
            Command::Clear => self.clear()?,
            Command::SetPixel { x, y, colour } => self.set_pixel(x, y, colour)?,
            Command::VerticalLine { x, y1, y2, colour } => {
                self.draw_vertical_line(x, y1, y2, colour)?
            },
            Command::HorizontalLine { x1, x2, y, colour } => {
                self.draw_horizontal_line(x1, x2, y, colour)?
            },
            Command::Fill { x, y, colour } => {
                self.fill(x, y, colour)?;
            },
            Command::Render => return self.render().map(CommandOutput::Text),
        }
        Ok(CommandOutput::None)
    }

    /// Parse a tag with its raw arguments and apply it.
    ///
    /// All arguments are validated before the session is touched; any
    /// failure is returned unchanged.
    pub fn dispatch(&mut self, tag: &str, args: &[&str]) -> Result<CommandOutput> {
        let cmd = Command::parse(tag, args)?;
        log::debug!("Dispatching {cmd:?}");
        self.apply(cmd)
    }

    fn grid_mut(&mut self) -> Result<&mut Grid> {
        self.grid.as_mut().ok_or(BitmapError::NoGrid)
    }
}
