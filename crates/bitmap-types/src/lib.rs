//! Foundation types for the bitmap editor.
//!
//! This crate holds the pieces shared by every other crate in the workspace:
//! the colour alphabet, the error taxonomy, and the editor configuration.

pub mod colour;
pub mod config;
pub mod error;

pub use colour::Colour;
pub use config::{EditorConfig, ErrorPolicy};
pub use error::{BitmapError, ErrorKind, Result};
