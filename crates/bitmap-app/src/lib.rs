//! Command-file runner for the bitmap editor.
//!
//! The binary is a thin wrapper: it resolves config, opens the file, and
//! hands the lines to an [`editor::Editor`].

pub mod editor;
