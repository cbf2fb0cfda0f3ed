//! Error types for the bitmap editor.

use std::fmt;
use std::io;

/// Errors produced while validating or executing editor commands.
#[derive(Debug, thiserror::Error)]
pub enum BitmapError {
    #[error("Image size [{width}, {height}] is beyond the scope 1..250.")]
    Size { width: i64, height: i64 },

    #[error("Coordinates ({x}, {y}) are outside the image ({width} x {height}).")]
    Bounds {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
    },

    #[error("Invalid colour \"{0}\". Expected a single letter A-Z.")]
    Colour(String),

    #[error("Line start {start} is greater than line end {end}.")]
    Order { start: i64, end: i64 },

    #[error("Wrong number of arguments. Expected {expected}, got {got}.")]
    Arity { expected: usize, got: usize },

    #[error("Invalid argument error. Expected {expected}, got \"{got}\".")]
    Type { expected: &'static str, got: String },

    #[error("Unrecognised command.")]
    UnknownCommand(String),

    #[error("Please create image before manipulating it.")]
    NoGrid,

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Coarse classification of a [`BitmapError`], for callers that report
/// failures in a structured form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Size,
    Bounds,
    Colour,
    Order,
    Arity,
    Type,
    UnknownCommand,
    NoGrid,
    Config,
    Io,
}

impl BitmapError {
    /// The kind of failure, independent of its message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BitmapError::Size { .. } => ErrorKind::Size,
            BitmapError::Bounds { .. } => ErrorKind::Bounds,
            BitmapError::Colour(_) => ErrorKind::Colour,
            BitmapError::Order { .. } => ErrorKind::Order,
            BitmapError::Arity { .. } => ErrorKind::Arity,
            BitmapError::Type { .. } => ErrorKind::Type,
            BitmapError::UnknownCommand(_) => ErrorKind::UnknownCommand,
            BitmapError::NoGrid => ErrorKind::NoGrid,
            BitmapError::Config(_) | BitmapError::TomlParse(_) => ErrorKind::Config,
            BitmapError::Io(_) => ErrorKind::Io,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Size => "SizeError",
            ErrorKind::Bounds => "BoundsError",
            ErrorKind::Colour => "ColourError",
            ErrorKind::Order => "OrderError",
            ErrorKind::Arity => "ArityError",
            ErrorKind::Type => "TypeError",
            ErrorKind::UnknownCommand => "UnknownCommandError",
            ErrorKind::NoGrid => "NoGridError",
            ErrorKind::Config => "ConfigError",
            ErrorKind::Io => "IoError",
        };
        f.write_str(name)
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BitmapError>;
