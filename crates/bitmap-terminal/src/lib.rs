//! Command interpreter for the bitmap editor.
//!
//! Commands are single-letter tags looked up in a static table. The
//! interpreter checks the argument count, coerces every argument to its
//! declared kind, and only then applies the typed command to a [`Session`].

mod interpreter;
mod session;

/// Kind of value a command argument is coerced to.
pub use interpreter::ArgKind;
/// A fully validated command, ready to apply.
pub use interpreter::Command;
/// Output produced by a command (text or nothing).
pub use interpreter::CommandOutput;
/// Static description of one command tag.
pub use interpreter::CommandSpec;
/// Every known command, in tag order of the help listing.
pub use interpreter::COMMAND_TABLE;
/// Human-readable listing of the command table.
pub use interpreter::help_text;
/// Look up a tag in the command table.
pub use interpreter::lookup;
/// Owner of the optional current grid; applies commands.
pub use session::Session;
