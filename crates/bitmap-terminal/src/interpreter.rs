//! Command table, argument coercion, and typed commands.

use bitmap_types::error::{BitmapError, Result};

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Command mutated state and produced no visible output.
    None,
    /// Rendered text for the output collaborator to print.
    Text(String),
}

/// Kind of value an argument is coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    /// Signed decimal integer.
    Int,
    /// Exactly one character.
    Char,
}

impl ArgKind {
    /// Name used in type errors.
    pub fn name(self) -> &'static str {
        match self {
            ArgKind::Int => "integer",
            ArgKind::Char => "char",
        }
    }

    fn coerce(self, raw: &str) -> Result<Arg> {
        let mismatch = || BitmapError::Type {
            expected: self.name(),
            got: raw.to_string(),
        };
        match self {
            ArgKind::Int => raw.parse::<i64>().map(Arg::Int).map_err(|_| mismatch()),
            ArgKind::Char => {
                let mut chars = raw.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Arg::Char(c)),
                    _ => Err(mismatch()),
                }
            },
        }
    }
}

/// A coerced argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Arg {
    Int(i64),
    Char(char),
}

/// Session operation a tag maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Create,
    Clear,
    SetPixel,
    VerticalLine,
    HorizontalLine,
    Fill,
    Render,
}

/// Static description of one command tag.
#[derive(Debug)]
pub struct CommandSpec {
    /// The tag as typed at the start of a line.
    pub tag: &'static str,
    /// Usage string (e.g. "L <x> <y> <colour>").
    pub usage: &'static str,
    /// One-line description for the help listing.
    pub description: &'static str,
    /// Expected arguments, in order.
    pub args: &'static [ArgKind],
    op: Op,
}

use ArgKind::{Char, Int};

/// Every command the interpreter understands.
pub const COMMAND_TABLE: &[CommandSpec] = &[
    CommandSpec {
        tag: "I",
        usage: "I <width> <height>",
        description: "Create a new image filled with O",
        args: &[Int, Int],
        op: Op::Create,
    },
    CommandSpec {
        tag: "C",
        usage: "C",
        description: "Reset every pixel to O",
        args: &[],
        op: Op::Clear,
    },
    CommandSpec {
        tag: "L",
        usage: "L <x> <y> <colour>",
        description: "Colour a single pixel",
        args: &[Int, Int, Char],
        op: Op::SetPixel,
    },
    CommandSpec {
        tag: "V",
        usage: "V <x> <y1> <y2> <colour>",
        description: "Draw a vertical segment in column x",
        args: &[Int, Int, Int, Char],
        op: Op::VerticalLine,
    },
    CommandSpec {
        tag: "H",
        usage: "H <x1> <x2> <y> <colour>",
        description: "Draw a horizontal segment in row y",
        args: &[Int, Int, Int, Char],
        op: Op::HorizontalLine,
    },
    CommandSpec {
        tag: "F",
        usage: "F <x> <y> <colour>",
        description: "Fill the region containing (x, y)",
        args: &[Int, Int, Char],
        op: Op::Fill,
    },
    CommandSpec {
        tag: "S",
        usage: "S",
        description: "Show the current image",
        args: &[],
        op: Op::Render,
    },
];

/// Look up a tag. Tags are case-sensitive.
pub fn lookup(tag: &str) -> Result<&'static CommandSpec> {
    COMMAND_TABLE
        .iter()
        .find(|spec| spec.tag == tag)
        .ok_or_else(|| BitmapError::UnknownCommand(tag.to_string()))
}

/// Human-readable listing of every command.
pub fn help_text() -> String {
    let width = COMMAND_TABLE
        .iter()
        .map(|spec| spec.usage.len())
        .max()
        .unwrap_or(0);
    COMMAND_TABLE
        .iter()
        .map(|spec| format!("  {:<width$}  {}", spec.usage, spec.description))
        .collect::<Vec<_>>()
        .join("\n")
}

/// A command whose arguments have all been validated and coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create { width: i64, height: i64 },
    Clear,
    SetPixel { x: i64, y: i64, colour: char },
    VerticalLine { x: i64, y1: i64, y2: i64, colour: char },
    HorizontalLine { x1: i64, x2: i64, y: i64, colour: char },
    Fill { x: i64, y: i64, colour: char },
    Render,
}

impl Command {
    /// Resolve a tag and coerce its raw arguments.
    ///
    /// Fails on an unknown tag, a wrong argument count, or the first argument
    /// that does not coerce to its declared kind. Nothing is executed here.
    pub fn parse(tag: &str, args: &[&str]) -> Result<Self> {
        let spec = lookup(tag)?;
        if args.len() != spec.args.len() {
            return Err(BitmapError::Arity {
                expected: spec.args.len(),
                got: args.len(),
            });
        }
        let values = spec
            .args
            .iter()
            .zip(args)
            .map(|(kind, raw)| kind.coerce(raw))
            .collect::<Result<Vec<_>>>()?;
        Self::build(spec, &values)
    }

    fn build(spec: &CommandSpec, values: &[Arg]) -> Result<Self> {
        use Arg::{Char as C, Int as I};

        let cmd = match (spec.op, values) {
            (Op::Create, &[I(width), I(height)]) => Command::Create { width, height },
            (Op::Clear, &[]) => Command::Clear,
            (Op::SetPixel, &[I(x), I(y), C(colour)]) => Command::SetPixel { x, y, colour },
            (Op::VerticalLine, &[I(x), I(y1), I(y2), C(colour)]) => Command::VerticalLine {
                x,
                y1,
                y2,
                colour,
            },
            (Op::HorizontalLine, &[I(x1), I(x2), I(y), C(colour)]) => Command::HorizontalLine {
                x1,
                x2,
                y,
                colour,
            },
            (Op::Fill, &[I(x), I(y), C(colour)]) => Command::Fill { x, y, colour },
            (Op::Render, &[]) => Command::Render,
            // The table's kinds and these shapes are kept in step; see
            // `every_table_entry_builds`.
            _ => {
                return Err(BitmapError::Arity {
                    expected: spec.args.len(),
                    got: values.len(),
                });
            },
        };
        Ok(cmd)
    }

    /// The tag this command was parsed from.
    pub fn tag(&self) -> &'static str {
        match self {
            Command::Create { .. } => "I",
            Command::Clear => "C",
            Command::SetPixel { .. } => "L",
            Command::VerticalLine { .. } => "V",
            Command::HorizontalLine { .. } => "H",
            Command::Fill { .. } => "F",
            Command::Render => "S",
        }
    }
}
