//! Bitmap editor entry point.
//!
//! Reads a file of single-letter drawing commands, one per line, applies
//! them to an in-memory image, and prints the image on every `S` command.
//! Failures are reported with their line number.

use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};

use bitmap_app::editor::{Editor, open_commands_file};
use bitmap_terminal::help_text;
use bitmap_types::EditorConfig;

/// Environment variable naming an explicit config file.
const CONFIG_ENV: &str = "BITMAP_EDITOR_CONFIG";

fn main() -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let arg = std::env::args().nth(1);
    if matches!(arg.as_deref(), Some("-h" | "--help")) {
        println!("Usage: bitmap-editor <commands-file>\n\nCommands:\n{}", help_text());
        return Ok(ExitCode::SUCCESS);
    }

    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = EditorConfig::resolve(config_path.as_deref(), Path::new("."))
        .context("loading editor config")?;
    log::debug!("Using {config:?}");

    let Some(file) = open_commands_file(arg.as_deref()) else {
        println!("Please provide correct file.");
        return Ok(ExitCode::FAILURE);
    };

    let stdout = io::stdout();
    let mut editor = Editor::new(config, stdout.lock());
    let summary = editor.run(BufReader::new(file))?;
    log::info!(
        "Processed {} commands from {} lines ({} failed)",
        summary.commands,
        summary.lines,
        summary.failures,
    );

    if summary.aborted {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
