//! Editor configuration loaded from TOML.

use std::path::Path;

use serde::Deserialize;

use crate::error::{BitmapError, Result};

/// File looked up in the working directory when no explicit config is given.
pub const DEFAULT_CONFIG_FILE: &str = "bitmap-editor.toml";

/// What the editor does after a command fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Report the failure and carry on with the next line.
    #[default]
    Continue,
    /// Report the failure and stop processing the file.
    Abort,
}

/// Runtime options for the editor shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub on_error: ErrorPolicy,
    /// Skip empty and whitespace-only lines instead of dispatching them.
    pub skip_blank_lines: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            on_error: ErrorPolicy::Continue,
            skip_blank_lines: true,
        }
    }
}

impl EditorConfig {
    /// Parse a config from TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| BitmapError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&text).map_err(|e| BitmapError::Config(format!("{}: {e}", path.display())))
    }

    /// Resolve the active config.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] in
    /// `dir` is used when present, otherwise the built-in defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            log::debug!("Loading config from {}", path.display());
            return Self::load(path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            log::debug!("Loading config from {}", fallback.display());
            return Self::load(&fallback);
        }
        Ok(Self::default())
    }
}
