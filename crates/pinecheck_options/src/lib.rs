//! pinecheck_options: pinecheck.json parsing and check options.
//!
//! All settings are optional; an absent file or field falls back to the
//! defaults, which discover `.pine` files and skip nothing.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "pinecheck.json";

/// Default source file extension.
pub const DEFAULT_EXTENSION: &str = "pine";

/// Options controlling discovery and scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CheckOptions {
    /// Extensions matched when walking directories.
    pub extensions: Vec<String>,
    /// Directory names skipped when walking directories.
    pub exclude: Vec<String>,
    /// Worker threads used to scan files; `None` lets rayon decide.
    pub jobs: Option<usize>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            exclude: Vec::new(),
            jobs: None,
        }
    }
}

impl CheckOptions {
    /// Whether `path` has one of the configured extensions.
    /// A leading dot in a configured extension is ignored.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|want| want.trim_start_matches('.') == ext)
    }

    /// Whether a directory with this name is skipped while walking.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude.iter().any(|e| e == name)
    }

    /// The extension named in user-facing notices, e.g. `.pine`.
    pub fn primary_extension(&self) -> String {
        let ext = self
            .extensions
            .first()
            .map(|e| e.trim_start_matches('.'))
            .unwrap_or(DEFAULT_EXTENSION);
        format!(".{}", ext)
    }
}

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse options from JSON text.
pub fn parse_options(content: &str) -> Result<CheckOptions, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse options from a file.
pub fn parse_options_file(path: &Path) -> Result<CheckOptions, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_options(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load options from an explicit path, or from `pinecheck.json` in `dir`
/// when it exists, or fall back to the defaults.
pub fn load_options(explicit: Option<&Path>, dir: &Path) -> Result<CheckOptions, ConfigError> {
    if let Some(path) = explicit {
        return parse_options_file(path);
    }
    let implicit = dir.join(CONFIG_FILE_NAME);
    if implicit.is_file() {
        parse_options_file(&implicit)
    } else {
        Ok(CheckOptions::default())
    }
}
