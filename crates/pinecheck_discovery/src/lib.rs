//! pinecheck_discovery: Source file discovery and loading.
//!
//! Turns command-line inputs into an ordered list of files and reads
//! each one as UTF-8 text. Directory walks are depth-first with entries
//! sorted by name, so the same tree always yields the same order.

use pinecheck_options::CheckOptions;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A loaded source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// The path as supplied or discovered.
    pub path: PathBuf,
    /// The file contents with line endings normalized to `\n`.
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// The path rendered for diagnostics.
    pub fn display_name(&self) -> String {
        self.path.display().to_string()
    }
}

/// Errors raised while loading a single file. They never stop other
/// files from being checked.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },
}

impl LoadError {
    /// The file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            LoadError::Io { path, .. } | LoadError::InvalidUtf8 { path } => path,
        }
    }
}

/// Resolve inputs into the ordered list of files to check.
///
/// With no inputs the current directory is walked. A directory input is
/// walked recursively for files with a configured extension; any other
/// input is taken literally, whatever its extension. Missing files are
/// reported when they are loaded.
pub fn discover_source_files(inputs: &[PathBuf], options: &CheckOptions) -> Vec<PathBuf> {
    let mut result = Vec::new();

    if inputs.is_empty() {
        walk_directory(Path::new("."), options, &mut result);
    } else {
        for input in inputs {
            if input.is_dir() {
                walk_directory(input, options, &mut result);
            } else {
                result.push(input.clone());
            }
        }
    }

    tracing::debug!(files = result.len(), "discovered source files");
    result
}

fn walk_directory(dir: &Path, options: &CheckOptions, result: &mut Vec<PathBuf>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(e) => e,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), error = %err, "skipping unreadable directory");
            return;
        }
    };

    let mut entries: Vec<_> = entries.flatten().collect();
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = child_path(dir, &entry.file_name());
        // Symlinked directories are not descended into.
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir {
            let dir_name = entry.file_name();
            if options.is_excluded_dir(&dir_name.to_string_lossy()) {
                tracing::debug!(dir = %path.display(), "excluded directory");
                continue;
            }
            walk_directory(&path, options, result);
        } else if path.is_file() && options.matches_extension(&path) {
            result.push(path);
        }
    }
}

/// Join a directory entry name, leaving out a leading `./`.
fn child_path(dir: &Path, name: &std::ffi::OsStr) -> PathBuf {
    if dir == Path::new(".") {
        PathBuf::from(name)
    } else {
        dir.join(name)
    }
}

/// Read a file as UTF-8 text.
pub fn load_source_file(path: &Path) -> Result<SourceFile, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| LoadError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;
    Ok(SourceFile::new(path, normalize_newlines(text)))
}

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n".to_string()), "a\nb\nc\n");
        assert_eq!(normalize_newlines("plain\n".to_string()), "plain\n");
    }

    #[test]
    fn test_child_path_strips_current_dir() {
        let name = std::ffi::OsStr::new("a.pine");
        assert_eq!(child_path(Path::new("."), name), PathBuf::from("a.pine"));
        assert_eq!(child_path(Path::new("src"), name), PathBuf::from("src/a.pine"));
    }

    #[test]
    fn test_load_error_path() {
        let err = LoadError::InvalidUtf8 {
            path: PathBuf::from("bad.pine"),
        };
        assert_eq!(err.path(), Path::new("bad.pine"));
        assert_eq!(err.to_string(), "'bad.pine' is not valid UTF-8");
    }
}
