//! The set of files this process may modify
//!
//! Built once at startup from the optional allow-list file and `--allow`
//! flags, then passed to every mutating command.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{CliError, Result};

/// On-disk form of the allow-list.
///
/// ```toml
/// allowed_files = ["/etc/myapp/secrets.cfg"]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct AllowListFile {
    #[serde(default)]
    allowed_files: Vec<PathBuf>,
}

/// Absolute paths that mutating commands are permitted to write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    paths: BTreeSet<PathBuf>,
}

impl AllowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an allow-list file. Relative entries are resolved against the
    /// directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| CliError::AllowList {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let parsed: AllowListFile = toml::from_str(&content).map_err(|e| CliError::AllowList {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        let mut list = Self::new();
        for entry in parsed.allowed_files {
            list.insert(base.join(entry))?;
        }
        tracing::debug!(path = %path.display(), entries = list.len(), "loaded allow-list");
        Ok(list)
    }

    /// Add a path, stored in absolute form.
    pub fn insert(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.paths.insert(absolute(path.as_ref())?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &Path) -> bool {
        absolute(path).is_ok_and(|p| self.paths.contains(&p))
    }

    /// Resolve `path` and confirm it may be modified.
    pub fn check(&self, path: &Path) -> Result<PathBuf> {
        let resolved = absolute(path)?;
        if self.paths.contains(&resolved) {
            Ok(resolved)
        } else {
            Err(CliError::NotAllowed {
                path: resolved,
                allowed: self.paths.iter().cloned().collect(),
            })
        }
    }
}

/// Absolute form of `path`. Existing paths are canonicalized so symlinks
/// and `..` cannot dodge the check.
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        Ok(dunce::canonicalize(path)?)
    } else {
        Ok(std::path::absolute(path)?)
    }
}
