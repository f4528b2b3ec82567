//! Where configuration files live and how their text is fetched.

use std::io::{ErrorKind, Result};
use std::path::{Path, PathBuf};

/// Lookup locations and file access used by the config loader.
pub trait ConfigFiles {
    /// Text of `path`, or `None` when nothing is there.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read.
    fn fetch(&self, path: &Path) -> Result<Option<String>>;

    /// Directory searched for a project-local config.
    fn working_dir(&self) -> Option<PathBuf>;

    /// Per-user directory searched after the working directory, e.g.
    /// `~/.config/artifact-html` on Linux.
    fn user_dir(&self) -> Option<PathBuf>;
}

/// Files on the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFiles;

impl ConfigFiles for DiskFiles {
    fn fetch(&self, path: &Path) -> Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn working_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn user_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", env!("CARGO_PKG_NAME"))
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
