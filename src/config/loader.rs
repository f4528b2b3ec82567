use std::path::{Path, PathBuf};

use crate::error::{ArtifactHtmlError, Result};

use super::Config;
use super::sources::{ConfigFiles, DiskFiles};
use super::validation::validate_config_semantics;

/// Result of loading a configuration, containing both the config and where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// The file the configuration was read from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read, parsed, or validated.
    fn load(&self) -> Result<LoadResult>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".artifact-html.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from config files.
///
/// Search order:
/// 1. `.artifact-html.toml` in current directory
/// 2. `config.toml` in the platform-specific user config directory
/// 3. Returns `Config::default()` if no config found
#[derive(Debug)]
pub struct FileConfigLoader<F: ConfigFiles = DiskFiles> {
    files: F,
}

impl Default for FileConfigLoader<DiskFiles> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<DiskFiles> {
    #[must_use]
    pub const fn new() -> Self {
        Self { files: DiskFiles }
    }
}

impl<F: ConfigFiles> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_files(files: F) -> Self {
        Self { files }
    }

    fn search_paths(&self) -> [Option<PathBuf>; 2] {
        [
            self.files
                .working_dir()
                .map(|dir| dir.join(LOCAL_CONFIG_NAME)),
            self.files.user_dir().map(|dir| dir.join(USER_CONFIG_NAME)),
        ]
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config_semantics(&config)?;
        Ok(config)
    }

    fn fetch(&self, path: &Path) -> Result<Option<String>> {
        self.files
            .fetch(path)
            .map_err(|source| ArtifactHtmlError::file_read(path, source))
    }

    fn loaded(path: &Path, content: &str) -> Result<LoadResult> {
        let config = Self::parse_config(content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
        })
    }
}

impl<F: ConfigFiles> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<LoadResult> {
        for path in self.search_paths().into_iter().flatten() {
            if let Some(content) = self.fetch(&path)? {
                return Self::loaded(&path, &content);
            }
        }

        Ok(LoadResult {
            config: Config::default(),
            source: None,
        })
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content = self.fetch(path)?.ok_or_else(|| {
            ArtifactHtmlError::file_read(path, std::io::ErrorKind::NotFound.into())
        })?;
        Self::loaded(path, &content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
