use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{ArtifactHtmlError, Result};

/// Input path that stands for standard input.
pub const STDIN_PATH: &str = "-";

#[must_use]
pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Resolve the configuration for a command.
///
/// `--no-config` wins; otherwise an explicit path, then the usual search order.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read, parsed, or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        tracing::debug!("Configuration disabled, using defaults");
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    let loaded = config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))?;
    match &loaded.source {
        Some(path) => tracing::info!(path = %path.display(), "Using configuration file"),
        None => tracing::debug!("No configuration file found, using defaults"),
    }
    Ok(loaded.config)
}

/// Read an artifact from `path`, or from stdin when `path` is `-`.
///
/// # Errors
/// Returns an error if the input cannot be read or is not valid UTF-8.
pub fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut content = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut content)
            .map_err(|e| ArtifactHtmlError::file_read(path, e))?;
        return Ok(content);
    }

    fs::read_to_string(path).map_err(|e| ArtifactHtmlError::file_read(path, e))
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
