mod progress;

pub use progress::ConvertProgress;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::{ArtifactHtmlError, Result};

/// Write `content` to `output_path`, creating parent directories, or to stdout.
///
/// # Errors
/// Returns an error if the file or stdout cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str) -> Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ArtifactHtmlError::file_write(parent, e))?;
        }
        fs::write(path, content).map_err(|e| ArtifactHtmlError::file_write(path, e))?;
        tracing::info!(path = %path.display(), bytes = content.len(), "Wrote document");
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        if !content.ends_with('\n') {
            stdout.write_all(b"\n")?;
        }
        stdout.flush()?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
