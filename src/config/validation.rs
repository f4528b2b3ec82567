//! Configuration semantic validation.
//!
//! Checks value ranges and cross-field constraints after parsing.

use crate::config::{Config, PlaceholderData};
use crate::{ArtifactHtmlError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if the palette is empty, a placeholder dataset is empty or unbalanced,
/// `max_input_bytes` is zero, or the theme storage key is blank.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_extract_section(config)?;
    validate_render_section(config)?;
    Ok(())
}

fn validate_extract_section(config: &Config) -> Result<()> {
    let extract = &config.extract;

    if extract.max_input_bytes == 0 {
        return Err(ArtifactHtmlError::Config(
            "extract.max_input_bytes must be greater than 0".to_string(),
        ));
    }

    if extract.palette.iter().all(|color| color.trim().is_empty()) {
        return Err(ArtifactHtmlError::Config(
            "extract.palette must contain at least one color".to_string(),
        ));
    }

    let placeholders = &extract.placeholders;
    validate_placeholder("bar", &placeholders.bar)?;
    validate_placeholder("line", &placeholders.line)?;
    validate_placeholder("pie", &placeholders.pie)?;
    validate_placeholder("fallback", &placeholders.fallback)?;
    Ok(())
}

fn validate_placeholder(name: &str, data: &PlaceholderData) -> Result<()> {
    if data.labels.is_empty() {
        return Err(ArtifactHtmlError::Config(format!(
            "extract.placeholders.{name} must have at least one label"
        )));
    }

    if data.labels.len() != data.values.len() {
        return Err(ArtifactHtmlError::Config(format!(
            "extract.placeholders.{name} has {} labels but {} values",
            data.labels.len(),
            data.values.len()
        )));
    }

    if let Some(value) = data.values.iter().find(|v| !v.is_finite()) {
        return Err(ArtifactHtmlError::Config(format!(
            "extract.placeholders.{name} contains a non-finite value: {value}"
        )));
    }
    Ok(())
}

fn validate_render_section(config: &Config) -> Result<()> {
    if config.render.theme_storage_key.trim().is_empty() {
        return Err(ArtifactHtmlError::Config(
            "render.theme_storage_key must not be blank".to_string(),
        ));
    }

    for (field, url) in [
        ("chart_script_url", &config.render.chart_script_url),
        ("datalabels_script_url", &config.render.datalabels_script_url),
    ] {
        if url.trim().is_empty() {
            return Err(ArtifactHtmlError::Config(format!(
                "render.{field} must not be blank"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
