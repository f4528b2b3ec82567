//! Argument handling for callers that speak the `{artifact_content, artifact_version}`
//! tool shape and expect `{text, isError}` back.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ArtifactHtmlError, Result};
use crate::pipeline::{Artifact, Converter};

pub const MISSING_CONTENT_MESSAGE: &str = "Error: No artifact content provided. Please provide the TypeScript or SVG code from an artifact or ask Claude to create one first.";

pub const MISSING_VERSION_MESSAGE: &str =
    "Error: No artifact version specified. Please specify a version (e.g., 'v1', 'latest').";

const CONTENT_FIELD: &str = "artifact_content";
const VERSION_FIELD: &str = "artifact_version";

/// Raw tool arguments. Fields stay untyped so wrong types are reported, not rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolRequest {
    #[serde(default)]
    pub artifact_content: Option<Value>,
    #[serde(default)]
    pub artifact_version: Option<Value>,
}

impl ToolRequest {
    #[must_use]
    pub fn new(content: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            artifact_content: Some(Value::String(content.into())),
            artifact_version: Some(Value::String(version.into())),
        }
    }

    /// Checked artifact.
    ///
    /// # Errors
    /// Returns `InputMissing` for the first missing, blank, or non-text argument,
    /// content before version.
    pub fn artifact(&self) -> Result<Artifact> {
        let content = non_blank_text(self.artifact_content.as_ref()).ok_or(
            ArtifactHtmlError::InputMissing {
                field: CONTENT_FIELD,
            },
        )?;
        let version = non_blank_text(self.artifact_version.as_ref()).ok_or(
            ArtifactHtmlError::InputMissing {
                field: VERSION_FIELD,
            },
        )?;
        Ok(Artifact::new(content, version))
    }
}

fn non_blank_text(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
}

/// Output relayed to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub text: String,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResponse {
    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Validate `request` and convert it.
#[must_use]
pub fn convert_artifact(converter: &Converter, request: &ToolRequest) -> ToolResponse {
    match request.artifact() {
        Ok(artifact) => {
            let conversion = converter.convert(&artifact);
            ToolResponse {
                text: conversion.output,
                is_error: conversion.is_error,
            }
        }
        Err(err) => {
            tracing::debug!(error = %err, "Rejected tool arguments");
            ToolResponse::error(user_message(&err))
        }
    }
}

/// Sentence shown to the caller for a rejected request.
#[must_use]
pub fn user_message(err: &ArtifactHtmlError) -> String {
    match err {
        ArtifactHtmlError::InputMissing {
            field: VERSION_FIELD,
        } => MISSING_VERSION_MESSAGE.to_string(),
        ArtifactHtmlError::InputMissing { .. } => MISSING_CONTENT_MESSAGE.to_string(),
        other => format!("Error: {other}"),
    }
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
