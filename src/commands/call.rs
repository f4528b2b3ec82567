use std::path::Path;

use super::context::{STDIN_PATH, load_config, read_input};
use crate::cli::{CallArgs, Cli};
use crate::error::{ArtifactHtmlError, Result};
use crate::pipeline::Converter;
use crate::tool::{ToolRequest, ToolResponse, convert_artifact, user_message};
use crate::{EXIT_CONFIG_ERROR, EXIT_CONVERSION_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_call(args: &CallArgs, cli: &Cli) -> i32 {
    let response = match run_call_impl(args, cli) {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_CONFIG_ERROR;
        }
    };

    match serde_json::to_string(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: {}", ArtifactHtmlError::from(e));
            return EXIT_CONFIG_ERROR;
        }
    }

    if response.is_error {
        EXIT_CONVERSION_ERROR
    } else {
        EXIT_SUCCESS
    }
}

/// Answer one tool call read as JSON from a file or stdin.
///
/// Arguments that do not parse are answered with an error response, like any other
/// rejected request.
///
/// # Errors
/// Returns an error if configuration or the request cannot be read.
pub fn run_call_impl(args: &CallArgs, cli: &Cli) -> Result<ToolResponse> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let source = args
        .input
        .as_deref()
        .unwrap_or_else(|| Path::new(STDIN_PATH));
    let raw = read_input(source)?;

    let response = match serde_json::from_str::<ToolRequest>(&raw) {
        Ok(request) => convert_artifact(&Converter::new(&config), &request),
        Err(e) => {
            let err = ArtifactHtmlError::from(e);
            tracing::debug!(error = %err, "Tool arguments are not a JSON object");
            ToolResponse::error(user_message(&err))
        }
    };
    Ok(response)
}

#[cfg(test)]
#[path = "call_tests.rs"]
mod tests;
