use super::context::{load_config, read_input};
use crate::cli::{Cli, InspectArgs};
use crate::error::Result;
use crate::pipeline::Converter;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[must_use]
pub fn run_inspect(args: &InspectArgs, cli: &Cli) -> i32 {
    match run_inspect_impl(args, cli) {
        Ok(report) => {
            println!("{report}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Pretty JSON describing the artifact's kind, the stage that fired, and the
/// extracted declarations.
///
/// # Errors
/// Returns an error if configuration or the input cannot be read.
pub fn run_inspect_impl(args: &InspectArgs, cli: &Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let content = read_input(&args.input)?;
    let inspection = Converter::new(&config).inspect(&content);
    Ok(serde_json::to_string_pretty(&inspection)?)
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
