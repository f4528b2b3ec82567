use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::LOCAL_CONFIG_NAME;

#[derive(Parser, Debug)]
#[command(name = "artifact-html")]
#[command(author, version, about = "Turn SVG and chart-component artifacts into standalone HTML pages")]
#[command(long_about = "Converts an artifact into a self-contained HTML document.\n\n\
    SVG markup is embedded as is. Chart component code is scanned for chart data,\n\
    which is drawn with Chart.js. Every page carries a persisted light/dark toggle.\n\n\
    Exit codes:\n  \
    0 - Conversion succeeded\n  \
    1 - Conversion reported an error\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logs and progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, conflicts_with = "no_config")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert artifacts into HTML documents
    Convert(ConvertArgs),

    /// Show how an artifact is classified and which charts are extracted
    Inspect(InspectArgs),

    /// Handle one tool call: JSON arguments in, JSON result out
    Call(CallArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct ConvertArgs {
    /// Artifact files or directories; `-` reads standard input
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Version label shown in the page header (e.g. v1, latest)
    #[arg(long = "artifact-version", value_name = "VERSION")]
    pub artifact_version: String,

    /// Output file for a single input (default: stdout)
    #[arg(short, long, conflicts_with = "out_dir")]
    pub output: Option<PathBuf>,

    /// Directory for `<name>.html` files when converting several inputs
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Artifact file; `-` reads standard input
    pub input: PathBuf,
}

#[derive(Parser, Debug)]
pub struct CallArgs {
    /// JSON file with `artifact_content` and `artifact_version` (default: stdin)
    pub input: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Default log level for the `-v` count; `off` under `--quiet`.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "off";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
