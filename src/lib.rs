pub mod classifier;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod extractor;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod tool;

pub use classifier::{ContentKind, classify};
pub use error::{ArtifactHtmlError, Result};
pub use extractor::{ChartDeclaration, ChartKind, Series, Stage, extract};
pub use pipeline::{Artifact, Conversion, Converter, Inspection, convert};
pub use render::{Payload, render};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONVERSION_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
