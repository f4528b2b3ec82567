use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use super::context::{is_stdin, load_config, read_input};
use crate::cli::{Cli, ConvertArgs};
use crate::error::{ArtifactHtmlError, Result};
use crate::output::{ConvertProgress, write_output};
use crate::pipeline::{Artifact, Converter};
use crate::{EXIT_CONFIG_ERROR, EXIT_CONVERSION_ERROR, EXIT_SUCCESS};

/// File extensions picked up when an input is a directory.
pub const ARTIFACT_EXTENSIONS: &[&str] = &["svg", "tsx", "jsx", "ts", "js"];

const STDIN_STEM: &str = "stdin";

#[must_use]
pub fn run_convert(args: &ConvertArgs, cli: &Cli) -> i32 {
    match run_convert_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Convert every input and write the resulting documents.
///
/// A single input without `--out-dir` goes to `--output` or stdout. Anything else is a
/// batch: inputs are converted in parallel and each document lands next to its source,
/// or in `--out-dir`.
///
/// # Errors
/// Returns an error if configuration fails to load, the inputs are unusable, or the
/// single input cannot be read or written.
pub fn run_convert_impl(args: &ConvertArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    let converter = Converter::new(&config);
    let inputs = collect_inputs(&args.inputs);

    if inputs.is_empty() {
        return Err(ArtifactHtmlError::Config(
            "No artifact files found in the given inputs".to_string(),
        ));
    }

    if inputs.len() == 1 && args.out_dir.is_none() {
        return convert_single(&converter, &inputs[0], args);
    }

    if args.output.is_some() {
        return Err(ArtifactHtmlError::Config(
            "--output takes a single input; use --out-dir for several".to_string(),
        ));
    }
    if inputs.iter().any(|input| is_stdin(input)) {
        return Err(ArtifactHtmlError::Config(
            "Standard input cannot be combined with other inputs".to_string(),
        ));
    }

    let targets = plan_targets(&inputs, args.out_dir.as_deref())?;
    let summary = convert_batch(&converter, &inputs, &targets, args, cli.quiet);
    if !cli.quiet {
        println!(
            "Converted {} artifact(s): {} failed, {} with errors",
            summary.total, summary.failed, summary.errored
        );
    }
    Ok(summary.exit_code())
}

fn convert_single(converter: &Converter, input: &Path, args: &ConvertArgs) -> Result<i32> {
    let content = read_input(input)?;
    let conversion = converter.convert(&Artifact::new(content, args.artifact_version.as_str()));
    tracing::info!(
        input = %input.display(),
        kind = conversion.kind.as_str(),
        stage = conversion.stage.map(|stage| stage.as_str()),
        "Converted artifact"
    );

    if conversion.is_error {
        eprintln!("{}", conversion.output);
        return Ok(EXIT_CONVERSION_ERROR);
    }

    write_output(args.output.as_deref(), &conversion.output)?;
    Ok(EXIT_SUCCESS)
}

/// Outcome counts for a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    /// Inputs that could not be read or written.
    pub failed: usize,
    /// Inputs whose conversion reported an error sentence.
    pub errored: usize,
}

impl BatchSummary {
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        if self.failed > 0 {
            EXIT_CONFIG_ERROR
        } else if self.errored > 0 {
            EXIT_CONVERSION_ERROR
        } else {
            EXIT_SUCCESS
        }
    }
}

enum FileOutcome {
    Written,
    Errored,
    Failed,
}

fn convert_batch(
    converter: &Converter,
    inputs: &[PathBuf],
    targets: &[PathBuf],
    args: &ConvertArgs,
    quiet: bool,
) -> BatchSummary {
    let progress = ConvertProgress::new(inputs.len() as u64, quiet);

    let outcomes: Vec<FileOutcome> = inputs
        .par_iter()
        .zip(targets.par_iter())
        .map(|(input, target)| {
            let outcome = match convert_file(converter, input, target, args) {
                Ok(outcome) => outcome,
                Err(e) => {
                    progress.suspend(|| eprintln!("Error: {}: {e}", input.display()));
                    FileOutcome::Failed
                }
            };
            progress.inc();
            outcome
        })
        .collect();
    progress.finish();

    outcomes.iter().fold(
        BatchSummary {
            total: inputs.len(),
            ..BatchSummary::default()
        },
        |mut summary, outcome| {
            match outcome {
                FileOutcome::Written => {}
                FileOutcome::Errored => summary.errored += 1,
                FileOutcome::Failed => summary.failed += 1,
            }
            summary
        },
    )
}

fn convert_file(
    converter: &Converter,
    input: &Path,
    target: &Path,
    args: &ConvertArgs,
) -> Result<FileOutcome> {
    let content = read_input(input)?;
    let conversion = converter.convert(&Artifact::new(content, args.artifact_version.as_str()));

    if conversion.is_error {
        tracing::warn!(input = %input.display(), "{}", conversion.output);
        return Ok(FileOutcome::Errored);
    }

    write_output(Some(target), &conversion.output)?;
    Ok(FileOutcome::Written)
}

/// Where the document for `input` is written: `<stem>.html` in `out_dir`, or beside
/// the input.
#[must_use]
pub fn output_path_for(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let stem = if is_stdin(input) {
        STDIN_STEM.to_string()
    } else {
        input.file_stem().map_or_else(
            || STDIN_STEM.to_string(),
            |stem| stem.to_string_lossy().into_owned(),
        )
    };
    let file_name = format!("{stem}.html");

    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// One output path per input, all distinct.
///
/// Inputs sharing a stem (`chart.svg` and `chart.tsx`) keep their extension in the
/// output name instead: `chart.svg.html` and `chart.tsx.html`.
///
/// # Errors
/// Returns an error if two inputs still map to the same output, such as files with
/// the same name from different directories sent to one `--out-dir`.
pub fn plan_targets(inputs: &[PathBuf], out_dir: Option<&Path>) -> Result<Vec<PathBuf>> {
    let primary: Vec<PathBuf> = inputs
        .iter()
        .map(|input| output_path_for(input, out_dir))
        .collect();
    let mut counts: HashMap<&Path, usize> = HashMap::new();
    for target in &primary {
        *counts.entry(target.as_path()).or_default() += 1;
    }

    let targets: Vec<PathBuf> = inputs
        .iter()
        .zip(&primary)
        .map(|(input, target)| {
            if counts[target.as_path()] > 1 {
                full_name_path_for(input, out_dir)
            } else {
                target.clone()
            }
        })
        .collect();

    let mut seen: HashMap<&Path, &Path> = HashMap::new();
    for (input, target) in inputs.iter().zip(&targets) {
        if let Some(previous) = seen.insert(target.as_path(), input.as_path()) {
            return Err(ArtifactHtmlError::Config(format!(
                "{} and {} would both be written to {}",
                previous.display(),
                input.display(),
                target.display()
            )));
        }
    }

    if targets != primary {
        tracing::debug!("Output names kept their source extension to stay distinct");
    }
    Ok(targets)
}

/// `<file name>.html`, extension included.
fn full_name_path_for(input: &Path, out_dir: Option<&Path>) -> PathBuf {
    let name = input.file_name().map_or_else(
        || STDIN_STEM.to_string(),
        |name| name.to_string_lossy().into_owned(),
    );
    let file_name = format!("{name}.html");

    match out_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

/// Expand directories into the artifact files they contain, sorted by path.
///
/// Files named directly are kept whatever their extension. Hidden directories are
/// skipped while walking.
#[must_use]
pub fn collect_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for input in inputs {
        if input.is_dir() {
            files.extend(walk_artifacts(input));
        } else {
            files.push(input.clone());
        }
    }
    files
}

fn walk_artifacts(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry.file_name()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && has_artifact_extension(entry.path()))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

fn has_artifact_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ARTIFACT_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
