use serde::Serialize;

use crate::classifier::{ContentKind, classify};
use crate::config::Config;
use crate::extractor::{ChartDeclaration, Extractor, Stage};
use crate::render::{DocumentRenderer, NO_CODE_ERROR, NO_MARKUP_ERROR, Payload};

/// Source text plus the version label shown in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub content: String,
    pub version: String,
}

impl Artifact {
    #[must_use]
    pub fn new(content: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            version: version.into(),
        }
    }
}

/// Result of converting one artifact.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub kind: ContentKind,
    /// Extraction stage that fired; `None` for markup and blank input.
    pub stage: Option<Stage>,
    /// Complete document, or a short error sentence when `is_error` is set.
    pub output: String,
    pub is_error: bool,
}

/// What the extractor sees in an artifact, without rendering it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inspection {
    pub kind: ContentKind,
    pub stage: Option<Stage>,
    pub declarations: Vec<ChartDeclaration>,
}

/// Classifier, extractor, and renderer wired together.
#[derive(Default)]
pub struct Converter {
    extractor: Extractor,
    renderer: DocumentRenderer,
}

impl Converter {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            extractor: Extractor::new(config.extract.clone()),
            renderer: DocumentRenderer::new(config.render.clone()),
        }
    }

    /// Convert one artifact. Never fails; blank content yields an error sentence
    /// without running the extractor.
    #[must_use]
    pub fn convert(&self, artifact: &Artifact) -> Conversion {
        let kind = classify(&artifact.content);

        if artifact.content.trim().is_empty() {
            return Conversion {
                kind,
                stage: None,
                output: blank_error(kind).to_string(),
                is_error: true,
            };
        }

        match kind {
            ContentKind::Markup => Conversion {
                kind,
                stage: None,
                output: self
                    .renderer
                    .render(&Payload::Markup(&artifact.content), &artifact.version),
                is_error: false,
            },
            ContentKind::Code => {
                let extraction = self.extractor.run(&artifact.content);
                let output = self.renderer.render(
                    &Payload::Charts(&extraction.declarations),
                    &artifact.version,
                );
                Conversion {
                    kind,
                    stage: Some(extraction.stage),
                    output,
                    is_error: false,
                }
            }
        }
    }

    /// Classify and extract `content` without rendering.
    #[must_use]
    pub fn inspect(&self, content: &str) -> Inspection {
        let kind = classify(content);
        if kind == ContentKind::Markup || content.trim().is_empty() {
            return Inspection {
                kind,
                stage: None,
                declarations: Vec::new(),
            };
        }

        let extraction = self.extractor.run(content);
        Inspection {
            kind,
            stage: Some(extraction.stage),
            declarations: extraction.declarations,
        }
    }
}

const fn blank_error(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::Markup => NO_MARKUP_ERROR,
        ContentKind::Code => NO_CODE_ERROR,
    }
}

/// Convert with the default configuration.
#[must_use]
pub fn convert(artifact: &Artifact) -> Conversion {
    Converter::default().convert(artifact)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
