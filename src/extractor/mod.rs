//! Chart declaration extraction from component-style source text.
//!
//! There is no parser here. Arrays and chart tags are located with pattern scans,
//! then an ordered chain of stages turns them into declarations. The first stage
//! that produces anything wins; the last one always does.

mod literal;
mod scan;
mod stages;
mod tags;
mod types;

pub use literal::{Element, Literal, parse_array, parse_object};
pub use scan::{ArrayCandidate, ArrayScanner};
pub use stages::{
    COLOR_FIELDS, ExtractionStage, LABEL_FIELDS, MAX_LINKED_SERIES, NamingHeuristic,
    SAMPLE_SERIES_LABEL, TagPresence, TerminalFallback, UsageLinked, VALUE_FIELDS,
    default_chain,
};
pub use tags::{AxisLabel, ChartTag, TagAttribute, TagScanner, axis_label_in};
pub use types::{ChartDeclaration, ChartKind, Extraction, Series, Stage};

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::ExtractConfig;

/// Arrays and chart tags found in one input, shared by every stage.
#[derive(Debug)]
pub struct SourceIndex<'a> {
    pub code: &'a str,
    pub arrays: IndexMap<&'a str, ArrayCandidate<'a>>,
    pub tags: Vec<ChartTag<'a>>,
    /// Container tag start offset to the `dataKey` of its `<XAxis>`.
    axis_keys: HashMap<usize, &'a str>,
    /// Index of each tag's innermost enclosing container.
    parents: Vec<Option<usize>>,
    /// Container index to the series tags directly inside it.
    children: HashMap<usize, Vec<usize>>,
    /// Data source name to the first tag referencing it.
    links: HashMap<&'a str, usize>,
}

impl<'a> SourceIndex<'a> {
    #[must_use]
    pub fn build(code: &'a str, arrays: &ArrayScanner, tags: &TagScanner) -> Self {
        let found_tags = tags.scan(code);
        let axes = tags.axis_labels(code);
        let axis_keys = found_tags
            .iter()
            .filter(|tag| tag.is_container())
            .filter_map(|tag| {
                let body = tag.body.as_ref()?;
                axis_label_in(&axes, body).map(|key| (tag.start, key))
            })
            .collect();

        let parents = innermost_containers(&found_tags);
        let mut children: HashMap<usize, Vec<usize>> = HashMap::new();
        for (i, parent) in parents.iter().enumerate() {
            if let Some(parent) = parent
                && !found_tags[i].is_container()
            {
                children.entry(*parent).or_default().push(i);
            }
        }

        let mut links = HashMap::new();
        for (i, tag) in found_tags.iter().enumerate() {
            if let Some(name) = tag.data_reference() {
                links.entry(name).or_insert(i);
            }
        }

        Self {
            code,
            arrays: arrays.discover(code),
            tags: found_tags,
            axis_keys,
            parents,
            children,
            links,
        }
    }

    /// First tag that takes `name` as its data source.
    #[must_use]
    pub fn linking_tag(&self, name: &str) -> Option<&ChartTag<'a>> {
        self.links.get(name).map(|&i| &self.tags[i])
    }

    /// Innermost container whose body holds `tag`.
    #[must_use]
    pub fn container_of(&self, tag: &ChartTag<'a>) -> Option<&ChartTag<'a>> {
        let parent = self.parents[self.position(tag)?]?;
        Some(&self.tags[parent])
    }

    /// Series tags whose innermost container is `container`.
    pub fn children_of<'s>(
        &'s self,
        container: &'s ChartTag<'a>,
    ) -> impl Iterator<Item = &'s ChartTag<'a>> + 's {
        self.position(container)
            .and_then(|i| self.children.get(&i))
            .into_iter()
            .flatten()
            .map(move |&i| &self.tags[i])
    }

    #[must_use]
    pub fn axis_label_key(&self, container: &ChartTag<'a>) -> Option<&'a str> {
        self.axis_keys.get(&container.start).copied()
    }

    fn position(&self, tag: &ChartTag<'a>) -> Option<usize> {
        self.tags
            .binary_search_by_key(&tag.start, |candidate| candidate.start)
            .ok()
    }
}

/// For tags in source order, the index of the latest-starting container whose body
/// holds each tag's start.
fn innermost_containers(tags: &[ChartTag<'_>]) -> Vec<Option<usize>> {
    let mut open: Vec<usize> = Vec::new();
    let mut parents = Vec::with_capacity(tags.len());

    for (i, tag) in tags.iter().enumerate() {
        // starts only grow, so a body that misses this tag misses every later one
        while let Some(&top) = open.last() {
            if tags[top].contains(tag.start) {
                break;
            }
            open.pop();
        }
        parents.push(open.last().copied());
        if tag.is_container() && tag.body.is_some() {
            open.push(i);
        }
    }

    parents
}

/// Runs the fallback chain with a fixed configuration.
pub struct Extractor {
    config: ExtractConfig,
    arrays: ArrayScanner,
    tags: TagScanner,
    chain: Vec<Box<dyn ExtractionStage>>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}

impl Extractor {
    #[must_use]
    pub fn new(config: ExtractConfig) -> Self {
        Self {
            config,
            arrays: ArrayScanner::new(),
            tags: TagScanner::new(),
            chain: default_chain(),
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Run the chain over `code`. Always returns at least one declaration.
    #[must_use]
    pub fn run(&self, code: &str) -> Extraction {
        let code = clamp_to_char_boundary(code, self.config.max_input_bytes);
        let index = SourceIndex::build(code, &self.arrays, &self.tags);
        tracing::trace!(
            arrays = index.arrays.len(),
            tags = index.tags.len(),
            "Indexed source"
        );

        for stage in &self.chain {
            let declarations = stage.extract(&index, &self.config);
            if !declarations.is_empty() {
                tracing::debug!(
                    stage = stage.stage().as_str(),
                    count = declarations.len(),
                    "Extraction stage matched"
                );
                return Extraction {
                    stage: stage.stage(),
                    declarations,
                };
            }
            tracing::debug!(
                stage = stage.stage().as_str(),
                "Extraction stage empty, falling through"
            );
        }

        Extraction {
            stage: Stage::TerminalFallback,
            declarations: TerminalFallback.extract(&index, &ExtractConfig::default()),
        }
    }

    /// Declarations for `code`, discarding which stage produced them.
    #[must_use]
    pub fn extract(&self, code: &str) -> Vec<ChartDeclaration> {
        self.run(code).declarations
    }
}

/// Extract with the default configuration.
#[must_use]
pub fn extract(code: &str) -> Vec<ChartDeclaration> {
    Extractor::default().extract(code)
}

/// Longest prefix of `text` no longer than `max_bytes` that ends on a char boundary.
#[must_use]
pub fn clamp_to_char_boundary(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    tracing::debug!(limit = max_bytes, len = text.len(), "Input truncated before scanning");
    &text[..end]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
