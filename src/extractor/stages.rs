use std::collections::HashMap;

use super::SourceIndex;
use super::literal::{Element, Literal};
use super::scan::ArrayCandidate;
use super::tags::ChartTag;
use super::types::{ChartDeclaration, ChartKind, Series, Stage};
use crate::config::{ExtractConfig, PlaceholderConfig, PlaceholderData};

/// Field names read as a point's label, in preference order.
pub const LABEL_FIELDS: &[&str] = &["name", "label"];

/// Field names read as a point's value, in preference order.
pub const VALUE_FIELDS: &[&str] = &["value", "data"];

/// Field names read as a point's color, in preference order.
pub const COLOR_FIELDS: &[&str] = &["color", "fill", "backgroundColor"];

/// Most `dataKey` series one linked chart carries; later keys are dropped.
pub const MAX_LINKED_SERIES: usize = 16;

/// Series label used for illustrative datasets.
pub const SAMPLE_SERIES_LABEL: &str = "Sample data";

/// One link of the fallback chain.
pub trait ExtractionStage: Send + Sync {
    fn stage(&self) -> Stage;

    /// Declarations this stage recovers, in discovery order. Empty means "try the next stage".
    fn extract(&self, index: &SourceIndex<'_>, config: &ExtractConfig) -> Vec<ChartDeclaration>;
}

/// Stages in the order they are attempted.
#[must_use]
pub fn default_chain() -> Vec<Box<dyn ExtractionStage>> {
    vec![
        Box::new(UsageLinked),
        Box::new(NamingHeuristic),
        Box::new(TagPresence),
        Box::new(TerminalFallback),
    ]
}

/// Arrays passed as `data` to a chart tag. Kind comes from the tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsageLinked;

impl ExtractionStage for UsageLinked {
    fn stage(&self) -> Stage {
        Stage::UsageLinked
    }

    fn extract(&self, index: &SourceIndex<'_>, _config: &ExtractConfig) -> Vec<ChartDeclaration> {
        index
            .arrays
            .values()
            .filter_map(|candidate| {
                let tag = index.linking_tag(candidate.name)?;
                let layout = SeriesLayout::for_tag(index, tag);
                linked_declaration(candidate, tag.kind, &layout)
            })
            .collect()
    }
}

/// A `dataKey` series declared by a child tag.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SeriesKey<'a> {
    field: &'a str,
    color: Option<&'a str>,
}

/// How a linked array maps onto labels and series.
#[derive(Debug, Default)]
struct SeriesLayout<'a> {
    label_key: Option<&'a str>,
    keys: Vec<SeriesKey<'a>>,
}

impl<'a> SeriesLayout<'a> {
    fn for_tag(index: &SourceIndex<'a>, tag: &ChartTag<'a>) -> Self {
        let container = if tag.is_container() {
            Some(tag)
        } else {
            index.container_of(tag)
        };
        let label_key = tag
            .quoted_attribute("nameKey")
            .or_else(|| container.and_then(|c| index.axis_label_key(c)));

        let mut keys = Vec::new();
        if tag.is_container() {
            for child in index.children_of(tag) {
                if keys.len() == MAX_LINKED_SERIES {
                    tracing::debug!(
                        container = tag.name,
                        limit = MAX_LINKED_SERIES,
                        "Series limit reached, ignoring remaining keys"
                    );
                    break;
                }
                add_series_key(&mut keys, child);
            }
        } else {
            add_series_key(&mut keys, tag);
        }

        Self { label_key, keys }
    }
}

fn add_series_key<'a>(keys: &mut Vec<SeriesKey<'a>>, tag: &ChartTag<'a>) {
    if let Some(field) = tag.quoted_attribute("dataKey")
        && !keys.iter().any(|key| key.field == field)
    {
        keys.push(SeriesKey {
            field,
            color: tag
                .quoted_attribute("fill")
                .or_else(|| tag.quoted_attribute("stroke")),
        });
    }
}

fn linked_declaration(
    candidate: &ArrayCandidate<'_>,
    kind: ChartKind,
    layout: &SeriesLayout<'_>,
) -> Option<ChartDeclaration> {
    let elements = candidate.elements();
    let labels = elements
        .iter()
        .map(|element| element_label(element, layout.label_key))
        .collect();

    let series = if layout.keys.is_empty() {
        let values = elements.iter().map(element_value).collect();
        let colors = elements
            .iter()
            .map(|element| element.color_field(COLOR_FIELDS))
            .collect();
        vec![Series::new(candidate.title(), values, colors)]
    } else {
        layout
            .keys
            .iter()
            .map(|key| {
                let values = elements
                    .iter()
                    .map(|element| element.number_field(&[key.field]).unwrap_or(0.0))
                    .collect();
                let colors = elements
                    .iter()
                    .map(|element| {
                        element
                            .color_field(COLOR_FIELDS)
                            .or_else(|| key.color.map(ToString::to_string))
                    })
                    .collect();
                Series::new(key.field, values, colors)
            })
            .collect()
    };

    ChartDeclaration::new(candidate.title(), kind, labels, series)
}

/// Sizeable arrays, kind guessed from the identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamingHeuristic;

impl ExtractionStage for NamingHeuristic {
    fn stage(&self) -> Stage {
        Stage::NamingHeuristic
    }

    fn extract(&self, index: &SourceIndex<'_>, config: &ExtractConfig) -> Vec<ChartDeclaration> {
        index
            .arrays
            .values()
            .filter(|candidate| candidate.span_len() > config.min_candidate_span)
            .filter_map(|candidate| {
                let elements = candidate.elements();
                let labels = elements
                    .iter()
                    .map(|element| element_label(element, None))
                    .collect();
                let values = elements.iter().map(element_value).collect();
                let colors = elements
                    .iter()
                    .enumerate()
                    .map(|(i, element)| {
                        element
                            .color_field(COLOR_FIELDS)
                            .or_else(|| config.palette_color(i).map(ToString::to_string))
                    })
                    .collect();

                ChartDeclaration::new(
                    candidate.title(),
                    ChartKind::infer_from_name(candidate.name),
                    labels,
                    vec![Series::new(candidate.title(), values, colors)],
                )
            })
            .collect()
    }
}

/// One illustrative chart per closed container tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagPresence;

impl ExtractionStage for TagPresence {
    fn stage(&self) -> Stage {
        Stage::TagPresence
    }

    fn extract(&self, index: &SourceIndex<'_>, config: &ExtractConfig) -> Vec<ChartDeclaration> {
        let mut seen: HashMap<ChartKind, usize> = HashMap::new();

        index
            .tags
            .iter()
            .filter(|tag| tag.is_container() && tag.is_closed())
            .filter_map(|tag| {
                let count = seen.entry(tag.kind).or_insert(0);
                *count += 1;
                let title = if *count == 1 {
                    format!("{} Chart", tag.kind.display_name())
                } else {
                    format!("{} Chart {count}", tag.kind.display_name())
                };
                let data = placeholder_for(&config.placeholders, tag.kind);
                placeholder_declaration(&title, tag.kind, data, config)
            })
            .collect()
    }
}

/// A bar and a pie chart from the fallback dataset. Never empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalFallback;

impl ExtractionStage for TerminalFallback {
    fn stage(&self) -> Stage {
        Stage::TerminalFallback
    }

    fn extract(&self, _index: &SourceIndex<'_>, config: &ExtractConfig) -> Vec<ChartDeclaration> {
        let built_in = PlaceholderConfig::default().fallback;

        [
            (ChartKind::Bar, "Sample Bar Chart"),
            (ChartKind::Pie, "Sample Pie Chart"),
        ]
        .into_iter()
        .filter_map(|(kind, title)| {
            placeholder_declaration(title, kind, &config.placeholders.fallback, config)
                .or_else(|| placeholder_declaration(title, kind, &built_in, config))
        })
        .collect()
    }
}

const fn placeholder_for(placeholders: &PlaceholderConfig, kind: ChartKind) -> &PlaceholderData {
    match kind {
        ChartKind::Bar => &placeholders.bar,
        ChartKind::Line => &placeholders.line,
        ChartKind::Pie => &placeholders.pie,
    }
}

/// Declaration over a fixed dataset, truncated to the shorter of labels and values.
fn placeholder_declaration(
    title: &str,
    kind: ChartKind,
    data: &PlaceholderData,
    config: &ExtractConfig,
) -> Option<ChartDeclaration> {
    let len = data.labels.len().min(data.values.len());
    let values: Vec<f64> = data.values[..len].to_vec();
    if values.iter().any(|v| !v.is_finite()) {
        return None;
    }
    let colors = (0..len)
        .map(|i| config.palette_color(i).map(ToString::to_string))
        .collect();

    ChartDeclaration::new(
        title,
        kind,
        data.labels[..len].to_vec(),
        vec![Series::new(SAMPLE_SERIES_LABEL, values, colors)],
    )
}

/// Label of one element: `key` if given, then the label aliases. Bare strings are labels.
fn element_label(element: &Element, key: Option<&str>) -> String {
    match element {
        Element::Scalar(Literal::Text(text)) => text.clone(),
        Element::Scalar(_) => String::new(),
        Element::Object(_) => key
            .and_then(|key| element.field(&[key]))
            .or_else(|| element.field(LABEL_FIELDS))
            .map_or_else(String::new, Literal::as_label),
    }
}

/// Value of one element, or zero. Bare numbers are values.
fn element_value(element: &Element) -> f64 {
    match element {
        Element::Scalar(Literal::Number(n)) => *n,
        Element::Scalar(_) => 0.0,
        Element::Object(_) => element.number_field(VALUE_FIELDS).unwrap_or(0.0),
    }
}

#[cfg(test)]
#[path = "stages_tests.rs"]
mod tests;
