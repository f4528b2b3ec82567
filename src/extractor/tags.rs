use std::collections::HashMap;
use std::ops::Range;

use regex::Regex;

use super::types::ChartKind;

/// One `name=value` attribute of a component tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagAttribute<'a> {
    pub name: &'a str,
    pub value: &'a str,
    /// `true` for `name="value"` and `name={"value"}`, `false` for `name={expr}`.
    pub quoted: bool,
}

/// An opening chart-component tag found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartTag<'a> {
    pub name: &'a str,
    pub kind: ChartKind,
    /// Offset of the `<` that opens the tag.
    pub start: usize,
    pub attributes: Vec<TagAttribute<'a>>,
    pub self_closing: bool,
    /// Text between the opening tag and its matching close tag.
    pub body: Option<Range<usize>>,
}

impl<'a> ChartTag<'a> {
    /// `BarChart`, `LineChart`, and `PieChart` wrap series; `Bar`, `Line`, and `Pie` are series.
    #[must_use]
    pub fn is_container(&self) -> bool {
        self.name.ends_with("Chart")
    }

    /// Self-closing, or followed by a matching close tag.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.self_closing || self.body.is_some()
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&TagAttribute<'a>> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    /// String value of a quoted attribute such as `dataKey="sales"`.
    #[must_use]
    pub fn quoted_attribute(&self, name: &str) -> Option<&'a str> {
        self.attribute(name)
            .filter(|attr| attr.quoted && !attr.value.is_empty())
            .map(|attr| attr.value)
    }

    /// Identifier passed as the tag's data source, via `data={name}` or `data="name"`.
    #[must_use]
    pub fn data_reference(&self) -> Option<&'a str> {
        self.attribute("data")
            .map(|attr| attr.value)
            .filter(|value| is_identifier(value))
    }

    /// Whether `offset` lies inside this tag's body.
    #[must_use]
    pub fn contains(&self, offset: usize) -> bool {
        self.body.as_ref().is_some_and(|body| body.contains(&offset))
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// An `<XAxis dataKey="...">` found in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabel<'a> {
    pub span: Range<usize>,
    pub key: &'a str,
}

/// Scanner for bar/line/pie component tags.
pub struct TagScanner {
    open_tag: Regex,
    close_tag: Regex,
    attribute: Regex,
    axis_key: Regex,
}

impl Default for TagScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TagScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            open_tag: Regex::new(r"<(BarChart|LineChart|PieChart|Bar|Line|Pie)\b")
                .expect("Invalid regex"),
            close_tag: Regex::new(r"</(BarChart|LineChart|PieChart|Bar|Line|Pie)\s*>")
                .expect("Invalid regex"),
            attribute: Regex::new(
                r#"([A-Za-z_][A-Za-z0-9_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|\{\s*(?:"([^"]*)"|'([^']*)'|([^{}]*?))\s*\})"#,
            )
            .expect("Invalid regex"),
            axis_key: Regex::new(r#"<XAxis\b[^>]*?\bdataKey\s*=\s*(?:"([^"]+)"|'([^']+)')"#)
                .expect("Invalid regex"),
        }
    }

    /// Find every chart tag in source order.
    ///
    /// An opening tag's attributes never run past the next chart tag, and its body
    /// ends at the first matching close tag after it.
    #[must_use]
    pub fn scan<'a>(&self, code: &'a str) -> Vec<ChartTag<'a>> {
        let opens: Vec<_> = self
            .open_tag
            .captures_iter(code)
            .filter_map(|caps| Some((caps.get(0)?, caps.get(1)?)))
            .collect();
        let closes = self.close_offsets(code);
        let mut tags = Vec::with_capacity(opens.len());

        for (i, (whole, name)) in opens.iter().enumerate() {
            let Some(kind) = ChartKind::from_tag(name.as_str()) else {
                continue;
            };

            let limit = opens
                .get(i + 1)
                .map_or(code.len(), |(next, _)| next.start());
            let attrs_start = whole.end();
            let tag_close = find_tag_end(&code[..limit], attrs_start);
            let attrs_text = &code[attrs_start..tag_close.unwrap_or(limit)];
            let self_closing = attrs_text.trim_end().ends_with('/');
            let body = match tag_close {
                Some(gt) if !self_closing => {
                    let tag_end = gt + 1;
                    closes
                        .get(name.as_str())
                        .and_then(|offsets| first_at_or_after(offsets, tag_end))
                        .map(|close| tag_end..close)
                }
                _ => None,
            };

            tags.push(ChartTag {
                name: name.as_str(),
                kind,
                start: whole.start(),
                attributes: self.parse_attributes(attrs_text),
                self_closing,
                body,
            });
        }

        tags
    }

    /// Offsets of every `</Name>` close tag, grouped by name, ascending.
    fn close_offsets<'a>(&self, code: &'a str) -> HashMap<&'a str, Vec<usize>> {
        let mut closes: HashMap<&str, Vec<usize>> = HashMap::new();
        for caps in self.close_tag.captures_iter(code) {
            if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
                closes.entry(name.as_str()).or_default().push(whole.start());
            }
        }
        closes
    }

    fn parse_attributes<'a>(&self, text: &'a str) -> Vec<TagAttribute<'a>> {
        self.attribute
            .captures_iter(text)
            .filter_map(|caps| {
                let name = caps.get(1)?.as_str();
                let (value, quoted) = (2..=5)
                    .find_map(|group| caps.get(group).map(|m| (m.as_str(), true)))
                    .or_else(|| caps.get(6).map(|m| (m.as_str().trim(), false)))?;
                Some(TagAttribute {
                    name,
                    value,
                    quoted,
                })
            })
            .collect()
    }

    /// Every `<XAxis>` carrying a quoted `dataKey`, in source order.
    #[must_use]
    pub fn axis_labels<'a>(&self, code: &'a str) -> Vec<AxisLabel<'a>> {
        self.axis_key
            .captures_iter(code)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let key = caps.get(1).or_else(|| caps.get(2))?;
                Some(AxisLabel {
                    span: whole.range(),
                    key: key.as_str(),
                })
            })
            .collect()
    }
}

/// `dataKey` of the first axis lying wholly inside `range`. `axes` must be in source order.
#[must_use]
pub fn axis_label_in<'a>(axes: &[AxisLabel<'a>], range: &Range<usize>) -> Option<&'a str> {
    let first = axes.partition_point(|axis| axis.span.start < range.start);
    axes.get(first)
        .filter(|axis| axis.span.end <= range.end)
        .map(|axis| axis.key)
}

fn first_at_or_after(sorted: &[usize], offset: usize) -> Option<usize> {
    sorted
        .get(sorted.partition_point(|&at| at < offset))
        .copied()
}

/// Offset of the `>` closing an opening tag, skipping braces and quoted values.
/// `None` when `code` ends first.
fn find_tag_end(code: &str, from: usize) -> Option<usize> {
    let bytes = code.as_bytes();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;

    for (i, &byte) in bytes.iter().enumerate().skip(from) {
        match (quote, byte) {
            (Some(q), b) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') if depth == 0 => quote = Some(byte),
            (None, b'{') => depth += 1,
            (None, b'}') => depth = depth.saturating_sub(1),
            (None, b'>') if depth == 0 => return Some(i),
            _ => {}
        }
    }

    None
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
