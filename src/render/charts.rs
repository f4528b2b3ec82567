use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::extractor::{ChartDeclaration, ChartKind, Series};

/// Chart.js `data` object for one declaration.
#[derive(Debug, Serialize)]
pub struct ChartData<'a> {
    pub labels: &'a [String],
    pub datasets: Vec<ChartDataset<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset<'a> {
    pub label: &'a str,
    pub data: &'a [f64],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Vec<&'a str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<&'a str>,
}

impl<'a> ChartData<'a> {
    #[must_use]
    pub fn from_declaration(declaration: &'a ChartDeclaration) -> Self {
        Self {
            labels: &declaration.labels,
            datasets: declaration
                .series
                .iter()
                .map(|series| ChartDataset::from_series(series, declaration.kind))
                .collect(),
        }
    }
}

impl<'a> ChartDataset<'a> {
    fn from_series(series: &'a Series, kind: ChartKind) -> Self {
        let background_color = point_colors(series);
        let border_color = match kind {
            ChartKind::Line => background_color.as_ref().and_then(|c| c.first().copied()),
            ChartKind::Bar | ChartKind::Pie => None,
        };
        Self {
            label: &series.label,
            data: &series.values,
            background_color,
            border_color,
        }
    }
}

/// Per-point colors, with gaps filled by the first explicit color.
/// `None` when the series has no colors at all, leaving Chart.js defaults.
fn point_colors(series: &Series) -> Option<Vec<&str>> {
    let first = series.colors.iter().flatten().next()?;
    Some(
        series
            .colors
            .iter()
            .map(|color| color.as_deref().unwrap_or(first))
            .collect(),
    )
}

/// Name of the browser-side helper that draws `kind`.
#[must_use]
pub const fn create_function(kind: ChartKind) -> &'static str {
    match kind {
        ChartKind::Bar => "createBarChart",
        ChartKind::Line => "createLineChart",
        ChartKind::Pie => "createPieChart",
    }
}

/// Script expression drawing one declaration.
///
/// # Errors
/// Returns an error if the chart data cannot be serialized.
pub fn chart_call(declaration: &ChartDeclaration) -> Result<String> {
    let data = serde_json::to_string(&ChartData::from_declaration(declaration))?;
    Ok(format!(
        "{}({}, {})",
        create_function(declaration.kind),
        js_string(&declaration.title),
        script_safe(&data)
    ))
}

/// Write one guarded call per declaration, in order. A declaration that cannot be
/// turned into script becomes an error panel instead.
pub fn write_chart_calls(output: &mut String, declarations: &[ChartDeclaration]) {
    for declaration in declarations {
        let title = js_string(&declaration.title);
        match chart_call(declaration) {
            Ok(call) => {
                writeln!(
                    output,
                    "        try {{ {call}; }} catch (error) {{ showChartError({title}, error); }}"
                )
                .ok();
            }
            Err(err) => {
                tracing::warn!(title = %declaration.title, error = %err, "Chart could not be rendered");
                let message = js_string(&format!("Chart data could not be serialized: {err}"));
                writeln!(output, "        showChartError({title}, {message});").ok();
            }
        }
    }
}

/// Double-quoted script string literal that is also safe inside a `<script>` element.
#[must_use]
pub fn js_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => {
                write!(out, "\\u{:04x}", u32::from(c)).ok();
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Escape `<` so embedded JSON cannot close its `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
#[path = "charts_tests.rs"]
mod tests;
