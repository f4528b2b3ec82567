use serde::{Deserialize, Serialize};

/// Byte cap applied to code-kind input before any pattern scan runs.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Raw source length an array must exceed before the naming heuristic considers it.
pub const DEFAULT_MIN_CANDIDATE_SPAN: usize = 50;

/// Colors assigned to points that carry no color field under the naming heuristic.
pub const DEFAULT_PALETTE: &[&str] = &[
    "#6366f1", "#22c55e", "#eab308", "#ef4444", "#3b82f6", "#a855f7", "#14b8a6", "#f97316",
];

/// Local-storage key holding the viewer's light/dark choice.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";

pub const DEFAULT_CHART_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/chart.js@4.4.2/dist/chart.umd.min.js";

pub const DEFAULT_DATALABELS_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/chartjs-plugin-datalabels@2.2.0/dist/chartjs-plugin-datalabels.min.js";

/// Root configuration, loaded from `.artifact-html.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,

    #[serde(default)]
    pub render: RenderConfig,
}

/// Tunables for the declaration extractor [extract].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractConfig {
    /// Input beyond this many bytes is ignored by the scanners.
    #[serde(default = "default_max_input_bytes")]
    pub max_input_bytes: usize,

    /// Minimum raw span length for the naming heuristic.
    #[serde(default = "default_min_candidate_span")]
    pub min_candidate_span: usize,

    /// Fallback colors, cycled by point index.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,

    /// Illustrative datasets [extract.placeholders].
    #[serde(default)]
    pub placeholders: PlaceholderConfig,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: default_max_input_bytes(),
            min_candidate_span: default_min_candidate_span(),
            palette: default_palette(),
            placeholders: PlaceholderConfig::default(),
        }
    }
}

impl ExtractConfig {
    /// Palette color for the point at `index`, cycling through the palette.
    #[must_use]
    pub fn palette_color(&self, index: usize) -> Option<&str> {
        if self.palette.is_empty() {
            return None;
        }
        self.palette
            .get(index % self.palette.len())
            .map(String::as_str)
    }
}

/// A fixed labelled dataset used when no real data could be recovered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceholderData {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl PlaceholderData {
    #[must_use]
    pub fn new(labels: &[&str], values: &[f64]) -> Self {
        Self {
            labels: labels.iter().map(ToString::to_string).collect(),
            values: values.to_vec(),
        }
    }
}

/// Placeholder datasets per chart kind, plus the terminal fallback set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceholderConfig {
    #[serde(default = "default_bar_placeholder")]
    pub bar: PlaceholderData,

    #[serde(default = "default_line_placeholder")]
    pub line: PlaceholderData,

    #[serde(default = "default_pie_placeholder")]
    pub pie: PlaceholderData,

    /// Dataset behind the terminal bar + pie pair.
    #[serde(default = "default_fallback_placeholder")]
    pub fallback: PlaceholderData,
}

impl Default for PlaceholderConfig {
    fn default() -> Self {
        Self {
            bar: default_bar_placeholder(),
            line: default_line_placeholder(),
            pie: default_pie_placeholder(),
            fallback: default_fallback_placeholder(),
        }
    }
}

/// Document rendering options [render].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderConfig {
    #[serde(default = "default_chart_script_url")]
    pub chart_script_url: String,

    #[serde(default = "default_datalabels_script_url")]
    pub datalabels_script_url: String,

    #[serde(default = "default_theme_storage_key")]
    pub theme_storage_key: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            chart_script_url: default_chart_script_url(),
            datalabels_script_url: default_datalabels_script_url(),
            theme_storage_key: default_theme_storage_key(),
        }
    }
}

const fn default_max_input_bytes() -> usize {
    DEFAULT_MAX_INPUT_BYTES
}

const fn default_min_candidate_span() -> usize {
    DEFAULT_MIN_CANDIDATE_SPAN
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(ToString::to_string).collect()
}

fn default_bar_placeholder() -> PlaceholderData {
    PlaceholderData::new(
        &["Q1", "Q2", "Q3", "Q4"],
        &[120.0, 190.0, 150.0, 210.0],
    )
}

fn default_line_placeholder() -> PlaceholderData {
    PlaceholderData::new(
        &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        &[30.0, 45.0, 38.0, 60.0, 55.0, 72.0],
    )
}

fn default_pie_placeholder() -> PlaceholderData {
    PlaceholderData::new(&["Alpha", "Beta", "Gamma"], &[45.0, 30.0, 25.0])
}

fn default_fallback_placeholder() -> PlaceholderData {
    PlaceholderData::new(
        &["Category A", "Category B", "Category C", "Category D"],
        &[40.0, 25.0, 20.0, 15.0],
    )
}

fn default_chart_script_url() -> String {
    DEFAULT_CHART_SCRIPT_URL.to_string()
}

fn default_datalabels_script_url() -> String {
    DEFAULT_DATALABELS_SCRIPT_URL.to_string()
}

fn default_theme_storage_key() -> String {
    DEFAULT_THEME_STORAGE_KEY.to_string()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
