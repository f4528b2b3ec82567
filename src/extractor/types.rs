use serde::Serialize;

/// Chart family a declaration renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    /// Chart.js `type` value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Line => "line",
            Self::Pie => "pie",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Line => "Line",
            Self::Pie => "Pie",
        }
    }

    /// Map a component tag name (`BarChart`, `Pie`, ...) to its chart family.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "BarChart" | "Bar" => Some(Self::Bar),
            "LineChart" | "Line" => Some(Self::Line),
            "PieChart" | "Pie" => Some(Self::Pie),
            _ => None,
        }
    }

    /// Guess the family from an identifier: `bar`, then `pie`, then `line`, else `Bar`.
    #[must_use]
    pub fn infer_from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        if lower.contains("bar") {
            Self::Bar
        } else if lower.contains("pie") {
            Self::Pie
        } else if lower.contains("line") {
            Self::Line
        } else {
            Self::Bar
        }
    }
}

/// One data series of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub values: Vec<f64>,
    /// Per-point colors; `None` leaves the choice to the chart library.
    pub colors: Vec<Option<String>>,
}

impl Series {
    /// Create a series; `colors` is padded with `None` or truncated to match `values`.
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<f64>, mut colors: Vec<Option<String>>) -> Self {
        colors.resize(values.len(), None);
        Self {
            label: label.into(),
            values,
            colors,
        }
    }

    /// Whether any point carries an explicit color.
    #[must_use]
    pub fn has_colors(&self) -> bool {
        self.colors.iter().any(Option::is_some)
    }
}

/// A renderer-agnostic description of one chart panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDeclaration {
    pub title: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartDeclaration {
    /// Build a declaration, or `None` if it would break the shape invariant: at least one
    /// label, at least one series, and every series exactly as long as `labels`.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        kind: ChartKind,
        labels: Vec<String>,
        series: Vec<Series>,
    ) -> Option<Self> {
        let declaration = Self {
            title: title.into(),
            kind,
            labels,
            series,
        };
        declaration.is_well_formed().then_some(declaration)
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.labels.is_empty()
            && !self.series.is_empty()
            && self.series.iter().all(|s| {
                s.values.len() == self.labels.len() && s.colors.len() == self.labels.len()
            })
    }
}

/// Which link of the fallback chain produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Arrays referenced as `data` of a chart tag.
    UsageLinked,
    /// Sizeable arrays, kind guessed from the identifier.
    NamingHeuristic,
    /// Chart tags with no recoverable data.
    TagPresence,
    /// Fixed sample charts.
    TerminalFallback,
}

impl Stage {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UsageLinked => "usage-linked",
            Self::NamingHeuristic => "naming-heuristic",
            Self::TagPresence => "tag-presence",
            Self::TerminalFallback => "terminal-fallback",
        }
    }
}

/// Outcome of running the fallback chain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extraction {
    pub stage: Stage,
    pub declarations: Vec<ChartDeclaration>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
