/// Commented configuration file written by `artifact-html init`.
///
/// Every value shown matches the built-in default, so an untouched template loads to
/// `Config::default()`.
#[must_use]
pub fn generate_config_template() -> String {
    r##"# artifact-html configuration file

[extract]
# Input beyond this many bytes is ignored when scanning code for chart data
max_input_bytes = 1048576

# Arrays whose source text is shorter than this are skipped by the
# naming heuristic (they rarely hold real chart data)
min_candidate_span = 50

# Colors assigned to data points that do not carry their own color
palette = ["#6366f1", "#22c55e", "#eab308", "#ef4444", "#3b82f6", "#a855f7", "#14b8a6", "#f97316"]

# Illustrative datasets shown when a chart tag is present but no data
# could be recovered
[extract.placeholders.bar]
labels = ["Q1", "Q2", "Q3", "Q4"]
values = [120.0, 190.0, 150.0, 210.0]

[extract.placeholders.line]
labels = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]
values = [30.0, 45.0, 38.0, 60.0, 55.0, 72.0]

[extract.placeholders.pie]
labels = ["Alpha", "Beta", "Gamma"]
values = [45.0, 30.0, 25.0]

# Dataset behind the sample bar and pie charts used when nothing else matched
[extract.placeholders.fallback]
labels = ["Category A", "Category B", "Category C", "Category D"]
values = [40.0, 25.0, 20.0, 15.0]

[render]
chart_script_url = "https://cdn.jsdelivr.net/npm/chart.js@4.4.2/dist/chart.umd.min.js"
datalabels_script_url = "https://cdn.jsdelivr.net/npm/chartjs-plugin-datalabels@2.2.0/dist/chartjs-plugin-datalabels.min.js"

# localStorage key remembering the viewer's light/dark choice
theme_storage_key = "theme"
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, validate_config_semantics};

    #[test]
    fn template_matches_defaults() {
        let config: Config = toml::from_str(&generate_config_template()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn template_passes_validation() {
        let config: Config = toml::from_str(&generate_config_template()).unwrap();
        assert!(validate_config_semantics(&config).is_ok());
    }
}
