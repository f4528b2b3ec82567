use super::*;

#[test]
fn default_config_uses_named_constants() {
    let config = Config::default();
    assert_eq!(config.extract.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    assert_eq!(config.extract.min_candidate_span, DEFAULT_MIN_CANDIDATE_SPAN);
    assert_eq!(config.extract.palette.len(), DEFAULT_PALETTE.len());
    assert_eq!(config.render.theme_storage_key, DEFAULT_THEME_STORAGE_KEY);
    assert_eq!(config.render.chart_script_url, DEFAULT_CHART_SCRIPT_URL);
}

#[test]
fn default_placeholders_are_balanced() {
    let placeholders = PlaceholderConfig::default();
    for data in [
        &placeholders.bar,
        &placeholders.line,
        &placeholders.pie,
        &placeholders.fallback,
    ] {
        assert!(!data.labels.is_empty());
        assert_eq!(data.labels.len(), data.values.len());
    }
}

#[test]
fn placeholder_datasets_differ_per_kind() {
    let placeholders = PlaceholderConfig::default();
    assert_ne!(placeholders.bar, placeholders.line);
    assert_ne!(placeholders.bar, placeholders.pie);
    assert_ne!(placeholders.line, placeholders.pie);
}

#[test]
fn palette_color_cycles() {
    let config = ExtractConfig {
        palette: vec!["#111".to_string(), "#222".to_string()],
        ..ExtractConfig::default()
    };
    assert_eq!(config.palette_color(0), Some("#111"));
    assert_eq!(config.palette_color(1), Some("#222"));
    assert_eq!(config.palette_color(2), Some("#111"));
}

#[test]
fn palette_color_empty_palette() {
    let config = ExtractConfig {
        palette: Vec::new(),
        ..ExtractConfig::default()
    };
    assert_eq!(config.palette_color(3), None);
}

#[test]
fn empty_toml_yields_defaults() {
    let config: Config = toml::from_str("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config: Config = toml::from_str(
        r#"
[extract]
min_candidate_span = 10

[render]
theme_storage_key = "artifact-theme"
"#,
    )
    .unwrap();

    assert_eq!(config.extract.min_candidate_span, 10);
    assert_eq!(config.extract.max_input_bytes, DEFAULT_MAX_INPUT_BYTES);
    assert_eq!(config.render.theme_storage_key, "artifact-theme");
    assert_eq!(config.render.chart_script_url, DEFAULT_CHART_SCRIPT_URL);
}

#[test]
fn placeholder_override_from_toml() {
    let config: Config = toml::from_str(
        r#"
[extract.placeholders.pie]
labels = ["Yes", "No"]
values = [70, 30]
"#,
    )
    .unwrap();

    assert_eq!(config.extract.placeholders.pie.labels, vec!["Yes", "No"]);
    assert_eq!(config.extract.placeholders.pie.values, vec![70.0, 30.0]);
    assert_eq!(
        config.extract.placeholders.bar,
        PlaceholderConfig::default().bar
    );
}

#[test]
fn config_round_trips_through_toml() {
    let config = Config::default();
    let text = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&text).unwrap();
    assert_eq!(parsed, config);
}
