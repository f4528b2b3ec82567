use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate_config_semantics(&Config::default()).is_ok());
}

#[test]
fn zero_max_input_bytes_rejected() {
    let mut config = Config::default();
    config.extract.max_input_bytes = 0;

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("max_input_bytes"));
}

#[test]
fn empty_palette_rejected() {
    let mut config = Config::default();
    config.extract.palette.clear();

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("palette"));
}

#[test]
fn blank_palette_entries_rejected() {
    let mut config = Config::default();
    config.extract.palette = vec![String::new(), "  ".to_string()];

    assert!(validate_config_semantics(&config).is_err());
}

#[test]
fn unbalanced_placeholder_rejected() {
    let mut config = Config::default();
    config.extract.placeholders.line.values.pop();

    let err = validate_config_semantics(&config).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("extract.placeholders.line"));
    assert!(message.contains("labels but"));
}

#[test]
fn empty_placeholder_rejected() {
    let mut config = Config::default();
    config.extract.placeholders.fallback = PlaceholderData::new(&[], &[]);

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("fallback"));
}

#[test]
fn non_finite_placeholder_value_rejected() {
    let mut config = Config::default();
    config.extract.placeholders.pie.values[0] = f64::NAN;

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("non-finite"));
}

#[test]
fn blank_storage_key_rejected() {
    let mut config = Config::default();
    config.render.theme_storage_key = "   ".to_string();

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("theme_storage_key"));
}

#[test]
fn blank_script_url_rejected() {
    let mut config = Config::default();
    config.render.datalabels_script_url = String::new();

    let err = validate_config_semantics(&config).unwrap_err();
    assert!(err.to_string().contains("datalabels_script_url"));
}
