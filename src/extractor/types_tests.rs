use super::*;

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[test]
fn chart_kind_from_tag() {
    assert_eq!(ChartKind::from_tag("BarChart"), Some(ChartKind::Bar));
    assert_eq!(ChartKind::from_tag("Bar"), Some(ChartKind::Bar));
    assert_eq!(ChartKind::from_tag("LineChart"), Some(ChartKind::Line));
    assert_eq!(ChartKind::from_tag("Line"), Some(ChartKind::Line));
    assert_eq!(ChartKind::from_tag("PieChart"), Some(ChartKind::Pie));
    assert_eq!(ChartKind::from_tag("Pie"), Some(ChartKind::Pie));
    assert_eq!(ChartKind::from_tag("AreaChart"), None);
    assert_eq!(ChartKind::from_tag("barchart"), None);
}

#[test]
fn chart_kind_inferred_from_name() {
    assert_eq!(ChartKind::infer_from_name("revenueBarData"), ChartKind::Bar);
    assert_eq!(ChartKind::infer_from_name("PIE_SLICES"), ChartKind::Pie);
    assert_eq!(ChartKind::infer_from_name("timelineSeries"), ChartKind::Line);
    assert_eq!(ChartKind::infer_from_name("monthlyTotals"), ChartKind::Bar);
}

#[test]
fn chart_kind_inference_prefers_bar_over_pie_and_line() {
    // "barPieLine" contains every keyword; bar is checked first
    assert_eq!(ChartKind::infer_from_name("barPieLine"), ChartKind::Bar);
    assert_eq!(ChartKind::infer_from_name("pipeline"), ChartKind::Line);
    assert_eq!(ChartKind::infer_from_name("pieLine"), ChartKind::Pie);
}

#[test]
fn chart_kind_strings() {
    assert_eq!(ChartKind::Bar.as_str(), "bar");
    assert_eq!(ChartKind::Line.as_str(), "line");
    assert_eq!(ChartKind::Pie.display_name(), "Pie");
}

#[test]
fn series_pads_missing_colors() {
    let series = Series::new("s", vec![1.0, 2.0, 3.0], vec![Some("#fff".to_string())]);
    assert_eq!(series.colors, vec![Some("#fff".to_string()), None, None]);
    assert!(series.has_colors());
}

#[test]
fn series_truncates_extra_colors() {
    let series = Series::new(
        "s",
        vec![1.0],
        vec![Some("#a".to_string()), Some("#b".to_string())],
    );
    assert_eq!(series.colors.len(), 1);
}

#[test]
fn series_without_colors() {
    let series = Series::new("s", vec![1.0, 2.0], Vec::new());
    assert!(!series.has_colors());
}

#[test]
fn declaration_accepts_balanced_shape() {
    let declaration = ChartDeclaration::new(
        "sales",
        ChartKind::Bar,
        labels(&["A", "B"]),
        vec![Series::new("sales", vec![1.0, 2.0], Vec::new())],
    );
    assert!(declaration.is_some());
}

#[test]
fn declaration_rejects_empty_labels() {
    let declaration = ChartDeclaration::new(
        "empty",
        ChartKind::Bar,
        Vec::new(),
        vec![Series::new("s", Vec::new(), Vec::new())],
    );
    assert!(declaration.is_none());
}

#[test]
fn declaration_rejects_missing_series() {
    let declaration = ChartDeclaration::new("none", ChartKind::Pie, labels(&["A"]), Vec::new());
    assert!(declaration.is_none());
}

#[test]
fn declaration_rejects_length_mismatch() {
    let declaration = ChartDeclaration::new(
        "bad",
        ChartKind::Line,
        labels(&["A", "B", "C"]),
        vec![Series::new("s", vec![1.0, 2.0], Vec::new())],
    );
    assert!(declaration.is_none());
}

#[test]
fn stage_serializes_kebab_case() {
    let json = serde_json::to_string(&Stage::UsageLinked).unwrap();
    assert_eq!(json, "\"usage-linked\"");
    assert_eq!(Stage::TerminalFallback.as_str(), "terminal-fallback");
}

#[test]
fn declaration_serializes_kind_lowercase() {
    let declaration = ChartDeclaration::new(
        "t",
        ChartKind::Pie,
        labels(&["A"]),
        vec![Series::new("t", vec![1.0], Vec::new())],
    )
    .unwrap();
    let json = serde_json::to_value(&declaration).unwrap();
    assert_eq!(json["kind"], "pie");
    assert_eq!(json["labels"][0], "A");
}
