use super::*;
use crate::extractor::{ArrayScanner, TagScanner};

fn run_stage(stage: &dyn ExtractionStage, code: &str) -> Vec<ChartDeclaration> {
    run_stage_with(stage, code, &ExtractConfig::default())
}

fn run_stage_with(
    stage: &dyn ExtractionStage,
    code: &str,
    config: &ExtractConfig,
) -> Vec<ChartDeclaration> {
    let index = SourceIndex::build(code, &ArrayScanner::new(), &TagScanner::new());
    stage.extract(&index, config)
}

#[test]
fn chain_order() {
    let stages: Vec<_> = default_chain().iter().map(|s| s.stage()).collect();
    assert_eq!(
        stages,
        vec![
            Stage::UsageLinked,
            Stage::NamingHeuristic,
            Stage::TagPresence,
            Stage::TerminalFallback,
        ]
    );
}

// =============================================================================
// Usage-linked
// =============================================================================

#[test]
fn usage_linked_basic() {
    let code = r#"
const salesData = [{name:"A",value:1},{name:"B",value:2}];
<BarChart data={salesData}></BarChart>
"#;
    let declarations = run_stage(&UsageLinked, code);

    assert_eq!(declarations.len(), 1);
    let chart = &declarations[0];
    assert_eq!(chart.title, "sales");
    assert_eq!(chart.kind, ChartKind::Bar);
    assert_eq!(chart.labels, vec!["A", "B"]);
    assert_eq!(chart.series.len(), 1);
    assert_eq!(chart.series[0].values, vec![1.0, 2.0]);
    assert_eq!(chart.series[0].colors, vec![None, None]);
}

#[test]
fn usage_linked_kind_follows_tag_not_name() {
    let code = r#"
const barData = [{ name: 'x', value: 3 }];
<LineChart data="barData" />
"#;
    let declarations = run_stage(&UsageLinked, code);

    assert_eq!(declarations[0].kind, ChartKind::Line);
}

#[test]
fn usage_linked_skips_unreferenced_arrays() {
    let code = r"
const unused = [{ name: 'a', value: 1 }];
const pieData = [{ name: 'b', value: 2 }];
<PieChart><Pie data={pieData} /></PieChart>
";
    let declarations = run_stage(&UsageLinked, code);

    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations[0].title, "pie");
    assert_eq!(declarations[0].kind, ChartKind::Pie);
}

#[test]
fn usage_linked_reads_field_aliases_and_colors() {
    let code = r"
const items = [
  { label: 'One', data: 5, fill: '#111' },
  { name: 'Two', value: '7', color: '#222' },
  { other: true },
];
<BarChart data={items} />
";
    let declarations = run_stage(&UsageLinked, code);
    let chart = &declarations[0];

    assert_eq!(chart.labels, vec!["One", "Two", ""]);
    assert_eq!(chart.series[0].values, vec![5.0, 7.0, 0.0]);
    assert_eq!(
        chart.series[0].colors,
        vec![Some("#111".to_string()), Some("#222".to_string()), None]
    );
}

#[test]
fn usage_linked_data_key_series() {
    let code = r##"
const monthlyData = [
  { month: 'Jan', sales: 10, costs: 4 },
  { month: 'Feb', sales: 12 },
];
<BarChart data={monthlyData}>
  <XAxis dataKey="month" />
  <Bar dataKey="sales" fill="#8884d8" />
  <Bar dataKey="costs" fill="#82ca9d" />
  <Bar dataKey="sales" />
</BarChart>
"##;
    let declarations = run_stage(&UsageLinked, code);
    let chart = &declarations[0];

    assert_eq!(chart.title, "monthly");
    assert_eq!(chart.labels, vec!["Jan", "Feb"]);
    assert_eq!(chart.series.len(), 2);
    assert_eq!(chart.series[0].label, "sales");
    assert_eq!(chart.series[0].values, vec![10.0, 12.0]);
    assert_eq!(chart.series[1].label, "costs");
    assert_eq!(chart.series[1].values, vec![4.0, 0.0]);
    assert_eq!(
        chart.series[1].colors,
        vec![Some("#82ca9d".to_string()), Some("#82ca9d".to_string())]
    );
}

#[test]
fn usage_linked_caps_series_count() {
    let bars: String = (0..MAX_LINKED_SERIES + 8)
        .map(|i| format!("  <Bar dataKey=\"k{i}\" />\n"))
        .collect();
    let code = format!("const wideData = [{{ k0: 1 }}];\n<BarChart data={{wideData}}>\n{bars}</BarChart>\n");
    let declarations = run_stage(&UsageLinked, &code);

    assert_eq!(declarations[0].series.len(), MAX_LINKED_SERIES);
    assert_eq!(declarations[0].series[0].values, vec![1.0]);
}

#[test]
fn usage_linked_ignores_nested_container_series() {
    let code = r#"
const outerData = [{ a: 1, b: 2 }];
<BarChart data={outerData}>
  <Bar dataKey="a" />
  <LineChart><Line dataKey="b" /></LineChart>
</BarChart>
"#;
    let declarations = run_stage(&UsageLinked, code);

    let labels: Vec<_> = declarations[0].series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["a"]);
}

#[test]
fn usage_linked_series_tag_with_own_keys() {
    let code = r##"
const shareData = [{ browser: 'Firefox', users: 30 }, { browser: 'Chrome', users: 60 }];
<PieChart>
  <Pie data={shareData} dataKey="users" nameKey="browser" stroke="#000" />
</PieChart>
"##;
    let declarations = run_stage(&UsageLinked, code);
    let chart = &declarations[0];

    assert_eq!(chart.kind, ChartKind::Pie);
    assert_eq!(chart.labels, vec!["Firefox", "Chrome"]);
    assert_eq!(chart.series[0].label, "users");
    assert_eq!(chart.series[0].values, vec![30.0, 60.0]);
    assert_eq!(chart.series[0].colors[0].as_deref(), Some("#000"));
}

#[test]
fn usage_linked_empty_array_is_omitted() {
    let code = "const emptyData = [];\n<BarChart data={emptyData} />";
    assert!(run_stage(&UsageLinked, code).is_empty());
}

#[test]
fn usage_linked_discovery_order() {
    let code = r"
const first = [1, 2];
const second = ['a'];
<PieChart data={second} />
<BarChart data={first} />
";
    let titles: Vec<_> = run_stage(&UsageLinked, code)
        .into_iter()
        .map(|d| d.title)
        .collect();

    assert_eq!(titles, vec!["first", "second"]);
}

// =============================================================================
// Naming heuristic
// =============================================================================

#[test]
fn naming_heuristic_respects_span_threshold() {
    let code = r"
const tiny = [1, 2];
const revenueByRegion = [{ name: 'North', value: 10 }, { name: 'South', value: 20 }];
";
    let declarations = run_stage(&NamingHeuristic, code);

    assert_eq!(declarations.len(), 1);
    assert_eq!(declarations[0].title, "revenueByRegion");
    assert_eq!(declarations[0].kind, ChartKind::Bar);
}

#[test]
fn naming_heuristic_kind_order() {
    let config = ExtractConfig {
        min_candidate_span: 0,
        ..ExtractConfig::default()
    };
    let code = "const pieBarData = [1];\nconst linePie = [2];\nconst trendLine = [3];\nconst misc = [4];\n";
    let kinds: Vec<_> = run_stage_with(&NamingHeuristic, code, &config)
        .into_iter()
        .map(|d| d.kind)
        .collect();

    assert_eq!(
        kinds,
        vec![ChartKind::Bar, ChartKind::Pie, ChartKind::Line, ChartKind::Bar]
    );
}

#[test]
fn naming_heuristic_palette_fallback() {
    let config = ExtractConfig {
        min_candidate_span: 0,
        palette: vec!["#a".to_string(), "#b".to_string()],
        ..ExtractConfig::default()
    };
    let code = "const points = [{ value: 1 }, { value: 2, backgroundColor: '#z' }, { value: 3 }];";
    let declarations = run_stage_with(&NamingHeuristic, code, &config);
    let colors = &declarations[0].series[0].colors;

    assert_eq!(
        colors,
        &vec![
            Some("#a".to_string()),
            Some("#z".to_string()),
            Some("#a".to_string()),
        ]
    );
}

#[test]
fn naming_heuristic_bare_scalars() {
    let config = ExtractConfig {
        min_candidate_span: 0,
        ..ExtractConfig::default()
    };
    let code = "const mixed = ['Label', 4, someCall()];";
    let declarations = run_stage_with(&NamingHeuristic, code, &config);
    let chart = &declarations[0];

    assert_eq!(chart.labels, vec!["Label", "", ""]);
    assert_eq!(chart.series[0].values, vec![0.0, 4.0, 0.0]);
}

// =============================================================================
// Tag presence
// =============================================================================

#[test]
fn tag_presence_one_per_closed_container() {
    let code = "<PieChart></PieChart>\n<BarChart />\n<LineChart>\n<PieChart>\n</PieChart>";
    let declarations = run_stage(&TagPresence, code);

    let summary: Vec<_> = declarations
        .iter()
        .map(|d| (d.kind, d.title.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (ChartKind::Pie, "Pie Chart"),
            (ChartKind::Bar, "Bar Chart"),
            (ChartKind::Pie, "Pie Chart 2"),
        ]
    );
}

#[test]
fn tag_presence_uses_kind_placeholder() {
    let declarations = run_stage(&TagPresence, "<LineChart></LineChart>");
    let placeholder = &ExtractConfig::default().placeholders.line;

    assert_eq!(declarations[0].labels, placeholder.labels);
    assert_eq!(declarations[0].series[0].values, placeholder.values);
    assert_eq!(declarations[0].series[0].label, SAMPLE_SERIES_LABEL);
}

#[test]
fn tag_presence_ignores_series_tags() {
    assert!(run_stage(&TagPresence, "<Bar dataKey=\"x\" />").is_empty());
}

#[test]
fn tag_presence_truncates_mismatched_placeholder() {
    let mut config = ExtractConfig::default();
    config.placeholders.bar = PlaceholderData::new(&["a", "b", "c"], &[1.0, 2.0]);
    let declarations = run_stage_with(&TagPresence, "<BarChart />", &config);

    assert_eq!(declarations[0].labels, vec!["a", "b"]);
    assert!(declarations[0].is_well_formed());
}

// =============================================================================
// Terminal fallback
// =============================================================================

#[test]
fn terminal_fallback_bar_then_pie() {
    let declarations = run_stage(&TerminalFallback, "");

    let kinds: Vec<_> = declarations.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![ChartKind::Bar, ChartKind::Pie]);
    let fallback = &ExtractConfig::default().placeholders.fallback;
    assert_eq!(declarations[0].labels, fallback.labels);
}

#[test]
fn terminal_fallback_survives_empty_dataset() {
    let mut config = ExtractConfig::default();
    config.placeholders.fallback = PlaceholderData::new(&[], &[]);
    let declarations = run_stage_with(&TerminalFallback, "", &config);

    assert_eq!(declarations.len(), 2);
    assert!(declarations.iter().all(ChartDeclaration::is_well_formed));
}
