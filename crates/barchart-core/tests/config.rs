// File: crates/barchart-core/tests/config.rs
// Purpose: TOML configuration loading and boundary conversion.

use barchart_core::{ChartConfig, ChartError};

#[test]
fn empty_document_is_reference() {
    assert_eq!(ChartConfig::from_toml_str("").unwrap(), ChartConfig::default());
}

#[test]
fn numbers_and_numeric_strings() {
    let cfg = ChartConfig::from_toml_str(
        r#"
        svg_height = "200"
        svg_width = 400
        bar_padding = 0.5
        scale_factor = "2.5"
        dataset = [1, "2", 3.5]
        "#,
    )
    .unwrap();
    assert_eq!(cfg.svg_height, 200.0);
    assert_eq!(cfg.svg_width, 400.0);
    assert_eq!(cfg.bar_padding, 0.5);
    assert_eq!(cfg.scale_factor, 2.5);
    assert_eq!(cfg.dataset, vec![1.0, 2.0, 3.5]);
}

#[test]
fn camel_case_names_are_accepted() {
    let cfg = ChartConfig::from_toml_str("svgHeight = '100'\nsvgWidth = '600'\nbarPadding = '1'").unwrap();
    assert_eq!(cfg, ChartConfig::default());
}

#[test]
fn non_numeric_values_are_rejected() {
    for src in ["svg_height = \"tall\"", "dataset = [1, true]", "bar_padding = []"] {
        let err = ChartConfig::from_toml_str(src).unwrap_err();
        assert!(matches!(err, ChartError::Config(_)), "{src}: {err}");
    }
}

#[test]
fn non_finite_values_are_rejected() {
    for src in ["svg_width = nan", "dataset = [1, inf]", "scale_factor = \"-inf\""] {
        let err = ChartConfig::from_toml_str(src).unwrap_err();
        assert!(err.to_string().contains("finite"), "{src}: {err}");
    }
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(matches!(ChartConfig::from_toml_str("colour = 'red'"), Err(ChartError::Config(_))));
}

#[test]
fn load_reads_file() {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("chart.toml");
    std::fs::write(&path, "dataset = [4, 8]\n").unwrap();
    let cfg = ChartConfig::load(&path).expect("load config");
    assert_eq!(cfg.dataset, vec![4.0, 8.0]);

    let err = ChartConfig::load(dir.join("missing.toml")).unwrap_err();
    assert!(matches!(err, ChartError::Io { .. }));
}
