// File: crates/barchart-core/tests/reference.rs
// Purpose: The reference chart: eleven bars on a 600x100 surface with 1px padding.

use barchart_core::format::number;
use barchart_core::types::{BAR_PADDING, DATASET, SCALE_FACTOR, SVG_HEIGHT, SVG_WIDTH};
use barchart_core::{render, ChartConfig};

#[test]
fn defaults_are_the_reference_instance() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.svg_height, 100.0);
    assert_eq!(cfg.svg_width, 600.0);
    assert_eq!(cfg.bar_padding, 1.0);
    assert_eq!(cfg.scale_factor, 4.0);
    assert_eq!(cfg.dataset, vec![12.0, 19.0, 8.0, 17.0, 12.0, 9.0, 15.0, 12.0, 22.0, 25.0, 17.0]);
    assert_eq!((SVG_HEIGHT, SVG_WIDTH, BAR_PADDING, SCALE_FACTOR), (100.0, 600.0, 1.0, 4.0));
    assert_eq!(DATASET.len(), 11);
}

#[test]
fn reference_bars() {
    let surface = render(&ChartConfig::default());
    assert_eq!(surface.len(), 11);
    assert_eq!(surface.degenerate_count(), 0);

    let b0 = surface.bars[0];
    assert_eq!(b0.x, 0.0);
    assert_eq!(b0.height, 48.0);
    assert_eq!(b0.y, 52.0);
    assert!((b0.width - (600.0 / 11.0 - 1.0)).abs() < 1e-12);

    let b9 = surface.bars[9];
    assert!((b9.x - 490.909_090_909_090_9).abs() < 1e-9);
    assert_eq!(b9.height, 100.0);
    assert_eq!(b9.y, 0.0);
}

#[test]
fn attribute_literals() {
    let surface = render(&ChartConfig::default());
    let b0 = surface.bars[0];
    assert_eq!(number(b0.x), "0");
    assert_eq!(number(b0.y), "52");
    assert_eq!(number(b0.height), "48");
    assert_eq!(number(b0.width), "53.54545454545455");
    assert_eq!(number(surface.bars[9].x), "490.90909090909093");
    assert_eq!(number(-0.0), "0");
    assert_eq!(number(-4.0), "-4");
    assert_eq!(number(f64::NAN), "NaN");
    assert_eq!(number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn extreme_magnitudes_use_exponent_form() {
    assert_eq!(number(1e21), "1e+21");
    assert_eq!(number(-2.5e30), "-2.5e+30");
    assert_eq!(number(1e-7), "1e-7");
    assert_eq!(number(1.5e-7), "1.5e-7");
    assert_eq!(number(999_999_999_999_999_900_000.0), "999999999999999900000");
    assert_eq!(number(0.000001), "0.000001");
}
