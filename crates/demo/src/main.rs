// File: crates/demo/src/main.rs
// Summary: Page-ready adapter: load config, render once, mount under the container, write HTML/SVG (and PNG).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use barchart_core::types::DEFAULT_SELECTOR;
use barchart_core::{render, ChartConfig, Document, Selector};
use barchart_render_skia::{RasterOptions, SkiaRenderer};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Render a static bar chart into an HTML page")]
struct Args {
    /// TOML chart config; the reference chart is used when omitted
    #[arg(long, env = "BARCHART_CONFIG")]
    config: Option<PathBuf>,

    /// Container the surface is mounted under
    #[arg(long, default_value = DEFAULT_SELECTOR)]
    selector: String,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Also rasterize the chart to PNG
    #[arg(long)]
    png: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run(&Args::parse())?;
    Ok(())
}

/// One render pass: returns the paths written under `args.out`.
fn run(args: &Args) -> Result<Vec<PathBuf>> {
    let config = match &args.config {
        Some(path) => ChartConfig::load(path).with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };

    let surface = render(&config);
    tracing::info!(
        bars = surface.len(),
        width = config.svg_width,
        height = config.svg_height,
        degenerate = surface.degenerate_count(),
        "rendered chart"
    );

    let mut page = page_for(&args.selector)?;
    surface
        .mount(&mut page, &args.selector)
        .with_context(|| format!("mounting under '{}'", args.selector))?;

    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    let mut written = vec![
        write(&args.out.join("index.html"), &page.to_html())?,
        write(&args.out.join("chart.svg"), &surface.to_svg())?,
    ];

    if args.png {
        let out_png = args.out.join("chart.png");
        SkiaRenderer::new()
            .render_png(&surface, &RasterOptions::default(), &out_png)
            .with_context(|| format!("rasterizing {}", out_png.display()))?;
        tracing::info!(path = %out_png.display(), "wrote png");
        written.push(out_png);
    }
    Ok(written)
}

/// Page whose container matches `selector` (`span#graph` gets a `span`, `.chart` a `div.chart`).
fn page_for(selector: &str) -> Result<Document> {
    let parsed = Selector::parse(selector).with_context(|| format!("invalid --selector '{selector}'"))?;
    Ok(Document::page_for(&parsed))
}

fn write(path: &Path, contents: &str) -> Result<PathBuf> {
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["barchart-demo"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("parse args")
    }

    #[test]
    fn selector_maps_to_container() {
        for (sel, tag) in [("#graph", "div"), ("div#graph", "div"), ("span#graph", "span"), ("div.chart", "div"), (".chart", "div")] {
            let doc = page_for(sel).expect("page");
            let node = doc.query(sel).unwrap().unwrap_or_else(|| panic!("{sel} has no container"));
            assert_eq!(doc.tag(node), tag, "selector {sel}");
        }
        assert!(page_for("div > p").is_err());
    }

    #[test]
    fn writes_page_and_svg() {
        let out = PathBuf::from("target/test_out/demo_default");
        let _ = std::fs::remove_dir_all(&out);
        let written = run(&args(&["--out", out.to_str().unwrap(), "--selector", "span#graph"])).expect("run");
        assert_eq!(written, vec![out.join("index.html"), out.join("chart.svg")]);

        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("<span id=\"graph\">"));
        assert_eq!(html.matches("<rect ").count(), 11);
        let svg = std::fs::read_to_string(out.join("chart.svg")).unwrap();
        assert!(svg.starts_with("<svg height=\"100\" width=\"600\" xmlns="));
        assert!(!out.join("chart.png").exists());
    }

    #[test]
    fn uses_config_file_and_png_flag() {
        let out = PathBuf::from("target/test_out/demo_config");
        std::fs::create_dir_all(&out).unwrap();
        let cfg = out.join("chart.toml");
        std::fs::write(&cfg, "dataset = [5, 10, 15]\n").unwrap();
        let written = run(&args(&["--config", cfg.to_str().unwrap(), "--out", out.to_str().unwrap(), "--png"])).expect("run");
        assert_eq!(written.len(), 3);
        let png = std::fs::read(out.join("chart.png")).unwrap();
        assert!(png.starts_with(&[137, 80, 78, 71]), "should be PNG header");
        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert_eq!(html.matches("<rect ").count(), 3);
    }

    #[test]
    fn bad_config_fails() {
        let out = PathBuf::from("target/test_out/demo_bad");
        std::fs::create_dir_all(&out).unwrap();
        let cfg = out.join("bad.toml");
        std::fs::write(&cfg, "svg_width = \"wide\"\n").unwrap();
        let err = run(&args(&["--config", cfg.to_str().unwrap(), "--out", out.to_str().unwrap()])).unwrap_err();
        assert!(format!("{err:#}").contains("invalid configuration"));
    }
}
