// File: crates/barchart-core/src/config.rs
// Summary: Chart configuration with TOML loading and strict numeric conversion at the boundary.
// Notes:
// - Numeric options accept either numbers or numeric strings ("100"), mirroring
//   the string-typed constants pages tend to carry. Anything else is rejected.
// - Omitted options fall back to the reference chart.

use std::fmt;
use std::path::Path;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::{ChartError, Result};
use crate::types::{CanvasSpec, BAR_PADDING, DATASET, SCALE_FACTOR, SVG_HEIGHT, SVG_WIDTH};

/// Everything one render pass needs.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub svg_height: f64,
    pub svg_width: f64,
    pub bar_padding: f64,
    pub scale_factor: f64,
    pub dataset: Vec<f64>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            svg_height: SVG_HEIGHT,
            svg_width: SVG_WIDTH,
            bar_padding: BAR_PADDING,
            scale_factor: SCALE_FACTOR,
            dataset: DATASET.to_vec(),
        }
    }
}

impl ChartConfig {
    /// Reference configuration with a different dataset.
    pub fn with_dataset(dataset: impl Into<Vec<f64>>) -> Self {
        Self { dataset: dataset.into(), ..Self::default() }
    }

    pub fn canvas(&self) -> CanvasSpec {
        CanvasSpec::new(self.svg_height, self.svg_width)
    }

    /// Parse a TOML document.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(src).map_err(|e| ChartError::Config(e.message().to_string()))?;
        raw.into_config()
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|source| ChartError::Io { path: path.to_path_buf(), source })?;
        let cfg = Self::from_toml_str(&src)?;
        tracing::debug!(path = %path.display(), bars = cfg.dataset.len(), "loaded chart config");
        Ok(cfg)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    #[serde(alias = "svgHeight")]
    svg_height: Option<Numeric>,
    #[serde(alias = "svgWidth")]
    svg_width: Option<Numeric>,
    #[serde(alias = "barPadding")]
    bar_padding: Option<Numeric>,
    #[serde(alias = "scaleFactor")]
    scale_factor: Option<Numeric>,
    dataset: Option<Vec<Numeric>>,
}

impl RawConfig {
    fn into_config(self) -> Result<ChartConfig> {
        let d = ChartConfig::default();
        let dataset = match self.dataset {
            Some(values) => values
                .into_iter()
                .enumerate()
                .map(|(i, v)| finite(&format!("dataset[{i}]"), v.0))
                .collect::<Result<Vec<_>>>()?,
            None => d.dataset,
        };
        Ok(ChartConfig {
            svg_height: field("svg_height", self.svg_height, d.svg_height)?,
            svg_width: field("svg_width", self.svg_width, d.svg_width)?,
            bar_padding: field("bar_padding", self.bar_padding, d.bar_padding)?,
            scale_factor: field("scale_factor", self.scale_factor, d.scale_factor)?,
            dataset,
        })
    }
}

fn field(name: &str, value: Option<Numeric>, default: f64) -> Result<f64> {
    match value {
        Some(v) => finite(name, v.0),
        None => Ok(default),
    }
}

fn finite(name: &str, v: f64) -> Result<f64> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ChartError::Config(format!("`{name}` must be finite, got {v}")))
    }
}

/// A number given either natively or as a numeric string.
struct Numeric(f64);

impl<'de> Deserialize<'de> for Numeric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct NumericVisitor;

        impl<'de> Visitor<'de> for NumericVisitor {
            type Value = Numeric;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a number or a numeric string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Numeric, E> {
                Ok(Numeric(v as f64))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Numeric, E> {
                Ok(Numeric(v as f64))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Numeric, E> {
                Ok(Numeric(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Numeric, E> {
                v.trim()
                    .parse::<f64>()
                    .map(Numeric)
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(NumericVisitor)
    }
}
