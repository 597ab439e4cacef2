// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports the bar chart config, geometry, render pass and document API.

pub mod chart;
pub mod config;
pub mod dom;
pub mod error;
pub mod format;
pub mod geometry;
pub mod selection;
pub mod types;

pub use chart::{render, render_into, RenderedSurface};
pub use config::ChartConfig;
pub use dom::{Document, NodeId, Selector};
pub use error::ChartError;
pub use geometry::{layout_bars, BarGeometry};
pub use selection::{AttrValue, Selection};
pub use types::CanvasSpec;
