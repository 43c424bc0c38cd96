//! Renderers turning a [`DistanceGrid`] into text, an HTML/SVG document,
//! or JSON lines.
//!
//! The solver never prints; callers drive a [`Renderer`] themselves, once
//! at the end or after every sweep for an animation-like sequence:
//!
//! ```
//! use sweepgrid_core::{DistanceGrid, Point};
//! use sweepgrid_render::{Renderer, TextRenderer};
//!
//! let grid = DistanceGrid::open(1, 2, Point::new(1, 1)).unwrap();
//! let mut out = TextRenderer::new(Vec::new());
//! out.snapshot("Starting", &grid).unwrap();
//! let text = String::from_utf8(out.into_inner()).unwrap();
//! assert_eq!(text, "Starting\n[4, 4, 4, 4]\n[4, 0, 3, 4]\n[4, 4, 4, 4]\n");
//! ```

use std::io::{self, Write};

use sweepgrid_core::DistanceGrid;

mod json;
mod svg;
mod text;

pub use json::JsonRenderer;
pub use svg::SvgRenderer;
pub use text::TextRenderer;

/// A sink for grid snapshots.
///
/// Call [`begin`](Self::begin) once, then any number of
/// [`snapshot`](Self::snapshot) and [`note`](Self::note) calls, then
/// [`finish`](Self::finish).
pub trait Renderer {
    /// Write any document preamble.
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Render the grid (and its directions, when present) under `heading`.
    fn snapshot(&mut self, heading: &str, grid: &DistanceGrid) -> io::Result<()>;

    /// Render a free-form line such as a timing summary.
    fn note(&mut self, text: &str) -> io::Result<()>;

    /// Close the document and flush.
    fn finish(&mut self) -> io::Result<()>;
}

/// Output flavours understood by [`renderer_for`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// One line per padded row of raw values.
    #[default]
    Text,
    /// HTML document with one inline SVG per snapshot.
    Svg,
    /// One JSON object per line.
    Json,
}

/// Box the renderer for `format` around `writer`.
pub fn renderer_for<'a, W: Write + 'a>(format: OutputFormat, writer: W) -> Box<dyn Renderer + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextRenderer::new(writer)),
        OutputFormat::Svg => Box::new(SvgRenderer::new(writer)),
        OutputFormat::Json => Box::new(JsonRenderer::new(writer)),
    }
}
