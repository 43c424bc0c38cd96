use std::io::{self, Write};

use sweepgrid_core::DistanceGrid;

use crate::Renderer;

/// Plain-text dump: a heading line, then every padded row as `[a, b, ...]`.
pub struct TextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn snapshot(&mut self, heading: &str, grid: &DistanceGrid) -> io::Result<()> {
        writeln!(self.writer, "{heading}")?;
        for y in 0..grid.rows() + 2 {
            let Some(row) = grid.row(y) else {
                break;
            };
            let values: Vec<String> = row.iter().map(i32::to_string).collect();
            writeln!(self.writer, "[{}]", values.join(", "))?;
        }
        Ok(())
    }

    fn note(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
