//! JSON-lines output: one object per snapshot or note.

use std::io::{self, Write};

use serde::Serialize;
use sweepgrid_core::DistanceGrid;

use crate::Renderer;

#[derive(Serialize)]
struct Snapshot<'a> {
    heading: &'a str,
    grid: &'a DistanceGrid,
}

#[derive(Serialize)]
struct Note<'a> {
    note: &'a str,
}

/// Writes `{"heading": ..., "grid": ...}` per snapshot and
/// `{"note": ...}` per note, each on its own line.
pub struct JsonRenderer<W: Write> {
    writer: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line<T: Serialize>(&mut self, value: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, value).map_err(io::Error::from)?;
        writeln!(self.writer)
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn snapshot(&mut self, heading: &str, grid: &DistanceGrid) -> io::Result<()> {
        self.line(&Snapshot { heading, grid })
    }

    fn note(&mut self, text: &str) -> io::Result<()> {
        self.line(&Note { note: text })
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
