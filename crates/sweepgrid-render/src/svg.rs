//! HTML document with one inline SVG drawing per snapshot.
//!
//! Each padded cell is a `STEP`×`STEP` rectangle classed by its
//! [`CellKind`], labelled with its value, and, when a direction is
//! recorded, marked with a small triangle on the side or corner facing the
//! neighbour that produced the value.

use std::io::{self, Write};

use sweepgrid_core::{CellKind, Direction, DistanceGrid, Point};

use crate::Renderer;

const X_START: i32 = 20;
const Y_START: i32 = 40;
const STEP: i32 = 40;
const HALF: i32 = STEP / 2;

const STYLE: &str = "\
path { fill: green; stroke-width: 1; stroke: green; }
rect.blocked { fill: black; stroke-width: 1; stroke: black; }
rect.destination { fill: yellow; stroke-width: 1; stroke: black; }
rect.empty { fill: white; stroke-width: 1; stroke: black; }
rect.full { fill: cyan; stroke-width: 1; stroke: black; }
text.path { fill: red; text-anchor: middle; }";

/// CSS class for a cell category.
fn class(kind: CellKind) -> &'static str {
    match kind {
        CellKind::Destination => "destination",
        CellKind::Reached => "full",
        CellKind::Empty => "empty",
        CellKind::Blocked => "blocked",
    }
}

/// Triangle corners, relative to the cell's top-left corner.
fn arrow(dir: Direction) -> [Point; 3] {
    let p = Point::new;
    match dir {
        Direction::NW => [p(4, 4), p(10, 4), p(4, 10)],
        Direction::N => [p(HALF, 2), p(HALF + 4, 6), p(HALF - 4, 6)],
        Direction::NE => [p(STEP - 4, 4), p(STEP - 10, 4), p(STEP - 4, 10)],
        Direction::W => [p(2, HALF), p(6, HALF - 4), p(6, HALF + 4)],
        Direction::E => [p(STEP - 2, HALF), p(STEP - 6, HALF - 4), p(STEP - 6, HALF + 4)],
        Direction::SW => [p(4, STEP - 4), p(10, STEP - 4), p(4, STEP - 10)],
        Direction::S => [p(HALF, STEP - 2), p(HALF + 4, STEP - 6), p(HALF - 4, STEP - 6)],
        Direction::SE => [
            p(STEP - 4, STEP - 4),
            p(STEP - 10, STEP - 4),
            p(STEP - 4, STEP - 10),
        ],
    }
}

/// HTML/SVG renderer.
pub struct SvgRenderer<W: Write> {
    writer: W,
}

impl<W: Write> SvgRenderer<W> {
    /// Wrap a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_cell(&mut self, grid: &DistanceGrid, cell: Point, origin: Point) -> io::Result<()> {
        let (Some(value), Some(kind)) = (grid.at(cell), grid.kind_at(cell)) else {
            return Ok(());
        };
        let Point { x, y } = origin;
        writeln!(
            self.writer,
            r#"<rect x="{x}" y="{y}" height="{STEP}" width="{STEP}" class="{}"/>"#,
            class(kind)
        )?;
        writeln!(
            self.writer,
            r#"<text x="{}" y="{}" class="path">{value}</text>"#,
            x + HALF,
            y + 25
        )?;
        if let Some(dir) = grid.direction_at(cell) {
            let [a, b, c] = arrow(dir).map(|d| origin + d);
            writeln!(
                self.writer,
                r#"<path d="M{} {} L{} {} L{} {} Z" />"#,
                a.x, a.y, b.x, b.y, c.x, c.y
            )?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for SvgRenderer<W> {
    fn begin(&mut self) -> io::Result<()> {
        writeln!(self.writer, "<html>")?;
        writeln!(self.writer, "  <head>")?;
        writeln!(self.writer, "    <style>")?;
        writeln!(self.writer, "{STYLE}")?;
        writeln!(self.writer, "    </style>")?;
        writeln!(self.writer, "  </head>")?;
        writeln!(self.writer, "  <body>")
    }

    fn snapshot(&mut self, heading: &str, grid: &DistanceGrid) -> io::Result<()> {
        let size = grid.bounds().size();
        writeln!(
            self.writer,
            r#"<p><svg width="{}" height="{}">"#,
            size.x * STEP + STEP * 2,
            size.y * STEP + STEP
        )?;
        writeln!(self.writer, r#"<text x="5" y="25">(0,0)</text>"#)?;
        writeln!(
            self.writer,
            r#"<text x="{}" y="25" style="text-anchor: end">{}</text>"#,
            size.x * STEP + (STEP - 10),
            escape(heading)
        )?;
        for cell in grid.bounds() {
            let origin = Point::new(X_START + cell.x * STEP, Y_START + cell.y * STEP);
            self.write_cell(grid, cell, origin)?;
        }
        writeln!(self.writer, "</svg></p>")
    }

    fn note(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "<p>{}</p>", escape(text))
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.writer, "  </body>")?;
        writeln!(self.writer, "</html>")?;
        self.writer.flush()
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
