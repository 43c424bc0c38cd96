//! The [`DistanceGrid`]: a padded 2D array of sentinel-encoded distances.
//!
//! A grid of `rows × cols` logical cells is stored as `(rows+2) × (cols+2)`
//! values: a one-cell blocked border surrounds the interior so that every
//! interior cell has all eight neighbours. With `area = rows * cols`, a cell
//! value means:
//!
//! | value | meaning |
//! |---|---|
//! | `0` | the destination |
//! | `1 ..= area` | an established path length |
//! | `area + 1` | empty, not reached yet |
//! | `area + 2 ..` | blocked (wall or border) |
//!
//! An optional parallel array records, per cell, the [`Direction`] of the
//! neighbour that produced its current distance.

use crate::direction::Direction;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Category of a cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    /// Value `0`.
    Destination,
    /// A finite computed distance.
    Reached,
    /// The empty sentinel: not reached (yet, or ever).
    Empty,
    /// Wall or border; never updated.
    Blocked,
}

/// Dense distance grid with a one-cell border and optional direction tags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawGrid"))]
pub struct DistanceGrid {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
    directions: Option<Vec<Option<Direction>>>,
}

impl DistanceGrid {
    /// Build a grid from `rows + 2` rows of `cols + 2` values each.
    ///
    /// Only the shape is validated; the destination / empty / blocked
    /// encoding of the values is trusted.
    pub fn from_rows(rows: usize, cols: usize, data: Vec<Vec<i32>>) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        if data.len() != rows + 2 {
            return Err(GridError::RowCount {
                expected: rows + 2,
                found: data.len(),
            });
        }
        let width = cols + 2;
        let mut cells = Vec::with_capacity((rows + 2) * width);
        for (row, values) in data.into_iter().enumerate() {
            if values.len() != width {
                return Err(GridError::RowWidth {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            cells.extend(values);
        }
        Ok(Self {
            rows,
            cols,
            cells,
            directions: None,
        })
    }

    /// Build an obstacle-free grid: blocked border, empty interior and a
    /// destination at the interior point `destination`.
    pub fn open(rows: usize, cols: usize, destination: Point) -> Result<Self, GridError> {
        check_dimensions(rows, cols)?;
        let mut grid = Self {
            rows,
            cols,
            cells: Vec::new(),
            directions: None,
        };
        let blocked = grid.blocked_value();
        let empty = grid.empty_value();
        let interior = grid.interior();
        grid.cells = grid
            .bounds()
            .iter()
            .map(|p| if interior.contains(p) { empty } else { blocked })
            .collect();
        if !interior.contains(destination) {
            return Err(GridError::NotInterior { point: destination });
        }
        grid.set(destination, 0);
        Ok(grid)
    }

    /// Number of interior rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of interior columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `rows * cols`, the longest possible path length.
    #[inline]
    pub fn area(&self) -> i32 {
        (self.rows * self.cols) as i32
    }

    /// The "not reached" sentinel, `area + 1`.
    #[inline]
    pub fn empty_value(&self) -> i32 {
        self.area() + 1
    }

    /// The canonical blocked value, `area + 2`. Anything larger is blocked too.
    #[inline]
    pub fn blocked_value(&self) -> i32 {
        self.area() + 2
    }

    /// Whether `v` encodes a blocked cell.
    #[inline]
    pub fn is_blocked(&self, v: i32) -> bool {
        v >= self.blocked_value()
    }

    /// Whether `v` is the "not reached" sentinel.
    #[inline]
    pub fn is_empty_value(&self, v: i32) -> bool {
        v == self.empty_value()
    }

    /// Classify a value against this grid's sentinels.
    pub fn kind(&self, v: i32) -> CellKind {
        if v == 0 {
            CellKind::Destination
        } else if self.is_empty_value(v) {
            CellKind::Empty
        } else if self.is_blocked(v) {
            CellKind::Blocked
        } else {
            CellKind::Reached
        }
    }

    /// The whole padded rectangle, border included.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.cols as i32 + 2, self.rows as i32 + 2)
    }

    /// The interior rectangle, `[1, cols+1) × [1, rows+1)`.
    #[inline]
    pub fn interior(&self) -> Range {
        self.bounds().inset(1)
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds().contains(p) {
            return None;
        }
        Some(p.y as usize * (self.cols + 2) + p.x as usize)
    }

    /// Value at `p`, or `None` outside the padded bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<i32> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Category of the cell at `p`, or `None` outside the padded bounds.
    pub fn kind_at(&self, p: Point) -> Option<CellKind> {
        self.at(p).map(|v| self.kind(v))
    }

    /// Overwrite the value at `p`. No-op outside the padded bounds.
    #[inline]
    pub fn set(&mut self, p: Point, v: i32) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = v;
        }
    }

    /// One padded row (`cols + 2` values), or `None` if `y` is out of range.
    pub fn row(&self, y: usize) -> Option<&[i32]> {
        self.cells.get(self.row_span(y)?)
    }

    /// Copy of the padded values as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.cells.chunks(self.cols + 2).map(<[i32]>::to_vec).collect()
    }

    /// First interior cell holding `0`, in row-major order.
    pub fn destination(&self) -> Option<Point> {
        self.interior().iter().find(|&p| self.at(p) == Some(0))
    }

    /// Number of interior cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.interior()
            .iter()
            .filter(|&p| self.kind_at(p) == Some(kind))
            .count()
    }

    // -----------------------------------------------------------------------
    // Directions
    // -----------------------------------------------------------------------

    /// Allocate the direction array (all `None`) if it does not exist yet.
    pub fn enable_directions(&mut self) {
        if self.directions.is_none() {
            self.directions = Some(vec![None; self.cells.len()]);
        }
    }

    /// Whether a direction array is present.
    #[inline]
    pub fn has_directions(&self) -> bool {
        self.directions.is_some()
    }

    /// Direction recorded at `p`. `None` when nothing is recorded, when
    /// directions are disabled, or outside the bounds.
    pub fn direction_at(&self, p: Point) -> Option<Direction> {
        let i = self.idx(p)?;
        self.directions.as_ref()?[i]
    }

    /// Record a direction at `p`. No-op when directions are disabled.
    pub fn set_direction(&mut self, p: Point, dir: Option<Direction>) {
        if let Some(i) = self.idx(p) {
            if let Some(dirs) = self.directions.as_mut() {
                dirs[i] = dir;
            }
        }
    }

    /// One padded row of directions.
    pub fn direction_row(&self, y: usize) -> Option<&[Option<Direction>]> {
        let span = self.row_span(y)?;
        self.directions.as_ref()?.get(span)
    }

    /// Flat index range of padded row `y`, `None` when it cannot exist.
    fn row_span(&self, y: usize) -> Option<std::ops::Range<usize>> {
        let width = self.cols + 2;
        let start = y.checked_mul(width)?;
        Some(start..start.checked_add(width)?)
    }
}

fn check_dimensions(rows: usize, cols: usize) -> Result<(), GridError> {
    if rows == 0 || cols == 0 {
        return Err(GridError::EmptyDimensions { rows, cols });
    }
    let fits = rows
        .checked_mul(cols)
        .and_then(|area| area.checked_add(2))
        .is_some_and(|top| top <= i32::MAX as usize);
    if !fits {
        return Err(GridError::TooLarge { rows, cols });
    }
    Ok(())
}

/// Unvalidated wire form of a [`DistanceGrid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
    directions: Option<Vec<Option<Direction>>>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawGrid> for DistanceGrid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        check_dimensions(raw.rows, raw.cols)?;
        let expected = (raw.rows + 2) * (raw.cols + 2);
        if raw.cells.len() != expected {
            return Err(GridError::CellCount {
                expected,
                found: raw.cells.len(),
            });
        }
        if let Some(dirs) = &raw.directions {
            if dirs.len() != expected {
                return Err(GridError::CellCount {
                    expected,
                    found: dirs.len(),
                });
            }
        }
        Ok(Self {
            rows: raw.rows,
            cols: raw.cols,
            cells: raw.cells,
            directions: raw.directions,
        })
    }
}
