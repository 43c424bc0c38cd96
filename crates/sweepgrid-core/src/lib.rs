//! **sweepgrid-core**: core types for the sweepgrid relaxation solver.
//!
//! This crate provides the data the solver works on: geometry primitives,
//! compass [`Direction`] tags, and the sentinel-encoded [`DistanceGrid`]
//! with its one-cell blocked border.

pub mod direction;
pub mod error;
pub mod geom;
pub mod grid;

pub use direction::Direction;
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{CellKind, DistanceGrid};
