//! Distance maps by in-place relaxation.
//!
//! Given a [`DistanceGrid`](sweepgrid_core::DistanceGrid) holding one
//! destination, a [`Relaxer`] computes for every reachable cell the minimum
//! number of moves to that destination, without a priority queue:
//!
//! - an [`Adjacency`] model picks the neighbours (8-way king moves or 4-way
//!   rook moves),
//! - each sweep visits the interior row by row and lowers every eligible
//!   cell to the best `neighbour + 1`, in place,
//! - sweeping stops once a sweep changes nothing.
//!
//! The [`RecomputePolicy`] trades exactness for speed, and recorded
//! direction tags can be turned back into paths with [`trace_path`].
//!
//! ```
//! use sweepgrid_core::{DistanceGrid, Point};
//! use sweepgrid_paths::{Relaxer, SolveConfig};
//!
//! let mut grid = DistanceGrid::open(3, 3, Point::new(1, 1)).unwrap();
//! let report = Relaxer::new(SolveConfig::default()).solve(&mut grid);
//! assert_eq!(grid.at(Point::new(3, 3)), Some(2));
//! assert!(report.sweeps >= 1);
//! ```

mod adjacency;
mod relax;
mod trace;

pub use adjacency::{Adjacency, Relaxed, chebyshev, manhattan};
pub use relax::{RecomputePolicy, Relaxer, SolveConfig, SolveReport, SweepState, SweepStats};
pub use trace::trace_path;
