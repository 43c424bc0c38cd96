//! Command-line driver for the sweepgrid solver.
//!
//! [`run`] loads a comma-separated grid file, validates it against the
//! requested dimensions, solves it with a [`Relaxer`](sweepgrid_paths::Relaxer)
//! and renders the snapshots with the chosen
//! [`OutputFormat`](sweepgrid_render::OutputFormat). The `sweepgrid` binary
//! is a thin `clap` layer that builds a [`RunConfig`] and calls [`run`].

pub mod loader;
mod run;

pub use loader::{LoadError, load_file, load_rows, parse_dimension};
pub use run::{Error, RunConfig, run, solve_and_render};
