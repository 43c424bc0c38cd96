use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use sweepgrid_core::{DistanceGrid, GridError};
use sweepgrid_paths::{Relaxer, SolveConfig, SolveReport};
use sweepgrid_render::{OutputFormat, renderer_for};

use crate::loader::{self, LoadError};

/// Anything that stops a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("invalid grid: {0}")]
    Validation(#[from] GridError),

    #[error("cannot write output: {0}")]
    Render(#[from] std::io::Error),
}

/// Everything one invocation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub rows: usize,
    pub cols: usize,
    pub input: PathBuf,
    pub solve: SolveConfig,
    pub format: OutputFormat,
    /// Render a snapshot after every sweep that changed something.
    pub every_sweep: bool,
}

impl RunConfig {
    pub fn new(rows: usize, cols: usize, input: impl Into<PathBuf>) -> Self {
        Self {
            rows,
            cols,
            input: input.into(),
            solve: SolveConfig::default(),
            format: OutputFormat::default(),
            every_sweep: false,
        }
    }
}

/// Load `config.input`, solve it, and render the result to `out`.
pub fn run(config: &RunConfig, out: impl Write) -> Result<SolveReport, Error> {
    let data = loader::load_file(&config.input)?;
    let grid = DistanceGrid::from_rows(config.rows, config.cols, data)?;
    solve_and_render(grid, config, out)
}

/// Solve an already validated grid, rendering to `out`.
pub fn solve_and_render(
    mut grid: DistanceGrid,
    config: &RunConfig,
    out: impl Write,
) -> Result<SolveReport, Error> {
    log::info!(
        "solving {}x{} grid ({:?}, {:?})",
        grid.rows(),
        grid.cols(),
        config.solve.adjacency,
        config.solve.policy
    );
    let mut renderer = renderer_for(config.format, out);
    let mut relaxer = Relaxer::new(config.solve);
    if config.solve.track_directions {
        grid.enable_directions();
    }

    renderer.begin()?;
    renderer.snapshot("Starting", &grid)?;
    let start = Instant::now();
    while !relaxer.is_converged() {
        let stats = relaxer.step(&mut grid);
        if config.every_sweep && stats.changes > 0 {
            renderer.snapshot(&format!("After sweep {}", stats.sweep), &grid)?;
        }
    }
    let elapsed = start.elapsed();
    if !config.every_sweep {
        renderer.snapshot("Ending", &grid)?;
    }
    renderer.note(&format!(
        "Seconds in main loop = {:.6}",
        elapsed.as_secs_f64()
    ))?;
    renderer.finish()?;

    Ok(SolveReport {
        sweeps: relaxer.sweeps(),
        changes: relaxer.changes(),
        elapsed,
    })
}
