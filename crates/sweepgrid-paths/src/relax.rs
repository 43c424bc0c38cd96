//! In-place relaxation sweeps.
//!
//! A [`Relaxer`] repeatedly walks the interior of a [`DistanceGrid`] in
//! row-major order and lowers each eligible cell to `min(neighbour + 1)`.
//! Updates are written immediately, so later cells in the same sweep
//! already see them (Gauss-Seidel rather than Jacobi); an improvement can
//! travel down and to the right across the whole grid in a single sweep.
//! Sweeping stops after the first sweep that changes nothing.

use std::time::{Duration, Instant};

use sweepgrid_core::DistanceGrid;

use crate::adjacency::Adjacency;

/// Which cells a sweep re-examines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RecomputePolicy {
    /// Every non-blocked interior cell, every sweep. Converges to the exact
    /// shortest distances.
    #[default]
    Always,
    /// Only cells still holding the empty sentinel. Faster, but a cell is
    /// frozen at the first value it receives, which is not always optimal.
    Unsettled,
}

impl RecomputePolicy {
    #[inline]
    fn eligible(self, grid: &DistanceGrid, v: i32) -> bool {
        match self {
            RecomputePolicy::Always => !grid.is_blocked(v),
            RecomputePolicy::Unsettled => grid.is_empty_value(v),
        }
    }
}

/// Solver configuration, fixed for the lifetime of a [`Relaxer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolveConfig {
    /// Neighbour model.
    pub adjacency: Adjacency,
    /// Which cells each sweep re-examines.
    pub policy: RecomputePolicy,
    /// Record the direction of the neighbour behind each improvement.
    pub track_directions: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            adjacency: Adjacency::Eight,
            policy: RecomputePolicy::Always,
            track_directions: true,
        }
    }
}

impl SolveConfig {
    /// Set the neighbour model.
    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Set the recompute policy.
    pub fn with_policy(mut self, policy: RecomputePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Enable or disable direction tracking.
    pub fn with_directions(mut self, track: bool) -> Self {
        self.track_directions = track;
        self
    }
}

/// Engine state. `Converged` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepState {
    Running,
    Converged,
}

/// Outcome of a single sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStats {
    /// 1-based number of the sweep.
    pub sweep: usize,
    /// Cells whose value changed during the sweep.
    pub changes: usize,
}

/// Outcome of a full solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveReport {
    /// Sweeps performed, including the final one that changed nothing.
    pub sweeps: usize,
    /// Cell updates over all sweeps.
    pub changes: usize,
    /// Wall-clock time spent in the sweep loop.
    pub elapsed: Duration,
}

/// Relaxation engine driving a [`DistanceGrid`] to its fixpoint.
#[derive(Debug, Clone)]
pub struct Relaxer {
    config: SolveConfig,
    state: SweepState,
    sweeps: usize,
    changes: usize,
}

impl Relaxer {
    /// Create an engine in the `Running` state.
    pub fn new(config: SolveConfig) -> Self {
        Self {
            config,
            state: SweepState::Running,
            sweeps: 0,
            changes: 0,
        }
    }

    /// The configuration this engine was built with.
    #[inline]
    pub fn config(&self) -> SolveConfig {
        self.config
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> SweepState {
        self.state
    }

    /// Whether the last sweep changed nothing.
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.state == SweepState::Converged
    }

    /// Sweeps performed so far.
    #[inline]
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// Cell updates made so far, over all sweeps.
    #[inline]
    pub fn changes(&self) -> usize {
        self.changes
    }

    /// Return to `Running` with zeroed counters, keeping the configuration,
    /// so the engine can be reused on another grid.
    pub fn reset(&mut self) {
        self.state = SweepState::Running;
        self.sweeps = 0;
        self.changes = 0;
    }

    /// Perform one row-major sweep over the interior of `grid`.
    ///
    /// After convergence this is a no-op reporting zero changes.
    pub fn step(&mut self, grid: &mut DistanceGrid) -> SweepStats {
        if self.is_converged() {
            return SweepStats {
                sweep: self.sweeps,
                changes: 0,
            };
        }
        let SolveConfig {
            adjacency,
            policy,
            track_directions,
        } = self.config;
        if track_directions {
            grid.enable_directions();
        }

        let mut changes = 0;
        for p in grid.interior() {
            let Some(current) = grid.at(p) else {
                continue;
            };
            if !policy.eligible(grid, current) {
                continue;
            }
            let relaxed = adjacency.relax(grid, p);
            if relaxed.value != current {
                grid.set(p, relaxed.value);
                if track_directions {
                    grid.set_direction(p, relaxed.direction);
                }
                log::trace!("{p}: {current} -> {}", relaxed.value);
                changes += 1;
            }
        }

        self.sweeps += 1;
        self.changes += changes;
        log::debug!("sweep {}: {} cells changed", self.sweeps, changes);
        if changes == 0 {
            self.state = SweepState::Converged;
            log::info!(
                "converged after {} sweeps ({} updates)",
                self.sweeps,
                self.changes
            );
        }
        SweepStats {
            sweep: self.sweeps,
            changes,
        }
    }

    /// Sweep until convergence.
    pub fn solve(&mut self, grid: &mut DistanceGrid) -> SolveReport {
        let start = Instant::now();
        while !self.is_converged() {
            self.step(grid);
        }
        SolveReport {
            sweeps: self.sweeps,
            changes: self.changes,
            elapsed: start.elapsed(),
        }
    }
}
