use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sweepgrid_cli::{RunConfig, parse_dimension, run};
use sweepgrid_paths::{Adjacency, RecomputePolicy, SolveConfig};
use sweepgrid_render::OutputFormat;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Grid distance maps by in-place relaxation sweeps.
#[derive(Parser)]
#[command(name = "sweepgrid")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Number of interior rows
    #[arg(value_parser = parse_dimension)]
    rows: usize,

    /// Number of interior columns
    #[arg(value_parser = parse_dimension)]
    cols: usize,

    /// Comma-separated grid file, including the border
    input: PathBuf,

    /// Neighbourhood used by the sweeps
    #[arg(long, value_enum, default_value_t = AdjacencyArg::Eight)]
    adjacency: AdjacencyArg,

    /// Which cells are re-examined on each sweep
    #[arg(long, value_enum, default_value_t = PolicyArg::Always)]
    policy: PolicyArg,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Render the grid after every sweep that changed it
    #[arg(long)]
    every_sweep: bool,

    /// Do not record directions
    #[arg(long)]
    no_directions: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AdjacencyArg {
    Eight,
    Four,
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Always,
    Unsettled,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Svg,
    Json,
}

impl From<AdjacencyArg> for Adjacency {
    fn from(arg: AdjacencyArg) -> Self {
        match arg {
            AdjacencyArg::Eight => Adjacency::Eight,
            AdjacencyArg::Four => Adjacency::Four,
        }
    }
}

impl From<PolicyArg> for RecomputePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Always => RecomputePolicy::Always,
            PolicyArg::Unsettled => RecomputePolicy::Unsettled,
        }
    }
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Svg => OutputFormat::Svg,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

impl Cli {
    fn config(&self) -> RunConfig {
        RunConfig {
            rows: self.rows,
            cols: self.cols,
            input: self.input.clone(),
            solve: SolveConfig::default()
                .with_adjacency(self.adjacency.into())
                .with_policy(self.policy.into())
                .with_directions(!self.no_directions),
            format: self.format.into(),
            every_sweep: self.every_sweep,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter_layer = if cli.debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("sweepgrid v{}", env!("CARGO_PKG_VERSION"));
    let config = cli.config();
    let report = run(&config, BufWriter::new(io::stdout().lock()))?;
    info!(
        "{} sweeps, {} updates in {:?}",
        report.sweeps, report.changes, report.elapsed
    );
    Ok(())
}
