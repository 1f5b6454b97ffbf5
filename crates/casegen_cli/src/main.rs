//! casegen - Synthetic Reservoir-Grid Case Generator
//!
//! Operational entry point for the casegen workspace: loads a YAML case
//! configuration, applies command-line overrides, generates the property
//! arrays, and writes the summary and include files a reservoir
//! simulator consumes.
//!
//! # Usage
//!
//! ```text
//! casegen case.yaml --base SMALL
//! casegen case.yaml --vug-volume 0.1 0.1 --seed 12345
//! casegen case.yaml --origin-x 1000.0 --origin-y 2000.0 --rotation 15
//! ```
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! foundation (`casegen_core`) and domain (`casegen_model`) layers behind
//! a single-purpose command-line interface.

use std::path::Path;

use casegen_model::grid::CaseModel;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod writer;

pub use error::{CliError, Result};

/// Synthetic reservoir-grid case generator
#[derive(Parser)]
#[command(name = "casegen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the YAML case configuration
    config: String,

    /// Base name used for all output files
    #[arg(short, long, default_value = "CASE")]
    base: String,

    /// Directory the output files are written into
    #[arg(short, long, default_value = ".")]
    output_dir: String,

    /// Random seed override for reproducible vug sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Vug volume-fraction bounds override
    #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"])]
    vug_volume: Option<Vec<f64>>,

    /// Grid origin X override
    #[arg(long)]
    origin_x: Option<f64>,

    /// Grid origin Y override
    #[arg(long)]
    origin_y: Option<f64>,

    /// Grid rotation override in degrees, positive counterclockwise
    #[arg(long)]
    rotation: Option<f64>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();

    let overrides = config::Overrides {
        seed: cli.seed,
        vug_volume: cli.vug_volume.as_deref().map(|bounds| (bounds[0], bounds[1])),
        origin_x: cli.origin_x,
        origin_y: cli.origin_y,
        rotation: cli.rotation,
    };

    let spec = config::load_spec(&cli.config, &overrides)?;
    let model = CaseModel::new(&spec)?;
    info!(
        nx = model.dims().nx(),
        ny = model.dims().ny(),
        nz = model.dims().nz(),
        cells = model.dims().num_cells(),
        seed = ?model.seed(),
        "generating case"
    );
    debug!(outline = ?model.outline(), "areal outline");

    let case = model.generate()?;
    writer::write_case(Path::new(&cli.output_dir), &cli.base, &case)?;
    info!(base = %cli.base, poro = case.summary().poro, "case written");
    Ok(())
}
