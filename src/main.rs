// Copyright (c) 2026, Chad Hogan
// All rights reserved.
//
// This source code is licensed under the BSD-3-Clause license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use icevel::io;
use icevel::speed;

#[derive(Parser)]
#[command(name = "icevel", about = "Ice velocity speed-field calculator")]
struct Cli {
    /// Input NetCDF dataset containing the velocity component grids
    input: PathBuf,

    /// Name of the X-component variable
    #[arg(long, default_value = "VX")]
    vx: String,

    /// Name of the Y-component variable
    #[arg(long, default_value = "VY")]
    vy: String,

    /// Output file path for the speed grid (.npy or .nc); if omitted,
    /// the speed grid is computed and discarded
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Suppress the speed summary line
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (vx, vy) = io::load_velocity_components(&cli.input, &cli.vx, &cli.vy)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let speed_field = speed::compute_speed(&vx, &vy).map_err(|e| anyhow::anyhow!("{}", e))?;
    let stats = speed::summarize(&speed_field);

    if !cli.quiet {
        let [rows, cols] = speed_field.shape();
        println!(
            "speed: {}x{} cells, min {:.6}, max {:.6}, mean {:.6} ({} non-finite)",
            rows, cols, stats.min, stats.max, stats.mean, stats.non_finite_cells
        );
    }

    if let Some(output) = &cli.output {
        io::save_field(&speed_field, output).map_err(|e| anyhow::anyhow!("{}", e))?;
    }

    Ok(())
}
