// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point: demonstration, sweep table, and charts.
//!
//! All product output goes to stdout; diagnostics go to stderr via
//! `tracing` so the two streams can be separated. Set `RUST_LOG=debug`
//! to watch individual measurement runs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use hanoi_recurrence::harness::{self, DEMO_DISKS};
use hanoi_recurrence::report::charts::{
    render_moves_chart, render_performance_chart, MOVES_CHART_FILE, PERFORMANCE_CHART_FILE,
};
use hanoi_recurrence::report::{render_demonstration, render_sweep_table};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let demo = harness::demonstrate(DEMO_DISKS).context("running the demonstration")?;
    print!("{}", render_demonstration(&demo));

    let samples = harness::default_sweep().context("running the performance sweep")?;
    print!("{}", render_sweep_table(&samples));
    println!();

    render_performance_chart(&samples, Path::new(PERFORMANCE_CHART_FILE))
        .context("rendering the performance chart")?;
    println!("✅ Gráfico salvo: {}", PERFORMANCE_CHART_FILE);

    render_moves_chart(&samples, Path::new(MOVES_CHART_FILE))
        .context("rendering the moves chart")?;
    println!("✅ Gráfico salvo: {}", MOVES_CHART_FILE);

    println!();
    println!("🎯 Concluído! Os gráficos foram salvos na pasta atual.");
    Ok(())
}
