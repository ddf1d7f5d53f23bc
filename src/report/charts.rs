// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PNG chart rendering for sweep results.
//!
//! Two charts summarise a sweep:
//!
//! - the performance chart: measured step counts on linear and logarithmic
//!   axes side by side, with a flat five-steps-per-call estimate drawn for
//!   comparison
//! - the moves chart: the minimum move count 2^n - 1 as bars on a
//!   logarithmic axis
//!
//! Rendering goes through [`plotters`] with the bitmap backend. Callers
//! choose the output path; the conventional file names are
//! [`PERFORMANCE_CHART_FILE`] and [`MOVES_CHART_FILE`].

use std::path::Path;

use anyhow::{bail, Context, Result};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::ranged1d::Ranged;
use plotters::coord::types::RangedCoordu32;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::harness::PerformanceSample;
use crate::report::group_digits;

/// Conventional output file for the performance chart.
pub const PERFORMANCE_CHART_FILE: &str = "grafico_desempenho.png";

/// Conventional output file for the moves chart.
pub const MOVES_CHART_FILE: &str = "grafico_movimentos.png";

/// Line and marker colour for the measured series.
const MEASURED_COLOR: RGBColor = RGBColor(0x25, 0x63, 0xEB);

/// Line and marker colour for the estimate series.
const ESTIMATE_COLOR: RGBColor = RGBColor(0xDC, 0x26, 0x26);

/// Bar fill for the moves chart.
const BAR_FILL: RGBColor = RGBColor(0x7C, 0x3A, 0xED);

/// Bar outline for the moves chart.
const BAR_EDGE: RGBColor = RGBColor(0x5B, 0x21, 0xB6);

/// Flat estimate of executed lines: five per call over 2^n - 1 calls.
///
/// Counting one line for the base check plus four for the recursive body
/// at every call site gives 5*(2^n - 1). The estimate overshoots the
/// measured totals, and drawing both makes the gap visible.
pub fn overlay_steps(n: u32) -> f64 {
    5.0 * ((2f64).powi(n as i32) - 1.0)
}

/// Render the two-panel performance chart to `path`.
///
/// The left panel uses a linear y axis, the right a logarithmic one, over
/// the same data. Fails if `samples` is empty or the file cannot be
/// written.
pub fn render_performance_chart(samples: &[PerformanceSample], path: &Path) -> Result<()> {
    if samples.is_empty() {
        bail!("no samples to plot");
    }
    let root = BitMapBackend::new(path, (1400, 600)).into_drawing_area();
    root.fill(&WHITE).context("filling chart background")?;
    let (left, right) = root.split_horizontally(700);
    draw_linear_panel(&left, samples)?;
    draw_log_panel(&right, samples)?;
    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "performance chart written");
    Ok(())
}

/// Render the moves bar chart to `path`.
///
/// Bars rise from y = 0.5 because the logarithmic axis cannot reach zero;
/// with 2^n - 1 >= 1 every bar stays visible. Fails if `samples` is empty
/// or the file cannot be written.
pub fn render_moves_chart(samples: &[PerformanceSample], path: &Path) -> Result<()> {
    if samples.is_empty() {
        bail!("no samples to plot");
    }
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).context("filling chart background")?;

    let x_max = samples.iter().map(|s| s.disks).max().unwrap_or(1) as f64;
    let y_max = samples
        .iter()
        .map(|s| s.theoretical_moves as f64)
        .fold(1.0, f64::max)
        * 1.3;

    let mut chart = ChartBuilder::on(&root)
        .caption("Movimentos Necessários por Número de Discos", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..x_max + 1.0, (0.5f64..y_max).log_scale())?;
    chart
        .configure_mesh()
        .x_desc("Número de discos (n)")
        .y_desc("Número de movimentos")
        .x_labels(x_max as usize + 2)
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| group_digits(*y as u64))
        .draw()?;

    chart.draw_series(samples.iter().map(|s| {
        let x = s.disks as f64;
        let y = s.theoretical_moves as f64;
        Rectangle::new([(x - 0.4, 0.5), (x + 0.4, y)], BAR_FILL.mix(0.85).filled())
    }))?;
    chart.draw_series(samples.iter().map(|s| {
        let x = s.disks as f64;
        let y = s.theoretical_moves as f64;
        Rectangle::new([(x - 0.4, 0.5), (x + 0.4, y)], BAR_EDGE.stroke_width(1))
    }))?;

    root.present()
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "moves chart written");
    Ok(())
}

/// Largest y value either series reaches, with headroom for markers.
fn step_ceiling(samples: &[PerformanceSample]) -> f64 {
    let measured = samples
        .iter()
        .map(|s| s.measured_steps as f64)
        .fold(0.0, f64::max);
    let estimated = samples
        .iter()
        .map(|s| overlay_steps(s.disks))
        .fold(0.0, f64::max);
    measured.max(estimated) * 1.1
}

fn draw_linear_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    samples: &[PerformanceSample],
) -> Result<()> {
    let x_max = samples.iter().map(|s| s.disks).max().unwrap_or(1);
    let mut chart = ChartBuilder::on(area)
        .caption("Desempenho - Escala Linear", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0u32..x_max + 1, 0f64..step_ceiling(samples))?;
    chart
        .configure_mesh()
        .x_desc("Número de discos (n)")
        .y_desc("Linhas executadas")
        .y_label_formatter(&|y| group_digits(*y as u64))
        .draw()?;
    draw_step_series(&mut chart, samples)?;
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    Ok(())
}

fn draw_log_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    samples: &[PerformanceSample],
) -> Result<()> {
    let x_max = samples.iter().map(|s| s.disks).max().unwrap_or(1);
    let mut chart = ChartBuilder::on(area)
        .caption("Desempenho - Escala Logarítmica", ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(80)
        .build_cartesian_2d(0u32..x_max + 1, (1f64..step_ceiling(samples)).log_scale())?;
    chart
        .configure_mesh()
        .x_desc("Número de discos (n)")
        .y_desc("Linhas executadas (escala log)")
        .y_label_formatter(&|y| group_digits(*y as u64))
        .draw()?;
    draw_step_series(&mut chart, samples)?;
    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;
    Ok(())
}

/// Draw the measured and estimated step series into a prepared chart.
///
/// Generic over the y coordinate so the linear and logarithmic panels
/// share one implementation.
fn draw_step_series<'a, 'b, Y>(
    chart: &mut ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordu32, Y>>,
    samples: &[PerformanceSample],
) -> Result<()>
where
    Y: Ranged<ValueType = f64>,
{
    let measured: Vec<(u32, f64)> = samples
        .iter()
        .map(|s| (s.disks, s.measured_steps as f64))
        .collect();
    let estimated: Vec<(u32, f64)> = samples
        .iter()
        .map(|s| (s.disks, overlay_steps(s.disks)))
        .collect();

    chart
        .draw_series(LineSeries::new(
            measured.iter().copied(),
            MEASURED_COLOR.stroke_width(2),
        ))?
        .label("Linhas executadas (medido)")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], MEASURED_COLOR.stroke_width(2))
        });
    chart.draw_series(
        measured
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, MEASURED_COLOR.filled())),
    )?;

    chart
        .draw_series(LineSeries::new(
            estimated.iter().copied(),
            ESTIMATE_COLOR.mix(0.7).stroke_width(2),
        ))?
        .label("5 × (2^n - 1) teórico")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], ESTIMATE_COLOR.mix(0.7).stroke_width(2))
        });
    chart.draw_series(
        estimated
            .iter()
            .map(|&(x, y)| Cross::new((x, y), 4, ESTIMATE_COLOR.mix(0.7).stroke_width(2))),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_matches_five_per_call() {
        assert_eq!(overlay_steps(1), 5.0);
        assert_eq!(overlay_steps(2), 15.0);
        assert_eq!(overlay_steps(3), 35.0);
        assert_eq!(overlay_steps(10), 5115.0);
    }

    #[test]
    fn test_empty_samples_are_rejected() {
        let path = Path::new("unused.png");
        assert!(render_performance_chart(&[], path).is_err());
        assert!(render_moves_chart(&[], path).is_err());
        assert!(!path.exists());
    }
}
