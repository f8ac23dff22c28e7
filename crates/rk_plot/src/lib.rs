//! Chart rendering for the method comparison, kept behind `ChartRenderer` so
//! the numerical core never depends on a drawing backend.

use anyhow::{anyhow, bail, Result};
use plotters::prelude::*;
use rk_core::{compare, Comparison, LinearGrowth, ProblemConfig, Series};
use std::ops::Range;
use std::path::PathBuf;
use tracing::info;

/// Title, axes, canvas size and destination of the rendered chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width_in: f64,
    pub height_in: f64,
    pub dpi: f64,
    pub output: PathBuf,
}

impl Default for ChartSpec {
    fn default() -> Self {
        Self {
            title: "Solution of y'= x + y, y(0)=1".to_string(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
            width_in: 4.0,
            height_in: 4.0,
            dpi: 96.0,
            output: PathBuf::from("runge-kutta.png"),
        }
    }
}

impl ChartSpec {
    pub fn pixel_size(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi).round() as u32,
            (self.height_in * self.dpi).round() as u32,
        )
    }
}

/// Consumes labelled (x, y) series and produces a chart artifact.
pub trait ChartRenderer {
    fn render(&self, spec: &ChartSpec, series: &[Series<f64>]) -> Result<()>;
}

/// Checks that there is something to draw and that every series has the
/// same number of samples as the first.
pub fn check_series(series: &[Series<f64>]) -> Result<()> {
    let Some(first) = series.first() else {
        bail!("No series to plot.");
    };
    for s in &series[1..] {
        if s.len() != first.len() {
            bail!(
                "Series \"{}\" has {} points but \"{}\" has {}.",
                s.label,
                s.len(),
                first.label,
                first.len()
            );
        }
    }
    Ok(())
}

/// Bounding ranges over all samples, padded so a flat or single-point
/// series still spans a non-empty range.
pub fn data_ranges(series: &[Series<f64>]) -> Result<(Range<f64>, Range<f64>)> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for p in series.iter().flat_map(|s| s.points.iter()) {
        if !p.x.is_finite() || !p.y.is_finite() {
            bail!("Cannot plot non-finite sample ({}, {}).", p.x, p.y);
        }
        x_min = x_min.min(p.x);
        x_max = x_max.max(p.x);
        y_min = y_min.min(p.y);
        y_max = y_max.max(p.y);
    }
    if x_min > x_max {
        bail!("All series are empty.");
    }
    Ok((pad(x_min, x_max), pad(y_min, y_max)))
}

fn pad(lo: f64, hi: f64) -> Range<f64> {
    let margin = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - margin)..(hi + margin)
}

/// PNG line chart with point markers and a legend.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngChart;

impl ChartRenderer for PngChart {
    fn render(&self, spec: &ChartSpec, series: &[Series<f64>]) -> Result<()> {
        check_series(series)?;
        let (x_range, y_range) = data_ranges(series)?;

        let root = BitMapBackend::new(&spec.output, spec.pixel_size()).into_drawing_area();
        root.fill(&WHITE).map_err(draw_error)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(&spec.title, ("sans-serif", 16))
            .margin(10)
            .x_label_area_size(30)
            .y_label_area_size(50)
            .build_cartesian_2d(x_range, y_range)
            .map_err(draw_error)?;

        chart
            .configure_mesh()
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .draw()
            .map_err(draw_error)?;

        for (idx, s) in series.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            chart
                .draw_series(LineSeries::new(
                    s.points.iter().map(|p| (p.x, p.y)),
                    color.stroke_width(1),
                ))
                .map_err(draw_error)?
                .label(s.label.as_str())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            chart
                .draw_series(
                    s.points
                        .iter()
                        .map(|p| Circle::new((p.x, p.y), 3, color.filled())),
                )
                .map_err(draw_error)?;
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(draw_error)?;

        root.present().map_err(draw_error)?;
        info!(path = %spec.output.display(), "wrote chart");
        Ok(())
    }
}

fn draw_error<E: std::fmt::Display>(err: E) -> anyhow::Error {
    anyhow!("Chart rendering failed: {err}")
}

/// Computes the default comparison, logs each method's error at the last
/// grid point, and hands the five series to `renderer`.
pub fn run(renderer: &impl ChartRenderer, config: &ProblemConfig, spec: &ChartSpec) -> Result<()> {
    let comparison: Comparison<f64> = compare(&LinearGrowth, config)?;
    info!(points = comparison.grid.len(), "computed comparison");
    for (method, error) in comparison.final_errors() {
        info!(
            method = method.label(),
            order = method.order(),
            final_error = error,
            "method error"
        );
    }
    renderer.render(spec, &comparison.series())
}
