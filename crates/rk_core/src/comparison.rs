//! Assembles the exact solution and the four method approximations into
//! labelled series for rendering.

use crate::grid::Grid;
use crate::problem::{InitialCondition, ProblemConfig};
use crate::solvers::Method;
use crate::traits::{ExactSolution, Scalar};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const EXACT_LABEL: &str = "True";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint<T> {
    pub x: T,
    pub y: T,
}

/// A labelled sequence of (x, y) samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series<T> {
    pub label: String,
    pub points: Vec<SamplePoint<T>>,
}

impl<T: Scalar> Series<T> {
    /// Zips `xs` with `ys`; the shorter of the two bounds the length.
    pub fn from_samples(label: impl Into<String>, xs: &[T], ys: &[T]) -> Self {
        let points = xs
            .iter()
            .zip(ys)
            .map(|(&x, &y)| SamplePoint { x, y })
            .collect();
        Self {
            label: label.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last_y(&self) -> Option<T> {
        self.points.last().map(|p| p.y)
    }
}

/// Exact solution and all method approximations over one grid.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison<T> {
    pub grid: Grid<T>,
    pub exact: Series<T>,
    pub approximations: Vec<(Method, Series<T>)>,
}

impl<T: Scalar> Comparison<T> {
    /// All series in legend order: exact first, then orders 1 to 4.
    pub fn series(&self) -> Vec<Series<T>> {
        std::iter::once(self.exact.clone())
            .chain(self.approximations.iter().map(|(_, s)| s.clone()))
            .collect()
    }

    /// Absolute error of each method at the last grid point.
    /// Empty when the grid is empty.
    pub fn final_errors(&self) -> Vec<(Method, T)> {
        let Some(exact) = self.exact.last_y() else {
            return Vec::new();
        };
        self.approximations
            .iter()
            .filter_map(|(method, series)| series.last_y().map(|y| (*method, (y - exact).abs())))
            .collect()
    }
}

/// Evaluates the exact solution and every method on an explicit grid.
pub fn compare_on_grid<T, O>(
    ode: &O,
    grid: Grid<T>,
    initial: InitialCondition<T>,
) -> Result<Comparison<T>>
where
    T: Scalar,
    O: ExactSolution<T>,
{
    let exact_values: Vec<T> = grid.iter().map(|&x| ode.exact(x)).collect();
    let exact = Series::from_samples(EXACT_LABEL, &grid, &exact_values);

    let mut approximations = Vec::with_capacity(Method::ALL.len());
    for method in Method::ALL {
        let values = method
            .solve(ode, &grid, initial)
            .with_context(|| format!("{} failed", method.label()))?;
        debug!(
            method = method.label(),
            points = values.len(),
            "integrated"
        );
        approximations.push((method, Series::from_samples(method.label(), &grid, &values)));
    }

    Ok(Comparison {
        grid,
        exact,
        approximations,
    })
}

/// Validates `config`, builds its grid, and compares all methods on it.
pub fn compare<O>(ode: &O, config: &ProblemConfig) -> Result<Comparison<f64>>
where
    O: ExactSolution<f64>,
{
    config.validate().context("invalid problem configuration")?;
    let grid = config.grid();
    debug!(
        start = config.start,
        stop = config.stop,
        step = config.step,
        points = grid.len(),
        "built grid"
    );
    compare_on_grid(ode, grid, config.initial_condition())
}
