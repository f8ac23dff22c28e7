//! Sample grid for the independent variable.

use crate::traits::Scalar;
use serde::Serialize;
use std::ops::Deref;

/// Ordered, immutable sequence of abscissae `start + step * i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid<T> {
    points: Vec<T>,
}

/// Builds the grid for `start`, `stop` and `step`.
///
/// The length is `ceil((stop - start) / step)`, or zero when that quotient is
/// negative or not finite. The grid is not snapped to `stop`: when the
/// division is exact the last point is `stop - step`.
pub fn build_grid<T: Scalar>(start: T, stop: T, step: T) -> Grid<T> {
    let len = ((stop - start) / step)
        .ceil()
        .to_usize()
        .unwrap_or(0);

    let points = (0..len)
        .map(|i| start + step * T::from_usize(i).unwrap())
        .collect();

    Grid { points }
}

impl<T: Scalar> Grid<T> {
    pub fn from_points(points: Vec<T>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[T] {
        &self.points
    }

    /// Global step width `|grid[0] - grid[1]|`, if the grid has two points.
    pub fn step_width(&self) -> Option<T> {
        match self.points.as_slice() {
            [a, b, ..] => Some((*a - *b).abs()),
            _ => None,
        }
    }
}

impl<T> Deref for Grid<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.points
    }
}

#[cfg(test)]
mod tests {
    use super::build_grid;

    #[test]
    fn coarse_grid_uses_ceiling_length() {
        let grid = build_grid(0.0, 4.0, 3.0);
        assert_eq!(grid.points(), &[0.0, 3.0]);
    }

    #[test]
    fn exact_division_stops_one_step_short() {
        let grid = build_grid(0.0, 1.0, 0.25);
        assert_eq!(grid.points(), &[0.0, 0.25, 0.5, 0.75]);
        assert_eq!(grid.step_width(), Some(0.25));
    }

    #[test]
    fn elements_follow_start_plus_step_times_index() {
        let cases: [(f64, f64, f64); 5] = [
            (-1.5, 2.0, 0.3),
            (0.0, 1.0, 0.25),
            (-4.0, -1.0, 0.5),
            (10.0, 10.5, 0.07),
            (0.0, 1.0, 0.01),
        ];
        for (start, stop, step) in cases {
            let grid = build_grid(start, stop, step);
            assert_eq!(
                grid.len(),
                ((stop - start) / step).ceil() as usize,
                "length for ({start}, {stop}, {step})"
            );
            for (i, x) in grid.iter().enumerate() {
                assert_eq!(*x, start + step * i as f64);
            }
            assert!(grid.windows(2).all(|w| w[0] < w[1]));
            assert!(*grid.last().unwrap() <= stop);
        }
    }

    #[test]
    fn equal_bounds_give_empty_grid() {
        let grid = build_grid(2.0, 2.0, 0.5);
        assert!(grid.is_empty());
        assert_eq!(grid.step_width(), None);
    }

    #[test]
    fn reversed_bounds_clamp_to_empty() {
        assert!(build_grid(4.0, 0.0, 1.0).is_empty());
        assert!(build_grid(0.0, 4.0, f64::NAN).is_empty());
    }

    #[test]
    fn single_point_grid_has_no_step_width() {
        let grid = build_grid(0.0, 1.0, 5.0);
        assert_eq!(grid.points(), &[0.0]);
        assert_eq!(grid.step_width(), None);
    }
}
