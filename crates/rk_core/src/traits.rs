use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in the integrators.
/// Must support basic arithmetic, debug printing, and conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A first-order scalar ODE y' = f(x, y).
pub trait ScalarOde<T: Scalar> {
    /// Evaluates the right-hand side at abscissa `x` and state `y`.
    fn rhs(&self, x: T, y: T) -> T;
}

/// An ODE with a known closed-form solution, used as the comparison baseline.
pub trait ExactSolution<T: Scalar>: ScalarOde<T> {
    fn exact(&self, x: T) -> T;
}

/// A fixed-step method that advances the solution by one grid interval.
pub trait Stepper<T: Scalar> {
    /// Returns y at `grid[i + 1]` given `y` at `grid[i]`.
    /// grid: full sample grid (read-only)
    /// i: index of the current sample, `i + 1 < grid.len()`
    /// y: current value
    /// h: global step width captured from the grid's first spacing
    fn advance(&self, ode: &impl ScalarOde<T>, grid: &[T], i: usize, y: T, h: T) -> T;
}
