pub mod comparison;
pub mod error;
pub mod grid;
pub mod problem;
pub mod solvers;
/// The `rk_core` crate computes fixed-step Runge-Kutta approximations of the
/// initial-value problem y' = x + y, y(0) = 1 and pairs them with its exact
/// solution for comparison.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `ScalarOde`/`ExactSolution` (the problem), `Stepper` (one step of a method).
/// - **Grid**: ceiling-sized sample grid of the independent variable.
/// - **Solvers**: Euler, midpoint-style, Kutta3 and RK4 steppers with a shared integration loop.
/// - **Comparison**: labelled (x, y) series for the exact solution and each method.
pub mod traits;

pub use comparison::{compare, compare_on_grid, Comparison, SamplePoint, Series};
pub use error::{ConfigError, SolveError};
pub use grid::{build_grid, Grid};
pub use problem::{InitialCondition, LinearGrowth, ProblemConfig};
pub use solvers::Method;
