use crate::error::SolveError;
use crate::grid::Grid;
use crate::problem::InitialCondition;
use crate::traits::{Scalar, ScalarOde, Stepper};
use serde::{Deserialize, Serialize};

/// Explicit Euler. Uses the local grid spacing instead of the global step,
/// so it also works on non-uniform grids.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl<T: Scalar> Stepper<T> for Euler {
    fn advance(&self, ode: &impl ScalarOde<T>, grid: &[T], i: usize, y: T, _h: T) -> T {
        y + ode.rhs(grid[i], y) * (grid[i + 1] - grid[i])
    }
}

/// Two-stage midpoint-style method.
///
/// The second stage passes the perturbed state as the abscissa and the
/// perturbed abscissa as the state. Outputs depend on that argument order,
/// so it must not be swapped back to the textbook midpoint rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Midpoint;

impl<T: Scalar> Stepper<T> for Midpoint {
    fn advance(&self, ode: &impl ScalarOde<T>, grid: &[T], i: usize, y: T, h: T) -> T {
        let half = T::from_f64(0.5).unwrap();

        let k1 = h * ode.rhs(grid[i], y) * half;

        y + h * ode.rhs(y + k1, grid[i] + h * half)
    }
}

/// Kutta's third-order method, weights 1, 4, 1 over 6.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kutta3;

impl<T: Scalar> Stepper<T> for Kutta3 {
    fn advance(&self, ode: &impl ScalarOde<T>, grid: &[T], i: usize, y: T, h: T) -> T {
        let two = T::from_f64(2.0).unwrap();
        let four = T::from_f64(4.0).unwrap();
        let sixth = T::from_f64(1.0 / 6.0).unwrap();
        let x = grid[i];

        // k1 = h*f(x, y)
        let k1 = h * ode.rhs(x, y);
        // k2 = h*f(x + h/2, y + k1/2)
        let k2 = h * ode.rhs(x + h / two, y + k1 / two);
        // k3 = h*f(x + h, y - k1 + 2k2)
        let k3 = h * ode.rhs(x + h, y - k1 + two * k2);

        y + sixth * (k1 + four * k2 + k3)
    }
}

/// Classic Runge-Kutta 4th Order Solver
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4;

impl<T: Scalar> Stepper<T> for RK4 {
    fn advance(&self, ode: &impl ScalarOde<T>, grid: &[T], i: usize, y: T, h: T) -> T {
        let two = T::from_f64(2.0).unwrap();
        let six = T::from_f64(6.0).unwrap();
        let x = grid[i];

        // k1 = h*f(x, y)
        let k1 = h * ode.rhs(x, y);
        // k2 = h*f(x + h/2, y + k1/2)
        let k2 = h * ode.rhs(x + h / two, y + k1 / two);
        // k3 = h*f(x + h/2, y + k2/2)
        let k3 = h * ode.rhs(x + h / two, y + k2 / two);
        // k4 = h*f(x + h, y + k3)
        let k4 = h * ode.rhs(x + h, y + k3);

        // y_next = y + (k1 + 2k2 + 2k3 + k4)/6
        let k = (k1 + two * k2 + two * k3 + k4) / six;
        y + k
    }
}

/// Seeds the solution at the initial-condition index and steps forward to
/// the end of the grid.
///
/// Entries before the seeded index stay zero. Empty and single-point grids
/// return without stepping.
pub fn integrate<T, S, O>(
    stepper: &S,
    ode: &O,
    grid: &[T],
    initial: InitialCondition<T>,
    h: T,
) -> Result<Vec<T>, SolveError>
where
    T: Scalar,
    S: Stepper<T>,
    O: ScalarOde<T>,
{
    let len = grid.len();
    if len == 0 {
        return Ok(Vec::new());
    }
    if initial.index >= len {
        return Err(SolveError::InitialIndexOutOfRange {
            index: initial.index,
            len,
        });
    }

    let mut result = vec![T::zero(); len];
    result[initial.index] = initial.value;

    for i in initial.index..len - 1 {
        result[i + 1] = stepper.advance(ode, grid, i, result[i], h);
    }

    Ok(result)
}

pub fn integrate_order1<T: Scalar>(
    ode: &impl ScalarOde<T>,
    grid: &[T],
    initial: InitialCondition<T>,
) -> Result<Vec<T>, SolveError> {
    integrate(&Euler, ode, grid, initial, T::zero())
}

pub fn integrate_order2<T: Scalar>(
    ode: &impl ScalarOde<T>,
    grid: &[T],
    initial: InitialCondition<T>,
    h: T,
) -> Result<Vec<T>, SolveError> {
    integrate(&Midpoint, ode, grid, initial, h)
}

pub fn integrate_order3<T: Scalar>(
    ode: &impl ScalarOde<T>,
    grid: &[T],
    initial: InitialCondition<T>,
    h: T,
) -> Result<Vec<T>, SolveError> {
    integrate(&Kutta3, ode, grid, initial, h)
}

pub fn integrate_order4<T: Scalar>(
    ode: &impl ScalarOde<T>,
    grid: &[T],
    initial: InitialCondition<T>,
    h: T,
) -> Result<Vec<T>, SolveError> {
    integrate(&RK4, ode, grid, initial, h)
}

/// The four fixed-step methods, in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    Order1,
    Order2,
    Order3,
    Order4,
}

impl Method {
    pub const ALL: [Method; 4] = [Method::Order1, Method::Order2, Method::Order3, Method::Order4];

    pub fn order(self) -> usize {
        match self {
            Method::Order1 => 1,
            Method::Order2 => 2,
            Method::Order3 => 3,
            Method::Order4 => 4,
        }
    }

    /// Legend label used on the comparison chart.
    pub fn label(self) -> &'static str {
        match self {
            Method::Order1 => "Runge-Kutta-1th",
            Method::Order2 => "Runge-Kutta-2th",
            Method::Order3 => "Runge-Kutta-3th",
            Method::Order4 => "Runge-Kutta-4th",
        }
    }

    /// Integrates over `grid`, taking the global step from the grid's first
    /// spacing (zero when the grid has fewer than two points).
    pub fn solve<T: Scalar>(
        self,
        ode: &impl ScalarOde<T>,
        grid: &Grid<T>,
        initial: InitialCondition<T>,
    ) -> Result<Vec<T>, SolveError> {
        let h = grid.step_width().unwrap_or_else(T::zero);
        match self {
            Method::Order1 => integrate_order1(ode, grid, initial),
            Method::Order2 => integrate_order2(ode, grid, initial, h),
            Method::Order3 => integrate_order3(ode, grid, initial, h),
            Method::Order4 => integrate_order4(ode, grid, initial, h),
        }
    }
}
