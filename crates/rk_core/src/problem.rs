//! The reference initial-value problem y' = x + y, y(0) = 1 and its setup.

use crate::error::ConfigError;
use crate::grid::{build_grid, Grid};
use crate::traits::{ExactSolution, Scalar, ScalarOde};
use serde::{Deserialize, Serialize};

/// y' = x + y, whose solution through y(0) = 1 is y = 2e^x - x - 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearGrowth;

impl<T: Scalar> ScalarOde<T> for LinearGrowth {
    fn rhs(&self, x: T, y: T) -> T {
        x + y
    }
}

impl<T: Scalar> ExactSolution<T> for LinearGrowth {
    fn exact(&self, x: T) -> T {
        let one = T::one();
        let two = T::from_f64(2.0).unwrap();
        two * x.exp() - x - one
    }
}

/// Known value of the solution at one grid index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialCondition<T> {
    pub index: usize,
    pub value: T,
}

impl<T> InitialCondition<T> {
    pub fn new(index: usize, value: T) -> Self {
        Self { index, value }
    }
}

/// Grid bounds and initial condition for one problem instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemConfig {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
    pub x0_index: usize,
    pub y0: f64,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            stop: 4.0,
            step: 3.0,
            x0_index: 0,
            y0: 1.0,
        }
    }
}

impl ProblemConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [("start", self.start), ("stop", self.stop)] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteBound { name, value });
            }
        }
        if self.step <= 0.0 || !self.step.is_finite() {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        if self.stop < self.start {
            return Err(ConfigError::ReversedBounds {
                start: self.start,
                stop: self.stop,
            });
        }
        if !self.y0.is_finite() {
            return Err(ConfigError::NonFiniteInitialValue(self.y0));
        }
        Ok(())
    }

    pub fn grid(&self) -> Grid<f64> {
        build_grid(self.start, self.stop, self.step)
    }

    pub fn initial_condition(&self) -> InitialCondition<f64> {
        InitialCondition::new(self.x0_index, self.y0)
    }
}

#[cfg(test)]
mod tests {
    use super::{LinearGrowth, ProblemConfig};
    use crate::error::ConfigError;
    use crate::traits::{ExactSolution, ScalarOde};

    #[test]
    fn rhs_adds_abscissa_and_state() {
        let ode = LinearGrowth;
        assert_eq!(ScalarOde::<f64>::rhs(&ode, 3.0, 4.0), 7.0);
        assert_eq!(ScalarOde::<f64>::rhs(&ode, -1.5, 0.5), -1.0);
    }

    #[test]
    fn exact_solution_matches_closed_form() {
        let ode = LinearGrowth;
        for x in [0.0_f64, 0.5, 3.0, 6.0] {
            let expected = 2.0 * x.exp() - x - 1.0;
            assert!((ode.exact(x) - expected).abs() < 1e-9);
        }
        assert_eq!(ExactSolution::<f64>::exact(&ode, 0.0), 1.0);
    }

    #[test]
    fn exact_solution_satisfies_the_ode() {
        let ode = LinearGrowth;
        let x = 1.25_f64;
        let eps = 1e-6;
        let derivative = (ode.exact(x + eps) - ode.exact(x - eps)) / (2.0 * eps);
        assert!((derivative - ode.rhs(x, ode.exact(x))).abs() < 1e-6);
    }

    #[test]
    fn default_config_reproduces_coarse_grid() {
        let config = ProblemConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid().points(), &[0.0, 3.0]);
        let ic = config.initial_condition();
        assert_eq!((ic.index, ic.value), (0, 1.0));
    }

    #[test]
    fn validate_rejects_bad_configs() {
        let bad_step = ProblemConfig { step: 0.0, ..ProblemConfig::default() };
        assert_eq!(bad_step.validate(), Err(ConfigError::NonPositiveStep(0.0)));

        let reversed = ProblemConfig { start: 5.0, ..ProblemConfig::default() };
        assert!(matches!(
            reversed.validate(),
            Err(ConfigError::ReversedBounds { .. })
        ));

        let infinite = ProblemConfig { stop: f64::INFINITY, ..ProblemConfig::default() };
        let message = infinite.validate().unwrap_err().to_string();
        assert!(message.contains("stop"), "got \"{message}\"");

        let nan_y0 = ProblemConfig { y0: f64::NAN, ..ProblemConfig::default() };
        assert!(matches!(
            nan_y0.validate(),
            Err(ConfigError::NonFiniteInitialValue(_))
        ));
    }
}
