//! Leaf indicator functions
//!
//! An indicator is the physical or geometric part of an atomic detector: a
//! signed scalar whose sign tells whether a condition holds. Physical models
//! plug in here by implementing [`GFunction`].

use super::error::{EventError, Result};
use crate::state::{State, TrajectoryState};
use crate::time::Epoch;

/// Signed scalar function of the trajectory state
pub trait GFunction<S: State>: Send + Sync {
    /// Name used in error reports and logs
    fn name(&self) -> &str;

    /// Evaluate the indicator, positive meaning the condition holds
    fn g(&self, state: &S) -> Result<f64>;

    /// Cache state-independent quantities for a new search epoch
    fn init(&mut self, s0: &S, target: Epoch) {
        let _ = (s0, target);
    }
}

/// Indicator backed by a closure
///
/// # Example
///
/// ```ignore
/// // Positive after t = 10 s
/// let late = FnIndicator::new("late", |s: &TrajectoryState| Ok(s.epoch().seconds() - 10.0));
/// ```
pub struct FnIndicator<F> {
    name: String,
    func: F,
}

impl<F> FnIndicator<F> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<S, F> GFunction<S> for FnIndicator<F>
where
    S: State,
    F: Fn(&S) -> Result<f64> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn g(&self, state: &S) -> Result<f64> {
        (self.func)(state)
    }
}

/// `y[index] - level`: positive while a state component is above a level
///
/// Region-style indicator for latitude, altitude or any other crossing that
/// maps onto a single state component.
#[derive(Debug, Clone)]
pub struct ComponentThreshold {
    name: String,
    index: usize,
    level: f64,
}

impl ComponentThreshold {
    pub fn new(index: usize, level: f64) -> Self {
        Self {
            name: format!("y[{index}] > {level}"),
            index,
            level,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn level(&self) -> f64 {
        self.level
    }
}

impl GFunction<TrajectoryState> for ComponentThreshold {
    fn name(&self) -> &str {
        &self.name
    }

    fn g(&self, state: &TrajectoryState) -> Result<f64> {
        let value = state.component(self.index).ok_or_else(|| {
            EventError::indicator(
                self.name.clone(),
                format!("state has {} components", state.y().len()),
            )
        })?;
        Ok(value - self.level)
    }
}

/// `|r| - radius`: positive while the position lies outside a sphere
#[derive(Debug, Clone)]
pub struct RadiusThreshold {
    name: String,
    radius: f64,
}

impl RadiusThreshold {
    pub fn new(radius: f64) -> Self {
        Self {
            name: format!("|r| > {radius}"),
            radius,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl GFunction<TrajectoryState> for RadiusThreshold {
    fn name(&self) -> &str {
        &self.name
    }

    fn g(&self, state: &TrajectoryState) -> Result<f64> {
        let r = state
            .position()
            .ok_or_else(|| EventError::indicator(self.name.clone(), "state has no position"))?;
        Ok(r.norm() - self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_component_threshold() {
        let ind = ComponentThreshold::new(1, 2.0);
        let s = TrajectoryState::from_slice(Epoch::REFERENCE, &[0.0, 5.0]);

        assert_relative_eq!(ind.g(&s).unwrap(), 3.0);
        assert_eq!(ind.name(), "y[1] > 2");
    }

    #[test]
    fn test_component_threshold_missing_component() {
        let ind = ComponentThreshold::new(4, 0.0);
        let s = TrajectoryState::from_slice(Epoch::REFERENCE, &[0.0, 5.0]);

        assert!(matches!(ind.g(&s), Err(EventError::Indicator { .. })));
    }

    #[test]
    fn test_radius_threshold() {
        let ind = RadiusThreshold::new(6378.0);
        let inside = TrajectoryState::from_slice(Epoch::REFERENCE, &[6000.0, 0.0, 0.0]);
        let outside = TrajectoryState::from_slice(Epoch::REFERENCE, &[0.0, 7000.0, 0.0, 1.0, 0.0, 0.0]);

        assert_relative_eq!(ind.g(&inside).unwrap(), -378.0, epsilon = 1e-9);
        assert_relative_eq!(ind.g(&outside).unwrap(), 622.0, epsilon = 1e-9);

        let flat = TrajectoryState::from_slice(Epoch::REFERENCE, &[1.0]);
        assert!(ind.g(&flat).is_err());
    }

    #[test]
    fn test_fn_indicator() {
        let ind = FnIndicator::new("late", |s: &TrajectoryState| Ok(s.epoch().seconds() - 10.0));
        let s = TrajectoryState::from_slice(Epoch::from_seconds(12.0), &[]);

        assert_eq!(GFunction::<TrajectoryState>::name(&ind), "late");
        assert_relative_eq!(ind.g(&s).unwrap(), 2.0);
    }
}
