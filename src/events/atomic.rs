//! Atomic detector: one indicator bound to search parameters and a handler

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::base::EventDetector;
use super::error::Result;
use super::handler::{ContinueOnEvent, EventHandler};
use super::indicator::{FnIndicator, GFunction};
use super::settings::DetectorSettings;
use crate::state::State;
use crate::time::Epoch;

/// Detector wrapping a single [`GFunction`]
pub struct AtomicDetector<S: State> {
    indicator: Box<dyn GFunction<S>>,
    settings: DetectorSettings,
    handler: Arc<dyn EventHandler<S>>,
}

impl<S: State> AtomicDetector<S> {
    /// Create a detector with default settings and a [`ContinueOnEvent`] handler
    pub fn new(indicator: impl GFunction<S> + 'static) -> Self {
        Self {
            indicator: Box::new(indicator),
            settings: DetectorSettings::default(),
            handler: Arc::new(ContinueOnEvent),
        }
    }

    /// Create a detector from a closure
    pub fn from_fn<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&S) -> Result<f64> + Send + Sync + 'static,
    {
        Self::new(FnIndicator::new(name, func))
    }

    /// Name of the wrapped indicator
    pub fn name(&self) -> &str {
        self.indicator.name()
    }
}

impl<S: State> EventDetector<S> for AtomicDetector<S> {
    fn g(&self, state: &S) -> Result<f64> {
        self.indicator.g(state)
    }

    fn init(&mut self, s0: &S, target: Epoch) {
        trace!(indicator = self.indicator.name(), %target, "init atomic detector");
        self.handler.init(s0, target);
        self.indicator.init(s0, target);
    }

    fn settings(&self) -> &DetectorSettings {
        &self.settings
    }

    fn handler(&self) -> &Arc<dyn EventHandler<S>> {
        &self.handler
    }

    fn with_settings(self, settings: DetectorSettings, handler: Arc<dyn EventHandler<S>>) -> Self {
        Self {
            indicator: self.indicator,
            settings,
            handler,
        }
    }
}

impl<S: State> fmt::Debug for AtomicDetector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicDetector")
            .field("indicator", &self.indicator.name())
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::handler::StopOnEvent;
    use crate::events::indicator::ComponentThreshold;
    use crate::state::TrajectoryState;

    #[test]
    fn test_atomic_defaults() {
        let d = AtomicDetector::new(ComponentThreshold::new(0, 1.0));

        assert_eq!(d.name(), "y[0] > 1");
        assert_eq!(*d.settings(), DetectorSettings::default());

        let s = TrajectoryState::from_slice(Epoch::REFERENCE, &[3.0]);
        assert_eq!(d.g(&s).unwrap(), 2.0);
    }

    #[test]
    fn test_atomic_rebuild() {
        let d = AtomicDetector::new(ComponentThreshold::new(0, 1.0))
            .with_max_check_interval(30.0)
            .and_then(|d| d.with_threshold(1e-3))
            .and_then(|d| d.with_max_iteration_count(7))
            .unwrap()
            .with_handler(Arc::new(StopOnEvent));

        assert_eq!(d.max_check_interval(), 30.0);
        assert_eq!(d.threshold(), 1e-3);
        assert_eq!(d.max_iteration_count(), 7);

        let s = TrajectoryState::from_slice(Epoch::REFERENCE, &[0.5]);
        assert_eq!(d.g(&s).unwrap(), -0.5);
    }

    #[test]
    fn test_atomic_rejects_bad_override() {
        let d = AtomicDetector::new(ComponentThreshold::new(0, 1.0));
        assert!(d.with_threshold(0.0).is_err());
    }
}
