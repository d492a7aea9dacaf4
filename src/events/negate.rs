//! Logical NOT of a detector

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use super::base::EventDetector;
use super::error::Result;
use super::handler::{ContinueOnEvent, EventHandler};
use super::kind::Detector;
use super::settings::DetectorSettings;
use crate::state::State;
use crate::time::Epoch;

/// Detector whose g-function is the opposite of another detector's
///
/// Settings are copied from the wrapped detector; its handler is not used.
pub struct NegateDetector<S: State> {
    original: Box<Detector<S>>,
    settings: DetectorSettings,
    handler: Arc<dyn EventHandler<S>>,
}

impl<S: State> NegateDetector<S> {
    pub fn new(detector: impl Into<Detector<S>>) -> Self {
        let original: Detector<S> = detector.into();
        let settings = *original.settings();
        debug!(
            max_check = settings.max_check_interval(),
            threshold = settings.threshold(),
            max_iter = settings.max_iteration_count(),
            "composed negate detector"
        );

        Self {
            original: Box::new(original),
            settings,
            handler: Arc::new(ContinueOnEvent),
        }
    }

    /// The wrapped detector
    pub fn original(&self) -> &Detector<S> {
        &self.original
    }
}

impl<S: State> EventDetector<S> for NegateDetector<S> {
    fn g(&self, state: &S) -> Result<f64> {
        Ok(-self.original.g(state)?)
    }

    fn init(&mut self, s0: &S, target: Epoch) {
        trace!(%target, "init negate detector");
        self.handler.init(s0, target);
        self.original.init(s0, target);
    }

    fn settings(&self) -> &DetectorSettings {
        &self.settings
    }

    fn handler(&self) -> &Arc<dyn EventHandler<S>> {
        &self.handler
    }

    fn with_settings(self, settings: DetectorSettings, handler: Arc<dyn EventHandler<S>>) -> Self {
        Self {
            original: self.original,
            settings,
            handler,
        }
    }
}

impl<S: State> fmt::Debug for NegateDetector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NegateDetector")
            .field("original", &self.original)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{AtomicDetector, ComponentThreshold};
    use crate::state::TrajectoryState;

    #[test]
    fn test_negate_flips_sign_and_keeps_settings() {
        let inner = AtomicDetector::new(ComponentThreshold::new(0, 1.0))
            .with_threshold(1e-3)
            .unwrap();
        let not = NegateDetector::new(inner);

        let s = TrajectoryState::from_slice(Epoch::REFERENCE, &[4.0]);
        assert_eq!(not.g(&s).unwrap(), -3.0);
        assert_eq!(not.threshold(), 1e-3);
        assert_eq!(not.original().g(&s).unwrap(), 3.0);
    }

    #[test]
    fn test_negate_propagates_errors() {
        let not = NegateDetector::new(AtomicDetector::new(ComponentThreshold::new(3, 0.0)));
        let s = TrajectoryState::from_slice(Epoch::REFERENCE, &[4.0]);
        assert!(not.g(&s).is_err());
    }
}
