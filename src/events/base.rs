//! Core detector capability shared by atomic and composite detectors

use std::sync::Arc;

use super::error::Result;
use super::handler::EventHandler;
use super::settings::DetectorSettings;
use crate::state::State;
use crate::time::Epoch;

/// A g-function plus the parameters and handler an event search needs
///
/// The sign of [`g`](EventDetector::g) encodes a condition: positive is true.
/// An external search samples `g` along the trajectory, locates sign changes
/// and hands them to the [`handler`](EventDetector::handler). Atomic,
/// boolean and negated detectors are indistinguishable through this trait.
pub trait EventDetector<S: State>: Send + Sync {
    /// Evaluate the g-function on a state
    fn g(&self, state: &S) -> Result<f64>;

    /// Prepare for a search epoch starting at `s0` and heading to `target`
    ///
    /// Called before the first `g` of every epoch. Each call resets any
    /// per-epoch cache.
    fn init(&mut self, s0: &S, target: Epoch);

    /// Search parameters
    fn settings(&self) -> &DetectorSettings;

    /// Handler invoked on located events
    fn handler(&self) -> &Arc<dyn EventHandler<S>>;

    /// Rebuild with new search parameters and handler
    ///
    /// The evaluation logic is kept, the settings are taken verbatim.
    fn with_settings(self, settings: DetectorSettings, handler: Arc<dyn EventHandler<S>>) -> Self
    where
        Self: Sized;

    /// Maximum sampling interval (s)
    fn max_check_interval(&self) -> f64 {
        self.settings().max_check_interval()
    }

    /// Convergence threshold (s)
    fn threshold(&self) -> f64 {
        self.settings().threshold()
    }

    /// Maximum number of root refinement iterations
    fn max_iteration_count(&self) -> usize {
        self.settings().max_iteration_count()
    }

    /// Rebuild with a different handler
    fn with_handler(self, handler: Arc<dyn EventHandler<S>>) -> Self
    where
        Self: Sized,
    {
        let settings = *self.settings();
        self.with_settings(settings, handler)
    }

    /// Rebuild with a different maximum sampling interval
    fn with_max_check_interval(self, max_check_interval: f64) -> Result<Self>
    where
        Self: Sized,
    {
        let settings = self.settings().with_max_check_interval(max_check_interval)?;
        let handler = Arc::clone(self.handler());
        Ok(self.with_settings(settings, handler))
    }

    /// Rebuild with a different convergence threshold
    fn with_threshold(self, threshold: f64) -> Result<Self>
    where
        Self: Sized,
    {
        let settings = self.settings().with_threshold(threshold)?;
        let handler = Arc::clone(self.handler());
        Ok(self.with_settings(settings, handler))
    }

    /// Rebuild with a different iteration bound
    fn with_max_iteration_count(self, max_iteration_count: usize) -> Result<Self>
    where
        Self: Sized,
    {
        let settings = self.settings().with_max_iteration_count(max_iteration_count)?;
        let handler = Arc::clone(self.handler());
        Ok(self.with_settings(settings, handler))
    }
}
