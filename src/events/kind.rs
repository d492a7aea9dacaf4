//! Detector enum for uniform storage of heterogeneous detectors
//!
//! Composite detectors own their operands as [`Detector`] values. The set of
//! variants is closed, so dispatch is a plain `match`.

use std::fmt;
use std::sync::Arc;

use super::atomic::AtomicDetector;
use super::base::EventDetector;
use super::boolean::BooleanDetector;
use super::error::Result;
use super::handler::EventHandler;
use super::negate::NegateDetector;
use super::settings::DetectorSettings;
use crate::state::State;
use crate::time::Epoch;

/// Delegate an [`EventDetector`] method to the wrapped detector
macro_rules! dispatch_method {
    ($self:ident, $method:ident, $($args:expr),*) => {
        match $self {
            Detector::Atomic(d) => d.$method($($args),*),
            Detector::Boolean(d) => d.$method($($args),*),
            Detector::Negate(d) => d.$method($($args),*),
        }
    };
}

/// Any detector the composition algebra can produce
pub enum Detector<S: State> {
    /// A single indicator
    Atomic(AtomicDetector<S>),
    /// AND / OR of several detectors
    Boolean(BooleanDetector<S>),
    /// Sign-flipped detector
    Negate(NegateDetector<S>),
}

impl<S: State> EventDetector<S> for Detector<S> {
    fn g(&self, state: &S) -> Result<f64> {
        dispatch_method!(self, g, state)
    }

    fn init(&mut self, s0: &S, target: Epoch) {
        dispatch_method!(self, init, s0, target)
    }

    fn settings(&self) -> &DetectorSettings {
        dispatch_method!(self, settings,)
    }

    fn handler(&self) -> &Arc<dyn EventHandler<S>> {
        dispatch_method!(self, handler,)
    }

    fn with_settings(self, settings: DetectorSettings, handler: Arc<dyn EventHandler<S>>) -> Self {
        match self {
            Detector::Atomic(d) => Detector::Atomic(d.with_settings(settings, handler)),
            Detector::Boolean(d) => Detector::Boolean(d.with_settings(settings, handler)),
            Detector::Negate(d) => Detector::Negate(d.with_settings(settings, handler)),
        }
    }
}

impl<S: State> From<AtomicDetector<S>> for Detector<S> {
    fn from(d: AtomicDetector<S>) -> Self {
        Detector::Atomic(d)
    }
}

impl<S: State> From<BooleanDetector<S>> for Detector<S> {
    fn from(d: BooleanDetector<S>) -> Self {
        Detector::Boolean(d)
    }
}

impl<S: State> From<NegateDetector<S>> for Detector<S> {
    fn from(d: NegateDetector<S>) -> Self {
        Detector::Negate(d)
    }
}

impl<S: State> fmt::Debug for Detector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Detector::Atomic(d) => fmt::Debug::fmt(d, f),
            Detector::Boolean(d) => fmt::Debug::fmt(d, f),
            Detector::Negate(d) => fmt::Debug::fmt(d, f),
        }
    }
}
