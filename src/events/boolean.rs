//! Logical AND / OR composition of detectors
//!
//! Positive g values are read as true, negative as false. The AND of several
//! detectors is the minimum of their g values, the OR is the maximum. This
//! works for detectors whose sign carries a meaning (inside/outside a region,
//! above/below a level), e.g. "satellite above the station horizon AND ground
//! point sunlit". Detectors whose sign is arbitrary, such as pure date
//! triggers, give surprising results when combined this way.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::base::EventDetector;
use super::error::{EventError, Result};
use super::handler::{ContinueOnEvent, EventHandler};
use super::kind::Detector;
use super::negate::NegateDetector;
use super::settings::DetectorSettings;
use crate::state::State;
use crate::time::Epoch;

/// Reduction applied to the operands' g values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Reducer {
    /// Logical AND
    Min,
    /// Logical OR
    Max,
}

impl Reducer {
    /// Combine an accumulated value with the next operand's value
    ///
    /// NaN in either argument yields NaN.
    #[inline]
    pub fn apply(self, acc: f64, value: f64) -> f64 {
        if acc.is_nan() || value.is_nan() {
            return f64::NAN;
        }
        match self {
            Reducer::Min => acc.min(value),
            Reducer::Max => acc.max(value),
        }
    }

    /// Boolean operator implemented by this reducer
    pub fn as_str(&self) -> &'static str {
        match self {
            Reducer::Min => "AND",
            Reducer::Max => "OR",
        }
    }
}

impl fmt::Display for Reducer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AND / OR of an ordered, non-empty list of detectors
///
/// The search parameters are the most stringent (minimum) of the operands'
/// parameters. The operands' handlers are not used; the composite starts
/// with [`ContinueOnEvent`].
///
/// # Example
///
/// ```ignore
/// let visible_and_lit = BooleanDetector::and([elevation, sunlit])?;
/// let any_station = or![station_a, station_b, station_c]?;
/// ```
pub struct BooleanDetector<S: State> {
    operands: Vec<Detector<S>>,
    reducer: Reducer,
    settings: DetectorSettings,
    handler: Arc<dyn EventHandler<S>>,
}

impl<S: State> BooleanDetector<S> {
    /// Logical AND: g is positive iff every operand's g is positive
    ///
    /// # Errors
    /// [`EventError::EmptyOperandSet`] if `detectors` is empty.
    pub fn and<I, D>(detectors: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<Detector<S>>,
    {
        Self::compose(detectors, Reducer::Min)
    }

    /// Logical OR: g is positive iff at least one operand's g is positive
    ///
    /// # Errors
    /// [`EventError::EmptyOperandSet`] if `detectors` is empty.
    pub fn or<I, D>(detectors: I) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<Detector<S>>,
    {
        Self::compose(detectors, Reducer::Max)
    }

    /// Logical NOT: same magnitude, opposite sign
    pub fn not(detector: impl Into<Detector<S>>) -> NegateDetector<S> {
        NegateDetector::new(detector)
    }

    fn compose<I, D>(detectors: I, reducer: Reducer) -> Result<Self>
    where
        I: IntoIterator<Item = D>,
        D: Into<Detector<S>>,
    {
        let operands: Vec<Detector<S>> = detectors.into_iter().map(Into::into).collect();
        let settings = DetectorSettings::most_stringent(operands.iter().map(|d| d.settings()))
            .ok_or(EventError::EmptyOperandSet { operator: reducer })?;

        debug!(
            operator = %reducer,
            operands = operands.len(),
            max_check = settings.max_check_interval(),
            threshold = settings.threshold(),
            max_iter = settings.max_iteration_count(),
            "composed boolean detector"
        );

        Ok(Self {
            operands,
            reducer,
            settings,
            handler: Arc::new(ContinueOnEvent),
        })
    }

    /// Operands in evaluation order
    pub fn operands(&self) -> &[Detector<S>] {
        &self.operands
    }

    /// Reduction applied to the operands
    pub fn reducer(&self) -> Reducer {
        self.reducer
    }
}

impl<S: State> EventDetector<S> for BooleanDetector<S> {
    fn g(&self, state: &S) -> Result<f64> {
        let Some((first, rest)) = self.operands.split_first() else {
            return Err(EventError::EmptyOperandSet {
                operator: self.reducer,
            });
        };

        // Every operand is evaluated, in order, even once the sign is settled.
        rest.iter()
            .try_fold(first.g(state)?, |acc, d| Ok(self.reducer.apply(acc, d.g(state)?)))
    }

    fn init(&mut self, s0: &S, target: Epoch) {
        trace!(operator = %self.reducer, operands = self.operands.len(), %target, "init boolean detector");
        self.handler.init(s0, target);
        for d in &mut self.operands {
            d.init(s0, target);
        }
    }

    fn settings(&self) -> &DetectorSettings {
        &self.settings
    }

    fn handler(&self) -> &Arc<dyn EventHandler<S>> {
        &self.handler
    }

    fn with_settings(self, settings: DetectorSettings, handler: Arc<dyn EventHandler<S>>) -> Self {
        Self {
            operands: self.operands,
            reducer: self.reducer,
            settings,
            handler,
        }
    }
}

impl<S: State> fmt::Debug for BooleanDetector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BooleanDetector")
            .field("reducer", &self.reducer)
            .field("operands", &self.operands)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}
