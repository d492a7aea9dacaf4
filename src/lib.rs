//! RustSim Events - composable event detectors for trajectory simulation
//!
//! Recognizes state-dependent occurrences (entering eclipse, crossing a
//! latitude, rising above a station horizon) while a simulated trajectory
//! advances continuously in time.
//!
//! # Architecture
//!
//! - A detector exposes a signed g-function (positive = condition holds),
//!   root search settings and a handler ([`events::EventDetector`])
//! - Atomic detectors wrap one leaf indicator ([`events::GFunction`])
//! - AND / OR fold operand values through min / max, NOT flips the sign
//! - Composite detectors look exactly like atomic ones to the search
//!
//! # Example
//!
//! ```rust,ignore
//! use rustsim_events::prelude::*;
//!
//! let above = AtomicDetector::new(ComponentThreshold::new(2, 0.0));
//! let outside = AtomicDetector::new(RadiusThreshold::new(6378.0));
//! let mut both = and![above, outside]?;
//!
//! let mut locator = EventLocator::new(|t| trajectory(t));
//! let events = locator.locate(&mut both, Epoch::REFERENCE, Epoch::from_seconds(86400.0))?;
//! ```

pub mod events;
#[macro_use]
pub mod macros;
pub mod state;
pub mod time;
pub mod utils;

pub use events::{BooleanDetector, Detector, EventDetector, EventError, NegateDetector};
pub use state::{State, TrajectoryState};
pub use time::Epoch;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::events::{
        Action, AtomicDetector, BooleanDetector, ComponentThreshold, ContinueOnEvent, Detector, DetectorSettings,
        EventDetector, EventError, EventHandler, EventLocator, EventOccurrence, FnIndicator, GFunction,
        NegateDetector, RadiusThreshold, RecordAndContinue, RecordedEvent, Reducer, StopOnDecreasing, StopOnEvent,
        StopOnIncreasing,
    };
    pub use crate::state::{State, TrajectoryState};
    pub use crate::time::Epoch;
    pub use crate::{and, or};
}
