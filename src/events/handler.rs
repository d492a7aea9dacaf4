//! Event handlers invoked when a detector's g-function crosses zero

use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use super::base::EventDetector;
use crate::state::State;
use crate::time::Epoch;

/// Decision returned by a handler once an event has been located
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Action {
    /// Stop the trajectory advance at the event
    Stop,
    /// Replace the state using [`EventHandler::reset_state`] and continue
    ResetState,
    /// Recompute derivatives and continue
    ResetDerivatives,
    /// Take no special action
    #[default]
    Continue,
}

/// Capability invoked by the event search when a root is found
pub trait EventHandler<S: State>: Send + Sync {
    /// Prepare for a new search epoch
    fn init(&self, s0: &S, target: Epoch) {
        let _ = (s0, target);
    }

    /// Decide what to do about an event
    ///
    /// `increasing` is true when the g-function goes from negative to
    /// positive at the event.
    fn event_occurred(&self, state: &S, detector: &dyn EventDetector<S>, increasing: bool) -> Action;

    /// New state after an [`Action::ResetState`] decision
    fn reset_state(&self, detector: &dyn EventDetector<S>, old_state: &S) -> S {
        let _ = detector;
        old_state.clone()
    }
}

/// Handler that always continues
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinueOnEvent;

impl<S: State> EventHandler<S> for ContinueOnEvent {
    fn event_occurred(&self, _state: &S, _detector: &dyn EventDetector<S>, _increasing: bool) -> Action {
        Action::Continue
    }
}

/// Handler that stops on every event
#[derive(Debug, Clone, Copy, Default)]
pub struct StopOnEvent;

impl<S: State> EventHandler<S> for StopOnEvent {
    fn event_occurred(&self, _state: &S, _detector: &dyn EventDetector<S>, _increasing: bool) -> Action {
        Action::Stop
    }
}

/// Handler that stops on increasing events only
#[derive(Debug, Clone, Copy, Default)]
pub struct StopOnIncreasing;

impl<S: State> EventHandler<S> for StopOnIncreasing {
    fn event_occurred(&self, _state: &S, _detector: &dyn EventDetector<S>, increasing: bool) -> Action {
        if increasing {
            Action::Stop
        } else {
            Action::Continue
        }
    }
}

/// Handler that stops on decreasing events only
#[derive(Debug, Clone, Copy, Default)]
pub struct StopOnDecreasing;

impl<S: State> EventHandler<S> for StopOnDecreasing {
    fn event_occurred(&self, _state: &S, _detector: &dyn EventDetector<S>, increasing: bool) -> Action {
        if increasing {
            Action::Continue
        } else {
            Action::Stop
        }
    }
}

/// An event seen by [`RecordAndContinue`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    pub epoch: Epoch,
    pub increasing: bool,
}

/// Handler that records every event and continues
///
/// The log is cleared at each `init`, so it holds the events of the latest
/// search epoch only. Share it through an `Arc` to read the log back.
#[derive(Debug, Default)]
pub struct RecordAndContinue {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordAndContinue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in detection order
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.lock().clone()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if no events have been recorded
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Forget all recorded events
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<RecordedEvent>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<S: State> EventHandler<S> for RecordAndContinue {
    fn init(&self, _s0: &S, _target: Epoch) {
        self.clear();
    }

    fn event_occurred(&self, state: &S, _detector: &dyn EventDetector<S>, increasing: bool) -> Action {
        self.lock().push(RecordedEvent {
            epoch: state.epoch(),
            increasing,
        });
        Action::Continue
    }
}
