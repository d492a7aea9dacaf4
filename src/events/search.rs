//! Reference event search over a sampled trajectory
//!
//! Samples a detector's g-function along a trajectory at most
//! `max_check_interval` apart, brackets sign changes and narrows them down by
//! bisection until the bracket is smaller than `threshold`. Integrators with
//! dense output normally own this loop; the locator is the minimal driver of
//! the detector contract.

use std::sync::Arc;

use tracing::{debug, warn};

use super::base::EventDetector;
use super::error::{EventError, Result};
use super::handler::Action;
use crate::state::State;
use crate::time::Epoch;

/// An event found by [`EventLocator`]
#[derive(Debug, Clone)]
pub struct EventOccurrence<S> {
    /// Epoch of the event, within `threshold` after the true root
    pub epoch: Epoch,
    /// State at `epoch`
    pub state: S,
    /// True if g went from negative to positive
    pub increasing: bool,
    /// Handler decision
    pub action: Action,
    /// Replacement state when the handler asked for [`Action::ResetState`]
    pub reset: Option<S>,
}

/// Drives a detector over a trajectory given as a function of time
pub struct EventLocator<P> {
    trajectory: P,
}

impl<S, P> EventLocator<P>
where
    S: State,
    P: FnMut(Epoch) -> S,
{
    /// Create a locator
    ///
    /// # Arguments
    /// * `trajectory` - Returns the state at any epoch of the search interval
    pub fn new(trajectory: P) -> Self {
        Self { trajectory }
    }

    /// Find all events of `detector` in `[start, end]`
    ///
    /// Initializes the detector, then scans forward. Stops early when the
    /// handler returns [`Action::Stop`].
    ///
    /// The trajectory is fixed, so [`Action::ResetState`] and
    /// [`Action::ResetDerivatives`] are only reported: the replacement state
    /// is returned in [`EventOccurrence::reset`] and the scan goes on along
    /// the original trajectory.
    pub fn locate<D>(&mut self, detector: &mut D, start: Epoch, end: Epoch) -> Result<Vec<EventOccurrence<S>>>
    where
        D: EventDetector<S>,
    {
        if end <= start {
            return Err(EventError::InvalidInterval { start, end });
        }

        let s0 = (self.trajectory)(start);
        detector.init(&s0, end);

        let step = detector.max_check_interval();
        let mut events = Vec::new();

        let mut t_a = start;
        let mut g_a = detector.g(&s0)?;

        while t_a < end {
            let mut t_b = if end.duration_from(t_a) > step { t_a.shifted_by(step) } else { end };
            if t_b <= t_a {
                // step below the epoch resolution
                let next = t_a.next_representable();
                t_b = if next < end { next } else { end };
            }
            let s_b = (self.trajectory)(t_b);
            let g_b = detector.g(&s_b)?;

            if crossed(g_a, g_b) {
                let (epoch, state) = self.refine(detector, (t_a, g_a), (t_b, g_b))?;
                let increasing = g_b > g_a;

                let handler = Arc::clone(detector.handler());
                let action = handler.event_occurred(&state, &*detector, increasing);
                let reset = match action {
                    Action::ResetState => Some(handler.reset_state(&*detector, &state)),
                    _ => None,
                };

                debug!(%epoch, increasing, ?action, "event located");
                events.push(EventOccurrence {
                    epoch,
                    state,
                    increasing,
                    action,
                    reset,
                });

                if action == Action::Stop {
                    return Ok(events);
                }
            }

            t_a = t_b;
            g_a = g_b;
        }

        Ok(events)
    }

    /// Bisect a bracketing interval down to the detector's threshold
    ///
    /// Returns the epoch and state at the end of the bracket that lies after
    /// the sign change.
    fn refine<D>(&mut self, detector: &D, a: (Epoch, f64), b: (Epoch, f64)) -> Result<(Epoch, S)>
    where
        D: EventDetector<S>,
    {
        let (mut t_a, mut g_a) = a;
        let (mut t_b, _) = b;
        let threshold = detector.threshold();
        let max_iter = detector.max_iteration_count();

        for _ in 0..max_iter {
            if t_b.duration_from(t_a) <= threshold {
                return Ok((t_b, (self.trajectory)(t_b)));
            }

            let t_m = t_a.shifted_by(0.5 * t_b.duration_from(t_a));
            if t_m <= t_a || t_m >= t_b {
                // bracket is one representable step wide
                return Ok((t_b, (self.trajectory)(t_b)));
            }
            let s_m = (self.trajectory)(t_m);
            let g_m = detector.g(&s_m)?;

            if g_m == 0.0 {
                return Ok((t_m, s_m));
            }
            if (g_m > 0.0) == (g_a > 0.0) {
                t_a = t_m;
                g_a = g_m;
            } else {
                t_b = t_m;
            }
        }

        if t_b.duration_from(t_a) <= threshold {
            return Ok((t_b, (self.trajectory)(t_b)));
        }

        warn!(iterations = max_iter, start = %t_a, end = %t_b, "event search did not converge");
        Err(EventError::ConvergenceFailure(max_iter))
    }
}

/// Sign change between two consecutive samples
///
/// Landing exactly on zero counts as a crossing; leaving zero does not, so a
/// root hit by a sample is reported once.
fn crossed(g_a: f64, g_b: f64) -> bool {
    (g_a < 0.0 && g_b >= 0.0) || (g_a > 0.0 && g_b <= 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossed() {
        assert!(crossed(-1.0, 1.0));
        assert!(crossed(1.0, -1.0));
        assert!(crossed(1.0, 0.0));
        assert!(!crossed(0.0, 1.0));
        assert!(!crossed(1.0, 2.0));
        assert!(!crossed(-1.0, -2.0));
    }
}
