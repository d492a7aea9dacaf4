//! Event search parameters shared by every detector

use serde::{Deserialize, Serialize};

use super::error::{EventError, Result};
use crate::utils::constants::{EVT_ITERATIONS_MAX, EVT_MAX_CHECK, EVT_THRESHOLD};

/// Parameters steering the root search of a detector
///
/// All three values are strictly positive (and finite) for every instance;
/// the constructor and deserialization both reject anything else, so a
/// detector can never carry unusable settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDetectorSettings")]
pub struct DetectorSettings {
    max_check_interval: f64,
    threshold: f64,
    max_iteration_count: usize,
}

impl DetectorSettings {
    /// Create validated settings
    ///
    /// # Arguments
    /// * `max_check_interval` - Largest spacing between two g-function samples (s)
    /// * `threshold` - Convergence tolerance of the root search (s)
    /// * `max_iteration_count` - Bound on root refinement iterations
    pub fn new(max_check_interval: f64, threshold: f64, max_iteration_count: usize) -> Result<Self> {
        Ok(Self {
            max_check_interval: check_positive("max_check_interval", max_check_interval)?,
            threshold: check_positive("threshold", threshold)?,
            max_iteration_count: check_count(max_iteration_count)?,
        })
    }

    /// Maximum sampling interval (s)
    pub fn max_check_interval(&self) -> f64 {
        self.max_check_interval
    }

    /// Convergence threshold (s)
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Maximum number of root refinement iterations
    pub fn max_iteration_count(&self) -> usize {
        self.max_iteration_count
    }

    /// Copy with a different maximum sampling interval
    pub fn with_max_check_interval(self, max_check_interval: f64) -> Result<Self> {
        Self::new(max_check_interval, self.threshold, self.max_iteration_count)
    }

    /// Copy with a different convergence threshold
    pub fn with_threshold(self, threshold: f64) -> Result<Self> {
        Self::new(self.max_check_interval, threshold, self.max_iteration_count)
    }

    /// Copy with a different iteration bound
    pub fn with_max_iteration_count(self, max_iteration_count: usize) -> Result<Self> {
        Self::new(self.max_check_interval, self.threshold, max_iteration_count)
    }

    /// Elementwise minimum of a set of settings
    ///
    /// A composite must search at least as carefully as its most demanding
    /// operand. Returns `None` for an empty set.
    pub fn most_stringent<'a, I>(settings: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a DetectorSettings>,
    {
        settings.into_iter().copied().reduce(|acc, s| Self {
            max_check_interval: acc.max_check_interval.min(s.max_check_interval),
            threshold: acc.threshold.min(s.threshold),
            max_iteration_count: acc.max_iteration_count.min(s.max_iteration_count),
        })
    }
}

impl Default for DetectorSettings {
    fn default() -> Self {
        Self {
            max_check_interval: EVT_MAX_CHECK,
            threshold: EVT_THRESHOLD,
            max_iteration_count: EVT_ITERATIONS_MAX,
        }
    }
}

/// Unvalidated settings as read from configuration
#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawDetectorSettings {
    max_check_interval: f64,
    threshold: f64,
    max_iteration_count: usize,
}

impl Default for RawDetectorSettings {
    fn default() -> Self {
        Self {
            max_check_interval: EVT_MAX_CHECK,
            threshold: EVT_THRESHOLD,
            max_iteration_count: EVT_ITERATIONS_MAX,
        }
    }
}

impl TryFrom<RawDetectorSettings> for DetectorSettings {
    type Error = EventError;

    fn try_from(raw: RawDetectorSettings) -> Result<Self> {
        Self::new(raw.max_check_interval, raw.threshold, raw.max_iteration_count)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EventError::InvalidSettings { name, value })
    }
}

fn check_count(value: usize) -> Result<usize> {
    if value > 0 {
        Ok(value)
    } else {
        Err(EventError::InvalidSettings {
            name: "max_iteration_count",
            value: 0.0,
        })
    }
}
