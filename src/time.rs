//! Simulation epochs
//!
//! Epochs are expressed as seconds elapsed from the simulation reference
//! instant. Time scale conversion is left to the caller.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An instant on the simulation time line
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Epoch(f64);

impl Epoch {
    /// The reference instant
    pub const REFERENCE: Epoch = Epoch(0.0);

    /// Create an epoch from seconds past the reference instant
    pub const fn from_seconds(seconds: f64) -> Self {
        Self(seconds)
    }

    /// Seconds past the reference instant
    pub fn seconds(&self) -> f64 {
        self.0
    }

    /// Epoch shifted by `dt` seconds (negative values go back in time)
    pub fn shifted_by(&self, dt: f64) -> Self {
        Self(self.0 + dt)
    }

    /// Smallest epoch strictly after `self`
    ///
    /// Far from the reference instant the spacing between representable
    /// epochs grows past sub-microsecond steps.
    pub fn next_representable(&self) -> Self {
        let x = self.0;
        if x.is_nan() || x == f64::INFINITY {
            return *self;
        }
        if x == 0.0 {
            return Self(f64::from_bits(1));
        }
        let bits = x.to_bits();
        Self(f64::from_bits(if x > 0.0 { bits + 1 } else { bits - 1 }))
    }

    /// Signed duration `self - other` in seconds
    pub fn duration_from(&self, other: Epoch) -> f64 {
        self.0 - other.0
    }
}

impl From<f64> for Epoch {
    fn from(seconds: f64) -> Self {
        Self(seconds)
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t+{}s", self.0)
    }
}
