//! Trajectory state snapshots handed to detectors

use nalgebra::{DVector, Vector3};
use serde::{Deserialize, Serialize};

use crate::time::Epoch;

/// A snapshot of the simulated trajectory
///
/// Detectors treat states as opaque apart from their epoch; indicators may
/// inspect the concrete type they are written for.
pub trait State: Clone + Send + Sync + 'static {
    /// Epoch of the snapshot
    fn epoch(&self) -> Epoch;
}

/// General-purpose state: an epoch and a flat state vector
///
/// For orbital trajectories the first three components are taken to be the
/// position and the next three the velocity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryState {
    epoch: Epoch,
    y: DVector<f64>,
}

impl TrajectoryState {
    /// Create a new state
    pub fn new(epoch: Epoch, y: DVector<f64>) -> Self {
        Self { epoch, y }
    }

    /// Create a state from a slice of components
    pub fn from_slice(epoch: Epoch, y: &[f64]) -> Self {
        Self::new(epoch, DVector::from_column_slice(y))
    }

    /// State vector
    pub fn y(&self) -> &DVector<f64> {
        &self.y
    }

    /// Component `index` of the state vector, if present
    pub fn component(&self, index: usize) -> Option<f64> {
        self.y.get(index).copied()
    }

    /// Position (first three components), if the state is large enough
    pub fn position(&self) -> Option<Vector3<f64>> {
        if self.y.len() < 3 {
            return None;
        }
        Some(Vector3::new(self.y[0], self.y[1], self.y[2]))
    }
}

impl State for TrajectoryState {
    fn epoch(&self) -> Epoch {
        self.epoch
    }
}
