//! Event search constants and defaults

/// Default maximum interval between two g-function samples (seconds)
pub const EVT_MAX_CHECK: f64 = 600.0;

/// Default convergence threshold for event localization (seconds)
pub const EVT_THRESHOLD: f64 = 1e-6;

/// Default maximum number of root refinement iterations
pub const EVT_ITERATIONS_MAX: usize = 100;
