//! Event detection for continuous trajectories
//!
//! Provides the detector capability, atomic detectors over leaf indicators,
//! AND / OR / NOT composition and a reference event locator.

mod atomic;
mod base;
mod boolean;
mod error;
mod handler;
mod indicator;
mod kind;
mod negate;
mod search;
mod settings;

pub use atomic::*;
pub use base::*;
pub use boolean::*;
pub use error::*;
pub use handler::*;
pub use indicator::*;
pub use kind::*;
pub use negate::*;
pub use search::*;
pub use settings::*;
