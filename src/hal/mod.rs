//! Hardware Abstraction Layer implementations.
//!
//! This module contains concrete implementations of the traits
//! defined in [`crate::traits`].
//!
//! # Available Implementations
//!
//! - `mock`: Scripted pin samples for tests and desktop development
//! - `gpio`: Two `embedded-hal` 1.0 input pins (requires `hal` feature)

pub mod mock;

#[cfg(feature = "hal")]
pub mod gpio;

pub use mock::*;

#[cfg(feature = "hal")]
pub use gpio::*;
