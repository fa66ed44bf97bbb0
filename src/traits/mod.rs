//! Trait definitions for the code around the decoder.
//!
//! The decoder itself ([`crate::Encoder`]) needs nothing but a pin sample.
//! These traits describe the two collaborators a complete setup has:
//!
//! - [`QuadraturePins`]: where pin samples come from (GPIO, a mock, a
//!   simulated knob)
//! - [`EncoderInput`]: how accumulated steps are handed to application
//!   code
//!
//! Concrete implementations live in [`crate::hal`] and
//! [`crate::polled`].

pub mod hardware;

pub use hardware::*;
