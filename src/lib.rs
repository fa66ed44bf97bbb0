//! # rotenc
//!
//! A table-driven decoder for quadrature rotary encoders, small enough to
//! run inside an interrupt handler.
//!
//! ## Features
//!
//! - **Three encoder types**: full-step, half-step and three-phase
//!   (tristate), each described by a fixed transition table
//! - **Noise tolerant**: bounce and out-of-sequence edges never produce a
//!   step
//! - **Constant time**: one table lookup per sample, no allocation, no
//!   branching on encoder type
//! - **`no_std`**: the decoder needs nothing but `core`
//!
//! ## Architecture
//!
//! - `table` - the packed transition tables
//! - `encoder` - [`Encoder`] state machine and [`EncoderVariant`]
//! - `sample` - [`PinSample`] in, [`Rotation`] out
//! - `traits` - pin source and step counter abstractions
//! - `polled` - [`PolledEncoder`], pins + decoder + counter
//! - `hal` - concrete pin sources (mock, `embedded-hal` GPIO)
//! - `sim` - keyboard knob simulation
//!
//! ## Example
//!
//! ```rust
//! use rotenc::{Encoder, EncoderVariant};
//!
//! let mut encoder = Encoder::new(EncoderVariant::FullStep);
//! let mut counter = 0i32;
//!
//! // In a polling loop or pin-change ISR:
//! // let pins = (read(PIN_B) << 1) | read(PIN_A);
//! for pins in [0b10, 0b00, 0b01, 0b11] {
//!     counter += encoder.process(pins) as i32;
//! }
//! assert_eq!(counter, -1); // one counter-clockwise detent
//! ```
//!
//! Constructors are `const`, so an encoder shared with an interrupt handler
//! can live in a `static` behind whatever lock the platform provides:
//!
//! ```rust
//! use std::sync::Mutex;
//! use rotenc::Encoder;
//!
//! static KNOB: Mutex<Encoder> = Mutex::new(Encoder::full_step());
//!
//! // Pin-change handler
//! fn on_pin_change(pins: u8) -> i8 {
//!     KNOB.lock().map(|mut knob| knob.process(pins)).unwrap_or(0)
//! }
//!
//! for pins in [0b01, 0b00, 0b10] {
//!     assert_eq!(on_pin_change(pins), 0);
//! }
//! assert_eq!(on_pin_change(0b11), 1);
//! ```
//!
//! ## Cargo Features
//!
//! - `full-step`, `half-step`, `tristate` (default): which encoder types
//!   and tables are compiled in. At least one must stay enabled.
//! - `std` (default): standard library support
//! - `serde`, `json`: configuration (de)serialization
//! - `hal`: `embedded-hal` 1.0 GPIO pin source
//! - `cli`: the `rotenc-sim` binary

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

#[cfg(not(any(feature = "full-step", feature = "half-step", feature = "tristate")))]
compile_error!("enable at least one of the `full-step`, `half-step` or `tristate` features");

/// Configuration for encoders and the simulation.
pub mod config;
/// Encoder state machine.
pub mod encoder;
/// Error types.
pub mod error;
/// Hardware abstraction layer with mock implementations for testing.
pub mod hal;
/// Pins, decoder and counter in one polling wrapper.
pub mod polled;
/// Pin samples and rotations.
pub mod sample;
/// Keyboard knob simulation.
pub mod sim;
/// Transition tables.
pub mod table;
/// Core traits for pin sources and step counters.
pub mod traits;

// Re-exports for convenience
pub use config::{Config, EncoderConfig, SimulationConfig};
pub use encoder::{Encoder, EncoderVariant};
pub use error::{ParseVariantError, PinError};
pub use polled::PolledEncoder;
pub use sample::{PinSample, Rotation};
pub use table::{Phase, Transition, TransitionTable};
pub use traits::{EncoderInput, QuadraturePins};

#[cfg(feature = "json")]
pub use error::ConfigError;
