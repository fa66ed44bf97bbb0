//! Hardware abstraction traits for pin sampling and step accumulation.
//!
//! # Key Traits
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`QuadraturePins`] | Reads both encoder pins as one [`PinSample`] |
//! | [`EncoderInput`] | Steps accumulated since the last read |
//!
//! # Implementation
//!
//! For testing and desktop development, use [`crate::hal::MockPins`].
//! For real GPIO, wrap two `embedded-hal` input pins in
//! `hal::GpioPins` (requires the `hal` feature).
//!
//! # Example
//!
//! ```rust
//! use rotenc::traits::QuadraturePins;
//! use rotenc::hal::MockPins;
//! use rotenc::PinSample;
//!
//! let mut pins = MockPins::new();
//! pins.queue(PinSample::new(0b01)).unwrap();
//!
//! assert_eq!(pins.read_pins(), Ok(PinSample::new(0b01)));
//! ```

use crate::sample::PinSample;

/// Source of quadrature pin samples.
///
/// Implement this for whatever reads the two encoder pins. The result
/// must have pin A in bit 0 and pin B in bit 1.
///
/// # Example Implementation
///
/// ```rust,ignore
/// use rotenc::traits::QuadraturePins;
/// use rotenc::PinSample;
///
/// struct PortPins { /* register handle */ }
///
/// impl QuadraturePins for PortPins {
///     type Error = core::convert::Infallible;
///
///     fn read_pins(&mut self) -> Result<PinSample, Self::Error> {
///         let port = read_port_register();
///         Ok(PinSample::from_pins(port & (1 << 8) != 0, port & (1 << 9) != 0))
///     }
/// }
/// ```
pub trait QuadraturePins {
    /// Error type for pin reads.
    type Error: core::fmt::Debug;

    /// Read both pins at once.
    fn read_pins(&mut self) -> Result<PinSample, Self::Error>;
}

/// Accumulated encoder steps.
///
/// # Implementation Notes
///
/// - `read_delta()` returns the steps since the previous call and resets
///   that count
/// - Positive values = clockwise rotation
/// - `position()` is the running total and is not reset by reads
pub trait EncoderInput {
    /// Returns steps since last call (positive = clockwise).
    fn read_delta(&mut self) -> i32;

    /// Returns the absolute step count.
    fn position(&self) -> i32;
}
