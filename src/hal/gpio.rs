//! `embedded-hal` GPIO pin pair.
//!
//! Wraps two [`InputPin`]s and reads them as one [`PinSample`]. Works with
//! any HAL that implements `embedded-hal` 1.0 (esp-idf-hal, embassy,
//! rp-hal, stm32 HALs, linux-embedded-hal).
//!
//! # Wiring
//!
//! - A (often labelled CLK) → pin A
//! - B (often labelled DT) → pin B
//! - Common → GND, with pull-ups enabled on both inputs
//!
//! # Example
//!
//! ```rust,ignore
//! use rotenc::hal::GpioPins;
//! use rotenc::{EncoderConfig, PolledEncoder};
//!
//! let pins = GpioPins::new(clk_pin, dt_pin);
//! let mut knob = PolledEncoder::from_config(pins, &EncoderConfig::default());
//!
//! loop {
//!     knob.poll()?;
//!     delay.delay_ms(1);
//! }
//! ```

use embedded_hal::digital::InputPin;

use crate::error::PinError;
use crate::sample::PinSample;
use crate::traits::QuadraturePins;

/// Two GPIO inputs read as a quadrature pair.
#[derive(Debug)]
pub struct GpioPins<A, B> {
    pin_a: A,
    pin_b: B,
}

impl<A: InputPin, B: InputPin> GpioPins<A, B> {
    /// Creates a pin pair. Configure pulls before passing the pins in.
    pub fn new(pin_a: A, pin_b: B) -> Self {
        Self { pin_a, pin_b }
    }

    /// Give the pins back.
    pub fn release(self) -> (A, B) {
        (self.pin_a, self.pin_b)
    }
}

impl<A: InputPin, B: InputPin> QuadraturePins for GpioPins<A, B> {
    type Error = PinError<A::Error, B::Error>;

    fn read_pins(&mut self) -> Result<PinSample, Self::Error> {
        let a = self.pin_a.is_high().map_err(PinError::PinA)?;
        let b = self.pin_b.is_high().map_err(PinError::PinB)?;
        Ok(PinSample::from_pins(a, b))
    }
}
