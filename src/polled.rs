//! Polling wrapper that ties pins, decoder and counter together.
//!
//! [`PolledEncoder`] is the glue a typical firmware main loop (or pin
//! change interrupt) needs: read both pins, feed the decoder, keep a
//! running count.
//!
//! # Usage
//!
//! ```rust
//! use rotenc::hal::MockPins;
//! use rotenc::traits::EncoderInput;
//! use rotenc::{EncoderConfig, EncoderVariant, PolledEncoder};
//!
//! let mut pins = MockPins::new();
//! // Two clockwise detents
//! pins.queue_bits(&[1, 0, 2, 3, 1, 0, 2, 3]).unwrap();
//!
//! let config = EncoderConfig::default().with_variant(EncoderVariant::FullStep);
//! let mut knob = PolledEncoder::from_config(pins, &config);
//!
//! // In your update loop:
//! for _ in 0..8 {
//!     knob.poll().unwrap();
//! }
//! assert_eq!(knob.read_delta(), 2);
//! ```

use crate::config::EncoderConfig;
use crate::encoder::Encoder;
use crate::sample::Rotation;
use crate::traits::{EncoderInput, QuadraturePins};

/// A pin source, a decoder, and the accumulated position.
///
/// Call [`poll()`](Self::poll) on every pin change or at a fixed rate
/// fast enough to see every edge (1 kHz is plenty for a hand-turned
/// knob).
pub struct PolledEncoder<P: QuadraturePins> {
    /// Where samples come from
    pins: P,
    /// The decoder
    encoder: Encoder,
    /// Exchange pins A and B before decoding
    swap_pins: bool,
    /// Negate reported rotations
    invert_direction: bool,
    /// Accumulated position (absolute)
    position: i32,
    /// Position at last read_delta() call
    last_read_position: i32,
}

impl<P: QuadraturePins> PolledEncoder<P> {
    /// Wrap a pin source and a decoder.
    pub fn new(pins: P, encoder: Encoder) -> Self {
        Self {
            pins,
            encoder,
            swap_pins: false,
            invert_direction: false,
            position: 0,
            last_read_position: 0,
        }
    }

    /// Build from configuration: variant, pin swap and direction.
    pub fn from_config(pins: P, config: &EncoderConfig) -> Self {
        log::debug!(
            "encoder '{}': {} (swap_pins={}, invert={})",
            config.name.as_str(),
            config.variant.as_str(),
            config.swap_pins,
            config.invert_direction
        );
        Self::new(pins, config.build())
            .with_swap_pins(config.swap_pins)
            .with_invert_direction(config.invert_direction)
    }

    /// Exchange pins A and B before decoding.
    pub fn with_swap_pins(mut self, swap: bool) -> Self {
        self.swap_pins = swap;
        self
    }

    /// Report clockwise as negative.
    pub fn with_invert_direction(mut self, invert: bool) -> Self {
        self.invert_direction = invert;
        self
    }

    /// Read the pins once and decode.
    ///
    /// A failed read leaves the decoder and position untouched and
    /// returns the pin error.
    pub fn poll(&mut self) -> Result<Rotation, P::Error> {
        let sample = match self.pins.read_pins() {
            Ok(sample) => sample,
            Err(e) => {
                log::warn!("encoder pin read failed: {:?}; sample dropped", e);
                return Err(e);
            }
        };
        let sample = if self.swap_pins {
            sample.swapped()
        } else {
            sample
        };

        let mut rotation = self.encoder.update(sample);
        if self.invert_direction {
            rotation = rotation.reversed();
        }

        if rotation.is_step() {
            self.position = self.position.wrapping_add(rotation.delta() as i32);
            log::trace!(
                "step {} -> position {}",
                rotation.as_str(),
                self.position
            );
        }
        Ok(rotation)
    }

    /// The decoder.
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// The pin source.
    pub fn pins(&self) -> &P {
        &self.pins
    }

    /// Mutable access to the pin source.
    pub fn pins_mut(&mut self) -> &mut P {
        &mut self.pins
    }

    /// Resets the position counter to zero.
    ///
    /// The decoder keeps its state so a turn in progress still counts.
    pub fn reset_position(&mut self) {
        self.position = 0;
        self.last_read_position = 0;
    }

    /// Give back the pin source.
    pub fn release(self) -> P {
        self.pins
    }
}

impl<P: QuadraturePins> EncoderInput for PolledEncoder<P> {
    fn read_delta(&mut self) -> i32 {
        let delta = self.position.wrapping_sub(self.last_read_position);
        self.last_read_position = self.position;
        delta
    }

    #[inline]
    fn position(&self) -> i32 {
        self.position
    }
}

#[cfg(all(test, feature = "full-step", feature = "half-step", feature = "tristate"))]
mod tests {
    use super::*;
    use crate::encoder::EncoderVariant;
    use crate::hal::{MockPinError, MockPins};

    fn knob(variant: EncoderVariant, bits: &[u8]) -> PolledEncoder<MockPins> {
        let mut pins = MockPins::new();
        pins.queue_bits(bits).unwrap();
        PolledEncoder::new(pins, Encoder::new(variant))
    }

    fn drain(knob: &mut PolledEncoder<MockPins>) {
        while !knob.pins().is_empty() {
            knob.poll().unwrap();
        }
    }

    #[test]
    fn counts_clockwise_and_back() {
        let mut k = knob(EncoderVariant::FullStep, &[1, 0, 2, 3, 1, 0, 2, 3, 2, 0, 1, 3]);
        drain(&mut k);
        assert_eq!(k.position(), 1);
    }

    #[test]
    fn poll_returns_rotation() {
        let mut k = knob(EncoderVariant::FullStep, &[1, 0, 2, 3]);
        assert_eq!(k.poll(), Ok(Rotation::None));
        assert_eq!(k.poll(), Ok(Rotation::None));
        assert_eq!(k.poll(), Ok(Rotation::None));
        assert_eq!(k.poll(), Ok(Rotation::Clockwise));
    }

    #[test]
    fn read_delta_resets() {
        let mut k = knob(EncoderVariant::HalfStep, &[1, 0, 2, 3]);
        drain(&mut k);
        assert_eq!(k.read_delta(), 2);
        assert_eq!(k.read_delta(), 0);
        assert_eq!(k.position(), 2);
    }

    #[test]
    fn swap_pins_reverses_direction() {
        let mut k = knob(EncoderVariant::FullStep, &[1, 0, 2, 3]).with_swap_pins(true);
        drain(&mut k);
        assert_eq!(k.position(), -1);
    }

    #[test]
    fn invert_direction_negates() {
        let mut k =
            knob(EncoderVariant::Tristate, &[0, 2, 3, 0, 2, 3]).with_invert_direction(true);
        drain(&mut k);
        assert_eq!(k.position(), -2);
    }

    #[test]
    fn pin_error_leaves_state_untouched() {
        let mut k = knob(EncoderVariant::FullStep, &[1, 0]);
        k.poll().unwrap();
        let before = *k.encoder();

        k.pins_mut().fail_next();
        assert_eq!(k.poll(), Err(MockPinError));
        assert_eq!(*k.encoder(), before);
        assert_eq!(k.pins().pending(), 1);
    }

    #[test]
    fn from_config_applies_wiring() {
        let config = EncoderConfig::default()
            .with_variant(EncoderVariant::FullStep)
            .with_swap_pins(true)
            .with_invert_direction(true);
        let mut pins = MockPins::new();
        pins.queue_bits(&[1, 0, 2, 3]).unwrap();

        let mut k = PolledEncoder::from_config(pins, &config);
        drain(&mut k);
        // Swapped and inverted cancel out.
        assert_eq!(k.position(), 1);
    }

    #[test]
    fn reset_position_keeps_decoder_progress() {
        let mut k = knob(EncoderVariant::FullStep, &[1, 0, 2, 3, 1, 0]);
        drain(&mut k);
        assert_eq!(k.position(), 1);

        k.reset_position();
        assert_eq!(k.position(), 0);
        assert!(!k.encoder().is_at_rest());

        k.pins_mut().queue_bits(&[2, 3]).unwrap();
        drain(&mut k);
        assert_eq!(k.read_delta(), 1);
    }
}
