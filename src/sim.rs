//! Keyboard-driven knob simulation.
//!
//! Models turning an encoder by hand: each key press moves a virtual knob
//! one Gray-code position and feeds the resulting pins to a decoder. Used
//! by the `rotenc-sim` binary and handy for exploring how the three
//! variants react to the same input.
//!
//! | Key | Action |
//! |-----|--------|
//! | `j`, `l`, `,` | Rotate left (counter-clockwise) |
//! | `k`, `r`, `.` | Rotate right (clockwise) |
//! | `f` / `h` / `t` | Switch to full-step / half-step / tristate (if compiled in) |
//! | `q`, ESC | Quit |
//!
//! # Example
//!
//! ```rust
//! use rotenc::sim::{Key, Simulator};
//! use rotenc::EncoderVariant;
//!
//! let mut sim = Simulator::new(EncoderVariant::FullStep);
//! for _ in 0..4 {
//!     sim.handle(Key::Right);
//! }
//! assert_eq!(sim.value(), 1);
//! assert!(sim.handle(Key::Quit).is_none());
//! ```

use core::fmt;

use crate::config::SimulationConfig;
use crate::encoder::{Encoder, EncoderVariant};
use crate::sample::{PinSample, Rotation};

/// Gray-code positions of a four-phase encoder, starting at the detent.
pub const QUADRATURE_SEQUENCE: [u8; 4] = [0b11, 0b01, 0b00, 0b10];

/// Positions of a three-phase encoder, starting at the detent.
pub const TRISTATE_SEQUENCE: [u8; 3] = [0b11, 0b00, 0b10];

/// ASCII escape.
const ESC: char = '\u{1b}';

/// Pin sequence a knob of the given variant walks through.
pub fn sequence_for(variant: EncoderVariant) -> &'static [u8] {
    match variant {
        #[cfg(feature = "full-step")]
        EncoderVariant::FullStep => &QUADRATURE_SEQUENCE,
        #[cfg(feature = "half-step")]
        EncoderVariant::HalfStep => &QUADRATURE_SEQUENCE,
        #[cfg(feature = "tristate")]
        EncoderVariant::Tristate => &TRISTATE_SEQUENCE,
    }
}

// ============================================================================
// Knob
// ============================================================================

/// A virtual knob: a position within a cyclic pin sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Knob {
    sequence: &'static [u8],
    index: usize,
}

impl Knob {
    /// A knob for the given variant, resting on the detent.
    pub fn new(variant: EncoderVariant) -> Self {
        Self {
            sequence: sequence_for(variant),
            index: 0,
        }
    }

    /// Move one position clockwise.
    pub fn turn_right(&mut self) {
        self.index = (self.index + 1) % self.sequence.len();
    }

    /// Move one position counter-clockwise.
    pub fn turn_left(&mut self) {
        self.index = (self.index + self.sequence.len() - 1) % self.sequence.len();
    }

    /// Pins at the current position.
    pub fn pins(&self) -> PinSample {
        PinSample::new(self.sequence[self.index])
    }

    /// Current position within the sequence.
    pub fn index(&self) -> usize {
        self.index
    }
}

// ============================================================================
// Keys
// ============================================================================

/// A decoded key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Rotate counter-clockwise one position.
    Left,
    /// Rotate clockwise one position.
    Right,
    /// Replace the encoder with a fresh one of this variant.
    Switch(EncoderVariant),
    /// Stop the simulation.
    Quit,
    /// Anything else.
    Unknown(char),
}

impl Key {
    /// Map a typed character to a key.
    ///
    /// Switch keys for variants that are not compiled in map to
    /// [`Key::Unknown`].
    pub fn from_char(c: char) -> Self {
        match c {
            'j' | 'l' | ',' => Key::Left,
            'k' | 'r' | '.' => Key::Right,
            #[cfg(feature = "full-step")]
            'f' => Key::Switch(EncoderVariant::FullStep),
            #[cfg(feature = "half-step")]
            'h' => Key::Switch(EncoderVariant::HalfStep),
            #[cfg(feature = "tristate")]
            't' => Key::Switch(EncoderVariant::Tristate),
            'q' | ESC => Key::Quit,
            other => Key::Unknown(other),
        }
    }

    /// Single-character label shown in frames.
    pub fn label(&self) -> char {
        match self {
            Key::Left => 'L',
            Key::Right => 'R',
            #[cfg(feature = "full-step")]
            Key::Switch(EncoderVariant::FullStep) => 'f',
            #[cfg(feature = "half-step")]
            Key::Switch(EncoderVariant::HalfStep) => 'h',
            #[cfg(feature = "tristate")]
            Key::Switch(EncoderVariant::Tristate) => 't',
            Key::Quit => 'q',
            Key::Unknown(c) => *c,
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

// ============================================================================
// Frame
// ============================================================================

/// What the simulation shows after one key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    /// Variant in use after the key was handled.
    pub variant: EncoderVariant,
    /// The key that produced this frame.
    pub key: Key,
    /// Pins fed to the decoder.
    pub pins: PinSample,
    /// Decoder state row afterwards (debug peek).
    pub state: u8,
    /// Rotation the decoder reported.
    pub rotation: Rotation,
    /// Running total.
    pub value: i32,
    /// Include `state` when rendering.
    pub show_state: bool,
}

/// Four-character label for a variant in the prompt.
pub fn variant_label(variant: EncoderVariant) -> &'static str {
    match variant {
        #[cfg(feature = "full-step")]
        EncoderVariant::FullStep => "Full",
        #[cfg(feature = "half-step")]
        EncoderVariant::HalfStep => "Half",
        #[cfg(feature = "tristate")]
        EncoderVariant::Tristate => "Tri ",
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Key::Unknown(c) = self.key {
            writeln!(f, "Input '{}' [{}]; use 'q' to quit", c, c as u32)?;
        }
        write!(f, "Input: {}, pins: {}", self.key.label(), self.pins.bits())?;
        if self.show_state {
            write!(f, ", State: {}", self.state)?;
        }
        write!(f, "\t\tVal: {}", self.value)
    }
}

// ============================================================================
// Simulator
// ============================================================================

/// Knob, decoder and running total for one simulated encoder.
#[derive(Clone, Debug)]
pub struct Simulator {
    encoder: Encoder,
    knob: Knob,
    value: i32,
    show_state: bool,
}

impl Simulator {
    /// Start with the given variant at rest.
    pub fn new(variant: EncoderVariant) -> Self {
        Self {
            encoder: Encoder::new(variant),
            knob: Knob::new(variant),
            value: 0,
            show_state: true,
        }
    }

    /// Start from configuration.
    pub fn from_config(variant: EncoderVariant, config: &SimulationConfig) -> Self {
        let mut sim = Self::new(variant);
        sim.show_state = config.show_state;
        sim
    }

    /// Handle one key press.
    ///
    /// Returns `None` when the key asks to quit. Every other key, including
    /// unknown ones, feeds the knob's current pins to the decoder once.
    pub fn handle(&mut self, key: Key) -> Option<Frame> {
        match key {
            Key::Quit => return None,
            Key::Left => self.knob.turn_left(),
            Key::Right => self.knob.turn_right(),
            Key::Switch(variant) => self.switch_to(variant),
            Key::Unknown(c) => log::debug!("ignoring key {:?}", c),
        }

        let pins = self.knob.pins();
        let rotation = self.encoder.update(pins);
        self.value = self.value.wrapping_add(rotation.delta() as i32);

        Some(Frame {
            variant: self.encoder.variant(),
            key,
            pins,
            state: self.encoder.state_index(),
            rotation,
            value: self.value,
            show_state: self.show_state,
        })
    }

    /// Replace the decoder and knob with fresh ones of another variant.
    ///
    /// Any turn in progress is discarded; the running total is kept.
    pub fn switch_to(&mut self, variant: EncoderVariant) {
        log::debug!(
            "switching {} -> {}",
            self.encoder.variant().as_str(),
            variant.as_str()
        );
        self.encoder = Encoder::new(variant);
        self.knob = Knob::new(variant);
    }

    /// Running total of steps.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The decoder.
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// The knob.
    pub fn knob(&self) -> &Knob {
        &self.knob
    }

    /// Status line shown before each key is read.
    pub fn prompt(&self) -> Prompt {
        Prompt {
            variant: self.encoder.variant(),
            state: self.encoder.state_index(),
            show_state: self.show_state,
        }
    }
}

/// Status shown while waiting for a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prompt {
    /// Variant in use.
    pub variant: EncoderVariant,
    /// Decoder state row.
    pub state: u8,
    /// Include `state` when rendering.
    pub show_state: bool,
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", variant_label(self.variant))?;
        if self.show_state {
            write!(f, ": {}", self.state)?;
        }
        f.write_str("; ")
    }
}
