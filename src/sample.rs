//! Pin samples going into the decoder and rotations coming out of it.
//!
//! A [`PinSample`] is the instantaneous level of the two quadrature pins
//! packed into two bits. A [`Rotation`] is what one decoder step produces.
//!
//! # Example
//!
//! ```rust
//! use rotenc::{PinSample, Rotation};
//!
//! let sample = PinSample::from_pins(true, false);
//! assert_eq!(sample.bits(), 0b01);
//!
//! assert_eq!(Rotation::Clockwise.delta(), 1);
//! assert_eq!(Rotation::CounterClockwise.delta(), -1);
//! ```

/// Instantaneous levels of the two encoder pins.
///
/// Bit 0 is pin A, bit 1 is pin B. Values are always in `0..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinSample(u8);

impl PinSample {
    /// Both pins low.
    pub const LOW: Self = Self(0b00);
    /// Both pins high (the detent position for all three variants).
    pub const HIGH: Self = Self(0b11);

    /// Creates a sample from raw bits, keeping only the low two.
    ///
    /// Anything above bit 1 is dropped, so the result is always a valid
    /// table column.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotenc::PinSample;
    ///
    /// assert_eq!(PinSample::new(2).bits(), 2);
    /// assert_eq!(PinSample::new(0b110).bits(), 0b10);
    /// ```
    #[inline]
    pub const fn new(bits: u8) -> Self {
        Self(bits & 0b11)
    }

    /// Packs two pin levels into a sample.
    #[inline]
    pub const fn from_pins(a: bool, b: bool) -> Self {
        Self((a as u8) | ((b as u8) << 1))
    }

    /// Raw 2-bit value.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Level of pin A.
    #[inline]
    pub const fn a(self) -> bool {
        self.0 & 0b01 != 0
    }

    /// Level of pin B.
    #[inline]
    pub const fn b(self) -> bool {
        self.0 & 0b10 != 0
    }

    /// Same levels with pins A and B exchanged.
    ///
    /// Wiring an encoder with its pins crossed reverses the direction it
    /// reports; swapping the sample undoes that.
    #[inline]
    pub const fn swapped(self) -> Self {
        Self::from_pins(self.b(), self.a())
    }
}

impl From<u8> for PinSample {
    fn from(bits: u8) -> Self {
        Self::new(bits)
    }
}

impl From<PinSample> for u8 {
    fn from(sample: PinSample) -> Self {
        sample.bits()
    }
}

/// Result of feeding one sample through an encoder.
///
/// # Default
///
/// Defaults to [`None`](Self::None): no completed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rotation {
    /// No step completed. Also the result of bounce and invalid edges.
    #[default]
    None,
    /// One clockwise step completed.
    Clockwise,
    /// One counter-clockwise step completed.
    CounterClockwise,
}

impl Rotation {
    /// Decodes the two direction bits of a packed table cell.
    ///
    /// `0b01` is clockwise and `0b11` counter-clockwise. The unused
    /// pattern `0b10` never appears in a table and reads as no step.
    #[inline]
    pub const fn from_direction_bits(dir: u8) -> Self {
        match dir & 0b11 {
            0b01 => Rotation::Clockwise,
            0b11 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }

    /// Signed step: `+1`, `-1` or `0`.
    #[inline]
    pub const fn delta(self) -> i8 {
        match self {
            Rotation::None => 0,
            Rotation::Clockwise => 1,
            Rotation::CounterClockwise => -1,
        }
    }

    /// The opposite direction. `None` stays `None`.
    #[inline]
    pub const fn reversed(self) -> Self {
        match self {
            Rotation::None => Rotation::None,
            Rotation::Clockwise => Rotation::CounterClockwise,
            Rotation::CounterClockwise => Rotation::Clockwise,
        }
    }

    /// Returns true if a step completed.
    #[inline]
    pub const fn is_step(self) -> bool {
        !matches!(self, Rotation::None)
    }

    /// Lowercase name, for logs and display.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Rotation::None => "none",
            Rotation::Clockwise => "cw",
            Rotation::CounterClockwise => "ccw",
        }
    }
}

impl From<Rotation> for i8 {
    fn from(rotation: Rotation) -> Self {
        rotation.delta()
    }
}

impl From<Rotation> for i32 {
    fn from(rotation: Rotation) -> Self {
        rotation.delta() as i32
    }
}
