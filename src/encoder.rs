//! The encoder state machine.
//!
//! An [`Encoder`] is one byte of state plus a reference to the
//! [`TransitionTable`] for its [`EncoderVariant`]. Each call to
//! [`process`](Encoder::process) performs a single table lookup, so it is
//! safe to call from a polling loop or directly inside an interrupt
//! handler.
//!
//! # Example
//!
//! ```rust
//! use rotenc::{Encoder, EncoderVariant};
//!
//! let mut encoder = Encoder::new(EncoderVariant::FullStep);
//! let mut counter = 0i32;
//!
//! // One clockwise detent: 11 -> 01 -> 00 -> 10 -> 11
//! for pins in [0b01, 0b00, 0b10, 0b11] {
//!     counter += encoder.process(pins) as i32;
//! }
//! assert_eq!(counter, 1);
//! ```
//!
//! # Thread Safety
//!
//! `process` takes `&mut self` and does no synchronization. If an
//! interrupt handler and the main loop can both reach the same encoder,
//! the caller must keep them from racing (for example by masking that
//! interrupt around the call). Separate encoders share nothing but the
//! read-only tables.

use core::fmt;
use core::str::FromStr;

use crate::error::ParseVariantError;
use crate::sample::{PinSample, Rotation};
#[cfg(feature = "full-step")]
use crate::table::FULL_STEP;
#[cfg(feature = "half-step")]
use crate::table::HALF_STEP;
#[cfg(feature = "tristate")]
use crate::table::TRISTATE;
use crate::table::{Phase, TransitionTable, STATE_MASK};

/// Encoder hardware type.
///
/// Each variant exists only when its Cargo feature (`full-step`,
/// `half-step`, `tristate`) is enabled; all three are on by default.
///
/// # Default
///
/// Defaults to [`FullStep`](Self::FullStep), the most common detented
/// encoder, or the first enabled variant when full-step is compiled out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EncoderVariant {
    /// One step per full quadrature cycle.
    #[cfg(feature = "full-step")]
    FullStep,
    /// Two steps per quadrature cycle (detents at `11` and `00`).
    #[cfg(feature = "half-step")]
    HalfStep,
    /// Three-phase encoder cycling through `11`, `00`, `10`.
    #[cfg(feature = "tristate")]
    Tristate,
}

impl EncoderVariant {
    /// All enabled variants.
    pub const ALL: &'static [EncoderVariant] = &[
        #[cfg(feature = "full-step")]
        EncoderVariant::FullStep,
        #[cfg(feature = "half-step")]
        EncoderVariant::HalfStep,
        #[cfg(feature = "tristate")]
        EncoderVariant::Tristate,
    ];

    /// Transition table for this variant.
    #[inline]
    pub const fn table(self) -> &'static TransitionTable {
        match self {
            #[cfg(feature = "full-step")]
            EncoderVariant::FullStep => &FULL_STEP,
            #[cfg(feature = "half-step")]
            EncoderVariant::HalfStep => &HALF_STEP,
            #[cfg(feature = "tristate")]
            EncoderVariant::Tristate => &TRISTATE,
        }
    }

    /// Returns the variant as a lowercase string.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotenc::EncoderVariant;
    ///
    /// assert_eq!(EncoderVariant::FullStep.as_str(), "full_step");
    /// assert_eq!(EncoderVariant::Tristate.as_str(), "tristate");
    /// ```
    pub const fn as_str(&self) -> &'static str {
        match self {
            #[cfg(feature = "full-step")]
            EncoderVariant::FullStep => "full_step",
            #[cfg(feature = "half-step")]
            EncoderVariant::HalfStep => "half_step",
            #[cfg(feature = "tristate")]
            EncoderVariant::Tristate => "tristate",
        }
    }

    /// Parse a variant from text input.
    ///
    /// Accepts:
    /// - Full names: `"full_step"`, `"half_step"`, `"tristate"`
    /// - Hyphenated or joined: `"full-step"`, `"fullstep"`
    /// - Short forms: `"full"`/`"f"`, `"half"`/`"h"`, `"tri"`/`"t"`
    ///
    /// Input is trimmed and case-insensitive. Names of variants whose
    /// feature is disabled are rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotenc::EncoderVariant;
    ///
    /// assert_eq!(EncoderVariant::from_text("full"), Some(EncoderVariant::FullStep));
    /// assert_eq!(EncoderVariant::from_text(" Half-Step "), Some(EncoderVariant::HalfStep));
    /// assert_eq!(EncoderVariant::from_text("t"), Some(EncoderVariant::Tristate));
    /// assert_eq!(EncoderVariant::from_text("quarter"), None);
    /// ```
    pub fn from_text(s: &str) -> Option<Self> {
        const FULL: &[&str] = &["full_step", "full-step", "fullstep", "full", "f"];
        const HALF: &[&str] = &["half_step", "half-step", "halfstep", "half", "h"];
        const TRI: &[&str] = &["tristate", "tri-state", "tri", "t"];

        let s = s.trim();
        let is = |names: &[&str]| names.iter().any(|n| s.eq_ignore_ascii_case(n));

        if is(FULL) {
            Self::FULL_STEP_VARIANT
        } else if is(HALF) {
            Self::HALF_STEP_VARIANT
        } else if is(TRI) {
            Self::TRISTATE_VARIANT
        } else {
            None
        }
    }

    #[cfg(feature = "full-step")]
    const FULL_STEP_VARIANT: Option<Self> = Some(EncoderVariant::FullStep);
    #[cfg(not(feature = "full-step"))]
    const FULL_STEP_VARIANT: Option<Self> = None;

    #[cfg(feature = "half-step")]
    const HALF_STEP_VARIANT: Option<Self> = Some(EncoderVariant::HalfStep);
    #[cfg(not(feature = "half-step"))]
    const HALF_STEP_VARIANT: Option<Self> = None;

    #[cfg(feature = "tristate")]
    const TRISTATE_VARIANT: Option<Self> = Some(EncoderVariant::Tristate);
    #[cfg(not(feature = "tristate"))]
    const TRISTATE_VARIANT: Option<Self> = None;
}

impl Default for EncoderVariant {
    fn default() -> Self {
        Self::ALL[0]
    }
}

impl fmt::Display for EncoderVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncoderVariant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s).ok_or(ParseVariantError)
    }
}

/// Quadrature decoder state machine.
///
/// Holds the table for its variant and the last packed cell it looked up.
/// The table is fixed at construction; use a new `Encoder` to change
/// variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoder {
    variant: EncoderVariant,
    table: &'static TransitionTable,
    state: u8,
}

impl Encoder {
    /// Create an encoder at rest on a detent.
    ///
    /// Usable in `static` initializers.
    pub const fn new(variant: EncoderVariant) -> Self {
        Self {
            variant,
            table: variant.table(),
            state: Phase::Start.index(),
        }
    }

    /// Full-step encoder.
    #[cfg(feature = "full-step")]
    pub const fn full_step() -> Self {
        Self::new(EncoderVariant::FullStep)
    }

    /// Half-step encoder.
    #[cfg(feature = "half-step")]
    pub const fn half_step() -> Self {
        Self::new(EncoderVariant::HalfStep)
    }

    /// Tristate encoder.
    #[cfg(feature = "tristate")]
    pub const fn tristate() -> Self {
        Self::new(EncoderVariant::Tristate)
    }

    /// Feed one raw pin sample and return the completed step.
    ///
    /// `pins` holds pin A in bit 0 and pin B in bit 1. Higher bits are
    /// ignored. Returns `+1` for a clockwise step, `-1` for a
    /// counter-clockwise step and `0` otherwise.
    #[inline]
    pub fn process(&mut self, pins: u8) -> i8 {
        self.update(PinSample::new(pins)).delta()
    }

    /// Feed one pin sample and return the completed [`Rotation`].
    ///
    /// The whole packed cell, direction bits included, becomes the new
    /// state. Only its low nibble selects the next row.
    #[inline]
    pub fn update(&mut self, sample: PinSample) -> Rotation {
        let transition = self.table.lookup(self.state, sample);
        self.state = transition.raw();
        transition.rotation()
    }

    /// Which hardware type this encoder decodes.
    #[inline]
    pub fn variant(&self) -> EncoderVariant {
        self.variant
    }

    /// The table driving this encoder.
    #[inline]
    pub fn table(&self) -> &'static TransitionTable {
        self.table
    }

    /// Current state row (debug only).
    ///
    /// Exposed for diagnostics and tests; decoding never depends on it.
    #[inline]
    pub fn state_index(&self) -> u8 {
        self.state & STATE_MASK
    }

    /// Current state row as a [`Phase`] (debug only).
    pub fn phase(&self) -> Phase {
        Phase::from_index(self.state_index()).unwrap_or(Phase::Invalid)
    }

    /// Returns true if the encoder is resting on a detent.
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.state_index() == Phase::Start.index()
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(EncoderVariant::default())
    }
}

impl From<EncoderVariant> for Encoder {
    fn from(variant: EncoderVariant) -> Self {
        Self::new(variant)
    }
}

#[cfg(all(test, feature = "full-step", feature = "half-step", feature = "tristate"))]
mod tests {
    use super::*;

    fn feed(encoder: &mut Encoder, pins: &[u8]) -> [i8; 8] {
        let mut out = [0i8; 8];
        for (i, &p) in pins.iter().enumerate() {
            out[i] = encoder.process(p);
        }
        out
    }

    // =========================================================================
    // EncoderVariant Tests
    // =========================================================================

    #[test]
    fn variant_default() {
        assert_eq!(EncoderVariant::default(), EncoderVariant::FullStep);
    }

    #[test]
    fn variant_tables() {
        assert!(core::ptr::eq(EncoderVariant::FullStep.table(), &FULL_STEP));
        assert!(core::ptr::eq(EncoderVariant::HalfStep.table(), &HALF_STEP));
        assert!(core::ptr::eq(EncoderVariant::Tristate.table(), &TRISTATE));
    }

    #[test]
    fn variant_from_text_full_names() {
        assert_eq!(
            EncoderVariant::from_text("full_step"),
            Some(EncoderVariant::FullStep)
        );
        assert_eq!(
            EncoderVariant::from_text("half_step"),
            Some(EncoderVariant::HalfStep)
        );
        assert_eq!(
            EncoderVariant::from_text("tristate"),
            Some(EncoderVariant::Tristate)
        );
    }

    #[test]
    fn variant_from_text_short_forms() {
        assert_eq!(EncoderVariant::from_text("f"), Some(EncoderVariant::FullStep));
        assert_eq!(EncoderVariant::from_text("h"), Some(EncoderVariant::HalfStep));
        assert_eq!(EncoderVariant::from_text("tri"), Some(EncoderVariant::Tristate));
    }

    #[test]
    fn variant_from_text_case_and_whitespace() {
        assert_eq!(
            EncoderVariant::from_text("\tFULL-STEP\n"),
            Some(EncoderVariant::FullStep)
        );
        assert_eq!(
            EncoderVariant::from_text("  TriState "),
            Some(EncoderVariant::Tristate)
        );
    }

    #[test]
    fn variant_from_text_invalid() {
        assert_eq!(EncoderVariant::from_text(""), None);
        assert_eq!(EncoderVariant::from_text("quarter"), None);
        assert_eq!(EncoderVariant::from_text("fulls"), None);
    }

    #[test]
    fn variant_from_str() {
        assert_eq!("half".parse::<EncoderVariant>(), Ok(EncoderVariant::HalfStep));
        assert_eq!("nope".parse::<EncoderVariant>(), Err(ParseVariantError));
    }

    #[test]
    fn variant_as_str_parses_back() {
        for &variant in EncoderVariant::ALL {
            assert_eq!(EncoderVariant::from_text(variant.as_str()), Some(variant));
        }
    }

    // =========================================================================
    // Encoder Tests
    // =========================================================================

    #[test]
    fn new_encoder_starts_at_rest() {
        for &variant in EncoderVariant::ALL {
            let encoder = Encoder::new(variant);
            assert_eq!(encoder.state_index(), 4);
            assert_eq!(encoder.phase(), Phase::Start);
            assert!(encoder.is_at_rest());
            assert_eq!(encoder.variant(), variant);
        }
    }

    #[test]
    fn full_step_clockwise_detent() {
        let mut encoder = Encoder::full_step();
        let out = feed(&mut encoder, &[1, 0, 2, 3]);
        assert_eq!(&out[..4], &[0, 0, 0, 1]);
        assert!(encoder.is_at_rest());
    }

    #[test]
    fn full_step_counter_clockwise_detent() {
        let mut encoder = Encoder::full_step();
        let out = feed(&mut encoder, &[2, 0, 1, 3]);
        assert_eq!(&out[..4], &[0, 0, 0, -1]);
        assert!(encoder.is_at_rest());
    }

    #[test]
    fn half_step_fires_twice_per_cycle() {
        let mut encoder = Encoder::half_step();
        let out = feed(&mut encoder, &[1, 0, 2, 3]);
        assert_eq!(&out[..4], &[0, 1, 0, 1]);

        let out = feed(&mut encoder, &[2, 0, 1, 3]);
        assert_eq!(&out[..4], &[0, -1, 0, -1]);
    }

    #[test]
    fn tristate_detent_cycle() {
        let mut encoder = Encoder::tristate();
        let out = feed(&mut encoder, &[0, 2, 3]);
        assert_eq!(&out[..3], &[0, 0, 1]);

        let out = feed(&mut encoder, &[2, 0, 3]);
        assert_eq!(&out[..3], &[0, 0, -1]);
    }

    #[test]
    fn direction_bits_are_kept_in_state() {
        let mut encoder = Encoder::full_step();
        feed(&mut encoder, &[1, 0, 2, 3]);
        assert_eq!(encoder.state, Phase::Start.index() | crate::table::DIR_CW);
        assert_eq!(encoder.state_index(), 4);

        // A stable detent clears them again.
        assert_eq!(encoder.process(3), 0);
        assert_eq!(encoder.state, Phase::Start.index());
    }

    #[test]
    fn process_masks_high_bits() {
        let mut a = Encoder::full_step();
        let mut b = Encoder::full_step();
        for (raw, masked) in [(0x05u8, 1u8), (0xF0, 0), (0x06, 2), (0xFF, 3)] {
            assert_eq!(a.process(raw), b.process(masked));
            assert_eq!(a.state_index(), b.state_index());
        }
    }

    #[test]
    fn update_matches_process() {
        let mut a = Encoder::half_step();
        let mut b = Encoder::half_step();
        for pins in [1u8, 0, 2, 3, 2, 0, 1, 3] {
            assert_eq!(a.update(PinSample::new(pins)).delta(), b.process(pins));
        }
    }

    #[test]
    fn bounce_at_detent_is_ignored() {
        let mut encoder = Encoder::full_step();
        for _ in 0..10 {
            assert_eq!(encoder.process(3), 0);
            assert!(encoder.is_at_rest());
        }
    }

    static AT_REST: Encoder = Encoder::tristate();

    #[test]
    fn const_constructor_initializes_static() {
        assert!(AT_REST.is_at_rest());
        assert_eq!(AT_REST.variant(), EncoderVariant::Tristate);

        let mut encoder = AT_REST;
        let out = feed(&mut encoder, &[0, 2, 3]);
        assert_eq!(&out[..3], &[0, 0, 1]);
        assert!(AT_REST.is_at_rest());
    }

    #[test]
    fn all_lists_every_variant_once() {
        assert_eq!(EncoderVariant::ALL.len(), 3);
        assert_eq!(EncoderVariant::ALL[0], EncoderVariant::default());
    }

    #[test]
    fn default_and_from() {
        assert_eq!(Encoder::default().variant(), EncoderVariant::FullStep);
        assert_eq!(
            Encoder::from(EncoderVariant::Tristate).variant(),
            EncoderVariant::Tristate
        );
    }
}
