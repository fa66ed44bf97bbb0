//! Transition tables for the three supported encoder types.
//!
//! Each table is an 8x4 grid indexed by `[state][pins]`. A cell packs the
//! next state into its low nibble and an optional completed-step
//! direction into bits 4-5:
//!
//! | Bits | Meaning |
//! |------|---------|
//! | `0-3` | Next state index (`0..=7`) |
//! | `4-5` | `00` no step, `01` clockwise, `11` counter-clockwise |
//!
//! The eight rows have the same roles in every table (see [`Phase`]).
//! Each table is compiled in only with its Cargo feature.
//! Pin sequences that do not follow the expected Gray code land in
//! [`Phase::Invalid`] or fall back toward [`Phase::Start`], so bounce never
//! produces a step.
//!
//! # Example
//!
//! ```rust
//! use rotenc::table::{Phase, FULL_STEP};
//! use rotenc::{PinSample, Rotation};
//!
//! let cell = FULL_STEP.lookup(Phase::CwFinal.index(), PinSample::HIGH);
//! assert_eq!(cell.next_phase(), Phase::Start);
//! assert_eq!(cell.rotation(), Rotation::Clockwise);
//! ```

use crate::sample::{PinSample, Rotation};

/// Direction bits for a completed clockwise step.
pub const DIR_CW: u8 = 0b01 << 4;

/// Direction bits for a completed counter-clockwise step.
pub const DIR_CCW: u8 = 0b11 << 4;

/// Mask selecting the next-state nibble of a cell.
pub const STATE_MASK: u8 = 0x0F;

/// Number of state rows in a table.
pub const ROWS: usize = 8;

/// Number of pin-sample columns in a table.
pub const COLUMNS: usize = 4;

/// Raw cell grid, `[state][pins]`.
pub type Cells = [[u8; COLUMNS]; ROWS];

const INVALID: u8 = Phase::Invalid as u8;
const CCW_FINAL: u8 = Phase::CcwFinal as u8;
#[cfg_attr(not(any(feature = "full-step", feature = "half-step")), allow(dead_code))]
const CCW_NEXT: u8 = Phase::CcwNext as u8;
const CCW_BEGIN: u8 = Phase::CcwBegin as u8;
const START: u8 = Phase::Start as u8;
const CW_BEGIN: u8 = Phase::CwBegin as u8;
#[cfg_attr(not(any(feature = "full-step", feature = "half-step")), allow(dead_code))]
const CW_NEXT: u8 = Phase::CwNext as u8;
const CW_FINAL: u8 = Phase::CwFinal as u8;

/// Role of each state row.
///
/// Rows below [`Start`](Self::Start) track a counter-clockwise turn in
/// progress, rows above it a clockwise one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Phase {
    /// Recovery row entered after an unexpected edge.
    Invalid = 0,
    /// Last edge of a counter-clockwise step.
    CcwFinal = 1,
    /// Middle of a counter-clockwise step.
    CcwNext = 2,
    /// First edge of a counter-clockwise step.
    CcwBegin = 3,
    /// Resting at a detent. Initial state, and where every step ends.
    Start = 4,
    /// First edge of a clockwise step.
    CwBegin = 5,
    /// Middle of a clockwise step.
    CwNext = 6,
    /// Last edge of a clockwise step.
    CwFinal = 7,
}

impl Phase {
    /// All phases in row order.
    pub const ALL: [Phase; ROWS] = [
        Phase::Invalid,
        Phase::CcwFinal,
        Phase::CcwNext,
        Phase::CcwBegin,
        Phase::Start,
        Phase::CwBegin,
        Phase::CwNext,
        Phase::CwFinal,
    ];

    /// Row index of this phase.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Phase for a row index, or `None` if the index is not a row.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Phase::Invalid),
            1 => Some(Phase::CcwFinal),
            2 => Some(Phase::CcwNext),
            3 => Some(Phase::CcwBegin),
            4 => Some(Phase::Start),
            5 => Some(Phase::CwBegin),
            6 => Some(Phase::CwNext),
            7 => Some(Phase::CwFinal),
            _ => None,
        }
    }

    /// Upper-case row name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Phase::Invalid => "INVALID",
            Phase::CcwFinal => "CCW_FINAL",
            Phase::CcwNext => "CCW_NEXT",
            Phase::CcwBegin => "CCW_BEGIN",
            Phase::Start => "START",
            Phase::CwBegin => "CW_BEGIN",
            Phase::CwNext => "CW_NEXT",
            Phase::CwFinal => "CW_FINAL",
        }
    }
}

/// One packed table cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition(u8);

impl Transition {
    /// Wraps a packed cell value.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        Self(raw)
    }

    /// The packed byte, direction bits included.
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Next state index (low nibble).
    #[inline]
    pub const fn next_index(self) -> u8 {
        self.0 & STATE_MASK
    }

    /// Next state as a [`Phase`].
    ///
    /// Every cell in the built-in tables holds a valid row, so the
    /// `Invalid` fallback is never taken for them.
    pub const fn next_phase(self) -> Phase {
        match Phase::from_index(self.next_index()) {
            Some(phase) => phase,
            None => Phase::Invalid,
        }
    }

    /// Direction completed by this transition, if any.
    #[inline]
    pub const fn rotation(self) -> Rotation {
        Rotation::from_direction_bits(self.0 >> 4)
    }
}

/// A fixed transition table.
///
/// Tables are plain `static` data; any number of encoders may share one.
#[derive(Debug, PartialEq, Eq)]
pub struct TransitionTable {
    name: &'static str,
    cells: Cells,
}

impl TransitionTable {
    /// Creates a table from raw cells.
    ///
    /// Every cell's low nibble must be a row index below [`ROWS`]; the
    /// built-in tables are checked by the test suite.
    pub const fn new(name: &'static str, cells: Cells) -> Self {
        Self { name, cells }
    }

    /// Short human-readable name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Raw cell grid.
    #[inline]
    pub const fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Looks up the transition for a state and a pin sample.
    ///
    /// Only the low three bits of `state` pick the row. Reachable states
    /// never use bit 3, so this matches indexing by the full nibble while
    /// keeping the lookup in bounds for any input.
    #[inline]
    pub const fn lookup(&self, state: u8, pins: PinSample) -> Transition {
        Transition(self.cells[(state & 0x07) as usize][pins.bits() as usize])
    }
}

/// Full-step encoder: one step per four-edge detent-to-detent cycle.
///
/// ```text
/// 01  CCW_FINAL
/// 00  CCW_NEXT
/// 10  CCW_BEGIN
/// 11  START   <-- detent
/// 01  CW_BEGIN
/// 00  CW_NEXT
/// 10  CW_FINAL
/// ```
#[cfg(feature = "full-step")]
pub static FULL_STEP: TransitionTable = TransitionTable::new(
    "Full",
    [
        // INVALID
        [START, CW_BEGIN, CCW_BEGIN, START],
        // CCW_FINAL
        [CCW_NEXT, CCW_FINAL, INVALID, START | DIR_CCW],
        // CCW_NEXT
        [CCW_NEXT, CCW_FINAL, CCW_BEGIN, INVALID],
        // CCW_BEGIN
        [CCW_NEXT, INVALID, CCW_BEGIN, START],
        // START
        [INVALID, CW_BEGIN, CCW_BEGIN, START],
        // CW_BEGIN
        [CW_NEXT, CW_BEGIN, INVALID, START],
        // CW_NEXT
        [CW_NEXT, CW_BEGIN, CW_FINAL, INVALID],
        // CW_FINAL
        [CW_NEXT, INVALID, CW_FINAL, START | DIR_CW],
    ],
);

/// Half-step encoder: fires at both `11` and `00`, two steps per cycle.
///
/// The CCW_NEXT and CW_NEXT rows cross over to the opposite final row on
/// a reversal edge.
#[cfg(feature = "half-step")]
pub static HALF_STEP: TransitionTable = TransitionTable::new(
    "Half",
    [
        // INVALID
        [START, CW_BEGIN, CCW_BEGIN, START],
        // CCW_FINAL
        [CCW_NEXT, CCW_FINAL, INVALID, START | DIR_CCW],
        // CCW_NEXT
        [CCW_NEXT, CCW_FINAL, CW_FINAL, INVALID],
        // CCW_BEGIN
        [CCW_NEXT | DIR_CCW, INVALID, CCW_BEGIN, START],
        // START
        [INVALID, CW_BEGIN, CCW_BEGIN, START],
        // CW_BEGIN
        [CW_NEXT | DIR_CW, CW_BEGIN, INVALID, START],
        // CW_NEXT
        [CW_NEXT, CCW_FINAL, CW_FINAL, INVALID],
        // CW_FINAL
        [CW_NEXT, INVALID, CW_FINAL, START | DIR_CW],
    ],
);

/// Three-phase encoder cycling through `11`, `00`, `10`.
///
/// Pattern `01` never occurs on this hardware, so the CCW_NEXT and
/// CW_NEXT rows are unused and route everything to INVALID.
///
/// ```text
/// 00  CCW_FINAL
/// 10  CCW_BEGIN
/// 11  START   <-- detent
/// 00  CW_BEGIN
/// 10  CW_FINAL
/// ```
#[cfg(feature = "tristate")]
pub static TRISTATE: TransitionTable = TransitionTable::new(
    "Tri",
    [
        // INVALID
        [START, CW_BEGIN, CCW_BEGIN, START],
        // CCW_FINAL
        [CCW_FINAL, START, CCW_BEGIN, START | DIR_CCW],
        // CCW_NEXT
        [INVALID, INVALID, INVALID, INVALID],
        // CCW_BEGIN
        [CCW_FINAL, START, CCW_BEGIN, START],
        // START
        [CW_BEGIN, START, CCW_BEGIN, START],
        // CW_BEGIN
        [CW_BEGIN, START, CW_FINAL, START],
        // CW_NEXT
        [INVALID, INVALID, INVALID, INVALID],
        // CW_FINAL
        [CW_BEGIN, START, CW_FINAL, START | DIR_CW],
    ],
);
