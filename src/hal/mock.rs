//! Mock pin source for testing without hardware.
//!
//! [`MockPins`] plays back a scripted sequence of pin samples, the way a
//! real encoder would present them to a polling loop. When the script
//! runs out it keeps reporting the last level, like an encoder left
//! resting on a detent.
//!
//! # Example
//!
//! ```rust
//! use rotenc::hal::MockPins;
//! use rotenc::{Encoder, PinSample};
//! use rotenc::traits::QuadraturePins;
//!
//! let mut pins = MockPins::new();
//! pins.queue_bits(&[0b01, 0b00, 0b10, 0b11]).unwrap();
//!
//! let mut encoder = Encoder::full_step();
//! let mut counter = 0;
//! while !pins.is_empty() {
//!     let sample = pins.read_pins().unwrap();
//!     counter += encoder.update(sample).delta() as i32;
//! }
//! assert_eq!(counter, 1);
//! ```

use core::fmt;

use heapless::Deque;

use crate::sample::PinSample;
use crate::traits::QuadraturePins;

/// Maximum number of queued samples.
pub const MOCK_QUEUE_DEPTH: usize = 128;

/// Error returned by [`MockPins`] when a failure was injected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockPinError;

impl fmt::Display for MockPinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("mock pin read failed")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MockPinError {}

/// Scripted pin samples.
///
/// Starts resting on the detent (`11`). Samples come out in the order
/// they were queued.
#[derive(Debug)]
pub struct MockPins {
    queue: Deque<PinSample, MOCK_QUEUE_DEPTH>,
    level: PinSample,
    pending_failures: usize,
    /// Number of successful reads.
    pub read_count: usize,
}

impl MockPins {
    /// Creates mock pins resting at `11`.
    pub fn new() -> Self {
        Self::resting_at(PinSample::HIGH)
    }

    /// Creates mock pins holding the given level until samples are queued.
    pub fn resting_at(level: PinSample) -> Self {
        Self {
            queue: Deque::new(),
            level,
            pending_failures: 0,
            read_count: 0,
        }
    }

    /// Queue one sample. Returns it back if the queue is full.
    pub fn queue(&mut self, sample: PinSample) -> Result<(), PinSample> {
        self.queue.push_back(sample)
    }

    /// Queue several raw 2-bit samples.
    ///
    /// Stops at the first sample that does not fit and returns it.
    pub fn queue_bits(&mut self, bits: &[u8]) -> Result<(), PinSample> {
        for &b in bits {
            self.queue(PinSample::new(b))?;
        }
        Ok(())
    }

    /// Make the next read fail once.
    pub fn fail_next(&mut self) {
        self.pending_failures += 1;
    }

    /// Returns true if no queued samples remain.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Number of queued samples not yet read.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// The level reported once the queue is drained.
    pub fn level(&self) -> PinSample {
        self.level
    }
}

impl Default for MockPins {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadraturePins for MockPins {
    type Error = MockPinError;

    fn read_pins(&mut self) -> Result<PinSample, MockPinError> {
        if self.pending_failures > 0 {
            self.pending_failures -= 1;
            return Err(MockPinError);
        }
        if let Some(sample) = self.queue.pop_front() {
            self.level = sample;
        }
        self.read_count += 1;
        Ok(self.level)
    }
}
