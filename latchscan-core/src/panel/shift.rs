//! Shift register model
//!
//! The panel's data input is a chain of 192 flip-flops (2 halves × 3 colour
//! planes × 32 columns). Every clock pulse moves the chain along by one, so
//! the chain always holds the 192 most recently clocked bits and anything
//! older falls off the far end.

/// Depth of the shift chain in bits
pub const SHIFT_DEPTH: usize = 192;

/// Fixed-depth shift chain
///
/// Stored as a ring buffer: `oldest` is the physical slot of logical bit 0.
/// The chain is always full; at reset it holds 192 zeros, which count as
/// valid data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRegister {
    cells: [bool; SHIFT_DEPTH],
    /// Physical index of the oldest held bit
    oldest: usize,
}

impl Default for ShiftRegister {
    fn default() -> Self {
        Self::new()
    }
}

impl ShiftRegister {
    /// Create a chain holding 192 zero bits
    pub const fn new() -> Self {
        Self {
            cells: [false; SHIFT_DEPTH],
            oldest: 0,
        }
    }

    /// Clock one bit into the chain
    ///
    /// The oldest bit is evicted. Its slot becomes the newest position, so
    /// the write lands where the read cursor was and the cursor advances.
    pub fn push(&mut self, bit: bool) {
        self.cells[self.oldest] = bit;
        self.oldest = (self.oldest + 1) % SHIFT_DEPTH;
    }

    /// Read a bit by logical position
    ///
    /// `0` is the oldest held bit, `191` the most recently pushed one.
    ///
    /// # Panics
    /// If `index >= 192`.
    pub fn read(&self, index: usize) -> bool {
        assert!(
            index < SHIFT_DEPTH,
            "shift register index {} out of range",
            index
        );
        self.cells[(self.oldest + index) % SHIFT_DEPTH]
    }

    /// Set every cell to `value` and rewind the cursor
    pub fn fill(&mut self, value: bool) {
        self.cells = [value; SHIFT_DEPTH];
        self.oldest = 0;
    }

    /// Reset every cell to zero
    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// Iterate from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..SHIFT_DEPTH).map(move |i| self.read(i))
    }

    /// Chain depth in bits
    pub const fn depth(&self) -> usize {
        SHIFT_DEPTH
    }
}
