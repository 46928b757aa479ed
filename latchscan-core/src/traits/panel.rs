//! Panel bus trait
//!
//! The six wiring-level primitives of the panel interface. The scan
//! driver only talks to the panel through this trait, so the same scan
//! code drives the emulator and a real panel.

use crate::panel::SHIFT_DEPTH;

/// Serial panel interface
///
/// Mirrors the physical wiring: a data line clocked into the shift
/// chain, four row-address lines, and a latch line.
///
/// # Implementations
/// - **Emulated:** `PanelEmulator` (decodes the bitstream into a framebuffer)
/// - **Hardware:** `GpioPanel` in `latchscan-drivers` (drives pins)
pub trait PanelBus {
    /// Error raised by the underlying lines
    type Error;

    /// Bring the panel to a known state
    fn initialize(&mut self) -> Result<(), Self::Error>;

    /// Clock one bit into the shift chain
    fn push_bit(&mut self, on: bool) -> Result<(), Self::Error>;

    /// Select a row-pair using the 1-based row convention
    ///
    /// Row 1 addresses row-pair 0; the address wraps modulo 16.
    fn select_row(&mut self, row: u8) -> Result<(), Self::Error>;

    /// Pull the latch line low before new data is shifted
    fn prepare_latch(&mut self) -> Result<(), Self::Error>;

    /// Pulse the latch so the shifted data becomes visible
    fn commit_latch(&mut self) -> Result<(), Self::Error>;

    /// Select `row`, then shift a full chain of zero bits
    ///
    /// The zeros go through [`PanelBus::push_bit`] one by one so the
    /// clear costs the same clock time as a real payload.
    fn clear_row(&mut self, row: u8) -> Result<(), Self::Error> {
        self.select_row(row)?;
        for _ in 0..SHIFT_DEPTH {
            self.push_bit(false)?;
        }
        Ok(())
    }
}

impl<T: PanelBus + ?Sized> PanelBus for &mut T {
    type Error = T::Error;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        T::initialize(self)
    }

    fn push_bit(&mut self, on: bool) -> Result<(), Self::Error> {
        T::push_bit(self, on)
    }

    fn select_row(&mut self, row: u8) -> Result<(), Self::Error> {
        T::select_row(self, row)
    }

    fn prepare_latch(&mut self) -> Result<(), Self::Error> {
        T::prepare_latch(self)
    }

    fn commit_latch(&mut self) -> Result<(), Self::Error> {
        T::commit_latch(self)
    }

    fn clear_row(&mut self, row: u8) -> Result<(), Self::Error> {
        T::clear_row(self, row)
    }
}
