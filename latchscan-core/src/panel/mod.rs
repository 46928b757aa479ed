//! Panel protocol model
//!
//! The pieces of the panel's serial interface, leaves first: the shift
//! chain, the row address register, the pixel grid, and the emulator that
//! ties them together at latch time.

pub mod emulator;
pub mod framebuffer;
pub mod row;
pub mod shift;

pub use emulator::PanelEmulator;
pub use framebuffer::{
    row_bits, Color, Framebuffer, Pixel, PixelRow, PANEL_HEIGHT, PANEL_WIDTH, ROW_BITS,
};
pub use row::{RowAddress, ROW_PAIRS};
pub use shift::{ShiftRegister, SHIFT_DEPTH};
