//! GPIO panel bus
//!
//! Bit-bangs the panel's serial interface on plain output pins. All seven
//! lines are push-pull outputs:
//!
//! | Line  | Function                                 |
//! |-------|------------------------------------------|
//! | A..D  | Row address, bit 0 (A) to bit 3 (D)      |
//! | DATA  | Serial data into the shift chain         |
//! | CLK   | Shift clock, data sampled on rising edge |
//! | LAT   | Latch, shifted data shown while high     |

use embedded_hal::digital::OutputPin;
use latchscan_core::PanelBus;

/// The seven panel control lines
pub struct PanelPins<P> {
    pub a: P,
    pub b: P,
    pub c: P,
    pub d: P,
    pub data: P,
    pub clock: P,
    pub latch: P,
}

/// Panel bus driven through GPIO pins
pub struct GpioPanel<P> {
    pins: PanelPins<P>,
}

impl<P: OutputPin> GpioPanel<P> {
    /// Take ownership of the panel lines
    ///
    /// The lines are left untouched until [`PanelBus::initialize`].
    pub fn new(pins: PanelPins<P>) -> Self {
        Self { pins }
    }

    /// Release the pins
    pub fn release(self) -> PanelPins<P> {
        self.pins
    }

    fn set(pin: &mut P, high: bool) -> Result<(), P::Error> {
        if high {
            pin.set_high()
        } else {
            pin.set_low()
        }
    }
}

impl<P: OutputPin> PanelBus for GpioPanel<P> {
    type Error = P::Error;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        let PanelPins {
            a,
            b,
            c,
            d,
            data,
            clock,
            latch,
        } = &mut self.pins;

        for pin in [a, b, c, d, data, clock, latch] {
            pin.set_low()?;
        }
        Ok(())
    }

    fn push_bit(&mut self, on: bool) -> Result<(), Self::Error> {
        self.pins.clock.set_low()?;
        Self::set(&mut self.pins.data, on)?;
        self.pins.clock.set_high()
    }

    /// Drive A..D from the low four bits of `row`, as passed
    ///
    /// The 1-based caller value reaches the lines without re-basing.
    fn select_row(&mut self, row: u8) -> Result<(), Self::Error> {
        Self::set(&mut self.pins.a, row & 0b0001 != 0)?;
        Self::set(&mut self.pins.b, row & 0b0010 != 0)?;
        Self::set(&mut self.pins.c, row & 0b0100 != 0)?;
        Self::set(&mut self.pins.d, row & 0b1000 != 0)
    }

    fn prepare_latch(&mut self) -> Result<(), Self::Error> {
        self.pins.latch.set_low()
    }

    fn commit_latch(&mut self) -> Result<(), Self::Error> {
        self.pins.latch.set_high()
    }
}
