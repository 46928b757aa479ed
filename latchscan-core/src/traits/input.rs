//! Analog input trait

/// Raw analog sample source
///
/// On hardware this is an ADC conversion (12-bit, `0..=4095`); a
/// simulated host returns whatever its input widgets map to. The protocol
/// engine never reads input itself; the trait exists so game code above
/// it can be written once for both backends.
pub trait AnalogInput {
    /// Read one raw sample from `channel`
    fn raw_input(&mut self, channel: u8) -> u32;
}
