//! ADC-backed analog input
//!
//! Each `raw_input` call runs one blocking single-channel conversion. The
//! chip HAL supplies the conversion through [`AdcConverter`].

use latchscan_core::AnalogInput;

/// Largest 12-bit sample
pub const ADC_MAX: u16 = 0x0FFF;

/// Single-channel ADC conversion for platform abstraction
pub trait AdcConverter {
    /// Conversion error
    type Error;

    /// Select `channel`, convert, and return the raw sample
    fn convert(&mut self, channel: u8) -> Result<u16, Self::Error>;
}

/// Analog input over a 12-bit ADC
pub struct AdcInput<A> {
    adc: A,
    /// Conversions that returned an error
    failures: u32,
}

impl<A: AdcConverter> AdcInput<A> {
    /// Wrap an ADC
    pub fn new(adc: A) -> Self {
        Self { adc, failures: 0 }
    }

    /// Failed conversions since creation
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Release the ADC
    pub fn release(self) -> A {
        self.adc
    }
}

impl<A: AdcConverter> AnalogInput for AdcInput<A> {
    /// Sample `channel`; a failed conversion reads as 0
    fn raw_input(&mut self, channel: u8) -> u32 {
        match self.adc.convert(channel) {
            Ok(sample) => u32::from(sample & ADC_MAX),
            Err(_) => {
                self.failures = self.failures.wrapping_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("adc conversion failed on channel {}", channel);
                0
            }
        }
    }
}
