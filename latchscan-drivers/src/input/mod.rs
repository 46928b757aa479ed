//! Analog input implementations

pub mod adc;

pub use adc::{AdcConverter, AdcInput, ADC_MAX};
