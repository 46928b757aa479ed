//! Hardware backends for the panel protocol engine
//!
//! This crate provides concrete implementations of the traits defined in
//! latchscan-core for real hardware:
//!
//! - Panel bus over GPIO (bit-banged shift clock, address lines, latch)
//! - Analog input over a 12-bit ADC

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod panel;

pub use input::{AdcConverter, AdcInput};
pub use panel::{GpioPanel, PanelPins};
