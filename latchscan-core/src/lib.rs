//! Board-agnostic protocol engine for a multiplexed 32x32 RGB LED panel
//!
//! The panel is loaded one bit at a time through a 192-bit shift chain,
//! addresses one row-pair at a time (row `r` and row `r + 16`) and only
//! shows new data when the latch line is pulsed. This crate contains
//! everything that does not depend on real pins:
//!
//! - Panel emulator (shift register, row address, latch/commit decode)
//! - Capability traits at the hardware and host seams
//! - Cooperative delay with pause and single-step support
//! - Scan driver that paints one full frame row-pair by row-pair
//! - Scan configuration
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────┐
//! │  ScanDriver (scan module)   │──── delay ────► Pacer ──► DelayNs + PauseControl
//! └─────────────────────────────┘
//!                │ push / select / latch
//!                ▼
//! ┌─────────────────────────────┐
//! │  PanelBus (traits module)   │
//! └─────────────────────────────┘
//!         ┌──────┴───────┐
//!         ▼              ▼
//!  PanelEmulator     GpioPanel
//!  (this crate)      (latchscan-drivers)
//!         │
//!         ▼
//!     HostBridge
//! ```

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod config;
pub mod panel;
pub mod scan;
pub mod timing;
pub mod traits;

pub use config::ScanConfig;
pub use panel::{Color, Framebuffer, PanelEmulator, Pixel, RowAddress, ShiftRegister};
pub use scan::ScanDriver;
pub use timing::Pacer;
pub use traits::{AnalogInput, Headless, HostBridge, PanelBus, PauseControl};
