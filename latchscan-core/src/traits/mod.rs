//! Capability traits
//!
//! These traits define the seams between the scan logic, the panel
//! backend (emulated or real pins) and the host that renders and
//! supplies input.

pub mod host;
pub mod input;
pub mod panel;

pub use host::{Headless, HostBridge, PauseControl};
pub use input::AnalogInput;
pub use panel::PanelBus;
