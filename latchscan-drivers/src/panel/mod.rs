//! Panel bus implementations

pub mod gpio;

pub use gpio::{GpioPanel, PanelPins};
