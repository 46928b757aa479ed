//! Host bridge traits
//!
//! The host is whatever sits around the engine: a browser canvas, a
//! terminal renderer, a test harness, or nothing at all. Every method has
//! a no-op default so a missing host degrades silently.

use super::input::AnalogInput;
use crate::panel::Framebuffer;

/// Render notifications from the emulator
pub trait HostBridge {
    /// Called once per latch commit
    ///
    /// `framebuffer` is only valid for the duration of the call; it
    /// changes again at the next commit.
    fn on_frame_committed(&mut self, framebuffer: &Framebuffer, row_pair: u8, display_enabled: bool) {
        let _ = (framebuffer, row_pair, display_enabled);
    }

    /// Called when the latch line disables or re-enables the display
    fn on_display_state_changed(&mut self, enabled: bool) {
        let _ = enabled;
    }
}

/// Pause and single-step state owned by the host
pub trait PauseControl {
    /// Whether forward progress is currently suspended
    fn is_paused(&mut self) -> bool {
        false
    }

    /// Take one single-step token if one is available
    fn consume_step_token(&mut self) -> bool {
        false
    }
}

/// Host that renders nothing, never pauses and reads zero on every input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Headless;

impl HostBridge for Headless {}

impl PauseControl for Headless {}

impl AnalogInput for Headless {
    fn raw_input(&mut self, _channel: u8) -> u32 {
        0
    }
}

impl<T: HostBridge + ?Sized> HostBridge for &mut T {
    fn on_frame_committed(&mut self, framebuffer: &Framebuffer, row_pair: u8, display_enabled: bool) {
        T::on_frame_committed(self, framebuffer, row_pair, display_enabled)
    }

    fn on_display_state_changed(&mut self, enabled: bool) {
        T::on_display_state_changed(self, enabled)
    }
}

impl<T: PauseControl + ?Sized> PauseControl for &mut T {
    fn is_paused(&mut self) -> bool {
        T::is_paused(self)
    }

    fn consume_step_token(&mut self) -> bool {
        T::consume_step_token(self)
    }
}
