//! Scan configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default hold time per row-pair in milliseconds
pub const DEFAULT_REFRESH_DELAY_MS: u32 = 1;

/// Default sleep between pause polls in milliseconds (about one 60 Hz frame)
pub const DEFAULT_PAUSE_POLL_MS: u32 = 16;

/// Timing parameters for the scan driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanConfig {
    /// Delay after each row-pair commit
    pub refresh_delay_ms: u32,
    /// Sleep between pause/step polls while paused
    pub pause_poll_ms: u32,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            refresh_delay_ms: DEFAULT_REFRESH_DELAY_MS,
            pause_poll_ms: DEFAULT_PAUSE_POLL_MS,
        }
    }
}

impl ScanConfig {
    /// Time spent in refresh delays for one full frame
    ///
    /// Saturates at `u32::MAX`.
    pub const fn frame_delay_ms(&self) -> u32 {
        self.refresh_delay_ms
            .saturating_mul(crate::panel::ROW_PAIRS as u32)
    }
}
