//! Row-pair scan driver
//!
//! For each row-pair `i` in `0..16`, in order:
//!
//! 1. Clear: select pair `i` and shift 192 zeros (anti-ghosting on real
//!    panels; fully overwritten by step 4-5 in the shift chain)
//! 2. Prepare latch
//! 3. Select row `i + 1` (1-based)
//! 4. Shift 96 plane-major bits of logical row `i`
//! 5. Shift 96 plane-major bits of logical row `i + 16`
//! 6. Commit latch
//! 7. Delay for the refresh time (the only suspension point)
//!
//! After pair 15 the frame is complete and the next call starts at 0.

use core::ops::ControlFlow;

use embedded_hal_async::delay::DelayNs;

use crate::config::ScanConfig;
use crate::panel::{row_bits, Framebuffer, PixelRow, RowAddress};
use crate::timing::Pacer;
use crate::traits::{PanelBus, PauseControl};

/// Scan loop over a panel bus
///
/// Owns the bus and the pacer. Every bus call is synchronous; the only
/// await point is the pacer delay after each commit.
pub struct ScanDriver<B, D, C> {
    bus: B,
    pacer: Pacer<D, C>,
    config: ScanConfig,
    /// Completed frames
    frames: u32,
}

impl<B, D, C> ScanDriver<B, D, C>
where
    B: PanelBus,
    D: DelayNs,
    C: PauseControl,
{
    /// Create a scan driver
    ///
    /// The pacer polls pause state every `config.pause_poll_ms`.
    pub fn new(bus: B, delay: D, control: C, config: ScanConfig) -> Self {
        Self {
            bus,
            pacer: Pacer::new(delay, control, config.pause_poll_ms),
            config,
            frames: 0,
        }
    }

    /// Initialize the panel and reset the frame counter
    pub fn initialize(&mut self) -> Result<(), B::Error> {
        self.frames = 0;
        self.bus.initialize()
    }

    /// Paint one full frame from `grid`
    pub async fn scan_frame(&mut self, grid: &Framebuffer) -> Result<(), B::Error> {
        for pair in RowAddress::all() {
            self.scan_row_pair(pair, grid).await?;
        }

        self.frames = self.frames.wrapping_add(1);
        trace!("frame {} scanned", self.frames);
        Ok(())
    }

    /// Load and latch one row-pair, then delay
    pub async fn scan_row_pair(
        &mut self,
        pair: RowAddress,
        grid: &Framebuffer,
    ) -> Result<(), B::Error> {
        self.bus.clear_row(pair.one_based())?;
        self.bus.prepare_latch()?;
        self.bus.select_row(pair.one_based())?;
        self.shift_row(grid.row(pair.top()))?;
        self.shift_row(grid.row(pair.bottom()))?;
        self.bus.commit_latch()?;

        self.pacer.delay(self.config.refresh_delay_ms).await;
        Ok(())
    }

    fn shift_row(&mut self, row: &PixelRow) -> Result<(), B::Error> {
        for bit in row_bits(row) {
            self.bus.push_bit(bit)?;
        }
        Ok(())
    }

    /// Alternate between updating `grid` and scanning it
    ///
    /// `update` receives the grid and the number of frames completed so far
    /// and runs before every frame. Returns the number of frames scanned
    /// once `update` breaks.
    pub async fn run<F>(&mut self, grid: &mut Framebuffer, mut update: F) -> Result<u32, B::Error>
    where
        F: FnMut(&mut Framebuffer, u32) -> ControlFlow<()>,
    {
        let mut scanned = 0;

        loop {
            if update(&mut *grid, self.frames).is_break() {
                return Ok(scanned);
            }

            self.scan_frame(&*grid).await?;
            scanned += 1;
        }
    }

    /// Frames completed since the last initialize
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Scan configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Panel bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Panel bus, mutable
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Pacer
    pub fn pacer(&self) -> &Pacer<D, C> {
        &self.pacer
    }

    /// Release the bus and pacer
    pub fn into_parts(self) -> (B, Pacer<D, C>) {
        (self.bus, self.pacer)
    }
}
