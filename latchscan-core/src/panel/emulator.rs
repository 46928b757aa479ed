//! Panel emulator
//!
//! Reconstructs the panel's visible picture from the serial bitstream.
//! Bits pushed through [`PanelEmulator::push_bit`] only land in the shift
//! chain; the framebuffer changes exclusively in
//! [`PanelEmulator::commit_latch`], which decodes the chain into the
//! currently addressed row-pair.
//!
//! # Chain layout at commit
//!
//! ```text
//! logical bit   0 ..  31   top row, red plane     (x = 0..31)
//!              32 ..  63   top row, green plane
//!              64 ..  95   top row, blue plane
//!              96 .. 127   bottom row, red plane
//!             128 .. 159   bottom row, green plane
//!             160 .. 191   bottom row, blue plane
//! ```

use core::convert::Infallible;

use super::framebuffer::{Framebuffer, Pixel, PANEL_WIDTH};
use super::row::RowAddress;
use super::shift::ShiftRegister;
use crate::traits::{HostBridge, PanelBus};

/// Start offset of each plane within the chain, in decode order:
/// top R, top G, top B, bottom R, bottom G, bottom B
const PLANE_OFFSETS: [usize; 6] = [
    0,
    PANEL_WIDTH,
    2 * PANEL_WIDTH,
    3 * PANEL_WIDTH,
    4 * PANEL_WIDTH,
    5 * PANEL_WIDTH,
];

/// Emulated panel
///
/// Owns the shift chain, the row address, the latched framebuffer and the
/// latch line state. The host is notified on every display state change
/// and every commit.
pub struct PanelEmulator<H> {
    shift: ShiftRegister,
    address: RowAddress,
    framebuffer: Framebuffer,
    /// Latch line held low (between prepare and commit)
    latch_low: bool,
    display_enabled: bool,
    commits: u32,
    host: H,
}

impl<H: HostBridge> PanelEmulator<H> {
    /// Create an emulator in its reset state
    ///
    /// The host is not notified until [`PanelEmulator::initialize`] runs.
    pub fn new(host: H) -> Self {
        Self {
            shift: ShiftRegister::new(),
            address: RowAddress::default(),
            framebuffer: Framebuffer::new(),
            latch_low: false,
            display_enabled: true,
            commits: 0,
            host,
        }
    }

    /// Reset to power-on state
    ///
    /// Clears the framebuffer, fills the chain with 192 valid zero bits,
    /// selects row-pair 0 and enables the display.
    pub fn initialize(&mut self) {
        self.framebuffer.clear();
        self.shift.clear();
        self.address = RowAddress::default();
        self.latch_low = false;
        self.display_enabled = true;
        self.commits = 0;

        info!("panel emulator initialized");
        self.host.on_display_state_changed(true);
    }

    /// Clock one bit into the shift chain
    pub fn push_bit(&mut self, on: bool) {
        self.shift.push(on);
    }

    /// Select a row-pair using the 1-based row convention
    pub fn select_row(&mut self, row: u8) {
        self.address = RowAddress::from_one_based(row);
    }

    /// Select `row`, then shift 192 zero bits through the normal push path
    pub fn clear_row(&mut self, row: u8) {
        self.select_row(row);
        for _ in 0..self.shift.depth() {
            self.push_bit(false);
        }
    }

    /// Pull the latch line low
    ///
    /// Only the observable display state changes; shifted data and the
    /// framebuffer are untouched.
    pub fn prepare_latch(&mut self) {
        self.latch_low = true;
        self.display_enabled = false;
        self.host.on_display_state_changed(false);
    }

    /// Pulse the latch: decode the chain into the addressed row-pair
    pub fn commit_latch(&mut self) {
        self.decode_into_framebuffer();

        self.latch_low = false;
        self.display_enabled = true;
        self.commits = self.commits.wrapping_add(1);

        self.host.on_display_state_changed(true);
        self.host
            .on_frame_committed(&self.framebuffer, self.address.index(), self.display_enabled);
    }

    fn decode_into_framebuffer(&mut self) {
        let top = self.address.top();
        let bottom = self.address.bottom();

        for x in 0..PANEL_WIDTH {
            let bit = |plane: usize| self.shift.read(PLANE_OFFSETS[plane] + x);

            let top_px = Pixel::new(bit(0), bit(1), bit(2));
            let bottom_px = Pixel::new(bit(3), bit(4), bit(5));

            self.framebuffer.set_pixel(x, top, top_px);
            self.framebuffer.set_pixel(x, bottom, bottom_px);
        }
    }

    /// Latched picture
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Shift chain contents
    pub fn shift_register(&self) -> &ShiftRegister {
        &self.shift
    }

    /// Currently selected row-pair
    pub fn row_pair(&self) -> RowAddress {
        self.address
    }

    /// Whether the display is enabled (false between prepare and commit)
    pub fn display_enabled(&self) -> bool {
        self.display_enabled
    }

    /// Whether a latch has been prepared but not yet committed
    pub fn latch_pending(&self) -> bool {
        self.latch_low
    }

    /// Number of commits since the last initialize
    pub fn commits(&self) -> u32 {
        self.commits
    }

    /// Host bridge
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Host bridge, mutable
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Release the host bridge
    pub fn into_host(self) -> H {
        self.host
    }
}

impl<H: HostBridge> PanelBus for PanelEmulator<H> {
    type Error = Infallible;

    fn initialize(&mut self) -> Result<(), Self::Error> {
        PanelEmulator::initialize(self);
        Ok(())
    }

    fn push_bit(&mut self, on: bool) -> Result<(), Self::Error> {
        PanelEmulator::push_bit(self, on);
        Ok(())
    }

    fn select_row(&mut self, row: u8) -> Result<(), Self::Error> {
        PanelEmulator::select_row(self, row);
        Ok(())
    }

    fn prepare_latch(&mut self) -> Result<(), Self::Error> {
        PanelEmulator::prepare_latch(self);
        Ok(())
    }

    fn commit_latch(&mut self) -> Result<(), Self::Error> {
        PanelEmulator::commit_latch(self);
        Ok(())
    }

    fn clear_row(&mut self, row: u8) -> Result<(), Self::Error> {
        PanelEmulator::clear_row(self, row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{row_bits, Color};
    use crate::traits::Headless;
    use heapless::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum HostEvent {
        Display(bool),
        Commit { row_pair: u8, enabled: bool, lit: usize },
    }

    #[derive(Default)]
    struct RecordingHost {
        events: Vec<HostEvent, 64>,
    }

    impl HostBridge for RecordingHost {
        fn on_frame_committed(&mut self, fb: &Framebuffer, row_pair: u8, display_enabled: bool) {
            let _ = self.events.push(HostEvent::Commit {
                row_pair,
                enabled: display_enabled,
                lit: fb.lit_count(),
            });
        }

        fn on_display_state_changed(&mut self, enabled: bool) {
            let _ = self.events.push(HostEvent::Display(enabled));
        }
    }

    fn emulator() -> PanelEmulator<RecordingHost> {
        let mut panel = PanelEmulator::new(RecordingHost::default());
        panel.initialize();
        panel.host_mut().events.clear();
        panel
    }

    fn push_all(panel: &mut PanelEmulator<RecordingHost>, bits: impl Iterator<Item = bool>) {
        for bit in bits {
            panel.push_bit(bit);
        }
    }

    #[test]
    fn test_initialize_resets_state() {
        let mut panel = PanelEmulator::new(RecordingHost::default());
        panel.push_bit(true);
        panel.select_row(5);
        panel.prepare_latch();

        panel.initialize();

        assert_eq!(panel.framebuffer(), &Framebuffer::new());
        assert_eq!(panel.shift_register(), &ShiftRegister::new());
        assert_eq!(panel.row_pair().index(), 0);
        assert!(panel.display_enabled());
        assert!(!panel.latch_pending());
        assert_eq!(panel.host().events.last(), Some(&HostEvent::Display(true)));
    }

    #[test]
    fn test_push_does_not_touch_framebuffer() {
        let mut panel = emulator();
        for _ in 0..192 {
            panel.push_bit(true);
        }
        panel.select_row(1);

        assert_eq!(panel.framebuffer().lit_count(), 0);
        assert!(panel.host().events.is_empty());
    }

    #[test]
    fn test_red_top_row() {
        let mut panel = emulator();
        let red = [Pixel::from(Color::Red); PANEL_WIDTH];
        let off = [Pixel::OFF; PANEL_WIDTH];

        push_all(&mut panel, row_bits(&red));
        push_all(&mut panel, row_bits(&off));
        panel.select_row(1);
        panel.commit_latch();

        let fb = panel.framebuffer();
        assert!(fb.row(0).iter().all(|&px| px == Color::Red.into()));
        assert!(fb.row(16).iter().all(|&px| px == Pixel::OFF));
        assert_eq!(fb.lit_count(), 32);
    }

    #[test]
    fn test_each_plane_lands_on_its_channel() {
        let mut panel = emulator();

        // One lit bit per plane, at a distinct column each
        for plane in 0..6 {
            for x in 0..PANEL_WIDTH {
                panel.push_bit(x == plane * 5);
            }
        }
        panel.select_row(8);
        panel.commit_latch();

        let fb = panel.framebuffer();
        assert_eq!(fb.pixel(0, 7), Pixel::new(true, false, false));
        assert_eq!(fb.pixel(5, 7), Pixel::new(false, true, false));
        assert_eq!(fb.pixel(10, 7), Pixel::new(false, false, true));
        assert_eq!(fb.pixel(15, 23), Pixel::new(true, false, false));
        assert_eq!(fb.pixel(20, 23), Pixel::new(false, true, false));
        assert_eq!(fb.pixel(25, 23), Pixel::new(false, false, true));
        assert_eq!(fb.lit_count(), 6);
    }

    #[test]
    fn test_commit_only_writes_addressed_pair() {
        let mut panel = emulator();
        for _ in 0..192 {
            panel.push_bit(true);
        }
        panel.select_row(3);
        panel.commit_latch();

        panel.select_row(4);
        panel.clear_row(4);
        panel.commit_latch();

        let fb = panel.framebuffer();
        assert!(fb.row(2).iter().all(|&px| px == Pixel::WHITE));
        assert!(fb.row(18).iter().all(|&px| px == Pixel::WHITE));
        assert_eq!(fb.row(3), &[Pixel::OFF; PANEL_WIDTH]);
        assert_eq!(fb.lit_count(), 64);
    }

    #[test]
    fn test_clear_then_commit_blanks_pair() {
        let mut panel = emulator();
        for _ in 0..192 {
            panel.push_bit(true);
        }
        panel.select_row(2);
        panel.commit_latch();
        assert_eq!(panel.framebuffer().lit_count(), 64);

        panel.clear_row(2);
        panel.commit_latch();
        assert_eq!(panel.framebuffer().lit_count(), 0);
    }

    #[test]
    fn test_clear_is_overwritten_by_payload() {
        let mut panel = emulator();
        panel.clear_row(1);
        for _ in 0..192 {
            panel.push_bit(true);
        }
        panel.commit_latch();

        assert_eq!(panel.framebuffer().lit_count(), 64);
    }

    #[test]
    fn test_select_wraps() {
        let mut panel = emulator();
        for _ in 0..192 {
            panel.push_bit(true);
        }
        panel.select_row(17);
        panel.commit_latch();

        assert!(panel.framebuffer().row(0).iter().all(|px| px.is_on()));
        assert!(panel.framebuffer().row(16).iter().all(|px| px.is_on()));
    }

    #[test]
    fn test_latch_state_and_notifications() {
        let mut panel = emulator();
        panel.select_row(6);

        panel.prepare_latch();
        assert!(!panel.display_enabled());
        assert!(panel.latch_pending());

        panel.commit_latch();
        assert!(panel.display_enabled());
        assert!(!panel.latch_pending());
        assert_eq!(panel.commits(), 1);

        let events = &panel.host().events;
        assert_eq!(
            events.as_slice(),
            &[
                HostEvent::Display(false),
                HostEvent::Display(true),
                HostEvent::Commit {
                    row_pair: 5,
                    enabled: true,
                    lit: 0
                },
            ]
        );
    }

    #[test]
    fn test_prepare_latch_keeps_data() {
        let mut panel = emulator();
        for _ in 0..192 {
            panel.push_bit(true);
        }
        panel.select_row(1);
        panel.commit_latch();
        let before = panel.shift_register().clone();

        panel.prepare_latch();

        assert_eq!(panel.shift_register(), &before);
        assert_eq!(panel.framebuffer().lit_count(), 64);
    }

    #[test]
    fn test_headless_emulator_through_bus() {
        fn drive<B: PanelBus>(bus: &mut B) -> Result<(), B::Error> {
            bus.initialize()?;
            bus.clear_row(1)?;
            bus.prepare_latch()?;
            bus.select_row(1)?;
            for i in 0..192 {
                bus.push_bit(i < 32)?;
            }
            bus.commit_latch()
        }

        let mut panel = PanelEmulator::new(Headless);
        drive(&mut panel).unwrap();

        assert_eq!(panel.framebuffer().lit_count(), 32);
        assert_eq!(panel.framebuffer().pixel(31, 0), Color::Red.into());
    }
}
