//! Pause-aware cooperative delay
//!
//! `Pacer::delay` is the only suspension point in the scan path. While
//! the host reports paused it sleeps in short polls and never lets the
//! caller continue, unless a single-step token can be taken, in which
//! case exactly one delay call goes through. The actual wait is an async
//! `DelayNs`, so the host scheduler keeps running input and rendering.

use embassy_futures::yield_now;
use embedded_hal_async::delay::DelayNs;

use crate::config::DEFAULT_PAUSE_POLL_MS;
use crate::traits::PauseControl;

/// Cooperative delay gated by host pause/step state
pub struct Pacer<D, C> {
    delay: D,
    control: C,
    /// Sleep between pause polls
    poll_ms: u32,
    /// Single-step tokens consumed so far
    steps_taken: u32,
}

impl<D: DelayNs, C: PauseControl> Pacer<D, C> {
    /// Create a pacer polling pause state every `poll_ms` milliseconds
    pub fn new(delay: D, control: C, poll_ms: u32) -> Self {
        Self {
            delay,
            control,
            poll_ms,
            steps_taken: 0,
        }
    }

    /// Create a pacer with the default poll interval
    pub fn with_default_poll(delay: D, control: C) -> Self {
        Self::new(delay, control, DEFAULT_PAUSE_POLL_MS)
    }

    /// Wait `ms` milliseconds, first blocking progress while paused
    pub async fn delay(&mut self, ms: u32) {
        self.wait_while_paused().await;
        self.sleep(ms).await;
    }

    async fn wait_while_paused(&mut self) {
        let mut reported = false;

        loop {
            if !self.control.is_paused() {
                return;
            }

            if self.control.consume_step_token() {
                self.steps_taken = self.steps_taken.wrapping_add(1);
                debug!("single step {}", self.steps_taken);
                return;
            }

            if !reported {
                if self.poll_ms == 0 {
                    warn!("paused with a zero poll interval, yielding between polls");
                } else {
                    debug!("paused, polling every {} ms", self.poll_ms);
                }
                reported = true;
            }

            self.sleep(self.poll_ms).await;
        }
    }

    /// Sleep, or yield once for a zero duration
    async fn sleep(&mut self, ms: u32) {
        if ms == 0 {
            yield_now().await;
        } else {
            self.delay.delay_ms(ms).await;
        }
    }

    /// Single-step tokens consumed since creation
    pub fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// Pause poll interval in milliseconds
    pub fn poll_ms(&self) -> u32 {
        self.poll_ms
    }

    /// Pause/step source
    pub fn control(&self) -> &C {
        &self.control
    }

    /// Pause/step source, mutable
    pub fn control_mut(&mut self) -> &mut C {
        &mut self.control
    }

    /// Underlying delay provider
    pub fn delay_provider(&self) -> &D {
        &self.delay
    }

    /// Release the delay provider and pause source
    pub fn into_parts(self) -> (D, C) {
        (self.delay, self.control)
    }
}
