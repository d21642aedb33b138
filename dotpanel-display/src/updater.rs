//! Panel update loop
//!
//! The updater is the only code that talks to the [`Transport`]. It runs
//! the bring-up retry loop, then polls the dirty flag and pushes the whole
//! framebuffer under the session lock whenever it is set. Many sessions
//! between two polls coalesce into one push.
//!
//! Push failures after bring-up are logged and retried on the next poll.
//! Only an exhausted bring-up is fatal: the framebuffer is released and
//! all later drawing becomes a no-op.

use dotpanel_core::scheduler::{
    BRINGUP_ATTEMPTS, BRINGUP_BACKOFF_MS, POLL_INTERVAL_MS, STARTUP_DELAY_MS,
};
use dotpanel_core::traits::Transport;
use dotpanel_core::{Phase, PhaseEvent};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::delay::DelayNs as BlockingDelay;
use embedded_hal_async::delay::DelayNs;

use crate::display::Display;
use crate::fmt::Debug2Format;

/// Updater timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UpdaterConfig {
    /// Wait before the first bring-up attempt
    pub startup_delay_ms: u64,
    /// Bring-up attempts before giving up
    pub bringup_attempts: u8,
    /// Wait between failed bring-up attempts
    pub bringup_backoff_ms: u64,
    /// Poll period while nothing has changed
    pub poll_interval_ms: u64,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            startup_delay_ms: STARTUP_DELAY_MS,
            bringup_attempts: BRINGUP_ATTEMPTS,
            bringup_backoff_ms: BRINGUP_BACKOFF_MS,
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}

/// Background process pushing a [`Display`] to its panel
///
/// `D` must provide both delay flavours: the async one for polling and
/// back-off, the blocking one for the short waits inside bring-up.
pub struct Updater<'d, 'a, M: RawMutex, T, D> {
    display: &'d Display<'a, M>,
    transport: T,
    delay: D,
    config: UpdaterConfig,
    phase: Phase,
}

impl<'d, 'a, M, T, D> Updater<'d, 'a, M, T, D>
where
    M: RawMutex,
    T: Transport,
    D: DelayNs + BlockingDelay,
{
    /// Updater with the default timing
    pub fn new(display: &'d Display<'a, M>, transport: T, delay: D) -> Self {
        let config = UpdaterConfig::default();
        Self {
            display,
            transport,
            delay,
            phase: Phase::start(config.bringup_attempts),
            config,
        }
    }

    /// Override the timing
    pub fn with_config(mut self, config: UpdaterConfig) -> Self {
        self.config = config;
        self.phase = Phase::start(config.bringup_attempts);
        self
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Give the transport back
    pub fn release(self) -> T {
        self.transport
    }

    async fn sleep_ms(&mut self, ms: u64) {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        DelayNs::delay_ms(&mut self.delay, ms).await;
    }

    /// Bring the panel up, retrying with back-off
    ///
    /// Each attempt holds the lock and ends by showing the current
    /// framebuffer. Returns [`Phase::Running`], or [`Phase::Failed`] once
    /// every attempt has failed, in which case the framebuffer has been
    /// released.
    pub async fn bring_up(&mut self) -> Phase {
        self.phase = Phase::start(self.config.bringup_attempts);

        while let Phase::Bringup { attempts_left } = self.phase {
            debug!("panel bring-up, {} attempts left", attempts_left);
            let outcome = {
                let surface = self.display.surface.lock().await;
                surface
                    .frame()
                    .map(|frame| self.transport.bring_up(frame, &mut self.delay))
            };

            match outcome {
                Some(Ok(())) => self.phase = self.phase.transition(PhaseEvent::BringupSucceeded),
                Some(Err(e)) => {
                    warn!("panel bring-up failed: {}", Debug2Format(&e));
                    self.phase = self.phase.transition(PhaseEvent::BringupFailed);
                    if !self.phase.is_failed() {
                        self.sleep_ms(self.config.bringup_backoff_ms).await;
                    }
                }
                None => self.phase = Phase::Failed,
            }
        }

        if self.phase.is_failed() {
            error!("panel configuration failed, giving up");
            self.display.surface.lock().await.release();
        } else {
            info!("panel up");
            // Contrast and mode go out with the first push
            self.display.flags.mark_settings();
        }
        self.phase
    }

    /// One update pass
    ///
    /// Pushes the framebuffer if it is dirty, followed by contrast and mode
    /// if they changed. Returns `true` if something was sent. A failed
    /// send re-arms the flags for the next pass.
    pub async fn service(&mut self) -> bool {
        let flags = &self.display.flags;
        if !flags.is_dirty() {
            return false;
        }

        let surface = self.display.surface.lock().await;
        flags.take_dirty();
        let settings = flags.take_settings();
        let Some(frame) = surface.frame() else {
            return false;
        };

        let mut result = self.transport.push(frame);
        if result.is_ok() && settings {
            result = self.transport.apply(surface.settings());
        }

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!("panel update failed: {}", Debug2Format(&e));
                flags.rearm(settings);
                false
            }
        }
    }

    /// Run forever: settle, bring up, then update on change
    ///
    /// Only returns if bring-up fails, with [`Phase::Failed`].
    pub async fn run(&mut self) -> Phase {
        self.sleep_ms(self.config.startup_delay_ms).await;
        if self.bring_up().await.is_failed() {
            return Phase::Failed;
        }

        loop {
            if !self.service().await {
                self.sleep_ms(self.config.poll_interval_ms).await;
            }
        }
    }
}
