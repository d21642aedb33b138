//! Display handle and drawing sessions

use core::ops::{Deref, DerefMut};

use dotpanel_core::font::FontTable;
use dotpanel_core::traits::DisplayMode;
use dotpanel_core::{ConfigError, PanelConfig, PixelBuffer, Surface, UpdateFlags};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};

/// A panel's framebuffer, drawing state and update flags
///
/// All drawing goes through a [`Session`]. The updater takes the same lock
/// to push the framebuffer, so a push never sees a half-finished session.
pub struct Display<'a, M: RawMutex> {
    pub(crate) surface: Mutex<M, Surface<'a>>,
    pub(crate) flags: UpdateFlags,
}

impl<'a, M: RawMutex> Display<'a, M> {
    /// Validate `config` and wrap `storage` as the framebuffer
    ///
    /// `storage` must hold at least [`PanelConfig::buffer_len`] bytes.
    pub fn new(
        config: &PanelConfig,
        storage: &'a mut [u8],
        fonts: FontTable<'a>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let buffer = PixelBuffer::new(storage, config.width, config.height, config.format)?;
        Ok(Self {
            surface: Mutex::new(Surface::new(buffer, fonts)),
            flags: UpdateFlags::new(),
        })
    }

    /// Start a drawing session, waiting for the lock
    ///
    /// The session starts at the origin, left/top aligned with horizontal
    /// movement, white on black.
    pub async fn lock(&self) -> Session<'_, 'a, M> {
        let mut guard = self.surface.lock().await;
        guard.reset_state();
        Session {
            guard,
            flags: &self.flags,
        }
    }

    /// Start a drawing session if the lock is free
    pub fn try_lock(&self) -> Option<Session<'_, 'a, M>> {
        let mut guard = self.surface.try_lock().ok()?;
        guard.reset_state();
        Some(Session {
            guard,
            flags: &self.flags,
        })
    }

    /// Change the contrast; takes the lock itself
    pub async fn set_contrast(&self, contrast: u8) {
        let mut surface = self.surface.lock().await;
        if !surface.is_live() {
            return;
        }
        surface.set_contrast(contrast);
        self.flags.mark_settings();
    }

    /// Change the display mode; takes the lock itself
    pub async fn set_mode(&self, mode: DisplayMode) {
        let mut surface = self.surface.lock().await;
        if !surface.is_live() {
            return;
        }
        surface.set_mode(mode);
        self.flags.mark_settings();
    }

    /// Dirty and settings flags
    pub fn flags(&self) -> &UpdateFlags {
        &self.flags
    }
}

/// A locked drawing session
///
/// Dereferences to the [`Surface`]. Dropping the session releases the
/// lock and marks the panel dirty if anything was drawn.
pub struct Session<'d, 'a, M: RawMutex> {
    guard: MutexGuard<'d, M, Surface<'a>>,
    flags: &'d UpdateFlags,
}

impl<M: RawMutex> Session<'_, '_, M> {
    /// End the session
    pub fn unlock(self) {}
}

impl<'a, M: RawMutex> Deref for Session<'_, 'a, M> {
    type Target = Surface<'a>;

    fn deref(&self) -> &Self::Target {
        &self.guard
    }
}

impl<M: RawMutex> DerefMut for Session<'_, '_, M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.guard
    }
}

impl<M: RawMutex> Drop for Session<'_, '_, M> {
    fn drop(&mut self) {
        // Still holding the lock here
        if self.guard.take_touched() {
            self.flags.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotpanel_core::config::{BusConfig, SpiBusConfig};
    use dotpanel_core::font::builtin_fonts;
    use dotpanel_core::{Align, Color, PixelFormat};
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    fn config() -> PanelConfig {
        PanelConfig {
            width: 16,
            height: 8,
            format: PixelFormat::Gray4,
            flip: false,
            bus: BusConfig::Spi(SpiBusConfig::default()),
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut storage = [0u8; 64];
        let mut config = config();
        config.bus = BusConfig::Spi(SpiBusConfig {
            din: 40,
            ..SpiBusConfig::default()
        });
        let result = Display::<NoopRawMutex>::new(&config, &mut storage, builtin_fonts());
        assert_eq!(result.err(), Some(ConfigError::Din));
    }

    #[test]
    fn test_storage_too_small() {
        let mut storage = [0u8; 10];
        let result = Display::<NoopRawMutex>::new(&config(), &mut storage, builtin_fonts());
        assert_eq!(result.err(), Some(ConfigError::BufferSize));
    }

    #[test]
    fn test_lock_resets_state() {
        let mut storage = [0u8; 64];
        let display = Display::<NoopRawMutex>::new(&config(), &mut storage, builtin_fonts()).unwrap();
        block_on(async {
            let mut session = display.lock().await;
            session.set_position(5, 5, Align::RIGHT | Align::BOTTOM);
            session.set_foreground('R');
            session.unlock();

            let session = display.lock().await;
            assert_eq!((session.x(), session.y()), (0, 0));
            assert_eq!(session.align(), Align::DEFAULT);
            assert_eq!(session.foreground(), Color::White);
            assert_eq!(session.background(), Color::Black);
        });
    }

    #[test]
    fn test_drawing_marks_dirty() {
        let mut storage = [0u8; 64];
        let display = Display::<NoopRawMutex>::new(&config(), &mut storage, builtin_fonts()).unwrap();
        display.flags().take_dirty();
        block_on(async {
            // Moving the cursor alone is not a change
            let mut session = display.lock().await;
            session.set_position(1, 1, Align::DEFAULT);
            drop(session);
            assert!(!display.flags().is_dirty());

            let mut session = display.lock().await;
            session.filled_rect(2, 2, 0xFF);
            drop(session);
            assert!(display.flags().is_dirty());
        });
    }

    #[test]
    fn test_try_lock_while_held() {
        let mut storage = [0u8; 64];
        let display = Display::<NoopRawMutex>::new(&config(), &mut storage, builtin_fonts()).unwrap();
        let session = display.try_lock();
        assert!(session.is_some());
        assert!(display.try_lock().is_none());
        drop(session);
        assert!(display.try_lock().is_some());
    }

    #[test]
    fn test_set_contrast_marks_settings() {
        let mut storage = [0u8; 64];
        let display = Display::<NoopRawMutex>::new(&config(), &mut storage, builtin_fonts()).unwrap();
        display.flags().take_dirty();
        block_on(display.set_contrast(0x20));
        assert!(display.flags().is_dirty());
        assert!(display.flags().take_settings());
        let session = display.try_lock().unwrap();
        assert_eq!(session.settings().contrast, 0x20);
    }
}
