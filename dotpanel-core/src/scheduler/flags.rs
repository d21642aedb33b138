//! Dirty and settings-pending flags
//!
//! Drawing sets `dirty`, contrast or mode changes set both flags. Only the
//! updater clears them, and only while holding the session lock, so a
//! clear can never lose a concurrent set: setters hold the same lock.
//! Setting is idempotent and many sets between two passes coalesce into
//! one push.

use portable_atomic::{AtomicBool, Ordering};

/// Flags shared between drawing sessions and the updater
#[derive(Debug)]
pub struct UpdateFlags {
    dirty: AtomicBool,
    settings: AtomicBool,
}

impl UpdateFlags {
    /// Dirty, so the first pass pushes whatever bring-up left behind
    pub const fn new() -> Self {
        Self {
            dirty: AtomicBool::new(true),
            settings: AtomicBool::new(false),
        }
    }

    /// Framebuffer changed
    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Contrast or mode changed
    pub fn mark_settings(&self) {
        self.settings.store(true, Ordering::Release);
        self.dirty.store(true, Ordering::Release);
    }

    /// Whether a push is wanted
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::Acquire)
    }

    /// Read and clear the dirty flag
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    /// Read and clear the settings flag
    pub fn take_settings(&self) -> bool {
        self.settings.swap(false, Ordering::AcqRel)
    }

    /// Re-arm after a failed push so the next pass retries
    pub fn rearm(&self, settings: bool) {
        if settings {
            self.settings.store(true, Ordering::Release);
        }
        self.dirty.store(true, Ordering::Release);
    }
}

impl Default for UpdateFlags {
    fn default() -> Self {
        Self::new()
    }
}
