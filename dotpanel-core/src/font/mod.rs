//! Bitmap fonts
//!
//! Fonts are opaque glyph-cell blobs, one per size slot. A blob holds the
//! printable ASCII range starting at space, every glyph stored as a
//! `cell_width` x `cell_height` block of 4-bit intensities, two pixels
//! per byte. [`TextStyle`] resolves the metrics for a requested size and
//! [`raster::blit_packed`] unpacks cells into the framebuffer.

pub mod builtin;
pub mod metrics;
pub mod raster;

pub use builtin::builtin_fonts;
pub use metrics::TextStyle;

/// Number of size slots (0 to 5)
pub const FONT_SLOTS: usize = 6;

/// Glyph data indexed by size slot
///
/// Slot 0 is the compact 4x5 font, slot `n` the font with `6n` x `9n`
/// cells. Empty slots make text of that size a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct FontTable<'a> {
    slots: [Option<&'a [u8]>; FONT_SLOTS],
}

impl<'a> FontTable<'a> {
    /// Table with no fonts configured
    pub const fn empty() -> Self {
        Self {
            slots: [None; FONT_SLOTS],
        }
    }

    /// Install glyph data for `slot`; out-of-range slots are ignored
    pub const fn with(mut self, slot: usize, data: &'a [u8]) -> Self {
        if slot < FONT_SLOTS {
            self.slots[slot] = Some(data);
        }
        self
    }

    /// Glyph data for `slot`
    pub fn get(&self, slot: usize) -> Option<&'a [u8]> {
        self.slots.get(slot).copied().flatten()
    }
}
