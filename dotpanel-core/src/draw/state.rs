//! Drawing state
//!
//! Cursor, alignment and colours for the current session. The state is
//! reset to [`DrawState::default`] every time a session starts.

use super::color::Color;

bitflags::bitflags! {
    /// Alignment and movement flags
    ///
    /// The vertical anchor uses two bits: `TOP`, `BOTTOM`, and `MIDDLE` as
    /// both. Horizontal works the same way with `LEFT`, `RIGHT` and
    /// `CENTRE`. `HMOVE`/`VMOVE` advance the cursor past each drawn shape.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Align: u8 {
        /// Cursor is the top edge
        const TOP = 0x01;
        /// Cursor is the bottom edge
        const BOTTOM = 0x02;
        /// Cursor is the vertical centre
        const MIDDLE = 0x03;
        /// Move the cursor vertically after drawing
        const VMOVE = 0x08;
        /// Cursor is the left edge
        const LEFT = 0x10;
        /// Cursor is the right edge
        const RIGHT = 0x20;
        /// Cursor is the horizontal centre
        const CENTRE = 0x30;
        /// Move the cursor horizontally after drawing
        const HMOVE = 0x80;
    }
}

impl Align {
    /// Session default: left, top, horizontal movement
    pub const DEFAULT: Self = Self::LEFT.union(Self::TOP).union(Self::HMOVE);
}

impl Default for Align {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Align {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Align({=u8:#x})", self.bits())
    }
}

/// Cursor, alignment and colours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrawState {
    /// Cursor column
    pub x: i16,
    /// Cursor row, 0 is the top of the panel
    pub y: i16,
    /// Anchor and movement flags
    pub align: Align,
    /// Colour at full intensity
    pub foreground: Color,
    /// Colour at zero intensity
    pub background: Color,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            align: Align::DEFAULT,
            foreground: Color::White,
            background: Color::Black,
        }
    }
}
