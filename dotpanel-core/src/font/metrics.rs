//! Glyph metrics
//!
//! Pure functions of the font size and the character byte, so text layout
//! can be checked without a framebuffer.

use super::FONT_SLOTS;

/// Metrics for one requested text size
///
/// Negative sizes select the same font as their magnitude with two extra
/// rows per unit reserved for descenders. Sizes beyond the largest slot
/// are clamped to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    /// Font slot, `|size|` clamped to the table
    pub slot: usize,
    /// Rows below the baseline are drawn
    pub descenders: bool,
    /// Pixels per font unit, at least 1
    pub unit: i16,
    /// Glyph cell width in pixels
    pub cell_width: i16,
    /// Glyph cell height in pixels
    pub cell_height: i16,
    /// Rendered text height in pixels
    pub line_height: i16,
}

impl TextStyle {
    /// Resolve the metrics for `size`
    pub const fn new(size: i8) -> Self {
        let magnitude = size.unsigned_abs() as usize;
        let slot = if magnitude < FONT_SLOTS {
            magnitude
        } else {
            FONT_SLOTS - 1
        };
        let descenders = size < 0;
        let s = slot as i16;
        let unit = if slot == 0 { 1 } else { s };

        let (cell_width, cell_height) = if slot == 0 { (4, 5) } else { (6 * s, 9 * s) };
        let rows = if slot == 0 {
            5
        } else if descenders {
            9
        } else {
            7
        };

        Self {
            slot,
            descenders,
            unit,
            cell_width,
            cell_height,
            line_height: rows * unit,
        }
    }

    /// Bytes per glyph row in the packed cell data
    pub const fn row_stride(&self) -> usize {
        (self.cell_width / 2) as usize
    }

    const fn is_narrow(&self, byte: u8) -> bool {
        self.slot != 0 && (byte == b'.' || byte == b':')
    }

    /// Advance width of `byte`
    ///
    /// Bytes with the high bit set are zero width. With a sized font,
    /// control bytes are spacers `byte * size` wide and `.`/`:` use a
    /// narrow `2 * size` cell.
    pub const fn glyph_width(&self, byte: u8) -> i16 {
        if byte & 0x80 != 0 {
            return 0;
        }
        if self.slot != 0 && byte < b' ' {
            return byte as i16 * self.unit;
        }
        if self.is_narrow(byte) {
            return 2 * self.unit;
        }
        self.cell_width
    }

    /// Offset of the cell data for `byte` within the font blob
    ///
    /// Control bytes draw the space glyph. Narrow glyphs start `size`
    /// bytes into their cell.
    pub const fn glyph_offset(&self, byte: u8) -> usize {
        let low = byte & 0x7F;
        let index = if low < b' ' { 0 } else { low - b' ' };
        let cell = (self.cell_height * self.cell_width / 2) as usize;
        let mut offset = index as usize * cell;
        if self.is_narrow(byte) {
            offset += self.slot;
        }
        offset
    }

    /// Width of a whole text run
    ///
    /// The trailing spacing column of the last glyph is not counted, so
    /// alignment lines up with the visible ink.
    pub fn text_width(&self, text: &[u8]) -> i16 {
        let total: i32 = text.iter().map(|&b| i32::from(self.glyph_width(b))).sum();
        let total = if total > 0 {
            total - i32::from(self.unit)
        } else {
            total
        };
        total.clamp(0, i32::from(i16::MAX)) as i16
    }
}
