//! Built-in 5x7 ASCII font
//!
//! Glyphs are stored as five columns with the top row in bit 0. Rows 7
//! and 8 hold descenders. The cells are expanded at compile time into
//! the packed cell format for sizes 1 and 2; `.` and `:` sit in column 2
//! so the narrow cell picks them out.

use super::FontTable;

/// Printable ASCII, space to tilde
const GLYPH_COUNT: usize = 95;

#[rustfmt::skip]
const GLYPHS: [[u16; 5]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x00, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x00, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x08, 0x14, 0x22, 0x41, 0x00], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x00, 0x41, 0x22, 0x14, 0x08], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x7F, 0x41, 0x41, 0x00], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x00, 0x41, 0x41, 0x7F, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x38, 0x144, 0x144, 0x144, 0xFC], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x100, 0x100, 0x108, 0xFA, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x1FC, 0x44, 0x44, 0x44, 0x38], // p
    [0x38, 0x44, 0x44, 0x44, 0x1FC], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x3C, 0x140, 0x140, 0x140, 0xFC], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x04, 0x08, 0x10, 0x08], // ~
];

/// Packed cell bytes for the whole font at `scale`
pub const fn cell_bytes(scale: usize) -> usize {
    GLYPH_COUNT * (9 * scale) * (3 * scale)
}

/// Expand the column glyphs into `6s` x `9s` packed cells
const fn glyph_cells<const N: usize>(scale: usize) -> [u8; N] {
    let mut out = [0u8; N];
    let stride = 3 * scale;
    let rows = 9 * scale;

    let mut glyph = 0;
    while glyph < GLYPH_COUNT {
        let base = glyph * rows * stride;
        let mut y = 0;
        while y < rows {
            let mut x = 0;
            while x < 6 * scale {
                let column = x / scale;
                if column < 5 && (GLYPHS[glyph][column] >> (y / scale)) & 1 != 0 {
                    let index = base + y * stride + x / 2;
                    out[index] |= if x % 2 == 0 { 0xF0 } else { 0x0F };
                }
                x += 1;
            }
            y += 1;
        }
        glyph += 1;
    }
    out
}

/// Size 1 cells, 6 x 9
pub static FONT1: [u8; cell_bytes(1)] = glyph_cells(1);

/// Size 2 cells, 12 x 18
pub static FONT2: [u8; cell_bytes(2)] = glyph_cells(2);

/// Font table with the built-in sizes 1 and 2
pub fn builtin_fonts() -> FontTable<'static> {
    FontTable::empty().with(1, &FONT1).with(2, &FONT2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::TextStyle;

    fn lit(font: &[u8], style: &TextStyle, byte: u8, x: usize, y: usize) -> bool {
        let offset = style.glyph_offset(byte);
        let packed = font[offset + y * style.row_stride() + x / 2];
        let nibble = if x % 2 == 0 { packed >> 4 } else { packed & 0x0F };
        nibble != 0
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(FONT1.len(), 95 * 27);
        assert_eq!(FONT2.len(), 95 * 108);
        let table = builtin_fonts();
        assert!(table.get(0).is_none());
        assert_eq!(table.get(1).map(<[u8]>::len), Some(FONT1.len()));
        assert_eq!(table.get(2).map(<[u8]>::len), Some(FONT2.len()));
    }

    #[test]
    fn test_space_is_blank() {
        assert!(FONT1[..27].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_letter_l_size_one() {
        let style = TextStyle::new(1);
        // Vertical bar in column 0, foot along row 6
        for y in 0..7 {
            assert!(lit(&FONT1, &style, b'L', 0, y));
        }
        assert!(lit(&FONT1, &style, b'L', 4, 6));
        assert!(!lit(&FONT1, &style, b'L', 4, 5));
        // Spacing column stays clear
        for y in 0..9 {
            assert!(!lit(&FONT1, &style, b'L', 5, y));
        }
    }

    #[test]
    fn test_size_two_doubles_pixels() {
        let style = TextStyle::new(2);
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 13)] {
            assert!(lit(&FONT2, &style, b'L', x, y));
        }
        assert!(!lit(&FONT2, &style, b'L', 10, 0));
    }

    #[test]
    fn test_narrow_dot_window() {
        let style = TextStyle::new(1);
        let offset = style.glyph_offset(b'.');
        // First two pixels of the narrow window: dot then spacing
        let row5 = FONT1[offset + 5 * style.row_stride()];
        assert_eq!(row5, 0xF0);
        let row0 = FONT1[offset];
        assert_eq!(row0, 0x00);
    }

    #[test]
    fn test_descender_rows() {
        let style = TextStyle::new(-1);
        assert!(lit(&FONT1, &style, b'p', 0, 8));
        assert!(!lit(&FONT1, &style, b'o', 0, 8));
    }
}
