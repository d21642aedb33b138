//! Packed glyph blitting

use crate::draw::{Ink, PixelBuffer};

/// Expand the 4-bit sample at column `column` of a packed row to 8 bits
const fn sample(byte: u8, column: usize) -> u8 {
    if column % 2 == 0 {
        (byte & 0xF0) | (byte >> 4)
    } else {
        (byte & 0x0F) | (byte << 4)
    }
}

/// Draw a `width` x `height` block of packed 4-bit intensities at `(x, y)`
///
/// Rows are `stride` bytes apart, left pixel in the high nibble. Samples
/// past the end of `data` read as zero intensity, and pixels outside the
/// buffer are clipped.
#[allow(clippy::too_many_arguments)]
pub fn blit_packed(
    buffer: &mut PixelBuffer<'_>,
    ink: Ink,
    x: i16,
    y: i16,
    width: i16,
    height: i16,
    data: &[u8],
    stride: usize,
) {
    for row in 0..height.max(0) {
        let line = row as usize * stride;
        for column in 0..width.max(0) {
            let column = column as usize;
            let byte = data.get(line + column / 2).copied().unwrap_or(0);
            buffer.plot(
                x.saturating_add(column as i16),
                y.saturating_add(row),
                sample(byte, column),
                ink,
            );
        }
    }
}
