//! Drawing surface
//!
//! [`Surface`] is the drawing API: it owns the framebuffer, the font table,
//! the drawing state and the panel settings. It is not synchronized
//! itself; the runtime keeps it behind the session lock and resets its
//! state every time a session starts.
//!
//! Once the framebuffer has been released after a failed bring-up, every
//! drawing call is a silent no-op.

use core::fmt::{self, Write};

use heapless::String;

use super::buffer::{PixelBuffer, PixelFormat};
use super::color::{Color, Ink};
use super::layout;
use super::state::{Align, DrawState};
use crate::font::{raster, FontTable, TextStyle};
use crate::traits::{DisplayMode, PanelSettings};

/// Longest formatted text run, in bytes; longer text is truncated
pub const TEXT_CAPACITY: usize = 64;

/// `fmt::Write` sink that drops whatever does not fit
struct Truncating<'s>(&'s mut String<TEXT_CAPACITY>);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Framebuffer plus drawing state
#[derive(Debug)]
pub struct Surface<'a> {
    buffer: Option<PixelBuffer<'a>>,
    fonts: FontTable<'a>,
    state: DrawState,
    settings: PanelSettings,
    width: u16,
    height: u16,
    format: PixelFormat,
    touched: bool,
}

impl<'a> Surface<'a> {
    /// Wrap a framebuffer with the given fonts
    pub fn new(buffer: PixelBuffer<'a>, fonts: FontTable<'a>) -> Self {
        Self {
            width: buffer.width(),
            height: buffer.height(),
            format: buffer.format(),
            buffer: Some(buffer),
            fonts,
            state: DrawState::default(),
            settings: PanelSettings::default(),
            touched: false,
        }
    }

    /// Panel width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Panel height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Cell format of the framebuffer
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Back to the session defaults: origin, left/top, white on black
    pub fn reset_state(&mut self) {
        self.state = DrawState::default();
    }

    /// Move the cursor; an empty `align` selects [`Align::DEFAULT`]
    pub fn set_position(&mut self, x: i16, y: i16, align: Align) {
        self.state.x = x;
        self.state.y = y;
        self.state.align = if align.is_empty() {
            Align::DEFAULT
        } else {
            align
        };
    }

    /// Colour drawn at full intensity
    pub fn set_foreground(&mut self, color: impl Into<Color>) {
        self.state.foreground = color.into();
    }

    /// Colour drawn at zero intensity
    pub fn set_background(&mut self, color: impl Into<Color>) {
        self.state.background = color.into();
    }

    /// Cursor column
    pub fn x(&self) -> i16 {
        self.state.x
    }

    /// Cursor row
    pub fn y(&self) -> i16 {
        self.state.y
    }

    /// Current alignment
    pub fn align(&self) -> Align {
        self.state.align
    }

    /// Current foreground
    pub fn foreground(&self) -> Color {
        self.state.foreground
    }

    /// Current background
    pub fn background(&self) -> Color {
        self.state.background
    }

    /// Snapshot of the whole drawing state
    pub fn state(&self) -> DrawState {
        self.state
    }

    fn ink(&self) -> Ink {
        Ink::new(self.state.foreground, self.state.background, self.format)
    }

    /// Buffer and ink for a drawing call, `None` once released
    fn target(&mut self) -> Option<(&mut PixelBuffer<'a>, Ink)> {
        let ink = self.ink();
        let buffer = self.buffer.as_mut()?;
        self.touched = true;
        Some((buffer, ink))
    }

    /// Reserve a `width` x `height` box at the cursor
    ///
    /// Returns the box's top-left corner and moves the cursor as the
    /// alignment says. Nothing is drawn.
    pub fn place(&mut self, width: i16, height: i16, h_margin: i16, v_margin: i16) -> (i16, i16) {
        layout::place(&mut self.state, width, height, h_margin, v_margin)
    }

    /// Set one pixel at absolute coordinates, ignoring the cursor
    pub fn pixel(&mut self, x: i16, y: i16, intensity: u8) {
        if let Some((buffer, ink)) = self.target() {
            buffer.plot(x, y, intensity, ink);
        }
    }

    /// Raw cell value, `None` outside the panel or once released
    pub fn get(&self, x: i16, y: i16) -> Option<u16> {
        self.buffer.as_ref()?.get(x, y)
    }

    /// Paint the whole panel at `intensity`; the cursor is not moved
    pub fn clear(&mut self, intensity: u8) {
        let format = self.format;
        if let Some((buffer, ink)) = self.target() {
            buffer.fill(ink.blend(format, intensity));
        }
    }

    /// One-pixel rectangle outline placed at the cursor
    pub fn outline_rect(&mut self, width: i16, height: i16, intensity: u8) {
        if self.buffer.is_none() {
            return;
        }
        let (left, top) = self.place(width, height, 0, 0);
        let right = left.saturating_add(width.saturating_sub(1));
        let bottom = top.saturating_add(height.saturating_sub(1));
        if let Some((buffer, ink)) = self.target() {
            for n in 0..width.max(0) {
                buffer.plot(left.saturating_add(n), top, intensity, ink);
                buffer.plot(left.saturating_add(n), bottom, intensity, ink);
            }
            for n in 1..height.saturating_sub(1) {
                buffer.plot(left, top.saturating_add(n), intensity, ink);
                buffer.plot(right, top.saturating_add(n), intensity, ink);
            }
        }
    }

    /// Filled rectangle placed at the cursor
    pub fn filled_rect(&mut self, width: i16, height: i16, intensity: u8) {
        if self.buffer.is_none() {
            return;
        }
        let (left, top) = self.place(width, height, 0, 0);
        if let Some((buffer, ink)) = self.target() {
            for row in 0..height.max(0) {
                for column in 0..width.max(0) {
                    buffer.plot(
                        left.saturating_add(column),
                        top.saturating_add(row),
                        intensity,
                        ink,
                    );
                }
            }
        }
    }

    /// Packed 4-bit icon placed at the cursor
    ///
    /// Rows are `(width + 1) / 2` bytes. Without data the icon area is
    /// filled with the background.
    pub fn icon(&mut self, width: i16, height: i16, data: Option<&[u8]>) {
        let Some(data) = data else {
            self.filled_rect(width, height, 0);
            return;
        };
        if self.buffer.is_none() {
            return;
        }
        let (left, top) = self.place(width, height, 0, 0);
        let stride = (width.max(0) as usize).div_ceil(2);
        if let Some((buffer, ink)) = self.target() {
            raster::blit_packed(buffer, ink, left, top, width, height, data, stride);
        }
    }

    /// Formatted text at the cursor
    ///
    /// See [`Surface::text_str`]. Output beyond [`TEXT_CAPACITY`] bytes is
    /// dropped.
    pub fn text(&mut self, size: i8, args: fmt::Arguments<'_>) {
        if self.buffer.is_none() {
            return;
        }
        let mut line = String::<TEXT_CAPACITY>::new();
        // Truncating never reports an error; a failing Display impl just
        // leaves the text short.
        let _ = Truncating(&mut line).write_fmt(args);
        self.text_str(size, &line);
    }

    /// Text at the cursor
    ///
    /// The whole run is placed as one box `text_width` x `line_height`
    /// with a one-unit margin, then glyphs are drawn left to right.
    /// Negative sizes include descender rows. A size with no font
    /// configured draws nothing and leaves the cursor alone.
    pub fn text_str(&mut self, size: i8, text: &str) {
        let style = TextStyle::new(size);
        let Some(font) = self.fonts.get(style.slot) else {
            return;
        };
        if self.buffer.is_none() {
            return;
        }

        let bytes = text.as_bytes();
        let width = style.text_width(bytes);
        let height = style.line_height;
        let (mut x, y) = self.place(width, height, style.unit, style.unit);

        let Some((buffer, ink)) = self.target() else {
            return;
        };
        for &byte in bytes {
            let advance = style.glyph_width(byte);
            if advance == 0 {
                continue;
            }
            // Spacers are blank gaps; missing data blits as background
            let glyph: &[u8] = if byte < b' ' {
                &[]
            } else {
                font.get(style.glyph_offset(byte)..).unwrap_or(&[])
            };
            raster::blit_packed(
                buffer,
                ink,
                x,
                y,
                advance,
                height,
                glyph,
                style.row_stride(),
            );
            x = x.saturating_add(advance);
        }
    }

    /// Framebuffer bytes in controller order, `None` once released
    pub fn frame(&self) -> Option<&[u8]> {
        self.buffer.as_ref().map(PixelBuffer::as_bytes)
    }

    /// Drop the framebuffer; all later drawing is a no-op
    pub fn release(&mut self) {
        self.buffer = None;
    }

    /// Framebuffer still present
    pub fn is_live(&self) -> bool {
        self.buffer.is_some()
    }

    /// Contrast and display mode to apply on the next update
    pub fn settings(&self) -> PanelSettings {
        self.settings
    }

    /// Record a new contrast
    pub fn set_contrast(&mut self, contrast: u8) {
        self.settings.contrast = contrast;
    }

    /// Record a new display mode
    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.settings.mode = mode;
    }

    /// Whether any drawing happened since the last call
    pub fn take_touched(&mut self) -> bool {
        core::mem::take(&mut self.touched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::builtin_fonts;

    fn gray(storage: &mut [u8], width: u16, height: u16) -> Surface<'_> {
        let buffer = PixelBuffer::new(storage, width, height, PixelFormat::Gray4).unwrap();
        Surface::new(buffer, builtin_fonts())
    }

    #[test]
    fn test_empty_align_is_default() {
        let mut storage = [0u8; 32];
        let mut surface = gray(&mut storage, 8, 8);
        surface.set_position(3, 4, Align::empty());
        assert_eq!(surface.align(), Align::DEFAULT);
        assert_eq!((surface.x(), surface.y()), (3, 4));
    }

    #[test]
    fn test_colours_from_selectors() {
        let mut storage = [0u8; 32];
        let mut surface = gray(&mut storage, 8, 8);
        surface.set_foreground('G');
        surface.set_background(Color::White);
        assert_eq!(surface.foreground(), Color::Green);
        assert_eq!(surface.background(), Color::White);
        surface.reset_state();
        assert_eq!(surface.state(), DrawState::default());
    }

    #[test]
    fn test_pixel_set_get() {
        let mut storage = [0u8; 32];
        let mut surface = gray(&mut storage, 8, 8);
        surface.pixel(2, 3, 0xFF);
        surface.pixel(-1, 3, 0xFF);
        assert_eq!(surface.get(2, 3), Some(0xF));
        assert_eq!(surface.get(-1, 3), None);
        assert!(surface.take_touched());
        assert!(!surface.take_touched());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut storage = [0u8; 32];
        let mut surface = gray(&mut storage, 8, 8);
        surface.pixel(1, 1, 0xFF);
        surface.clear(0);
        let mut once = [0u8; 32];
        once.copy_from_slice(surface.frame().unwrap());
        surface.clear(0);
        assert_eq!(surface.frame().unwrap(), &once[..]);
        assert!(once.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_clear_keeps_cursor() {
        let mut storage = [0u8; 32];
        let mut surface = gray(&mut storage, 8, 8);
        surface.set_position(5, 6, Align::DEFAULT);
        surface.clear(0xFF);
        assert_eq!((surface.x(), surface.y()), (5, 6));
        assert_eq!(surface.get(7, 7), Some(0xF));
    }

    #[test]
    fn test_outline_rect() {
        let mut storage = [0u8; 32];
        let mut surface = gray(&mut storage, 8, 8);
        surface.set_position(1, 1, Align::DEFAULT);
        surface.outline_rect(4, 5, 0xFF);

        assert_eq!(surface.get(1, 1), Some(0xF));
        assert_eq!(surface.get(4, 1), Some(0xF));
        assert_eq!(surface.get(1, 5), Some(0xF));
        assert_eq!(surface.get(4, 5), Some(0xF));
        // Sides run the full height
        assert_eq!(surface.get(1, 4), Some(0xF));
        assert_eq!(surface.get(4, 4), Some(0xF));
        // Interior untouched
        assert_eq!(surface.get(2, 3), Some(0));
        assert_eq!(surface.x(), 5);
    }

    #[test]
    fn test_filled_rect_right_aligned() {
        let mut storage = [0u8; 32];
        let mut surface = gray(&mut storage, 8, 8);
        surface.set_position(7, 7, Align::RIGHT | Align::BOTTOM);
        surface.filled_rect(2, 2, 0xFF);
        assert_eq!(surface.get(6, 6), Some(0xF));
        assert_eq!(surface.get(7, 7), Some(0xF));
        assert_eq!(surface.get(5, 7), Some(0));
    }

    #[test]
    fn test_icon_unpacks_nibbles() {
        let mut storage = [0u8; 32];
        let mut surface = gray(&mut storage, 8, 8);
        // 3 wide, stride 2
        surface.icon(3, 2, Some(&[0xF8, 0x40, 0x0F, 0xF0]));
        assert_eq!(surface.get(0, 0), Some(0xF));
        assert_eq!(surface.get(1, 0), Some(0x8));
        assert_eq!(surface.get(2, 0), Some(0x4));
        assert_eq!(surface.get(1, 1), Some(0xF));
        assert_eq!(surface.get(2, 1), Some(0xF));
        assert_eq!(surface.x(), 3);
    }

    #[test]
    fn test_missing_icon_fills_background() {
        let mut storage = [0u8; 32];
        let mut surface = gray(&mut storage, 8, 8);
        surface.clear(0xFF);
        surface.set_position(0, 0, Align::DEFAULT);
        surface.icon(2, 2, None);
        assert_eq!(surface.get(1, 1), Some(0));
        assert_eq!(surface.get(2, 1), Some(0xF));
    }

    #[test]
    fn test_text_layout_and_advance() {
        let mut storage = [0u8; 512];
        let mut surface = gray(&mut storage, 32, 16);
        surface.text(1, format_args!("L{}", 1));
        // "L1": 12 - 1 wide, plus one unit margin
        assert_eq!(surface.x(), 12);
        // Stem of the L
        assert_eq!(surface.get(0, 0), Some(0xF));
        assert_eq!(surface.get(0, 6), Some(0xF));
        // Row 7 is below the line without descenders
        assert_eq!(surface.get(0, 7), Some(0));
    }

    #[test]
    fn test_text_centred() {
        let mut storage = [0u8; 512];
        let mut surface = gray(&mut storage, 32, 16);
        surface.set_position(16, 0, Align::CENTRE | Align::TOP);
        surface.text_str(1, "L");
        // Width 5, anchor 16 - 2
        assert_eq!(surface.get(14, 0), Some(0xF));
        assert_eq!(surface.get(13, 0), Some(0));
    }

    #[test]
    fn test_text_descenders() {
        let mut storage = [0u8; 512];
        let mut surface = gray(&mut storage, 32, 16);
        surface.text_str(-1, "p");
        assert_eq!(surface.get(0, 8), Some(0xF));
    }

    #[test]
    fn test_wide_spacer_is_blank() {
        let mut storage = [0u8; 512];
        let mut surface = gray(&mut storage, 64, 16);
        surface.text_str(1, "\x1f");
        // 31 columns wide, plus one unit margin
        assert_eq!(surface.x(), 31);
        assert!(surface.take_touched());
        for y in 0..16 {
            for x in 0..64 {
                assert_eq!(surface.get(x, y), Some(0), "lit at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_spacer_between_glyphs() {
        let mut storage = [0u8; 512];
        let mut surface = gray(&mut storage, 64, 16);
        surface.text_str(1, "L\x14L");
        // Stems of both L glyphs, gap of 20 columns between cells
        assert_eq!(surface.get(0, 0), Some(0xF));
        assert_eq!(surface.get(26, 0), Some(0xF));
        for x in 6..26 {
            for y in 0..7 {
                assert_eq!(surface.get(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_missing_font_is_noop() {
        let mut storage = [0u8; 512];
        let mut surface = gray(&mut storage, 32, 16);
        surface.text_str(3, "hello");
        surface.text_str(0, "hello");
        assert_eq!((surface.x(), surface.y()), (0, 0));
        assert!(!surface.take_touched());
        assert!(surface.frame().unwrap().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_text_truncates() {
        let mut storage = [0u8; 512];
        let mut surface = gray(&mut storage, 32, 16);
        let long = [b'a'; 100];
        let long = core::str::from_utf8(&long).unwrap();
        surface.text(1, format_args!("{long}"));
        assert_eq!(surface.x(), (TEXT_CAPACITY as i16) * 6);
    }

    #[test]
    fn test_released_surface_is_inert() {
        let mut storage = [0u8; 32];
        let mut surface = gray(&mut storage, 8, 8);
        surface.release();
        assert!(!surface.is_live());
        surface.set_position(1, 1, Align::DEFAULT);
        surface.clear(0xFF);
        surface.filled_rect(3, 3, 0xFF);
        surface.text_str(1, "x");
        surface.pixel(0, 0, 0xFF);
        assert_eq!(surface.get(0, 0), None);
        assert!(surface.frame().is_none());
        assert!(!surface.take_touched());
        assert_eq!(surface.x(), 1);
    }

    #[test]
    fn test_settings_recorded() {
        let mut storage = [0u8; 32];
        let mut surface = gray(&mut storage, 8, 8);
        assert_eq!(surface.settings(), PanelSettings::default());
        surface.set_contrast(0x40);
        surface.set_mode(DisplayMode::Inverted);
        assert_eq!(surface.settings().contrast, 0x40);
        assert_eq!(surface.settings().mode, DisplayMode::Inverted);
    }

    #[test]
    fn test_rgb565_foreground_colour() {
        let mut storage = [0u8; 128];
        let buffer = PixelBuffer::new(&mut storage, 8, 8, PixelFormat::Rgb565).unwrap();
        let mut surface = Surface::new(buffer, FontTable::empty());
        surface.set_foreground('B');
        surface.pixel(0, 0, 0xFF);
        let ink = Ink::new(Color::Blue, Color::Black, PixelFormat::Rgb565);
        assert_eq!(surface.get(0, 0), Some(ink.blend(PixelFormat::Rgb565, 0xFF)));
    }
}
