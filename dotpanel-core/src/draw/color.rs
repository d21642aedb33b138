//! Colour model
//!
//! A colour is a per-format multiplier. A stored cell is
//! `foreground * (i >> shift) + background * (!i >> shift)`, so intensity
//! 255 gives the full foreground, 0 the full background, and values in
//! between mix the two.
//!
//! On RGB565 each channel multiplier is sized so that the product with a
//! 4-bit intensity still fits its field (red/blue 2 units of 5 bits,
//! green 4 units of 6 bits). Grey and mono formats only know black and
//! white.

use super::buffer::PixelFormat;

const R: u16 = 1 << 11;
const G: u16 = 1 << 5;
const B: u16 = 1;

const RED: u16 = R + R;
const GREEN: u16 = G + G + G + G;
const BLUE: u16 = B + B;
const CYAN: u16 = GREEN + BLUE;
const MAGENTA: u16 = RED + BLUE;
const YELLOW: u16 = RED + GREEN;
const WHITE: u16 = RED + GREEN + BLUE;

/// Colour selector
///
/// Selectors are usually written as single characters, see
/// [`Color::from_char`]. Unknown characters select white.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// `k` / `K`
    Black,
    /// `r`
    DarkRed,
    /// `R` / `E`
    Red,
    /// `g`
    DarkGreen,
    /// `G`
    Green,
    /// `b`
    DarkBlue,
    /// `B`
    Blue,
    /// `c`
    DarkCyan,
    /// `C`
    Cyan,
    /// `m`
    DarkMagenta,
    /// `M`
    Magenta,
    /// `y`
    DarkYellow,
    /// `Y`
    Yellow,
    /// `o` / `O`
    Orange,
    /// `w`, half white
    Grey,
    /// `W` and anything unrecognised
    #[default]
    White,
}

impl Color {
    /// Map a selector character
    pub const fn from_char(c: char) -> Self {
        match c {
            'k' | 'K' => Self::Black,
            'r' => Self::DarkRed,
            'R' | 'E' => Self::Red,
            'g' => Self::DarkGreen,
            'G' => Self::Green,
            'b' => Self::DarkBlue,
            'B' => Self::Blue,
            'c' => Self::DarkCyan,
            'C' => Self::Cyan,
            'm' => Self::DarkMagenta,
            'M' => Self::Magenta,
            'y' => Self::DarkYellow,
            'Y' => Self::Yellow,
            'o' | 'O' => Self::Orange,
            'w' => Self::Grey,
            _ => Self::White,
        }
    }

    /// Canonical selector character
    pub const fn as_char(self) -> char {
        match self {
            Self::Black => 'k',
            Self::DarkRed => 'r',
            Self::Red => 'R',
            Self::DarkGreen => 'g',
            Self::Green => 'G',
            Self::DarkBlue => 'b',
            Self::Blue => 'B',
            Self::DarkCyan => 'c',
            Self::Cyan => 'C',
            Self::DarkMagenta => 'm',
            Self::Magenta => 'M',
            Self::DarkYellow => 'y',
            Self::Yellow => 'Y',
            Self::Orange => 'O',
            Self::Grey => 'w',
            Self::White => 'W',
        }
    }

    /// Intensity multiplier for `format`
    pub const fn multiplier(self, format: PixelFormat) -> u16 {
        match format {
            PixelFormat::Mono | PixelFormat::Gray4 => match self {
                Self::Black => 0,
                _ => 1,
            },
            PixelFormat::Rgb565 => match self {
                Self::Black => 0,
                Self::DarkRed => RED >> 1,
                Self::Red => RED,
                Self::DarkGreen => GREEN >> 1,
                Self::Green => GREEN,
                Self::DarkBlue => BLUE >> 1,
                Self::Blue => BLUE,
                Self::DarkCyan => CYAN >> 1,
                Self::Cyan => CYAN,
                Self::DarkMagenta => MAGENTA >> 1,
                Self::Magenta => MAGENTA,
                Self::DarkYellow => YELLOW >> 1,
                Self::Yellow => YELLOW,
                Self::Orange => RED + (GREEN >> 1),
                Self::Grey => WHITE >> 1,
                Self::White => WHITE,
            },
        }
    }
}

impl From<char> for Color {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

/// Foreground/background multipliers resolved for one pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ink {
    /// Foreground multiplier
    pub foreground: u16,
    /// Background multiplier
    pub background: u16,
}

impl Ink {
    /// Resolve a colour pair
    pub const fn new(foreground: Color, background: Color, format: PixelFormat) -> Self {
        Self {
            foreground: foreground.multiplier(format),
            background: background.multiplier(format),
        }
    }

    /// Cell value for an 8-bit intensity
    pub const fn blend(self, format: PixelFormat, intensity: u8) -> u16 {
        let shift = format.intensity_shift();
        let on = (intensity >> shift) as u32;
        let off = (!intensity >> shift) as u32;
        (self.foreground as u32 * on + self.background as u32 * off) as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_round_trip() {
        let all = [
            Color::Black,
            Color::DarkRed,
            Color::Red,
            Color::DarkGreen,
            Color::Green,
            Color::DarkBlue,
            Color::Blue,
            Color::DarkCyan,
            Color::Cyan,
            Color::DarkMagenta,
            Color::Magenta,
            Color::DarkYellow,
            Color::Yellow,
            Color::Orange,
            Color::Grey,
            Color::White,
        ];
        for color in all {
            assert_eq!(Color::from_char(color.as_char()), color);
        }
    }

    #[test]
    fn test_unknown_selector_is_white() {
        assert_eq!(Color::from('z'), Color::White);
        assert_eq!(Color::from('?'), Color::White);
        assert_eq!(Color::from('E'), Color::Red);
        assert_eq!(Color::from('K'), Color::Black);
    }

    #[test]
    fn test_rgb565_full_white() {
        let ink = Ink::new(Color::White, Color::Black, PixelFormat::Rgb565);
        // 30/31 red, 60/63 green, 30/31 blue
        assert_eq!(ink.blend(PixelFormat::Rgb565, 0xFF), (30 << 11) | (60 << 5) | 30);
        assert_eq!(ink.blend(PixelFormat::Rgb565, 0x00), 0);
    }

    #[test]
    fn test_rgb565_mix_does_not_overflow_channels() {
        let ink = Ink::new(Color::Red, Color::Blue, PixelFormat::Rgb565);
        let cell = ink.blend(PixelFormat::Rgb565, 0x80);
        // 8 steps of red, 7 steps of blue, no green
        assert_eq!(cell >> 11, 16);
        assert_eq!((cell >> 5) & 0x3F, 0);
        assert_eq!(cell & 0x1F, 14);
    }

    #[test]
    fn test_grey_levels() {
        let ink = Ink::new(Color::White, Color::Black, PixelFormat::Gray4);
        assert_eq!(ink.blend(PixelFormat::Gray4, 0xFF), 0xF);
        assert_eq!(ink.blend(PixelFormat::Gray4, 0x80), 0x8);
        assert_eq!(ink.blend(PixelFormat::Gray4, 0x0F), 0x0);

        // Inverse video
        let ink = Ink::new(Color::Black, Color::White, PixelFormat::Gray4);
        assert_eq!(ink.blend(PixelFormat::Gray4, 0x00), 0xF);
    }

    #[test]
    fn test_mono_threshold() {
        let ink = Ink::new(Color::Green, Color::Black, PixelFormat::Mono);
        assert_eq!(ink.blend(PixelFormat::Mono, 0x80), 1);
        assert_eq!(ink.blend(PixelFormat::Mono, 0x7F), 0);
    }
}
