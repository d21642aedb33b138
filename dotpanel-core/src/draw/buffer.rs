//! Framebuffer storage
//!
//! The buffer holds pixels exactly as the controller RAM expects them, so
//! a push is a single copy of [`PixelBuffer::as_bytes`]. All packing and
//! unpacking lives here; callers only see pixel coordinates and raw cell
//! values.
//!
//! Coordinates outside the panel are never an error: writes are dropped
//! and reads return `None`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::color::Ink;
use crate::config::ConfigError;

/// Native cell encoding of the panel RAM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PixelFormat {
    /// 1 bit per pixel in 8-row pages, one byte per column per page,
    /// top row in the least significant bit (SH1106/SSD1306 RAM)
    Mono,
    /// 4-bit grey, two pixels per byte, left pixel in the high nibble
    Gray4,
    /// 16-bit RGB 5-6-5, big-endian (SSD1351 RAM)
    Rgb565,
}

impl PixelFormat {
    /// Bits stored per pixel
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            Self::Mono => 1,
            Self::Gray4 => 4,
            Self::Rgb565 => 16,
        }
    }

    /// Right shift applied to an 8-bit intensity before colour scaling
    ///
    /// Grey formats keep the top `bits_per_pixel` bits. RGB565 keeps 4 bits
    /// per channel multiplier.
    pub const fn intensity_shift(self) -> u8 {
        match self {
            Self::Mono => 7,
            Self::Gray4 => 4,
            Self::Rgb565 => 4,
        }
    }

    /// Largest storable cell value
    pub const fn max_cell(self) -> u16 {
        ((1u32 << self.bits_per_pixel()) - 1) as u16
    }

    /// Bytes needed for a `width` x `height` panel
    pub const fn buffer_len(self, width: u16, height: u16) -> usize {
        let w = width as usize;
        let h = height as usize;
        match self {
            // Whole 8-row pages per column
            Self::Mono => w * h.div_ceil(8),
            _ => (w * h * self.bits_per_pixel() as usize).div_ceil(8),
        }
    }
}

/// Bounds-checked framebuffer over caller-provided storage
#[derive(Debug)]
pub struct PixelBuffer<'a> {
    data: &'a mut [u8],
    width: u16,
    height: u16,
    format: PixelFormat,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `storage` as a cleared framebuffer
    ///
    /// Storage larger than needed is accepted; only the leading
    /// [`PixelFormat::buffer_len`] bytes are used.
    pub fn new(
        storage: &'a mut [u8],
        width: u16,
        height: u16,
        format: PixelFormat,
    ) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || width > i16::MAX as u16 || height > i16::MAX as u16 {
            return Err(ConfigError::Geometry);
        }
        let len = format.buffer_len(width, height);
        if storage.len() < len {
            return Err(ConfigError::BufferSize);
        }
        let (data, _) = storage.split_at_mut(len);
        data.fill(0);

        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Cell format
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw bytes in controller RAM order
    pub fn as_bytes(&self) -> &[u8] {
        self.data
    }

    fn contains(&self, x: i16, y: i16) -> bool {
        x >= 0 && y >= 0 && (x as u16) < self.width && (y as u16) < self.height
    }

    /// Store a raw cell value; out-of-range coordinates are ignored
    pub fn set(&mut self, x: i16, y: i16, cell: u16) {
        if !self.contains(x, y) {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let width = self.width as usize;
        let cell = cell & self.format.max_cell();

        match self.format {
            PixelFormat::Mono => {
                let byte = &mut self.data[(y / 8) * width + x];
                let mask = 1u8 << (y % 8);
                if cell != 0 {
                    *byte |= mask;
                } else {
                    *byte &= !mask;
                }
            }
            PixelFormat::Gray4 => {
                let index = y * width + x;
                let byte = &mut self.data[index / 2];
                let nibble = cell as u8;
                if index % 2 == 0 {
                    *byte = (*byte & 0x0F) | (nibble << 4);
                } else {
                    *byte = (*byte & 0xF0) | nibble;
                }
            }
            PixelFormat::Rgb565 => {
                let index = (y * width + x) * 2;
                self.data[index..index + 2].copy_from_slice(&cell.to_be_bytes());
            }
        }
    }

    /// Blend `intensity` through `ink` and store it
    pub fn plot(&mut self, x: i16, y: i16, intensity: u8, ink: Ink) {
        let cell = ink.blend(self.format, intensity);
        self.set(x, y, cell);
    }

    /// Raw cell value, or `None` outside the panel
    pub fn get(&self, x: i16, y: i16) -> Option<u16> {
        if !self.contains(x, y) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let width = self.width as usize;

        let cell = match self.format {
            PixelFormat::Mono => u16::from((self.data[(y / 8) * width + x] >> (y % 8)) & 1),
            PixelFormat::Gray4 => {
                let index = y * width + x;
                let byte = self.data[index / 2];
                if index % 2 == 0 {
                    u16::from(byte >> 4)
                } else {
                    u16::from(byte & 0x0F)
                }
            }
            PixelFormat::Rgb565 => {
                let index = (y * width + x) * 2;
                u16::from_be_bytes([self.data[index], self.data[index + 1]])
            }
        };
        Some(cell)
    }

    /// Set every pixel to the same raw cell value
    pub fn fill(&mut self, cell: u16) {
        let cell = cell & self.format.max_cell();
        match self.format {
            PixelFormat::Mono => self.data.fill(if cell != 0 { 0xFF } else { 0x00 }),
            PixelFormat::Gray4 => {
                let nibble = cell as u8;
                self.data.fill((nibble << 4) | nibble);
            }
            PixelFormat::Rgb565 => {
                let bytes = cell.to_be_bytes();
                for pair in self.data.chunks_exact_mut(2) {
                    pair.copy_from_slice(&bytes);
                }
            }
        }
    }
}
