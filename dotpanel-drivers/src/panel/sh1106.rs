//! SH1106 monochrome OLED controller
//!
//! 128x64 1-bit OLED on I2C. The controller RAM is 132 columns wide with
//! the visible area starting at column 2, and has no auto-wrapping
//! between pages, so a push addresses each 8-row page separately.

use dotpanel_core::config::SH1106_ADDRESS;
use dotpanel_core::traits::{DisplayMode, FrameInterface, Transport};
use embedded_hal::delay::DelayNs;

/// SH1106 commands
pub mod cmd {
    /// Display off
    pub const DISPLAY_OFF: u8 = 0xAE;
    /// Display on
    pub const DISPLAY_ON: u8 = 0xAF;
    /// Contrast (one argument)
    pub const SET_CONTRAST: u8 = 0x81;
    /// Normal display
    pub const SET_NORMAL: u8 = 0xA6;
    /// Inverse display
    pub const SET_INVERSE: u8 = 0xA7;
    /// Display offset (one argument)
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    /// COM pin configuration (one argument)
    pub const SET_COM_PINS: u8 = 0xDA;
    /// VCOM deselect level (one argument)
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    /// Clock divider (one argument)
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    /// Pre-charge period (one argument)
    pub const SET_PRECHARGE: u8 = 0xD9;
    /// Multiplex ratio (one argument)
    pub const SET_MUX_RATIO: u8 = 0xA8;
    /// Column address low nibble
    pub const SET_LOW_COLUMN: u8 = 0x00;
    /// Column address high nibble
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    /// Page address
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    /// Display start line
    pub const SET_START_LINE: u8 = 0x40;
    /// Segment remap, column 131 is SEG0
    pub const SET_SEG_REMAP: u8 = 0xA1;
    /// Segment remap off
    pub const SET_SEG_NORMAL: u8 = 0xA0;
    /// COM scan from COM[N-1]
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    /// COM scan from COM0
    pub const SET_COM_SCAN_INC: u8 = 0xC0;
    /// DC-DC control (one argument)
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// First visible column in controller RAM
const COLUMN_OFFSET: u8 = 2;

/// SH1106 driver
pub struct Sh1106<DI> {
    interface: DI,
    address: u8,
    width: u8,
    pages: u8,
    flip: bool,
}

impl<DI: FrameInterface> Sh1106<DI> {
    /// Driver for a 128x64 panel at the default address
    pub fn new(interface: DI, flip: bool) -> Self {
        Self::with_address(interface, SH1106_ADDRESS, flip)
    }

    /// Driver for a 128x64 panel at `address`
    pub fn with_address(interface: DI, address: u8, flip: bool) -> Self {
        Self::with_size(interface, address, 128, 64, flip)
    }

    /// Driver for a `width` x `height` panel at `address`
    ///
    /// The height is rounded up to whole 8-row pages, at most eight.
    pub fn with_size(interface: DI, address: u8, width: u8, height: u8, flip: bool) -> Self {
        Self {
            interface,
            address,
            width,
            pages: height.div_ceil(8).clamp(1, 8),
            flip,
        }
    }

    /// Give the interface back
    pub fn release(self) -> DI {
        self.interface
    }

    fn commands(&mut self, commands: &[u8]) -> Result<(), DI::Error> {
        self.interface.send_frame(self.address, commands, &[])
    }
}

impl<DI: FrameInterface> Transport for Sh1106<DI> {
    type Error = DI::Error;

    fn bring_up<D: DelayNs>(&mut self, frame: &[u8], delay: &mut D) -> Result<(), Self::Error> {
        let (segment, scan) = if self.flip {
            (cmd::SET_SEG_NORMAL, cmd::SET_COM_SCAN_INC)
        } else {
            (cmd::SET_SEG_REMAP, cmd::SET_COM_SCAN_DEC)
        };
        // Alternative COM layout above 32 rows
        let com_pins = if self.pages > 4 { 0x12 } else { 0x02 };
        let init = [
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_MUX_RATIO,
            self.pages * 8 - 1,
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP,
            0x14,
            segment,
            scan,
            cmd::SET_COM_PINS,
            com_pins,
            cmd::SET_CONTRAST,
            0xCF,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x40,
        ];
        self.commands(&init)?;
        // Clear RAM before the panel lights up
        self.push(frame)?;
        self.commands(&[cmd::SET_NORMAL, cmd::DISPLAY_ON])?;
        // Charge pump settling
        delay.delay_ms(100);
        Ok(())
    }

    fn push(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        let width = usize::from(self.width);
        for page in 0..self.pages {
            let start = usize::from(page) * width;
            let data = frame.get(start..start + width).unwrap_or(&[]);
            let select = [
                cmd::SET_PAGE_ADDR | page,
                cmd::SET_LOW_COLUMN | (COLUMN_OFFSET & 0x0F),
                cmd::SET_HIGH_COLUMN | (COLUMN_OFFSET >> 4),
            ];
            self.interface.send_frame(self.address, &select, data)?;
        }
        Ok(())
    }

    fn set_contrast(&mut self, contrast: u8) -> Result<(), Self::Error> {
        self.commands(&[cmd::SET_CONTRAST, contrast])
    }

    fn set_mode(&mut self, mode: DisplayMode) -> Result<(), Self::Error> {
        match mode {
            DisplayMode::Normal => self.commands(&[cmd::SET_NORMAL, cmd::DISPLAY_ON]),
            DisplayMode::Inverted => self.commands(&[cmd::SET_INVERSE, cmd::DISPLAY_ON]),
            DisplayMode::Off => self.commands(&[cmd::DISPLAY_OFF]),
        }
    }
}
