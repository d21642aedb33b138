//! SSD1351 RGB OLED controller
//!
//! 128x128 16-bit colour OLED on a 4-wire SPI bus. The framebuffer is
//! RGB565 big-endian, which is the controller's native RAM order, so a
//! push is the window commands followed by one data write.

use dotpanel_core::traits::{CommandInterface, DisplayMode, Transport};
use embedded_hal::delay::DelayNs;

/// SSD1351 commands
pub mod cmd {
    /// Column window (start, end)
    pub const SET_COLUMN: u8 = 0x15;
    /// Row window (start, end)
    pub const SET_ROW: u8 = 0x75;
    /// Write RAM from the window start
    pub const WRITE_RAM: u8 = 0x5C;
    /// Remap and colour depth
    pub const SET_REMAP: u8 = 0xA0;
    /// Display start line
    pub const SET_START_LINE: u8 = 0xA1;
    /// Display offset
    pub const SET_OFFSET: u8 = 0xA2;
    /// All pixels on
    pub const ALL_ON: u8 = 0xA5;
    /// Normal display
    pub const NORMAL: u8 = 0xA6;
    /// Inverse display
    pub const INVERSE: u8 = 0xA7;
    /// Function selection (regulator)
    pub const FUNCTION: u8 = 0xAB;
    /// Sleep mode on (display off)
    pub const DISPLAY_OFF: u8 = 0xAE;
    /// Sleep mode off (display on)
    pub const DISPLAY_ON: u8 = 0xAF;
    /// Phase lengths
    pub const PRECHARGE: u8 = 0xB1;
    /// Display enhancement
    pub const ENHANCE: u8 = 0xB2;
    /// Clock divider and oscillator frequency
    pub const CLOCK_DIV: u8 = 0xB3;
    /// Segment low voltage
    pub const SET_VSL: u8 = 0xB4;
    /// Second pre-charge period
    pub const PRECHARGE2: u8 = 0xB6;
    /// Pre-charge voltage
    pub const PRECHARGE_LEVEL: u8 = 0xBB;
    /// COM deselect voltage
    pub const VCOMH: u8 = 0xBE;
    /// Per-channel contrast
    pub const CONTRAST_ABC: u8 = 0xC1;
    /// Master current, 0-15
    pub const MASTER_CURRENT: u8 = 0xC7;
    /// Multiplex ratio
    pub const MUX_RATIO: u8 = 0xCA;
    /// Command lock
    pub const COMMAND_LOCK: u8 = 0xFD;
}

/// Wake-up time after leaving sleep mode
const WAKE_DELAY_MS: u32 = 10;

/// Register setup sent after wake-up
const INIT_SEQUENCE: &[(u8, &[u8])] = &[
    (cmd::COMMAND_LOCK, &[0x12]),
    (cmd::COMMAND_LOCK, &[0xB1]),
    (cmd::CLOCK_DIV, &[0xF1]),
    (cmd::MUX_RATIO, &[0x7F]),
    (cmd::SET_START_LINE, &[0x00]),
    (cmd::SET_OFFSET, &[0x00]),
    (cmd::FUNCTION, &[0x01]),
    (cmd::SET_VSL, &[0xA0, 0xB5, 0x55]),
    (cmd::CONTRAST_ABC, &[0xC8, 0x80, 0xC0]),
    (cmd::MASTER_CURRENT, &[0x0F]),
    (cmd::PRECHARGE, &[0x32]),
    (cmd::ENHANCE, &[0xA4, 0x00, 0x00]),
    (cmd::PRECHARGE_LEVEL, &[0x17]),
    (cmd::PRECHARGE2, &[0x01]),
    (cmd::VCOMH, &[0x05]),
    (cmd::COMMAND_LOCK, &[0xB0]),
];

/// Remap: 65k colour, COM split, scan direction for each orientation
const REMAP_NORMAL: u8 = 0x26;
const REMAP_FLIPPED: u8 = 0x34;

/// SSD1351 driver
pub struct Ssd1351<DI> {
    interface: DI,
    width: u8,
    height: u8,
    flip: bool,
}

impl<DI: CommandInterface> Ssd1351<DI> {
    /// Driver for the full 128x128 panel
    pub fn new(interface: DI, flip: bool) -> Self {
        Self::with_size(interface, 128, 128, flip)
    }

    /// Driver for a panel using a smaller window of the controller RAM
    pub fn with_size(interface: DI, width: u8, height: u8, flip: bool) -> Self {
        Self {
            interface,
            width,
            height,
            flip,
        }
    }

    /// Give the interface back
    pub fn release(self) -> DI {
        self.interface
    }

    fn window(&mut self) -> Result<(), DI::Error> {
        let right = self.width.saturating_sub(1);
        let bottom = self.height.saturating_sub(1);
        self.interface.command_with_args(cmd::SET_COLUMN, &[0, right])?;
        self.interface.command_with_args(cmd::SET_ROW, &[0, bottom])?;
        self.interface.command(cmd::WRITE_RAM)
    }
}

impl<DI: CommandInterface> Transport for Ssd1351<DI> {
    type Error = DI::Error;

    fn bring_up<D: DelayNs>(&mut self, frame: &[u8], delay: &mut D) -> Result<(), Self::Error> {
        self.interface.reset(delay);
        self.interface.command(cmd::DISPLAY_ON)?;
        delay.delay_ms(WAKE_DELAY_MS);

        self.interface.command(cmd::ALL_ON)?;
        let remap = if self.flip {
            REMAP_FLIPPED
        } else {
            REMAP_NORMAL
        };
        self.interface.command_with_args(cmd::SET_REMAP, &[remap])?;
        for &(code, args) in INIT_SEQUENCE {
            self.interface.command_with_args(code, args)?;
        }

        self.push(frame)?;
        self.interface.command(cmd::NORMAL)
    }

    fn push(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        self.window()?;
        self.interface.data(frame)
    }

    fn set_contrast(&mut self, contrast: u8) -> Result<(), Self::Error> {
        self.interface
            .command_with_args(cmd::MASTER_CURRENT, &[contrast >> 4])
    }

    fn set_mode(&mut self, mode: DisplayMode) -> Result<(), Self::Error> {
        match mode {
            DisplayMode::Normal => {
                self.interface.command(cmd::DISPLAY_ON)?;
                self.interface.command(cmd::NORMAL)
            }
            DisplayMode::Inverted => {
                self.interface.command(cmd::DISPLAY_ON)?;
                self.interface.command(cmd::INVERSE)
            }
            DisplayMode::Off => self.interface.command(cmd::DISPLAY_OFF),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    /// Records commands as `(code, args)` and data lengths
    #[derive(Default)]
    struct Recorder {
        commands: Vec<(u8, Vec<u8>)>,
        data: Vec<usize>,
        resets: usize,
        fail_on: Option<u8>,
    }

    impl CommandInterface for Recorder {
        type Error = u8;

        fn command(&mut self, code: u8) -> Result<(), u8> {
            self.command_with_args(code, &[])
        }

        fn command_with_args(&mut self, code: u8, args: &[u8]) -> Result<(), u8> {
            if self.fail_on == Some(code) {
                return Err(code);
            }
            self.commands.push((code, args.to_vec()));
            Ok(())
        }

        fn data(&mut self, bytes: &[u8]) -> Result<(), u8> {
            self.data.push(bytes.len());
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) {
            self.resets += 1;
        }
    }

    struct NoDelay;

    impl DelayNs for NoDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    #[test]
    fn test_bring_up_sequence() {
        let mut panel = Ssd1351::new(Recorder::default(), false);
        let frame = [0u8; 128 * 128 * 2];
        panel.bring_up(&frame, &mut NoDelay).unwrap();
        let recorder = panel.release();

        assert_eq!(recorder.resets, 1);
        assert_eq!(recorder.commands[0], (cmd::DISPLAY_ON, vec![]));
        assert_eq!(recorder.commands[1], (cmd::ALL_ON, vec![]));
        assert_eq!(recorder.commands[2], (cmd::SET_REMAP, vec![REMAP_NORMAL]));
        assert!(recorder
            .commands
            .contains(&(cmd::CONTRAST_ABC, vec![0xC8, 0x80, 0xC0])));
        // Frame pushed, then normal display
        assert_eq!(recorder.data, [128 * 128 * 2]);
        assert_eq!(recorder.commands.last(), Some(&(cmd::NORMAL, vec![])));
    }

    #[test]
    fn test_flip_remap() {
        let mut panel = Ssd1351::new(Recorder::default(), true);
        panel.bring_up(&[], &mut NoDelay).unwrap();
        let recorder = panel.release();
        assert_eq!(recorder.commands[2], (cmd::SET_REMAP, vec![REMAP_FLIPPED]));
    }

    #[test]
    fn test_push_window() {
        let mut panel = Ssd1351::with_size(Recorder::default(), 96, 64, false);
        panel.push(&[0; 4]).unwrap();
        let recorder = panel.release();
        assert_eq!(
            recorder.commands,
            [
                (cmd::SET_COLUMN, vec![0, 95]),
                (cmd::SET_ROW, vec![0, 63]),
                (cmd::WRITE_RAM, vec![]),
            ]
        );
        assert_eq!(recorder.data, [4]);
    }

    #[test]
    fn test_contrast_scaling() {
        let mut panel = Ssd1351::new(Recorder::default(), false);
        panel.set_contrast(255).unwrap();
        panel.set_contrast(0x40).unwrap();
        let recorder = panel.release();
        assert_eq!(
            recorder.commands,
            [
                (cmd::MASTER_CURRENT, vec![0x0F]),
                (cmd::MASTER_CURRENT, vec![0x04]),
            ]
        );
    }

    #[test]
    fn test_modes() {
        let mut panel = Ssd1351::new(Recorder::default(), false);
        panel.set_mode(DisplayMode::Inverted).unwrap();
        panel.set_mode(DisplayMode::Off).unwrap();
        let recorder = panel.release();
        assert_eq!(
            recorder.commands,
            [
                (cmd::DISPLAY_ON, vec![]),
                (cmd::INVERSE, vec![]),
                (cmd::DISPLAY_OFF, vec![]),
            ]
        );
    }

    #[test]
    fn test_bring_up_error_propagates() {
        let recorder = Recorder {
            fail_on: Some(cmd::MUX_RATIO),
            ..Recorder::default()
        };
        let mut panel = Ssd1351::new(recorder, false);
        assert_eq!(panel.bring_up(&[], &mut NoDelay), Err(cmd::MUX_RATIO));
        assert!(panel.release().data.is_empty());
    }
}
