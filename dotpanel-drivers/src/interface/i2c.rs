//! 2-wire I2C interface
//!
//! Each write starts with a control byte: `0x00` for a command stream,
//! `0x40` for display data. Long payloads are split into chunks so the
//! transfer buffer stays on the stack.

use dotpanel_core::traits::FrameInterface;
use dotpanel_hal::I2cBus;

/// Control byte for a command stream
const CONTROL_COMMAND: u8 = 0x00;

/// Control byte for display data
const CONTROL_DATA: u8 = 0x40;

/// Payload bytes per I2C write
pub const CHUNK: usize = 32;

/// Framed interface over an I2C master
pub struct I2cInterface<I2C> {
    i2c: I2C,
}

impl<I2C: I2cBus> I2cInterface<I2C> {
    /// Wrap an I2C master
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn stream(&mut self, address: u8, control: u8, bytes: &[u8]) -> Result<(), I2C::Error> {
        let mut frame = [0u8; CHUNK + 1];
        frame[0] = control;
        for chunk in bytes.chunks(CHUNK) {
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c.write(address, &frame[..=chunk.len()])?;
        }
        Ok(())
    }
}

impl<I2C: I2cBus> FrameInterface for I2cInterface<I2C> {
    type Error = I2C::Error;

    fn send_frame(&mut self, address: u8, commands: &[u8], data: &[u8]) -> Result<(), Self::Error> {
        self.stream(address, CONTROL_COMMAND, commands)?;
        self.stream(address, CONTROL_DATA, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    struct MockI2c {
        writes: Vec<(u8, Vec<u8>)>,
    }

    impl I2cBus for MockI2c {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            self.writes.push((address, data.to_vec()));
            Ok(())
        }
    }

    #[test]
    fn test_commands_prefixed() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.send_frame(0x3C, &[0xAE, 0xD5, 0x80], &[]).unwrap();
        let i2c = interface.release();
        assert_eq!(i2c.writes, [(0x3C, vec![0x00, 0xAE, 0xD5, 0x80])]);
    }

    #[test]
    fn test_data_chunked() {
        let mut interface = I2cInterface::new(MockI2c::default());
        let data: Vec<u8> = (0..70).collect();
        interface.send_frame(0x3D, &[0xB0], &data).unwrap();
        let i2c = interface.release();

        assert_eq!(i2c.writes.len(), 4);
        assert_eq!(i2c.writes[0].1, [0x00, 0xB0]);
        assert_eq!(i2c.writes[1].1.len(), CHUNK + 1);
        assert_eq!(i2c.writes[1].1[0], 0x40);
        assert_eq!(i2c.writes[1].1[1], 0);
        assert_eq!(i2c.writes[3].1, [0x40, 64, 65, 66, 67, 68, 69]);
        assert!(i2c.writes.iter().all(|(address, _)| *address == 0x3D));
    }

    #[test]
    fn test_empty_frame_sends_nothing() {
        let mut interface = I2cInterface::new(MockI2c::default());
        interface.send_frame(0x3C, &[], &[]).unwrap();
        assert!(interface.release().writes.is_empty());
    }
}
