//! I2C bus abstractions
//!
//! Panels on a 2-wire bus only ever receive writes: a control byte
//! followed by command or display data.

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error: core::fmt::Debug;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}
