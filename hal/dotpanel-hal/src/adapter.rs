//! `embedded-hal` 1.0 adapters
//!
//! Wrap a chip HAL peripheral that implements the `embedded-hal` traits so
//! it can be handed to the panel interfaces.

use embedded_hal::digital::OutputPin as EhOutputPin;
use embedded_hal::i2c::I2c as EhI2cBus;
use embedded_hal::spi::SpiBus as EhSpiBus;

use crate::gpio::OutputPin;
use crate::i2c::I2cBus;
use crate::spi::SpiBus;

/// SPI bus adapter
#[derive(Debug)]
pub struct EhSpi<T>(pub T);

impl<T: EhSpiBus<u8>> SpiBus for EhSpi<T> {
    type Error = T::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(data)?;
        // D/C may toggle right after this returns
        self.0.flush()
    }
}

/// I2C bus adapter
#[derive(Debug)]
pub struct EhI2c<T>(pub T);

impl<T: EhI2cBus> I2cBus for EhI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(address, data)
    }
}

/// Output pin adapter
///
/// GPIO errors are dropped; on the supported chips they are `Infallible`.
#[derive(Debug)]
pub struct EhPin<T>(pub T);

impl<T: EhOutputPin> OutputPin for EhPin<T> {
    fn set_high(&mut self) {
        let _ = self.0.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.0.set_low();
    }
}
