//! Bus interfaces
//!
//! - [`SpiInterface`] - 4-wire SPI, D/C line selects command or data
//! - [`I2cInterface`] - I2C, a control byte prefixes every transfer

pub mod i2c;
pub mod spi;

pub use i2c::I2cInterface;
pub use spi::SpiInterface;
