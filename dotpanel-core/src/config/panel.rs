//! Panel hardware configuration
//!
//! These types describe the panel geometry and how it is wired to the
//! controller. [`PanelConfig::validate`] is the only place a configuration
//! error can arise; everything downstream assumes a valid configuration.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::draw::PixelFormat;

/// Highest usable GPIO number (RP2040 exposes GPIO0-29)
pub const MAX_GPIO: u8 = 29;

/// Number of SPI/I2C controller instances
const MAX_PORT: u8 = 1;

/// Default 7-bit address of SH1106/SSD1306 modules (0x3D with SA0 high)
pub const SH1106_ADDRESS: u8 = 0x3C;

/// Configuration errors, reported synchronously at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Data-in (MOSI) pin is not a valid output
    Din,
    /// Clock pin is not a valid output
    Clk,
    /// Data/command select pin is not a valid output
    Dc,
    /// Chip select pin is not a valid output
    Cs,
    /// Reset pin is not a valid output
    Rst,
    /// I2C data pin is not valid
    Sda,
    /// I2C clock pin is not valid
    Scl,
    /// Bus controller instance does not exist
    Port,
    /// I2C address is not a 7-bit address
    Address,
    /// The same GPIO is assigned to two signals
    DuplicatePin,
    /// Width or height is zero or too large
    Geometry,
    /// Framebuffer storage is smaller than the panel needs
    BufferSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Din => "DIN?",
            Self::Clk => "CLK?",
            Self::Dc => "DC?",
            Self::Cs => "CS?",
            Self::Rst => "RST?",
            Self::Sda => "SDA?",
            Self::Scl => "SCL?",
            Self::Port => "Bad port",
            Self::Address => "Bad address",
            Self::DuplicatePin => "Pin reused",
            Self::Geometry => "Bad size",
            Self::BufferSize => "Mem?",
        };
        f.write_str(msg)
    }
}

/// 4-wire SPI wiring (clock, data-in, chip select, data/command)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpiBusConfig {
    /// SPI controller instance (0 or 1)
    pub port: u8,
    /// Chip select pin
    pub cs: u8,
    /// Clock pin
    pub clk: u8,
    /// Data-in (MOSI) pin
    pub din: u8,
    /// Data/command select pin
    pub dc: u8,
    /// Reset pin, if wired
    pub rst: Option<u8>,
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for SpiBusConfig {
    fn default() -> Self {
        Self {
            port: 0,
            cs: 17,
            clk: 18,
            din: 19,
            dc: 20,
            rst: Some(21),
            frequency: 20_000_000,
        }
    }
}

/// 2-wire I2C wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct I2cBusConfig {
    /// I2C controller instance (0 or 1)
    pub port: u8,
    /// Data pin
    pub sda: u8,
    /// Clock pin
    pub scl: u8,
    /// 7-bit device address
    pub address: u8,
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cBusConfig {
    fn default() -> Self {
        Self {
            port: 0,
            sda: 4,
            scl: 5,
            address: SH1106_ADDRESS,
            frequency: 400_000,
        }
    }
}

/// Bus the panel controller sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BusConfig {
    /// 4-wire command/data bus
    Spi(SpiBusConfig),
    /// 2-wire addressed bus
    I2c(I2cBusConfig),
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelConfig {
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Native cell format of the controller RAM
    pub format: PixelFormat,
    /// Mount the panel rotated by 180 degrees
    pub flip: bool,
    /// Bus wiring
    pub bus: BusConfig,
}

impl PanelConfig {
    /// 128x128 RGB565 SSD1351 on a 4-wire bus
    pub const fn ssd1351(spi: SpiBusConfig) -> Self {
        Self {
            width: 128,
            height: 128,
            format: PixelFormat::Rgb565,
            flip: false,
            bus: BusConfig::Spi(spi),
        }
    }

    /// 128x64 monochrome SH1106 on a 2-wire bus
    pub const fn sh1106(i2c: I2cBusConfig) -> Self {
        Self {
            width: 128,
            height: 64,
            format: PixelFormat::Mono,
            flip: false,
            bus: BusConfig::I2c(i2c),
        }
    }

    /// Same configuration, mounted upside down
    pub const fn flipped(mut self) -> Self {
        self.flip = true;
        self
    }

    /// Framebuffer size in bytes
    pub const fn buffer_len(&self) -> usize {
        self.format.buffer_len(self.width, self.height)
    }

    /// Check geometry and wiring
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0
            || self.height == 0
            || self.width > i16::MAX as u16
            || self.height > i16::MAX as u16
        {
            return Err(ConfigError::Geometry);
        }

        match &self.bus {
            BusConfig::Spi(spi) => spi.validate(),
            BusConfig::I2c(i2c) => i2c.validate(),
        }
    }
}

impl SpiBusConfig {
    /// Check each pin is a usable output, the port exists, and no pin is reused
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pin(self.din, ConfigError::Din)?;
        check_pin(self.clk, ConfigError::Clk)?;
        check_pin(self.dc, ConfigError::Dc)?;
        check_pin(self.cs, ConfigError::Cs)?;
        if self.port > MAX_PORT {
            return Err(ConfigError::Port);
        }
        if let Some(rst) = self.rst {
            check_pin(rst, ConfigError::Rst)?;
        }

        let mut pins: heapless::Vec<u8, 5> = heapless::Vec::new();
        for pin in [self.din, self.clk, self.dc, self.cs]
            .into_iter()
            .chain(self.rst)
        {
            if pins.contains(&pin) {
                return Err(ConfigError::DuplicatePin);
            }
            // Capacity matches the number of signals
            let _ = pins.push(pin);
        }
        Ok(())
    }
}

impl I2cBusConfig {
    /// Check the pins, port and address
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_pin(self.sda, ConfigError::Sda)?;
        check_pin(self.scl, ConfigError::Scl)?;
        if self.port > MAX_PORT {
            return Err(ConfigError::Port);
        }
        if self.sda == self.scl {
            return Err(ConfigError::DuplicatePin);
        }
        if self.address > 0x7F {
            return Err(ConfigError::Address);
        }
        Ok(())
    }
}

fn check_pin(pin: u8, err: ConfigError) -> Result<(), ConfigError> {
    if pin > MAX_GPIO {
        Err(err)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wiring_is_valid() {
        assert_eq!(PanelConfig::ssd1351(SpiBusConfig::default()).validate(), Ok(()));
        assert_eq!(PanelConfig::sh1106(I2cBusConfig::default()).validate(), Ok(()));
    }

    #[test]
    fn test_bad_pins_are_named() {
        let spi = SpiBusConfig {
            din: 40,
            ..SpiBusConfig::default()
        };
        assert_eq!(spi.validate(), Err(ConfigError::Din));

        let spi = SpiBusConfig {
            dc: 30,
            ..SpiBusConfig::default()
        };
        assert_eq!(spi.validate(), Err(ConfigError::Dc));

        let spi = SpiBusConfig {
            rst: Some(99),
            ..SpiBusConfig::default()
        };
        assert_eq!(spi.validate(), Err(ConfigError::Rst));

        // Reset line is optional
        let spi = SpiBusConfig {
            rst: None,
            ..SpiBusConfig::default()
        };
        assert_eq!(spi.validate(), Ok(()));
    }

    #[test]
    fn test_bad_port() {
        let spi = SpiBusConfig {
            port: 2,
            ..SpiBusConfig::default()
        };
        assert_eq!(spi.validate(), Err(ConfigError::Port));
        assert_eq!(ConfigError::Port.to_string(), "Bad port");
    }

    #[test]
    fn test_duplicate_pins() {
        let spi = SpiBusConfig {
            cs: 18,
            clk: 18,
            ..SpiBusConfig::default()
        };
        assert_eq!(spi.validate(), Err(ConfigError::DuplicatePin));

        let i2c = I2cBusConfig {
            sda: 5,
            scl: 5,
            ..I2cBusConfig::default()
        };
        assert_eq!(i2c.validate(), Err(ConfigError::DuplicatePin));
    }

    #[test]
    fn test_i2c_address() {
        let i2c = I2cBusConfig {
            address: 0x80,
            ..I2cBusConfig::default()
        };
        assert_eq!(i2c.validate(), Err(ConfigError::Address));
    }

    #[test]
    fn test_geometry() {
        let mut config = PanelConfig::sh1106(I2cBusConfig::default());
        config.height = 0;
        assert_eq!(config.validate(), Err(ConfigError::Geometry));
    }

    #[test]
    fn test_buffer_len() {
        assert_eq!(PanelConfig::ssd1351(SpiBusConfig::default()).buffer_len(), 32768);
        assert_eq!(PanelConfig::sh1106(I2cBusConfig::default()).buffer_len(), 1024);
    }

    #[test]
    fn test_flipped() {
        let config = PanelConfig::sh1106(I2cBusConfig::default()).flipped();
        assert!(config.flip);
    }
}
