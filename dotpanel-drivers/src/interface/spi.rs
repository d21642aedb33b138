//! 4-wire SPI interface
//!
//! The D/C line is low while a command byte is clocked out and high for
//! arguments and display data. Chip select is asserted around each call.

use dotpanel_core::traits::CommandInterface;
use dotpanel_hal::{NoPin, OutputPin, SpiBus};
use embedded_hal::delay::DelayNs;

/// Reset pulse low and recovery time
const RESET_PULSE_US: u32 = 1000;

/// Command/data interface over a write-only SPI bus
pub struct SpiInterface<SPI, DC, CS, RST = NoPin> {
    spi: SPI,
    dc: DC,
    cs: CS,
    rst: Option<RST>,
}

impl<SPI, DC, CS> SpiInterface<SPI, DC, CS, NoPin>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
{
    /// Interface for a panel without a reset line
    pub fn without_reset(spi: SPI, dc: DC, cs: CS) -> Self {
        Self::build(spi, dc, cs, None)
    }
}

impl<SPI, DC, CS, RST> SpiInterface<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    /// Interface with a reset line
    pub fn new(spi: SPI, dc: DC, cs: CS, rst: RST) -> Self {
        Self::build(spi, dc, cs, Some(rst))
    }

    fn build(spi: SPI, dc: DC, cs: CS, rst: Option<RST>) -> Self {
        let mut interface = Self { spi, dc, cs, rst };
        interface.cs.set_high();
        if let Some(rst) = interface.rst.as_mut() {
            rst.set_high();
        }
        interface
    }

    /// Give the bus and pins back
    pub fn release(self) -> (SPI, DC, CS, Option<RST>) {
        (self.spi, self.dc, self.cs, self.rst)
    }

    /// Run `f` with chip select asserted
    fn selected<F>(&mut self, f: F) -> Result<(), SPI::Error>
    where
        F: FnOnce(&mut SPI, &mut DC) -> Result<(), SPI::Error>,
    {
        self.cs.set_low();
        let result = f(&mut self.spi, &mut self.dc);
        self.cs.set_high();
        result
    }
}

impl<SPI, DC, CS, RST> CommandInterface for SpiInterface<SPI, DC, CS, RST>
where
    SPI: SpiBus,
    DC: OutputPin,
    CS: OutputPin,
    RST: OutputPin,
{
    type Error = SPI::Error;

    fn command(&mut self, code: u8) -> Result<(), Self::Error> {
        self.selected(|spi, dc| {
            dc.set_low();
            spi.write(&[code])
        })
    }

    fn command_with_args(&mut self, code: u8, args: &[u8]) -> Result<(), Self::Error> {
        self.selected(|spi, dc| {
            dc.set_low();
            spi.write(&[code])?;
            if args.is_empty() {
                return Ok(());
            }
            dc.set_high();
            spi.write(args)
        })
    }

    fn data(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        self.selected(|spi, dc| {
            dc.set_high();
            spi.write(bytes)
        })
    }

    fn reset<D: DelayNs>(&mut self, delay: &mut D) {
        if let Some(rst) = self.rst.as_mut() {
            rst.set_low();
            delay.delay_us(RESET_PULSE_US);
            rst.set_high();
            delay.delay_us(RESET_PULSE_US);
        }
    }
}
