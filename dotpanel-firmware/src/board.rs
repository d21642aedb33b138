//! Board wiring
//!
//! Waveshare 1.5" RGB OLED (SSD1351) on SPI0 of a Raspberry Pi Pico.
//! The pin numbers match [`SpiBusConfig::default`].

use dotpanel_core::SpiBusConfig;
use dotpanel_display::Display;
use dotpanel_drivers::{SpiInterface, Ssd1351};
use dotpanel_hal::spi::{Phase, Polarity, SpiConfig};
use dotpanel_hal::{EhPin, EhSpi};
use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{self, Blocking, Spi};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Framebuffer size for the 128x128 RGB565 panel
pub const FRAME_BYTES: usize = 128 * 128 * 2;

/// Panel bus
pub type PanelSpi = Spi<'static, SPI0, Blocking>;

/// Panel controller on its bus
pub type Panel = Ssd1351<
    SpiInterface<EhSpi<PanelSpi>, EhPin<Output<'static>>, EhPin<Output<'static>>, EhPin<Output<'static>>>,
>;

/// Shared display handle
pub type PanelDisplay = Display<'static, CriticalSectionRawMutex>;

/// Chip SPI settings for the panel bus
pub fn spi_config(bus: &SpiBusConfig) -> spi::Config {
    let panel = SpiConfig {
        frequency: bus.frequency,
        ..SpiConfig::default()
    };
    let (polarity, phase) = panel.mode.into();

    let mut config = spi::Config::default();
    config.frequency = panel.frequency;
    config.polarity = match polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    config.phase = match phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    config
}
