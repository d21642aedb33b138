//! dotpanel demo firmware
//!
//! Drives a 128x128 SSD1351 colour OLED from an RP2040. One task owns the
//! panel and pushes the framebuffer whenever it changes; the demo task
//! draws into it through locked sessions.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::Spi;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use dotpanel_core::font::builtin_fonts;
use dotpanel_core::{BusConfig, PanelConfig, SpiBusConfig};
use dotpanel_display::Display;
use dotpanel_drivers::{SpiInterface, Ssd1351};
use dotpanel_hal::{EhPin, EhSpi};

use crate::board::{PanelDisplay, FRAME_BYTES};

mod board;
mod tasks;

// Framebuffer and display handle live forever so tasks can share them
static FRAME: StaticCell<[u8; FRAME_BYTES]> = StaticCell::new();
static DISPLAY: StaticCell<PanelDisplay> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("dotpanel firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = PanelConfig::ssd1351(SpiBusConfig::default());
    let bus = match config.bus {
        BusConfig::Spi(bus) => bus,
        BusConfig::I2c(_) => defmt::panic!("SSD1351 board needs an SPI bus"),
    };
    info!(
        "Panel {}x{} on SPI{} at {} Hz",
        config.width, config.height, bus.port, bus.frequency
    );

    // SPI0: CLK GPIO18, MOSI GPIO19
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, board::spi_config(&bus));
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_20, Level::Low);
    let rst = Output::new(p.PIN_21, Level::High);

    let interface = SpiInterface::new(EhSpi(spi), EhPin(dc), EhPin(cs), EhPin(rst));
    let panel = Ssd1351::new(interface, config.flip);

    let frame = FRAME.init([0; FRAME_BYTES]);
    let display = match Display::new(&config, frame, builtin_fonts()) {
        Ok(display) => DISPLAY.init(display),
        Err(e) => defmt::panic!("Invalid panel configuration: {}", e),
    };
    info!("Framebuffer ready, {} bytes", config.buffer_len());

    spawner.spawn(tasks::update_task(display, panel)).unwrap();
    spawner.spawn(tasks::demo_task(display)).unwrap();

    info!("All tasks spawned");
}
