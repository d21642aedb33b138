//! Bus interfaces and panel controllers
//!
//! This crate provides concrete implementations of the collaborator
//! traits defined in dotpanel-core:
//!
//! - Bus interfaces (4-wire SPI with D/C select, 2-wire I2C framing)
//! - Panel controllers (SSD1351 RGB565 OLED, SH1106 monochrome OLED)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod interface;
pub mod panel;

pub use interface::{I2cInterface, SpiInterface};
pub use panel::{Sh1106, Ssd1351};
