//! dotpanel Hardware Abstraction Layer
//!
//! This crate defines the bus and pin traits the panel interfaces are
//! written against. Chip HALs plug in either by implementing these traits
//! directly or through the [`adapter`] wrappers around `embedded-hal` 1.0
//! peripherals.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dotpanel-drivers (SPI / I2C panels)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dotpanel-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  embedded-hal │       │   test mocks  │
//! │   adapters    │       │               │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output (D/C, chip select, reset)
//! - [`spi::SpiBus`] - SPI write-only master
//! - [`i2c::I2cBus`] - I2C master writes

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adapter;
pub mod gpio;
pub mod i2c;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use adapter::{EhI2c, EhPin, EhSpi};
pub use gpio::{NoPin, OutputPin};
pub use i2c::I2cBus;
pub use spi::SpiBus;
