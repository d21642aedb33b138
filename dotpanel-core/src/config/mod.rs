//! Configuration types
//!
//! Panel geometry, pixel format and bus wiring, validated once at start-up.

pub mod panel;

pub use panel::{
    BusConfig, ConfigError, I2cBusConfig, PanelConfig, SpiBusConfig, MAX_GPIO, SH1106_ADDRESS,
};
