//! Board-agnostic core of the dot-matrix panel driver
//!
//! This crate contains everything that does not touch a bus:
//!
//! - Framebuffer storage in the panel's native cell format
//! - Colour model and intensity blending
//! - Drawing state, alignment and the layout engine
//! - Bitmap-font metrics and glyph rasterizing
//! - The drawing surface binding those together
//! - The update-phase state machine and dirty tracking
//! - Panel and bus configuration
//! - Collaborator traits implemented by bus/controller drivers

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod draw;
pub mod font;
pub mod scheduler;
pub mod traits;

pub use config::{BusConfig, ConfigError, I2cBusConfig, PanelConfig, SpiBusConfig};
pub use draw::{Align, Color, DrawState, Ink, PixelBuffer, PixelFormat, Surface};
pub use font::{FontTable, TextStyle};
pub use scheduler::{Phase, PhaseEvent, UpdateFlags};
pub use traits::{CommandInterface, DisplayMode, FrameInterface, PanelSettings, Transport};
