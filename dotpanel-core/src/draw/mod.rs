//! Framebuffer drawing engine
//!
//! [`PixelBuffer`] owns the pixels, [`Color`]/[`Ink`] turn an 8-bit
//! intensity into a stored cell, [`layout::place`] positions every shape
//! from the [`DrawState`] cursor, and [`Surface`] is the drawing API that
//! binds them together.

pub mod buffer;
pub mod color;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod layout;
pub mod state;
pub mod surface;

pub use buffer::{PixelBuffer, PixelFormat};
pub use color::{Color, Ink};
pub use state::{Align, DrawState};
pub use surface::{Surface, TEXT_CAPACITY};
