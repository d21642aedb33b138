//! Panel controllers
//!
//! Each controller implements [`dotpanel_core::Transport`] on top of a bus
//! interface:
//!
//! - [`Ssd1351`] - RGB565 OLED on a [`dotpanel_core::CommandInterface`]
//! - [`Sh1106`] - monochrome OLED on a [`dotpanel_core::FrameInterface`]

pub mod sh1106;
pub mod ssd1351;

pub use sh1106::Sh1106;
pub use ssd1351::Ssd1351;
