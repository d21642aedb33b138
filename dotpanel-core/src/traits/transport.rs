//! Panel transport trait

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the panel shows the framebuffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayMode {
    /// As drawn
    #[default]
    Normal,
    /// Every pixel inverted by the controller
    Inverted,
    /// Panel blanked, RAM retained
    Off,
}

/// Settings re-sent whenever they change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelSettings {
    /// Logical contrast, scaled by the controller driver
    pub contrast: u8,
    /// Display mode
    pub mode: DisplayMode,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            contrast: 255,
            mode: DisplayMode::Normal,
        }
    }
}

/// Panel controller on a bus
///
/// Every call reports success or failure; the updater decides whether a
/// failure is retried.
pub trait Transport {
    /// Bus error
    type Error: Debug;

    /// Initialize the controller and show `frame`
    fn bring_up<D: DelayNs>(&mut self, frame: &[u8], delay: &mut D) -> Result<(), Self::Error>;

    /// Select the full window and write the whole framebuffer
    fn push(&mut self, frame: &[u8]) -> Result<(), Self::Error>;

    /// Send the contrast command
    fn set_contrast(&mut self, contrast: u8) -> Result<(), Self::Error>;

    /// Send the display mode command
    fn set_mode(&mut self, mode: DisplayMode) -> Result<(), Self::Error>;

    /// Send contrast and mode
    fn apply(&mut self, settings: PanelSettings) -> Result<(), Self::Error> {
        self.set_contrast(settings.contrast)?;
        self.set_mode(settings.mode)
    }
}
