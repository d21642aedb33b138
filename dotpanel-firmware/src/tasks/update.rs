//! Panel update task

use defmt::*;
use dotpanel_display::Updater;
use embassy_time::Delay;

use crate::board::{Panel, PanelDisplay};

/// Bring the panel up and keep it in sync with the framebuffer
///
/// Only returns if the panel never came up.
#[embassy_executor::task]
pub async fn update_task(display: &'static PanelDisplay, panel: Panel) {
    info!("Update task started");

    let mut updater = Updater::new(display, panel, Delay);
    let phase = updater.run().await;

    error!("Display updates stopped: {}", phase);
}
