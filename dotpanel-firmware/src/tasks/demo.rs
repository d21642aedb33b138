//! Demo screen
//!
//! Draws a status screen once a second: a frame, a title, an uptime
//! counter and a bar that fills up over a minute. Contrast steps down and
//! back up every ten seconds.

use defmt::*;
use dotpanel_core::{Align, Color};
use embassy_time::{Duration, Instant, Ticker};

use crate::board::PanelDisplay;

/// Redraw period
const FRAME_INTERVAL_MS: u64 = 1000;

/// Contrast levels cycled through
const CONTRAST_STEPS: [u8; 4] = [0xFF, 0xC0, 0x80, 0xC0];

#[embassy_executor::task]
pub async fn demo_task(display: &'static PanelDisplay) {
    info!("Demo task started");

    let mut ticker = Ticker::every(Duration::from_millis(FRAME_INTERVAL_MS));
    let start = Instant::now();

    loop {
        let seconds = start.elapsed().as_secs();

        {
            let mut screen = display.lock().await;
            let width = screen.width() as i16;
            let height = screen.height() as i16;

            screen.clear(0);

            screen.set_foreground(Color::Blue);
            screen.outline_rect(width, height, 255);

            screen.set_position(width / 2, 4, Align::CENTRE | Align::TOP | Align::VMOVE);
            screen.set_foreground('Y');
            screen.text_str(2, "dotpanel");

            screen.set_foreground('w');
            let y = screen.y() + 6;
            screen.set_position(width / 2, y, Align::CENTRE | Align::TOP | Align::VMOVE);
            screen.text(1, format_args!("up {}:{:02}", seconds / 60, seconds % 60));

            // Progress bar: the outline, then the fill from the same corner
            let bar = width - 16;
            let filled = (bar as u64 * (seconds % 60) / 59) as i16;
            screen.set_foreground('G');
            screen.set_position(8, height - 12, Align::LEFT | Align::TOP);
            screen.outline_rect(bar, 6, 255);
            screen.filled_rect(filled, 6, 255);
        }

        if seconds % 10 == 0 {
            let step = (seconds / 10) as usize % CONTRAST_STEPS.len();
            display.set_contrast(CONTRAST_STEPS[step]).await;
            debug!("Contrast {=u8:#x}", CONTRAST_STEPS[step]);
        }

        ticker.next().await;
    }
}
