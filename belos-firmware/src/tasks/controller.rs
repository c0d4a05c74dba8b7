//! Main control loop
//!
//! Single consumer of the capture state. Sleeps until a gate or wrap
//! event fires, snapshots the capture group in one critical section,
//! and drives the display content: pending dashes, the too-slow
//! message, or the computed result. Never blocks on the display; the
//! scan task renders whatever is installed from its own ticker.

use defmt::*;

use belos_core::capture::Phase;
use belos_core::config::{MAX_WRAPS, SPEED_NUMERATOR};
use belos_core::glyphs::Glyph;
use belos_core::speed::calculate_speed;

use crate::channels::{CAPTURE, DISPLAY, MEASURE_WAKE};

#[embassy_executor::task]
pub async fn controller_task() {
    info!("Controller task started");

    // Power-on greeting, shown until the first gate event ("HI" with
    // the digit 1 standing in for the letter I)
    DISPLAY.lock(|display| {
        display
            .borrow_mut()
            .set_text([Glyph::H, Glyph::Digit(1), Glyph::Blank])
    });

    loop {
        MEASURE_WAKE.wait().await;

        let snapshot = CAPTURE.lock(|capture| capture.borrow().snapshot());

        if snapshot.wraps > MAX_WRAPS {
            // Cycle already abandoned by the wrap handler
            debug!("Too slow, {=u16} wraps", snapshot.wraps);
            DISPLAY.lock(|display| {
                display
                    .borrow_mut()
                    .set_text([Glyph::L, Glyph::Digit(0), Glyph::Blank])
            });
        } else if snapshot.phase == Phase::Armed {
            DISPLAY.lock(|display| display.borrow_mut().set_text([Glyph::Dash; 3]));
        } else if snapshot.phase == Phase::Complete {
            match calculate_speed(
                snapshot.first,
                snapshot.second,
                snapshot.wraps,
                SPEED_NUMERATOR,
            ) {
                Ok(speed) => {
                    info!("Measured {=u16} dm/s", speed);
                    DISPLAY.lock(|display| display.borrow_mut().set_number(speed));
                }
                Err(err) => {
                    warn!("Interval unusable: {}", err);
                    DISPLAY.lock(|display| display.borrow_mut().set_error(err));
                }
            }
            CAPTURE.lock(|capture| capture.borrow_mut().reset());
        }
    }
}
