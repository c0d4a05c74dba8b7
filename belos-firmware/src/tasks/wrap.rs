//! Counter wrap task
//!
//! Fires at every 2^16-tick boundary of the capture timebase and
//! advances the capture machine's wrap tally, bounding how long the
//! machine will wait for a second gate edge.

use defmt::*;
use embassy_time::Timer;

use belos_hal_rp2040::counter;

use crate::channels::{CAPTURE, MEASURE_WAKE};

#[embassy_executor::task]
pub async fn wrap_task() {
    info!("Wrap task started");

    loop {
        Timer::at(counter::next_wrap()).await;

        CAPTURE.lock(|capture| capture.borrow_mut().on_wrap());
        MEASURE_WAKE.signal(());
    }
}
