//! Display scan task
//!
//! Fixed-rate multiplex refresh: each tick lights one digit position
//! with the currently installed pattern. Runs forever, independent of
//! the measurement pipeline, so the display never stalls or flickers
//! while a capture is in flight.

use defmt::*;
use embassy_time::{Duration, Ticker};

use belos_core::config::SCAN_HZ;
use belos_hal_rp2040::segments::GpioSegmentBus;

use crate::channels::DISPLAY;

#[embassy_executor::task]
pub async fn scan_task(mut bus: GpioSegmentBus<'static>) {
    info!("Scan task started");

    let mut ticker = Ticker::every(Duration::from_hz(SCAN_HZ));

    loop {
        ticker.next().await;
        DISPLAY.lock(|display| display.borrow_mut().scan(&mut bus));
    }
}
