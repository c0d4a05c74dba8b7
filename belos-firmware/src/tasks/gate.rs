//! Light-gate capture task
//!
//! Timestamps each rising edge on the combined gate input against the
//! free-running counter and feeds it to the capture machine. The analog
//! front end ORs both photodiode stages into this one line and is
//! expected to deliver one clean edge per passage.

use defmt::*;
use embassy_rp::gpio::Input;

use belos_hal_rp2040::counter;

use crate::channels::{CAPTURE, MEASURE_WAKE};

#[embassy_executor::task]
pub async fn gate_task(mut gate: Input<'static>) {
    info!("Gate task started");

    loop {
        gate.wait_for_rising_edge().await;
        let now = counter::count();

        CAPTURE.lock(|capture| capture.borrow_mut().on_gate_edge(now));
        MEASURE_WAKE.signal(());

        trace!("Gate edge at {=u16}", now);
    }
}
