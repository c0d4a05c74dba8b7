//! Belos - Projectile Chronograph Firmware
//!
//! Measures the speed of a dart crossing two light gates a fixed
//! distance apart and shows the result on a three-digit 7-segment
//! display.
//!
//! Named after the Greek "belos" (βέλος) meaning "dart" - the
//! projectile this instrument exists to time.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use {defmt_rtt as _, panic_probe as _};

use belos_hal_rp2040::segments::GpioSegmentBus;

mod channels;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Belos firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Combined gate input: both photodiode stages are OR'd into one
    // active-high line by the analog front end
    let gate = Input::new(p.PIN_2, Pull::Down);

    // Segment cathodes a-g, active low; everything starts dark
    let cathodes = [
        Output::new(p.PIN_6, Level::High),
        Output::new(p.PIN_7, Level::High),
        Output::new(p.PIN_8, Level::High),
        Output::new(p.PIN_9, Level::High),
        Output::new(p.PIN_10, Level::High),
        Output::new(p.PIN_11, Level::High),
        Output::new(p.PIN_12, Level::High),
    ];

    // Digit select lines, active low, leftmost digit first
    let selects = [
        Output::new(p.PIN_13, Level::High),
        Output::new(p.PIN_14, Level::High),
        Output::new(p.PIN_15, Level::High),
    ];

    let bus = GpioSegmentBus::new(cathodes, selects);

    // Spawn tasks
    spawner.spawn(tasks::scan_task(bus)).unwrap();
    spawner.spawn(tasks::gate_task(gate)).unwrap();
    spawner.spawn(tasks::wrap_task()).unwrap();
    spawner.spawn(tasks::controller_task()).unwrap();

    info!("All tasks spawned, chronograph ready");
}
