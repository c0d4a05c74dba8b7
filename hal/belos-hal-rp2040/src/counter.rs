//! Free-running capture counter
//!
//! The capture timebase is the RP2040's monotonic 1 MHz timer, exposed
//! through a 16-bit window so the capture machine sees a counter that
//! wraps at 2^16 exactly as a hardware input-capture timer would.

use belos_core::config::COUNTER_MODULUS;
use embassy_time::Instant;

/// Current 16-bit counter value.
pub fn count() -> u16 {
    (Instant::now().as_ticks() & 0xFFFF) as u16
}

/// Instant of the next counter wrap boundary.
///
/// The wrap task sleeps until this instant, so wrap events land exactly
/// on the 2^16-tick multiples of the timebase.
pub fn next_wrap() -> Instant {
    let modulus = u64::from(COUNTER_MODULUS);
    let ticks = Instant::now().as_ticks();
    Instant::from_ticks((ticks / modulus + 1) * modulus)
}
