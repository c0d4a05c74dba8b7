//! Compile-time instrument constants
//!
//! Everything here is fixed at build time from the physical gate spacing
//! and the capture timebase. There is no runtime configuration and no
//! persistence; recalibrating the instrument means rebuilding it.

/// Distance between the two light gates, in decimeters.
pub const GATE_SPACING_DM: u32 = 1;

/// Capture timebase rate in ticks per second.
///
/// The RP2040 board layer exposes the 1 MHz monotonic timer as the
/// free-running capture counter, so one tick is one microsecond.
pub const TICK_HZ: u32 = 1_000_000;

/// Numerator of the speed division: gate spacing times tick rate.
///
/// `speed [dm/s] = SPEED_NUMERATOR / interval [ticks]`
pub const SPEED_NUMERATOR: u32 = GATE_SPACING_DM * TICK_HZ;

/// The capture counter wraps at this modulus (16-bit counter).
pub const COUNTER_MODULUS: u32 = 1 << 16;

/// Counter wraps tolerated while waiting for the second gate before the
/// measurement is abandoned as too slow.
///
/// One wrap more than the slowest displayable speed needs, so anything
/// slower than 1 dm/s (or a stuck gate) aborts rather than producing a
/// nonsense reading.
pub const MAX_WRAPS: u16 = (SPEED_NUMERATOR / COUNTER_MODULUS + 1) as u16;

/// Per-digit multiplex scan rate in Hz.
///
/// Each digit is lit one third of the time, so this gives an ~83 Hz
/// full-frame rate, comfortably above flicker fusion.
pub const SCAN_HZ: u64 = 250;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_wraps_covers_slowest_displayable_speed() {
        // A 1 dm/s shot takes SPEED_NUMERATOR ticks between gates; the
        // wrap budget must not abort it.
        let slowest_interval = SPEED_NUMERATOR;
        let wraps_needed = slowest_interval / COUNTER_MODULUS;
        assert!(u32::from(MAX_WRAPS) > wraps_needed);
    }
}
