//! Fixed-point speed computation
//!
//! Converts a captured tick interval into a distance-per-time value,
//! entirely in integer arithmetic with round-half-up correction.

use crate::config::COUNTER_MODULUS;

/// Why a completed capture produced no displayable speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpeedError {
    /// Interval too short for a reliable reading: the projectile was
    /// faster than three digits can represent, or a spurious double
    /// trigger fired.
    IntervalTooShort,
}

impl SpeedError {
    /// Code shown on the display ("E01" for interval-too-short).
    pub const fn code(self) -> u8 {
        match self {
            SpeedError::IntervalTooShort => 1,
        }
    }
}

/// Speed from two raw counter captures and the wrap tally.
///
/// `numerator` is the precomputed gate-spacing times tick-rate constant;
/// the result is `numerator / interval` rounded half up, always within
/// 0..=999 for non-error inputs.
///
/// The `interval <= numerator / 999` guard (integer division, matching
/// the three-digit display limit) also rejects intervals that come out
/// zero or negative when a wrap straddles the second capture.
pub fn calculate_speed(
    first: u16,
    second: u16,
    wraps: u16,
    numerator: u32,
) -> Result<u16, SpeedError> {
    let interval = i64::from(second) + i64::from(wraps) * i64::from(COUNTER_MODULUS)
        - i64::from(first);

    if interval <= i64::from(numerator / 999) {
        return Err(SpeedError::IntervalTooShort);
    }

    let interval = interval as u32;
    let speed = numerator / interval;
    let remainder = numerator % interval;

    if remainder >= interval / 2 {
        Ok((speed + 1) as u16)
    } else {
        Ok(speed as u16)
    }
}
