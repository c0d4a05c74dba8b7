//! GPIO segment bus
//!
//! Drives the three-digit 7-segment display directly from GPIO: seven
//! shared cathode lines (`0gfedcba`, active low) and one active-low
//! select line per digit position.

use belos_core::display::DIGITS;
use belos_core::traits::SegmentBus;
use embassy_rp::gpio::Output;

/// Number of segment cathode lines (a through g).
pub const SEGMENT_LINES: usize = 7;

/// The display bus: segment cathode outputs plus digit-select outputs.
pub struct GpioSegmentBus<'d> {
    cathodes: [Output<'d>; SEGMENT_LINES],
    selects: [Output<'d>; DIGITS],
}

impl<'d> GpioSegmentBus<'d> {
    /// Build the bus. All lines should be constructed high (everything
    /// de-energized) so no digit flashes before the first scan.
    pub fn new(cathodes: [Output<'d>; SEGMENT_LINES], selects: [Output<'d>; DIGITS]) -> Self {
        Self { cathodes, selects }
    }
}

impl SegmentBus for GpioSegmentBus<'_> {
    fn blank(&mut self) {
        for select in &mut self.selects {
            select.set_high();
        }
    }

    fn drive(&mut self, position: usize, pattern: u8) {
        for (bit, cathode) in self.cathodes.iter_mut().enumerate() {
            if pattern & (1 << bit) != 0 {
                cathode.set_high();
            } else {
                cathode.set_low();
            }
        }
        if let Some(select) = self.selects.get_mut(position) {
            select.set_low();
        }
    }
}
