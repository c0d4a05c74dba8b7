//! Three-digit multiplexed display state
//!
//! Holds the segment patterns currently shown and the scan position. A
//! fixed-rate tick energizes one digit position at a time; persistence
//! of vision makes the three digits appear lit simultaneously.
//!
//! Content is installed as a whole three-pattern unit and glyphs are
//! resolved at install time. Callers guard `set_*` and `scan` with the
//! same lock so a scan never emits a pattern mixing two messages.

use crate::glyphs::Glyph;
use crate::speed::SpeedError;
use crate::traits::SegmentBus;

/// Number of digit positions.
pub const DIGITS: usize = 3;

/// Display state: current patterns plus the multiplex scan position.
#[derive(Debug)]
pub struct DisplayState {
    patterns: [u8; DIGITS],
    position: usize,
}

impl DisplayState {
    /// A blank display, scanning from the leftmost digit.
    pub const fn new() -> Self {
        Self {
            patterns: [Glyph::Blank.pattern(); DIGITS],
            position: 0,
        }
    }

    /// Install three explicit glyphs, leftmost first.
    pub fn set_text(&mut self, glyphs: [Glyph; DIGITS]) {
        self.patterns = [
            glyphs[0].pattern(),
            glyphs[1].pattern(),
            glyphs[2].pattern(),
        ];
    }

    /// Install a number as three decimal digits, leading zeros included.
    ///
    /// Values above 999 are folded modulo 1000.
    pub fn set_number(&mut self, value: u16) {
        let value = value % 1_000;
        self.set_text([
            Glyph::Digit((value / 100) as u8),
            Glyph::Digit((value / 10 % 10) as u8),
            Glyph::Digit((value % 10) as u8),
        ]);
    }

    /// Install the fixed message for a measurement error ("E01").
    pub fn set_error(&mut self, err: SpeedError) {
        let code = err.code();
        self.set_text([
            Glyph::E,
            Glyph::Digit(code / 10),
            Glyph::Digit(code % 10),
        ]);
    }

    /// One multiplex tick: blank every position, output the current
    /// position's pattern, energize it, and advance.
    pub fn scan<B: SegmentBus>(&mut self, bus: &mut B) {
        bus.blank();
        bus.drive(self.position, self.patterns[self.position]);
        self.position = (self.position + 1) % DIGITS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records scans into a fixed buffer; counts blanks separately so
    /// tests can check that every drive was preceded by a blank.
    struct MockBus {
        scans: [(usize, u8); 8],
        count: usize,
        blanks: usize,
    }

    impl MockBus {
        fn new() -> Self {
            Self {
                scans: [(0, 0); 8],
                count: 0,
                blanks: 0,
            }
        }
    }

    impl SegmentBus for MockBus {
        fn blank(&mut self) {
            self.blanks += 1;
        }

        fn drive(&mut self, position: usize, pattern: u8) {
            self.scans[self.count] = (position, pattern);
            self.count += 1;
        }
    }

    #[test]
    fn test_number_decomposition_keeps_leading_zeros() {
        let mut display = DisplayState::new();
        let mut bus = MockBus::new();

        display.set_number(6);
        display.scan(&mut bus);
        display.scan(&mut bus);
        display.scan(&mut bus);

        assert_eq!(bus.scans[0], (0, Glyph::Digit(0).pattern()));
        assert_eq!(bus.scans[1], (1, Glyph::Digit(0).pattern()));
        assert_eq!(bus.scans[2], (2, Glyph::Digit(6).pattern()));
    }

    #[test]
    fn test_number_folds_above_three_digits() {
        let mut display = DisplayState::new();
        let mut bus = MockBus::new();

        display.set_number(1_234);
        display.scan(&mut bus);
        display.scan(&mut bus);
        display.scan(&mut bus);

        assert_eq!(bus.scans[0].1, Glyph::Digit(2).pattern());
        assert_eq!(bus.scans[1].1, Glyph::Digit(3).pattern());
        assert_eq!(bus.scans[2].1, Glyph::Digit(4).pattern());
    }

    #[test]
    fn test_scan_cycles_positions() {
        let mut display = DisplayState::new();
        let mut bus = MockBus::new();

        for _ in 0..7 {
            display.scan(&mut bus);
        }

        let positions: [usize; 7] = core::array::from_fn(|i| bus.scans[i].0);
        assert_eq!(positions, [0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn test_every_drive_preceded_by_blank() {
        let mut display = DisplayState::new();
        let mut bus = MockBus::new();

        display.set_text([Glyph::Dash; DIGITS]);
        for _ in 0..6 {
            display.scan(&mut bus);
        }

        assert_eq!(bus.blanks, bus.count);
    }

    #[test]
    fn test_content_swap_is_atomic_per_scan() {
        let mut display = DisplayState::new();
        let mut bus = MockBus::new();

        display.set_text([Glyph::Dash; DIGITS]);
        display.scan(&mut bus);

        // New content installed mid-frame: the remaining scans must all
        // come from the new message, never a mix
        display.set_number(100);
        display.scan(&mut bus);
        display.scan(&mut bus);

        assert_eq!(bus.scans[0], (0, Glyph::Dash.pattern()));
        assert_eq!(bus.scans[1], (1, Glyph::Digit(0).pattern()));
        assert_eq!(bus.scans[2], (2, Glyph::Digit(0).pattern()));
    }

    #[test]
    fn test_error_message() {
        let mut display = DisplayState::new();
        let mut bus = MockBus::new();

        display.set_error(SpeedError::IntervalTooShort);
        display.scan(&mut bus);
        display.scan(&mut bus);
        display.scan(&mut bus);

        assert_eq!(bus.scans[0].1, Glyph::E.pattern());
        assert_eq!(bus.scans[1].1, Glyph::Digit(0).pattern());
        assert_eq!(bus.scans[2].1, Glyph::Digit(1).pattern());
    }

    #[test]
    fn test_new_display_is_blank() {
        let mut display = DisplayState::new();
        let mut bus = MockBus::new();

        display.scan(&mut bus);
        assert_eq!(bus.scans[0], (0, Glyph::Blank.pattern()));
    }
}
