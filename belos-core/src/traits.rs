//! Hardware abstraction traits
//!
//! The seam between core logic and board-specific implementations.

/// Output bus of a multiplexed 7-segment display.
///
/// One digit position is energized at a time. `blank` must fully
/// de-energize every position before `drive` lights the next one, so a
/// scan never ghosts segments across positions.
pub trait SegmentBus {
    /// De-energize every digit position.
    fn blank(&mut self);

    /// Output `pattern` (`0gfedcba`, active low) on the segment lines
    /// and energize the select line of `position`.
    fn drive(&mut self, position: usize, pattern: u8);
}
