//! RP2040 board layer for the Belos chronograph
//!
//! RP2040-specific implementations of the core hardware seams:
//!
//! - 16-bit wrapping capture counter view over the 1 MHz timebase
//! - GPIO segment bus for the multiplexed 7-segment display

#![no_std]

pub mod counter;
pub mod segments;
