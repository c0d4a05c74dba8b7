//! Board-agnostic core logic for the Belos chronograph
//!
//! This crate contains all measurement and display logic that does not
//! depend on specific hardware implementations:
//!
//! - Dual-event capture state machine with counter wrap tracking
//! - Fixed-point speed computation
//! - Three-digit multiplexed display state
//! - 7-segment glyph encoding table
//! - Compile-time instrument constants

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod capture;
pub mod config;
pub mod display;
pub mod glyphs;
pub mod speed;
pub mod traits;
