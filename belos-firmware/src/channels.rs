//! Shared state crossing task boundaries
//!
//! The capture group and the display content are each one logical
//! record, so each lives behind its own critical-section mutex. Locks
//! are held only for the handful of loads and stores an access needs;
//! the speed division always runs on a snapshot, outside any lock.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use belos_core::capture::CaptureMachine;
use belos_core::config::MAX_WRAPS;
use belos_core::display::DisplayState;

/// The capture group: phase, both timestamps, wrap tally.
pub static CAPTURE: Mutex<CriticalSectionRawMutex, RefCell<CaptureMachine>> =
    Mutex::new(RefCell::new(CaptureMachine::new(MAX_WRAPS)));

/// Display content and scan position.
pub static DISPLAY: Mutex<CriticalSectionRawMutex, RefCell<DisplayState>> =
    Mutex::new(RefCell::new(DisplayState::new()));

/// Raised by the gate and wrap tasks whenever the capture state may
/// have changed; the controller sleeps on it.
pub static MEASURE_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
