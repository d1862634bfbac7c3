//! Pause-gate library - testable modules for the pausable actuator board.
//!
//! Three periodic actuators (tri-color indicator, beeper, status display) run
//! as independent tasks. Two pushbuttons pause and resume the indicator and the
//! beeper through binary tokens ("gates"): to pause, the input task takes the
//! token and keeps it; to resume, it gives it back. Each actuator passes
//! through a checkpoint on its gate once per period, so it stalls there while
//! paused without polling.
//!
//! This library contains all of that logic, generic over `embedded-hal` and
//! `embedded-hal-async` traits. The binary (`main.rs`) binds it to the RP2040
//! peripherals and the embassy executors.
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework and the virtual-time simulator (`sim` module) while the actual
//! firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

// Logging macros; must come first so later modules see them
mod fmt;

// Configuration
pub mod config;

// Synchronization and shared state
pub mod gate;
pub mod shared;
pub mod state;

// Tasks
pub mod button;
pub mod buzzer;
pub mod display;
pub mod input;
pub mod led;


pub use gate::{Gate, GatePermit};
pub use shared::Shared;
pub use state::{Actuator, StatusSnapshot, VisibleState};
