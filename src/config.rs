//! Board and timing configuration.
//!
//! Everything here is a compile-time constant: the firmware has no runtime
//! configuration, no filesystem and no persisted state.
//!
//! # Pin Map (BitDogLab-style Pico carrier)
//!
//! | Function        | GPIO | Direction                  |
//! |-----------------|------|----------------------------|
//! | Indicator red   | 11   | push-pull out, idle low    |
//! | Indicator green | 12   | push-pull out, idle low    |
//! | Indicator blue  | 13   | push-pull out, idle low    |
//! | Beeper          | 21   | push-pull out, idle low    |
//! | Button A (LED)  | 5    | input, pull-up, active-low |
//! | Button B (BUZ)  | 6    | input, pull-up, active-low |
//! | I2C1 SDA        | 14   | I2C, pull-up               |
//! | I2C1 SCL        | 15   | I2C, pull-up               |
//!
//! The pins themselves are bound as `embassy_rp` peripherals in the binary's
//! `main`, which is the only place they are named.

// =============================================================================
// Task Timing
// =============================================================================

/// Time each indicator color stays lit.
pub const LED_ON_MS: u32 = 500;

/// Beeper active phase at the start of each period.
pub const BUZ_ON_MS: u32 = 100;

/// Beeper silent phase; `BUZ_ON_MS + BUZ_OFF_MS` is the beeper period.
pub const BUZ_OFF_MS: u32 = 900;

/// Button sampling period. Doubles as the debounce window (20 Hz).
pub const INPUT_POLL_MS: u32 = 50;

/// Status display refresh period (2 Hz).
pub const DISPLAY_PERIOD_MS: u32 = 500;

// =============================================================================
// Task Priorities
// =============================================================================

/// Scheduling priority of an application task. Higher runs first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Priority(pub u8);

pub const INPUT_PRIORITY: Priority = Priority(3);
pub const LED_PRIORITY: Priority = Priority(1);
pub const BUZ_PRIORITY: Priority = Priority(1);
pub const DISPLAY_PRIORITY: Priority = Priority(0);

// =============================================================================
// Task Memory Budgets
// =============================================================================
//
// Embassy tasks are statically allocated futures rather than threads with
// their own stacks. The budgets below are in 32-bit words and bound the size
// of each task's future state.

pub const LED_STACK_WORDS: usize = 256;
pub const BUZ_STACK_WORDS: usize = 256;
pub const INPUT_STACK_WORDS: usize = 256;
pub const DISPLAY_STACK_WORDS: usize = 512;

// =============================================================================
// Display (SSD1306 over I2C1)
// =============================================================================

/// I2C bus clock.
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// 7-bit I2C address of the display controller.
pub const DISPLAY_ADDRESS: u8 = 0x3C;

pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

/// Left edge of both status lines.
pub const STATUS_X: i32 = 0;

/// Top edge of the LED status line.
pub const LED_LINE_Y: i32 = 22;

/// Top edge of the beeper status line. The 10x20 font is 20 rows tall, so
/// at 40 it would overlap the LED line; 42 is the first row below it.
pub const BUZ_LINE_Y: i32 = 42;

/// Integer pixel multiplier for the status lines.
pub const STATUS_SCALE: u32 = 2;
