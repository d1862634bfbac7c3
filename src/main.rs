//! Pausable actuator board firmware for Raspberry Pi Pico (RP2040)
//!
//! Cycles a tri-color indicator, beeps once a second and shows both run
//! states on an SSD1306 OLED.
//!
//! # Button Controls
//!
//! - **A** (GP5): Pause / resume the indicator
//! - **B** (GP6): Pause / resume the beeper
//!
//! # Scheduling
//!
//! Task priorities map onto three executors:
//! - Input: interrupt executor on `SWI_IRQ_1` (highest)
//! - Indicator and beeper: interrupt executor on `SWI_IRQ_0`
//! - Display: thread-mode executor (lowest, sleeps in WFE when idle)

#![no_std]
#![no_main]

// Modules only used in the binary (not testable on host)
mod oled;

use defmt::{info, warn};
use embassy_executor::{Executor, InterruptExecutor};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Delay;
use pause_gates::Shared;
use pause_gates::buzzer::buzzer_task;
use pause_gates::config::I2C_FREQUENCY_HZ;
use pause_gates::display::{display_task, render_status};
use pause_gates::input::input_task;
use pause_gates::led::{NUM_COLORS, led_task};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::oled::Oled;

// =============================================================================
// Shared State and Executors
// =============================================================================

/// Both gates and the run flags. Const-initialized, so nothing can observe
/// them before they exist.
static SHARED: Shared<CriticalSectionRawMutex> = Shared::new();

static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_MED: InterruptExecutor = InterruptExecutor::new();
static EXECUTOR_LOW: StaticCell<Executor> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    unsafe { EXECUTOR_HIGH.on_interrupt() }
}

#[interrupt]
unsafe fn SWI_IRQ_0() {
    unsafe { EXECUTOR_MED.on_interrupt() }
}

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pause-gates"),
    embassy_rp::binary_info::rp_program_description!(c"Pausable RGB indicator, beeper and OLED status"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

// =============================================================================
// Tasks
// =============================================================================

#[embassy_executor::task]
async fn led(leds: [Output<'static>; NUM_COLORS]) -> ! {
    led_task(&SHARED.led_gate, leds, Delay).await
}

#[embassy_executor::task]
async fn buzzer(beeper: Output<'static>) -> ! {
    buzzer_task(&SHARED.buz_gate, beeper, Delay).await
}

#[embassy_executor::task]
async fn input(btn_a: Input<'static>, btn_b: Input<'static>) -> ! {
    input_task(&SHARED, btn_a, btn_b, Delay).await
}

#[embassy_executor::task]
async fn display(panel: Oled) -> ! {
    display_task(&SHARED.state, panel, Delay).await
}

// =============================================================================
// Bootstrap
// =============================================================================

#[cortex_m_rt::entry]
fn main() -> ! {
    info!("Pause gates starting...");
    let p = embassy_rp::init(Default::default());

    // Indicator and beeper, all off until their tasks run
    let leds = [
        Output::new(p.PIN_11, Level::Low), // red
        Output::new(p.PIN_12, Level::Low), // green
        Output::new(p.PIN_13, Level::Low), // blue
    ];
    let beeper = Output::new(p.PIN_21, Level::Low);

    // Buttons (active-low with internal pull-up)
    let btn_a = Input::new(p.PIN_5, Pull::Up);
    let btn_b = Input::new(p.PIN_6, Pull::Up);
    info!("GPIO configured");

    // OLED on I2C1: SCL GP15, SDA GP14
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    i2c_config.sda_pullup = true;
    i2c_config.scl_pullup = true;
    let bus = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);

    let (mut panel, init) = Oled::new(bus);
    match init {
        Ok(()) => info!("Display initialized"),
        Err(_) => warn!("Display init failed, continuing without display"),
    }

    // First frame before any task runs
    if render_status(&mut panel, SHARED.state.snapshot()).is_err() {
        warn!("Initial display frame failed");
    }

    interrupt::SWI_IRQ_1.set_priority(Priority::P1);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner.spawn(input(btn_a, btn_b)).unwrap();
    info!("Input task spawned");

    interrupt::SWI_IRQ_0.set_priority(Priority::P2);
    let spawner = EXECUTOR_MED.start(interrupt::SWI_IRQ_0);
    spawner.spawn(led(leds)).unwrap();
    spawner.spawn(buzzer(beeper)).unwrap();
    info!("Indicator and beeper tasks spawned");

    let executor = EXECUTOR_LOW.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(display(panel)).unwrap();
        info!("Display task spawned");
    })
}
