//! Beeper task: a 100 ms beep at the start of every second.
//!
//! The gate checkpoint sits at the start of each period, so a paused beeper is
//! silent. A pause during the beep lets the beep finish first.

use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::{BUZ_OFF_MS, BUZ_ON_MS};
use crate::gate::Gate;
use crate::led::drive;

/// Beeper task body.
pub async fn buzzer_task<M, P, D>(gate: &Gate<M>, mut beeper: P, mut delay: D) -> !
where
    M: RawMutex,
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    info!("Beeper task started");

    loop {
        gate.checkpoint().await;

        drive(&mut beeper, true);
        delay.delay_ms(BUZ_ON_MS).await;
        drive(&mut beeper, false);
        delay.delay_ms(BUZ_OFF_MS).await;
    }
}
