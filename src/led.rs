//! Tri-color indicator task.
//!
//! Cycles red → green → blue, one color per [`LED_ON_MS`], with a gate
//! checkpoint before each color. Pausing between colors leaves all three lines
//! low; a pause that lands while a color is lit takes effect once that color's
//! period ends.

use core::convert::Infallible;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::digital::{OutputPin, PinState};
use embedded_hal_async::delay::DelayNs;

use crate::config::LED_ON_MS;
use crate::gate::Gate;

/// Number of indicator colors.
pub const NUM_COLORS: usize = 3;

/// Index of the color lit next. Wraps red → green → blue → red.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct LedCursor(usize);

impl LedCursor {
    /// Start at red.
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Move to the next color.
    #[inline]
    pub const fn advance(self) -> Self {
        Self((self.0 + 1) % NUM_COLORS)
    }
}

/// Drive an active-high output.
pub(crate) fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, on: bool) {
    let Ok(()) = pin.set_state(PinState::from(on));
}

/// LED task body. `leds` is ordered red, green, blue.
pub async fn led_task<M, P, D>(gate: &Gate<M>, mut leds: [P; NUM_COLORS], mut delay: D) -> !
where
    M: RawMutex,
    P: OutputPin<Error = Infallible>,
    D: DelayNs,
{
    info!("LED task started");
    let mut cursor = LedCursor::new();

    loop {
        gate.checkpoint().await;

        let led = &mut leds[cursor.index()];
        drive(led, true);
        delay.delay_ms(LED_ON_MS).await;
        drive(led, false);

        cursor = cursor.advance();
    }
}
