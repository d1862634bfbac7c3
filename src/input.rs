//! Button sampling and gate control.
//!
//! The input task is the only writer of the gate tokens and of
//! [`VisibleState`](crate::state::VisibleState). Every [`INPUT_POLL_MS`] it
//! samples both buttons and, on a falling edge, flips the matching actuator:
//!
//! - running → try to take the gate's token and keep it (pause)
//! - paused → give the token back (resume)
//!
//! The two buttons are handled one after the other within a sample; the pair
//! is not transactional.
//!
//! # Busy gates
//!
//! The worker holds its token for an instant inside every checkpoint. A pause
//! press landing in that instant cannot take the token immediately, so the
//! controller waits for it for at most one poll period. If it still cannot get
//! it, the flag stays `true` and the press is dropped with a warning, which
//! keeps the flag and the gate in agreement.

use core::convert::Infallible;

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal::digital::InputPin;
use embedded_hal_async::delay::DelayNs;

use crate::button::ButtonState;
use crate::config::INPUT_POLL_MS;
use crate::shared::Shared;
use crate::state::Actuator;

/// What one sample changed.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct InputResult {
    /// New LED run state if button A produced an edge.
    pub led: Option<bool>,
    /// New beeper run state if button B produced an edge.
    pub buzzer: Option<bool>,
}

impl InputResult {
    /// True if neither button produced an edge.
    pub const fn is_idle(&self) -> bool {
        self.led.is_none() && self.buzzer.is_none()
    }
}

/// Controller side of both gates plus the buttons' edge state.
pub struct Controller<'a, M: RawMutex> {
    shared: &'a Shared<M>,
    btn_a: ButtonState,
    btn_b: ButtonState,
}

impl<'a, M: RawMutex> Controller<'a, M> {
    /// Both buttons start released.
    pub const fn new(shared: &'a Shared<M>) -> Self {
        Self {
            shared,
            btn_a: ButtonState::new(),
            btn_b: ButtonState::new(),
        }
    }

    /// Process one sample of both buttons (`true` = pressed, i.e. pin low).
    ///
    /// `delay` bounds the wait for a busy gate.
    pub async fn process_buttons<D: DelayNs>(
        &mut self,
        btn_a_pressed: bool,
        btn_b_pressed: bool,
        delay: &mut D,
    ) -> InputResult {
        let mut result = InputResult::default();

        // A button: LED
        if self.btn_a.just_pressed(btn_a_pressed) {
            result.led = Some(self.toggle(Actuator::Led, delay).await);
        }

        // B button: beeper
        if self.btn_b.just_pressed(btn_b_pressed) {
            result.buzzer = Some(self.toggle(Actuator::Buzzer, delay).await);
        }

        result
    }

    /// Flip one actuator and return its new run state.
    async fn toggle<D: DelayNs>(&self, actuator: Actuator, delay: &mut D) -> bool {
        let state = &self.shared.state;

        if !state.is_running(actuator) {
            self.shared.gate(actuator).release();
            state.set_running(actuator, true);
            info!("{} resumed", actuator.label());
            return true;
        }

        if self.pause(actuator, delay).await {
            state.set_running(actuator, false);
            info!("{} paused", actuator.label());
            false
        } else {
            warn!("{} gate stayed busy, press ignored", actuator.label());
            true
        }
    }

    /// Take the actuator's token and keep it. Returns false on timeout.
    async fn pause<D: DelayNs>(&self, actuator: Actuator, delay: &mut D) -> bool {
        let gate = self.shared.gate(actuator);

        if let Some(permit) = gate.try_acquire() {
            permit.retain();
            return true;
        }

        debug!("{} gate busy, waiting", actuator.label());
        match select(gate.acquire_blocking(), delay.delay_ms(INPUT_POLL_MS)).await {
            Either::First(permit) => {
                permit.retain();
                true
            }
            Either::Second(()) => false,
        }
    }
}

/// Input task body: sample, toggle, sleep, forever.
pub async fn input_task<M, P, D>(shared: &Shared<M>, mut btn_a: P, mut btn_b: P, mut delay: D) -> !
where
    M: RawMutex,
    P: InputPin<Error = Infallible>,
    D: DelayNs,
{
    info!("Input task started");
    let mut controller = Controller::new(shared);

    loop {
        let Ok(btn_a_pressed) = btn_a.is_low();
        let Ok(btn_b_pressed) = btn_b.is_low();

        let result = controller
            .process_buttons(btn_a_pressed, btn_b_pressed, &mut delay)
            .await;
        if !result.is_idle() {
            trace!("input: led={} buz={}", result.led, result.buzzer);
        }

        delay.delay_ms(INPUT_POLL_MS).await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
