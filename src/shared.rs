//! Process-wide context handed to every task at spawn time.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::gate::Gate;
use crate::state::{Actuator, VisibleState};

/// Both gates plus the flags the display observes.
///
/// Created once during bootstrap (as a `static` on the board) and never
/// destroyed. Each gate has exactly one worker and one controller.
pub struct Shared<M: RawMutex> {
    pub led_gate: Gate<M>,
    pub buz_gate: Gate<M>,
    pub state: VisibleState,
}

impl<M: RawMutex> Shared<M> {
    /// Both gates running, both flags `true`.
    pub const fn new() -> Self {
        Self {
            led_gate: Gate::new(),
            buz_gate: Gate::new(),
            state: VisibleState::new(),
        }
    }

    /// The gate that pauses `actuator`.
    pub const fn gate(&self, actuator: Actuator) -> &Gate<M> {
        match actuator {
            Actuator::Led => &self.led_gate,
            Actuator::Buzzer => &self.buz_gate,
        }
    }
}

impl<M: RawMutex> Default for Shared<M> {
    fn default() -> Self {
        Self::new()
    }
}
