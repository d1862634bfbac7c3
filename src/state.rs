//! Run/pause flags shown on the status display.
//!
//! [`VisibleState`] is written only by the input task and read only by the
//! display task. Each flag is an independent atomic word, so the reader may see
//! one flag updated before the other; the two status lines are independent and
//! that tearing is harmless.
//!
//! Only plain `load`/`store` are used, which the Cortex-M0+ supports natively.

use core::sync::atomic::{AtomicBool, Ordering};

/// The two pausable actuators.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Actuator {
    /// Tri-color indicator, controlled by button A.
    Led,
    /// Beeper, controlled by button B.
    Buzzer,
}

impl Actuator {
    /// Label used on the status display.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Led => "LED",
            Self::Buzzer => "BUZ",
        }
    }
}

/// Mirror of both gates, one flag per actuator. `true` means running.
pub struct VisibleState {
    led_run: AtomicBool,
    buz_run: AtomicBool,
}

/// Point-in-time copy of [`VisibleState`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StatusSnapshot {
    pub led_run: bool,
    pub buz_run: bool,
}

impl VisibleState {
    /// Both actuators running, matching freshly created gates.
    pub const fn new() -> Self {
        Self {
            led_run: AtomicBool::new(true),
            buz_run: AtomicBool::new(true),
        }
    }

    #[inline]
    const fn flag(&self, actuator: Actuator) -> &AtomicBool {
        match actuator {
            Actuator::Led => &self.led_run,
            Actuator::Buzzer => &self.buz_run,
        }
    }

    /// Whether `actuator` is shown as running.
    #[inline]
    pub fn is_running(&self, actuator: Actuator) -> bool {
        self.flag(actuator).load(Ordering::Acquire)
    }

    /// Publish the run state of `actuator`. Input task only.
    #[inline]
    pub fn set_running(&self, actuator: Actuator, running: bool) {
        self.flag(actuator).store(running, Ordering::Release);
    }

    /// Read both flags for rendering.
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            led_run: self.is_running(Actuator::Led),
            buz_run: self.is_running(Actuator::Buzzer),
        }
    }
}

impl Default for VisibleState {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSnapshot {
    /// Run state of one actuator in this snapshot.
    pub const fn is_running(&self, actuator: Actuator) -> bool {
        match actuator {
            Actuator::Led => self.led_run,
            Actuator::Buzzer => self.buz_run,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
