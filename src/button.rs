//! Falling-edge detection for the pushbuttons.
//!
//! Buttons are sampled at a fixed period (see [`INPUT_POLL_MS`]), and that
//! period is the whole debounce: contact bounce that settles between two
//! samples is never seen. Bounce longer than one period may register a second
//! press.
//!
//! [`INPUT_POLL_MS`]: crate::config::INPUT_POLL_MS

/// Button level at the previous sample.
pub struct ButtonState {
    was_pressed: bool,
}

impl ButtonState {
    /// Create a new button state (released, i.e. pulled high).
    pub const fn new() -> Self {
        Self { was_pressed: false }
    }

    /// Returns true only on the falling edge (button just pressed).
    ///
    /// Buttons are active-low, so `is_low` means pressed. Holding the button
    /// does not retrigger.
    pub fn just_pressed(&mut self, is_low: bool) -> bool {
        let edge = is_low && !self.was_pressed;
        self.was_pressed = is_low;
        edge
    }
}

impl Default for ButtonState {
    fn default() -> Self {
        Self::new()
    }
}
