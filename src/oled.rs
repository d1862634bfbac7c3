//! SSD1306 128x64 OLED over blocking I2C, exposed as a [`StatusPanel`].

use display_interface::DisplayError;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use pause_gates::config::DISPLAY_ADDRESS;
use pause_gates::display::{StatusPanel, draw_text};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

type Driver = Ssd1306<
    I2CInterface<I2c<'static, I2C1, Blocking>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

/// Buffered OLED. Drawing only touches RAM; [`StatusPanel::commit`] sends the
/// whole framebuffer.
pub struct Oled {
    driver: Driver,
}

impl Oled {
    /// Wrap the bus and send the controller's init sequence.
    ///
    /// The board has no external VCC supply; `init` switches on the
    /// controller's internal charge pump.
    ///
    /// The panel is returned even when init fails, so the display task can
    /// keep trying (and logging) instead of the board halting.
    pub fn new(i2c: I2c<'static, I2C1, Blocking>) -> (Self, Result<(), DisplayError>) {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_ADDRESS);
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        let init = driver.init();
        (Self { driver }, init)
    }
}

impl StatusPanel for Oled {
    type Error = DisplayError;

    fn clear(&mut self) {
        self.driver.clear_buffer();
    }

    fn draw_string(&mut self, x: i32, y: i32, scale: u32, text: &str) {
        // Buffered mode clips off-screen pixels and never fails
        let _ = draw_text(&mut self.driver, x, y, scale, text);
    }

    fn commit(&mut self) -> Result<(), DisplayError> {
        self.driver.flush()
    }
}
