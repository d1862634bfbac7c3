//! Status display: two text lines mirroring the run flags.
//!
//! ```text
//! LED : RUN
//! BUZ : PAUSE
//! ```
//!
//! The panel is driven through [`StatusPanel`], a scoped
//! `clear → draw_string* → commit` sequence. Commit failures (e.g. an I2C NACK
//! from an unplugged panel) never reach the caller's control flow: the display
//! task logs the change of link health and keeps going, so a dead display
//! cannot stall the actuators.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::{FONT_6X10, FONT_10X20};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal_async::delay::DelayNs;
use heapless::String;

use crate::config::{BUZ_LINE_Y, DISPLAY_PERIOD_MS, LED_LINE_Y, STATUS_SCALE, STATUS_X};
use crate::state::{Actuator, StatusSnapshot, VisibleState};

/// Longest status line is `"LED : PAUSE"`.
pub const LINE_LEN: usize = 16;

/// Text-oriented handle to a monochrome panel with an off-screen framebuffer.
pub trait StatusPanel {
    type Error;

    /// Blank the framebuffer.
    fn clear(&mut self);

    /// Draw `text` with its top-left corner at (`x`, `y`). `scale` is an
    /// integer size multiplier; the font itself is fixed.
    fn draw_string(&mut self, x: i32, y: i32, scale: u32, text: &str);

    /// Push the framebuffer to the device.
    fn commit(&mut self) -> Result<(), Self::Error>;
}

// =============================================================================
// Text Rendering
// =============================================================================

/// Format the status line for one actuator.
pub fn status_line(actuator: Actuator, running: bool) -> String<LINE_LEN> {
    let mut line = String::new();
    let word = if running { "RUN" } else { "PAUSE" };
    // Cannot overflow: longest line is 11 bytes
    let _ = write!(line, "{} : {}", actuator.label(), word);
    line
}

/// Lay out `text` with its top-left corner at (`x`, `y`).
///
/// Scale 1 uses the 6x10 font, anything larger the 10x20 font.
pub fn status_text(x: i32, y: i32, scale: u32, text: &str) -> Text<'_, MonoTextStyle<'static, BinaryColor>> {
    let font = if scale >= 2 { &FONT_10X20 } else { &FONT_6X10 };
    let style = MonoTextStyle::new(font, BinaryColor::On);
    Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
}

/// Draw text into any monochrome [`DrawTarget`].
pub fn draw_text<D>(target: &mut D, x: i32, y: i32, scale: u32, text: &str) -> Result<Point, D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    status_text(x, y, scale, text).draw(target)
}

/// Paint one complete frame for `snapshot` and commit it.
pub fn render_status<P: StatusPanel>(panel: &mut P, snapshot: StatusSnapshot) -> Result<(), P::Error> {
    panel.clear();
    for (actuator, y) in [(Actuator::Led, LED_LINE_Y), (Actuator::Buzzer, BUZ_LINE_Y)] {
        let line = status_line(actuator, snapshot.is_running(actuator));
        panel.draw_string(STATUS_X, y, STATUS_SCALE, &line);
    }
    panel.commit()
}

// =============================================================================
// Link Health
// =============================================================================

/// Change in commit outcome between two frames.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LinkChange {
    Lost,
    Restored,
}

/// Edge detector over commit results, so failures are logged once rather than
/// every frame.
pub struct LinkMonitor {
    healthy: bool,
}

impl LinkMonitor {
    pub const fn new() -> Self {
        Self { healthy: true }
    }

    pub fn observe<E>(&mut self, result: &Result<(), E>) -> Option<LinkChange> {
        let healthy = result.is_ok();
        let change = match (self.healthy, healthy) {
            (true, false) => Some(LinkChange::Lost),
            (false, true) => Some(LinkChange::Restored),
            _ => None,
        };
        self.healthy = healthy;
        change
    }
}

impl Default for LinkMonitor {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Display Task
// =============================================================================

/// Display task body: render the current flags every [`DISPLAY_PERIOD_MS`].
pub async fn display_task<P, D>(state: &VisibleState, mut panel: P, mut delay: D) -> !
where
    P: StatusPanel,
    D: DelayNs,
{
    info!("Display task started");
    let mut link = LinkMonitor::new();

    loop {
        let result = render_status(&mut panel, state.snapshot());
        match link.observe(&result) {
            Some(LinkChange::Lost) => warn!("Display commit failed, continuing without display"),
            Some(LinkChange::Restored) => info!("Display responding again"),
            None => {}
        }

        delay.delay_ms(DISPLAY_PERIOD_MS).await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
