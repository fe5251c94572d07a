//! OLED Display Driver
//!
//! Renders a [`ViewModel`] on the 128x64 SSD1306 panel. The panel runs in
//! the `ssd1306` crate's buffered graphics mode: [`ViewRenderer`] draws the
//! whole screen into the RAM frame and [`Display::show`] flushes it in one
//! pass once per tick.

use display_interface::DisplayError;
use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_5X8, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line as Rule, PrimitiveStyle};
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use heapless::String;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::config::{DISPLAY_HEIGHT, DISPLAY_I2C_ADDR, DISPLAY_WIDTH};
use crate::ui::view::ViewModel;

type Panel<I> = Ssd1306<I2CInterface<I>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Front-panel OLED
pub struct Display<I> {
    panel: Panel<I>,
}

impl<I: I2c> Display<I> {
    /// Wrap the display bus; nothing is sent until [`Display::init`]
    #[must_use]
    pub fn new(i2c: I) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDR);
        Self {
            panel: Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
                .into_buffered_graphics_mode(),
        }
    }

    /// Power the panel up and blank it
    ///
    /// # Errors
    ///
    /// Returns the interface error if the panel does not acknowledge.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.panel.init()?;
        self.panel.clear(BinaryColor::Off)?;
        self.panel.flush()
    }

    /// Draw `view` and push it to the panel
    ///
    /// # Errors
    ///
    /// Returns the interface error; the panel keeps the previous frame.
    pub fn show(&mut self, view: &ViewModel) -> Result<(), DisplayError> {
        self.panel.clear(BinaryColor::Off)?;
        ViewRenderer::render(&mut self.panel, view)?;
        self.panel.flush()
    }
}

/// Lays a [`ViewModel`] out on any monochrome draw target
///
/// ```text
///  title                    (A)
///  ----------------------------
///        07:05 AM
///  V:05 S:107.3
///  1:Back         2:+Hour
///  3:+Min         4:Inc:5
/// ```
pub struct ViewRenderer;

impl ViewRenderer {
    const RULE_Y: i32 = 11;
    const HEADLINE_Y: i32 = 13;
    const DETAIL_Y: i32 = 34;
    // Two rows of labels in the bottom 18 px
    const LABEL_ROWS: [i32; 2] = [DISPLAY_HEIGHT as i32 - 18, DISPLAY_HEIGHT as i32 - 9];

    /// Render every row of `view`
    ///
    /// # Errors
    ///
    /// Propagates the draw target's error.
    #[allow(clippy::cast_possible_wrap)]
    pub fn render<D>(target: &mut D, view: &ViewModel) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let small = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let large = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
        let tiny = MonoTextStyle::new(&FONT_5X8, BinaryColor::On);
        let width = DISPLAY_WIDTH as i32;

        Text::with_baseline(&view.title, Point::zero(), small, Baseline::Top).draw(target)?;
        // Indicator is right-aligned: three 6 px glyphs
        Text::with_baseline(&view.indicator, Point::new(width - 18, 0), small, Baseline::Top)
            .draw(target)?;
        Rule::new(Point::new(0, Self::RULE_Y), Point::new(width - 1, Self::RULE_Y))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(target)?;

        Text::with_baseline(&view.headline, Point::new(4, Self::HEADLINE_Y), large, Baseline::Top)
            .draw(target)?;
        Text::with_baseline(&view.detail, Point::new(0, Self::DETAIL_Y), small, Baseline::Top)
            .draw(target)?;

        for (index, label) in view.labels.iter().enumerate() {
            if label.is_empty() {
                continue;
            }
            let mut cell: String<24> = String::new();
            core::fmt::write(&mut cell, format_args!("{}:{}", index + 1, label)).ok();

            let x = if index % 2 == 0 { 0 } else { width / 2 };
            let y = Self::LABEL_ROWS[index / 2];
            Text::with_baseline(&cell, Point::new(x, y), tiny, Baseline::Top).draw(target)?;
        }

        Ok(())
    }
}
