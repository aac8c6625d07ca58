//! Full-frame layout rendering.
//!
//! [`draw_frame`] turns a [`RenderModel`] into one complete 128×64 frame:
//!
//! ```text
//! ┌────▼─────────────────────────────────┐  ← page indicator (per-page x)
//! │  PC    03          007               │  ← status row, 4 fixed columns
//! │                                      │
//! │  007                                 │  ← big value (or banner)
//! │  value                               │  ← page label
//! └──────────────────────────────────────┘
//! ```
//!
//! The draw is stateless and idempotent — the same model always produces
//! the same pixels — so the caller may redraw the whole frame whenever
//! the model changes without tracking partial damage.

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_7X13_BOLD},
        MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Triangle},
    text::Text,
};

use segno::RenderModel;

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Refresh rate and layout geometry for the menu display.
///
/// All geometry lives here — there are **no** module-level layout
/// constants. [`DisplayConfig::default()`] reproduces the device's
/// original 128×64 layout.
pub struct DisplayConfig {
    /// Display refresh rate in Hz. Default: 30.
    pub refresh_hz: u32,

    // ── Layout geometry (text positions are glyph baselines) ─────────
    /// Baseline y of the status row. Default: 18.
    pub status_y: i32,
    /// Column x-offsets of the four status fields. Default: 7, 37, 67, 97.
    pub status_x: [i32; 4],
    /// Origin x of the big value text. Default: 5.
    pub big_x: i32,
    /// Baseline y of the big value text. Default: 44.
    pub big_y: i32,
    /// Origin x of the page label. Default: 7.
    pub label_x: i32,
    /// Baseline y of the page label. Default: 60.
    pub label_y: i32,
    /// Top y of the page-indicator marker. Default: 2.
    pub indicator_y: i32,
    /// Width of the indicator triangle in pixels. Default: 8.
    pub indicator_width: i32,
    /// Height of the indicator triangle in pixels. Default: 6.
    pub indicator_height: i32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            refresh_hz: 30,
            status_y: 18,
            status_x: [7, 37, 67, 97],
            big_x: 5,
            big_y: 44,
            label_x: 7,
            label_y: 60,
            indicator_y: 2,
            indicator_width: 8,
            indicator_height: 6,
        }
    }
}

impl DisplayConfig {
    /// Timer period for the configured refresh rate, in milliseconds.
    pub fn period_ms(&self) -> u64 {
        1000 / u64::from(self.refresh_hz)
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Draw one complete frame of `model` onto a cleared target.
///
/// Empty text fields (the CC number in Program Change mode, the label
/// while a banner is shown) are skipped rather than drawn blank.
pub fn draw_frame<D>(
    target: &mut D,
    model: &RenderModel,
    config: &DisplayConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    // ── Page indicator: small filled triangle pointing at the active
    //    status column ─────────────────────────────────────────────────
    let x = model.indicator_x;
    Triangle::new(
        Point::new(x, config.indicator_y),
        Point::new(x + config.indicator_width, config.indicator_y),
        Point::new(
            x + config.indicator_width / 2,
            config.indicator_y + config.indicator_height,
        ),
    )
    .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
    .draw(target)?;

    // ── Status row ───────────────────────────────────────────────────
    let status_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let fields = [
        model.status.command,
        model.status.channel.as_str(),
        model.status.cc_number.as_str(),
        model.status.value.as_str(),
    ];
    for (text, &x) in fields.iter().zip(config.status_x.iter()) {
        if !text.is_empty() {
            Text::new(text, Point::new(x, config.status_y), status_style).draw(target)?;
        }
    }

    // ── Big value / banner ───────────────────────────────────────────
    if !model.big.is_empty() {
        let big_style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
        Text::new(
            model.big.as_str(),
            Point::new(config.big_x, config.big_y),
            big_style,
        )
        .draw(target)?;
    }

    // ── Page label ───────────────────────────────────────────────────
    if !model.label.is_empty() {
        let label_style = MonoTextStyle::new(&FONT_7X13_BOLD, BinaryColor::On);
        Text::new(
            model.label,
            Point::new(config.label_x, config.label_y),
            label_style,
        )
        .draw(target)?;
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use segno::{Menu, MidiParams, Page, RenderModel};

    /// Minimal 128×64 one-bit canvas for asserting on drawn frames.
    #[derive(Clone, PartialEq, Eq)]
    struct Canvas {
        rows: [u128; 64],
    }

    impl Canvas {
        fn new() -> Self {
            Self { rows: [0; 64] }
        }

        fn lit(&self) -> u32 {
            self.rows.iter().map(|r| r.count_ones()).sum()
        }

        /// Lit pixels within rows `[y0, y1)` whose x is inside `[x0, x1)`.
        fn lit_in(&self, x0: i32, x1: i32, y0: i32, y1: i32) -> u32 {
            let mut count = 0;
            for y in y0..y1 {
                for x in x0..x1 {
                    if self.rows[y as usize] & (1u128 << x) != 0 {
                        count += 1;
                    }
                }
            }
            count
        }
    }

    impl OriginDimensions for Canvas {
        fn size(&self) -> Size {
            Size::new(128, 64)
        }
    }

    impl DrawTarget for Canvas {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(point, color) in pixels {
                if (0..128).contains(&point.x) && (0..64).contains(&point.y) {
                    let bit = 1u128 << point.x;
                    match color {
                        BinaryColor::On => self.rows[point.y as usize] |= bit,
                        BinaryColor::Off => self.rows[point.y as usize] &= !bit,
                    }
                }
            }
            Ok(())
        }
    }

    fn draw(model: &RenderModel) -> Canvas {
        let mut canvas = Canvas::new();
        draw_frame(&mut canvas, model, &DisplayConfig::default()).unwrap();
        canvas
    }

    #[test]
    fn default_config_values() {
        let c = DisplayConfig::default();
        assert_eq!(c.refresh_hz, 30);
        assert_eq!(c.status_y, 18);
        assert_eq!(c.status_x, [7, 37, 67, 97]);
        assert_eq!((c.big_x, c.big_y), (5, 44));
        assert_eq!((c.label_x, c.label_y), (7, 60));
    }

    #[test]
    fn period_for_30hz() {
        assert_eq!(DisplayConfig::default().period_ms(), 33);
    }

    #[test]
    fn period_for_60hz() {
        let c = DisplayConfig {
            refresh_hz: 60,
            ..DisplayConfig::default()
        };
        assert_eq!(c.period_ms(), 16);
    }

    #[test]
    fn frame_lights_pixels() {
        let model = RenderModel::build(Page::Channel, &MidiParams::default());
        assert!(draw(&model).lit() > 0);
    }

    #[test]
    fn drawing_is_idempotent() {
        let model = RenderModel::build(Page::CommandValue, &MidiParams::default());
        let once = draw(&model);

        let mut twice = Canvas::new();
        draw_frame(&mut twice, &model, &DisplayConfig::default()).unwrap();
        draw_frame(&mut twice, &model, &DisplayConfig::default()).unwrap();
        assert!(once == twice);
    }

    #[test]
    fn indicator_tracks_the_active_page() {
        let params = MidiParams::default();
        for page in [
            Page::CommandType,
            Page::Channel,
            Page::CcNumber,
            Page::CommandValue,
        ] {
            let model = RenderModel::build(page, &params);
            let canvas = draw(&model);

            // The top band holds only the indicator; it must sit inside
            // the active page's slot and nowhere else.
            let x = model.indicator_x;
            let band = canvas.lit_in(0, 128, 0, 9);
            let slot = canvas.lit_in(x, x + 9, 0, 9);
            assert!(slot > 0, "no indicator drawn for {:?}", page);
            assert_eq!(band, slot, "stray top-band pixels for {:?}", page);
        }
    }

    #[test]
    fn banner_frame_has_no_label_band() {
        let menu = Menu::new(); // READY banner armed
        let canvas = draw(&menu.frame());
        assert_eq!(canvas.lit_in(0, 128, 52, 64), 0);
    }

    #[test]
    fn normal_frame_draws_the_label_band() {
        let model = RenderModel::build(Page::CommandValue, &MidiParams::default());
        let canvas = draw(&model);
        assert!(canvas.lit_in(0, 128, 50, 64) > 0);
    }
}
