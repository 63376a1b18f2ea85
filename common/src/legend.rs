//! Calibration legend on the right edge of the screen.
//!
//! ```text
//!  x=265      x=290..310
//!  "50"  ┌──────┐ y=15     band 0: max_temp
//!        ├──────┤
//!        │ .... │          bands evenly spaced down to 0
//!        ├──────┤
//!  "0"   └──────┘ y=215    band 9: 0
//! ```
//!
//! The legend is only repainted when the calibration range changes, never per
//! frame.

use core::fmt::Write;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::String;
use profont::PROFONT_9_POINT;

use crate::calibration::CalibrationRange;
use crate::colors::{BLACK, WHITE};
use crate::color_map::map_temperature;
use crate::config::{
    LEGEND_BAND_HEIGHT,
    LEGEND_BANDS,
    LEGEND_BAR_WIDTH,
    LEGEND_BAR_X,
    LEGEND_BOTTOM_TEMP,
    LEGEND_MAX_LABEL_POS,
    LEGEND_MIN_LABEL_POS,
    LEGEND_STRIP,
    LEGEND_TOP_Y,
};
use crate::stamp::{Rotation, stamp_text};

const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_9_POINT, WHITE);

/// Temperature shown by legend band `index`, counting from the top.
///
/// Bands are evenly spaced from `range.max()` down to
/// [`LEGEND_BOTTOM_TEMP`], both ends included.
pub fn band_temperature(
    range: CalibrationRange,
    index: usize,
) -> f32 {
    let top = range.max() as f32;
    let step = (top - LEGEND_BOTTOM_TEMP) / (LEGEND_BANDS - 1) as f32;
    if index + 1 >= LEGEND_BANDS {
        return LEGEND_BOTTOM_TEMP;
    }
    top - step * index as f32
}

/// Canvas area of legend band `index`.
pub const fn band_area(index: usize) -> Rectangle {
    Rectangle::new(
        Point::new(LEGEND_BAR_X, LEGEND_TOP_Y + (index as u32 * LEGEND_BAND_HEIGHT) as i32),
        Size::new(LEGEND_BAR_WIDTH, LEGEND_BAND_HEIGHT),
    )
}

/// Clear the legend strip and repaint bar and labels for `range`.
pub fn render_legend<D>(
    range: CalibrationRange,
    target: &mut D,
) where
    D: DrawTarget<Color = Rgb565>,
{
    target.fill_solid(&LEGEND_STRIP, BLACK).ok();

    for index in 0..LEGEND_BANDS {
        let color = map_temperature(band_temperature(range, index), range);
        target.fill_solid(&band_area(index), color.into()).ok();
    }

    let mut label: String<12> = String::new();
    let _ = write!(label, "{}", range.max());
    stamp_text(target, &label, LEGEND_MAX_LABEL_POS, Rotation::Deg0, LABEL_STYLE);

    label.clear();
    let _ = write!(label, "{}", range.min());
    stamp_text(target, &label, LEGEND_MIN_LABEL_POS, Rotation::Deg0, LABEL_STYLE);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;
    use crate::canvas::Screen;

    fn at(
        canvas: &Screen,
        p: Point,
    ) -> Rgb565 {
        canvas.pixel(p.x as usize, p.y as usize).unwrap()
    }

    #[test]
    fn test_band_temperatures_span_max_to_zero() {
        let range = CalibrationRange::default();
        assert_eq!(band_temperature(range, 0), 50.0);
        assert_eq!(band_temperature(range, LEGEND_BANDS - 1), 0.0);
        assert!((band_temperature(range, 1) - 44.444).abs() < 1e-3);

        for i in 1..LEGEND_BANDS {
            assert!(band_temperature(range, i) < band_temperature(range, i - 1));
        }
    }

    #[test]
    fn test_bands_stack_without_gaps() {
        for i in 1..LEGEND_BANDS {
            let above = band_area(i - 1);
            let below = band_area(i);
            assert_eq!(above.top_left.y + above.size.height as i32, below.top_left.y);
        }
        assert_eq!(band_area(0).top_left, Point::new(290, 15));
    }

    #[test]
    fn test_bar_top_is_hot_and_bottom_is_cold() {
        let range = CalibrationRange::default();
        let mut canvas = Screen::new();
        render_legend(range, &mut canvas);

        assert_eq!(at(&canvas, band_area(0).center()), Rgb565::RED);
        assert_eq!(at(&canvas, band_area(LEGEND_BANDS - 1).center()), Rgb565::BLUE);
        for i in 0..LEGEND_BANDS {
            let expected: Rgb565 = map_temperature(band_temperature(range, i), range).into();
            assert_eq!(at(&canvas, band_area(i).center()), expected, "band {i}");
        }
    }

    #[test]
    fn test_legend_clears_stale_pixels() {
        let mut canvas = Screen::new();
        canvas.fill_solid(&LEGEND_STRIP, Rgb565::GREEN).ok();
        render_legend(CalibrationRange::default(), &mut canvas);

        assert!(canvas.pixels().all(|p| p != Rgb565::GREEN));
    }

    #[test]
    fn test_legend_only_touches_its_strip() {
        let mut canvas = Screen::new();
        canvas.clear(Rgb565::GREEN).ok();
        render_legend(CalibrationRange::default(), &mut canvas);

        for (y, row) in canvas.rows().enumerate() {
            for (x, p) in row.iter().enumerate() {
                let inside = LEGEND_STRIP.contains(Point::new(x as i32, y as i32));
                assert_eq!(*p != Rgb565::GREEN, inside, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_labels_are_drawn() {
        let mut canvas = Screen::new();
        render_legend(CalibrationRange::default(), &mut canvas);

        let label_box = |pos: Point| Rectangle::new(pos, Size::new(LEGEND_BAR_X as u32 - pos.x as u32, 12));
        let white_in = |area: Rectangle| area.points().filter(|p| at(&canvas, *p) == WHITE).count();
        assert!(white_in(label_box(LEGEND_MAX_LABEL_POS)) > 0);
        assert!(white_in(label_box(LEGEND_MIN_LABEL_POS)) > 0);
    }

    #[test]
    fn test_redraw_after_range_change_differs() {
        let mut range = CalibrationRange::default();
        let mut before = Screen::new();
        render_legend(range, &mut before);

        range.raise_max();
        let mut after = before.clone();
        render_legend(range, &mut after);
        assert_ne!(before, after);

        // band 0 is always full red, band 9 always full blue
        assert_eq!(at(&after, band_area(0).center()), Rgb565::RED);
        assert_eq!(at(&after, band_area(LEGEND_BANDS - 1).center()), Rgb565::BLUE);
    }
}
