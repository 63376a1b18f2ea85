//! Temperature to color mapping.
//!
//! Readings are rounded up to a whole-degree tier before scaling, so every
//! reading inside `(n - 1, n]` gets the same color. Red grows from the min
//! bound to the max bound, blue shrinks over the same span, green stays off:
//!
//! ```text
//! red  = 255 * (tier - min) / (max - min)
//! blue = 255 * (max - tier) / (max - min)
//! ```
//!
//! Both channels truncate toward zero and are then clamped to `0..=255`, so a
//! reading hotter than the range is pure red and one colder is pure blue.

use embedded_graphics::pixelcolor::Rgb888;
#[allow(unused_imports)]
use micromath::F32Ext;

use crate::calibration::CalibrationRange;

/// Round a reading up to its whole-degree tier.
///
/// Non-finite readings saturate (`NaN` becomes 0); frames carrying them are
/// rejected before rendering, see [`TemperatureGrid::validate`](crate::grid::TemperatureGrid::validate).
#[inline]
pub fn temperature_tier(degrees: f32) -> i32 { degrees.ceil() as i32 }

/// Map a reading to its display color for the given range.
pub fn map_temperature(
    degrees: f32,
    range: CalibrationRange,
) -> Rgb888 {
    let tier = i64::from(temperature_tier(degrees));
    let min = i64::from(range.min());
    let max = i64::from(range.max());
    let span = i64::from(range.span());

    let red = scale_channel(tier - min, span);
    let blue = scale_channel(max - tier, span);
    Rgb888::new(red, 0, blue)
}

/// `255 * offset / span`, truncated toward zero and clamped to a channel.
#[inline]
fn scale_channel(
    offset: i64,
    span: i64,
) -> u8 {
    (255 * offset / span).clamp(0, 255) as u8
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;

    fn range(
        min: i32,
        max: i32,
    ) -> CalibrationRange {
        CalibrationRange::new(min, max).unwrap()
    }

    #[test]
    fn test_bounds_are_exact() {
        let r = range(0, 50);
        assert_eq!(map_temperature(0.0, r), Rgb888::new(0, 0, 255));
        assert_eq!(map_temperature(50.0, r), Rgb888::new(255, 0, 0));
    }

    #[test]
    fn test_bounds_exact_for_every_button_range() {
        for max in (20..=100).step_by(10) {
            let r = range(0, max);
            assert_eq!(map_temperature(0.0, r).r(), 0, "max {max}");
            assert_eq!(map_temperature(max as f32, r).r(), 255, "max {max}");
        }
    }

    #[test]
    fn test_midpoint() {
        // 255 * 25 / 50 = 127.5, truncated
        let color = map_temperature(25.0, range(0, 50));
        assert_eq!(color, Rgb888::new(127, 0, 127));
    }

    #[test]
    fn test_green_always_off() {
        let r = range(0, 50);
        for t in -20..80 {
            assert_eq!(map_temperature(t as f32, r).g(), 0);
        }
    }

    #[test]
    fn test_readings_round_up_to_tier() {
        let r = range(0, 50);
        assert_eq!(temperature_tier(24.1), 25);
        assert_eq!(temperature_tier(25.0), 25);
        assert_eq!(temperature_tier(-0.5), 0);
        assert_eq!(map_temperature(24.1, r), map_temperature(25.0, r));
        assert_ne!(map_temperature(25.01, r), map_temperature(25.0, r));
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let r = range(0, 50);
        // hotter than max: red saturates, blue bottoms out
        assert_eq!(map_temperature(75.0, r), Rgb888::new(255, 0, 0));
        assert_eq!(map_temperature(1000.0, r), Rgb888::new(255, 0, 0));
        // colder than min: the reverse
        assert_eq!(map_temperature(-12.0, r), Rgb888::new(0, 0, 255));
        assert_eq!(map_temperature(-1000.0, r), Rgb888::new(0, 0, 255));
    }

    #[test]
    fn test_monotonic_red_up_blue_down() {
        let r = range(0, 50);
        let mut prev = map_temperature(-10.0, r);
        let mut t = -10.0f32;
        while t <= 70.0 {
            let color = map_temperature(t, r);
            assert!(color.r() >= prev.r(), "red decreased at {t}");
            assert!(color.b() <= prev.b(), "blue increased at {t}");
            prev = color;
            t += 0.25;
        }
    }

    #[test]
    fn test_nonzero_min() {
        let r = range(20, 40);
        assert_eq!(map_temperature(20.0, r), Rgb888::new(0, 0, 255));
        assert_eq!(map_temperature(30.0, r), Rgb888::new(127, 0, 127));
        assert_eq!(map_temperature(40.0, r), Rgb888::new(255, 0, 0));
    }
}
