//! Display, sensor and calibration configuration constants.
//!
//! Layout positions are computed at compile time as `const` so the render path
//! never recalculates them. The screen is a 320x240 ST7789 panel; the sensor is
//! a 24x32 MLX90640-class thermopile array.

use core::time::Duration;

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Sensor Configuration
// =============================================================================

/// Sensor rows. Rows are laid out along the horizontal screen axis.
pub const SENSOR_ROWS: usize = 24;

/// Sensor columns. Columns are laid out along the vertical screen axis.
pub const SENSOR_COLS: usize = 32;

/// Sensor refresh rate, fixed once at startup.
pub const SENSOR_REFRESH_HZ: u32 = 16;

/// Edge length of one upscaled block in pixels.
pub const CELL_SIZE: u32 = 10;

// =============================================================================
// Calibration Configuration
// =============================================================================

/// Lower bound of the color scale at startup.
pub const DEFAULT_MIN_TEMP: i32 = 0;

/// Upper bound of the color scale at startup.
pub const DEFAULT_MAX_TEMP: i32 = 50;

/// The max bound cannot be raised past this value.
pub const MAX_TEMP_CEILING: i32 = 100;

/// The max bound cannot be lowered past this value.
pub const MAX_TEMP_FLOOR: i32 = 20;

/// Amount one button press moves the max bound.
pub const MAX_TEMP_STEP: i32 = 10;

// =============================================================================
// Legend Layout
// =============================================================================

/// Number of color bands in the legend bar.
pub const LEGEND_BANDS: usize = 10;

/// Height of one legend band.
pub const LEGEND_BAND_HEIGHT: u32 = 20;

/// Left edge of the legend bar.
pub const LEGEND_BAR_X: i32 = 290;

/// Width of the legend bar.
pub const LEGEND_BAR_WIDTH: u32 = 20;

/// Top edge of the first legend band.
pub const LEGEND_TOP_Y: i32 = 15;

/// Left edge of the min/max labels.
pub const LEGEND_LABEL_X: i32 = 265;

/// Temperature of the lowest legend band.
pub const LEGEND_BOTTOM_TEMP: f32 = 0.0;

/// Reserved strip cleared before the legend is repainted.
pub const LEGEND_STRIP: Rectangle = Rectangle::new(Point::new(262, 0), Size::new(SCREEN_WIDTH - 262, SCREEN_HEIGHT));

/// Top-left of the max label.
pub const LEGEND_MAX_LABEL_POS: Point = Point::new(LEGEND_LABEL_X, LEGEND_TOP_Y);

/// Top-left of the min label, half a band above the bar's bottom edge.
pub const LEGEND_MIN_LABEL_POS: Point = Point::new(
    LEGEND_LABEL_X,
    LEGEND_TOP_Y + (LEGEND_BANDS as i32 * LEGEND_BAND_HEIGHT as i32) - (LEGEND_BAND_HEIGHT as i32 / 2),
);

// =============================================================================
// Debug Overlay Layout
// =============================================================================

/// Column between the grid and the legend that holds the frame-rate text.
pub const DEBUG_COLUMN: Rectangle = Rectangle::new(Point::new(241, 0), Size::new(20, SCREEN_HEIGHT));

/// Top-left of the rotated frame-rate text.
pub const DEBUG_TEXT_POS: Point = Point::new(246, 4);

/// Number of frame durations averaged for the frame-rate readout.
pub const FRAME_WINDOW: usize = 10;

// =============================================================================
// Loop Timing
// =============================================================================

/// Minimum time between accepted button state changes.
pub const DEBOUNCE: Duration = Duration::from_millis(50);

/// Yield at the end of every loop iteration.
pub const LOOP_YIELD_US: u32 = 500;

// =============================================================================
// Status Indicator
// =============================================================================

/// LED level while idle.
pub const INDICATOR_IDLE: (f32, f32, f32) = (0.05, 0.05, 0.05);

/// LED level flashed after the calibration range changes.
pub const INDICATOR_RANGE_CHANGED: (f32, f32, f32) = (0.5, 0.0, 0.0);

/// Iterations the range-changed flash stays lit.
pub const INDICATOR_FLASH_FRAMES: u8 = 8;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_fits_left_of_debug_column() {
        let grid_width = SENSOR_ROWS as u32 * CELL_SIZE;
        assert!(grid_width as i32 <= DEBUG_COLUMN.top_left.x);
    }

    #[test]
    fn test_debug_column_does_not_overlap_legend() {
        let debug_right = DEBUG_COLUMN.top_left.x + DEBUG_COLUMN.size.width as i32;
        assert!(debug_right <= LEGEND_STRIP.top_left.x);
    }

    #[test]
    fn test_legend_fits_on_screen() {
        let bottom = LEGEND_TOP_Y + (LEGEND_BANDS as u32 * LEGEND_BAND_HEIGHT) as i32;
        assert!(bottom <= SCREEN_HEIGHT as i32);
        assert!(LEGEND_BAR_X + LEGEND_BAR_WIDTH as i32 <= SCREEN_WIDTH as i32);
        assert_eq!(LEGEND_MIN_LABEL_POS.y, 205);
    }

    #[test]
    fn test_default_range_within_bounds() {
        assert!(DEFAULT_MIN_TEMP < DEFAULT_MAX_TEMP);
        assert!(DEFAULT_MAX_TEMP <= MAX_TEMP_CEILING);
        assert!(DEFAULT_MAX_TEMP >= MAX_TEMP_FLOOR);
        assert!(MAX_TEMP_FLOOR > DEFAULT_MIN_TEMP);
    }
}
