//! Color constants for the thermal display.
//!
//! The panel is driven in RGB565 (5 bits red, 6 bits green, 5 bits blue), which
//! is native to the ST7789 and needs no conversion when pushed. The color mapper
//! works in 8-bit channels and converts at paint time.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black. Background for the legend strip and debug column.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white. Label and overlay text.
pub const WHITE: Rgb565 = Rgb565::WHITE;
