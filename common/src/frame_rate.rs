//! Frame-rate sampling and the debug overlay.
//!
//! [`FrameRateMonitor`] keeps the last [`FRAME_WINDOW`] frame durations and
//! reports `count / total_seconds`. The overlay text is stamped rotated 90° into
//! the narrow column between the grid and the legend.

use core::fmt::Write;
use core::time::Duration;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use heapless::{Deque, String};

use crate::colors::{BLACK, WHITE};
use crate::config::{DEBUG_COLUMN, DEBUG_TEXT_POS, FRAME_WINDOW};
use crate::stamp::{Rotation, stamp_text};

const OVERLAY_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, WHITE);

/// Sliding window of recent frame durations.
#[derive(Clone, Debug, Default)]
pub struct FrameRateMonitor {
    window: Deque<Duration, FRAME_WINDOW>,
}

impl FrameRateMonitor {
    pub const fn new() -> Self { Self { window: Deque::new() } }

    /// Add a frame duration, evicting the oldest once the window is full.
    pub fn record(
        &mut self,
        elapsed: Duration,
    ) {
        if self.window.is_full() {
            self.window.pop_front();
        }
        self.window.push_back(elapsed).ok();
    }

    /// Average frames per second over the window.
    ///
    /// Zero while the window is empty or its durations sum to nothing.
    pub fn current_rate(&self) -> f32 {
        let total: Duration = self.window.iter().sum();
        let secs = total.as_secs_f32();
        if self.window.is_empty() || secs <= 0.0 {
            return 0.0;
        }
        self.window.len() as f32 / secs
    }

    #[inline]
    pub fn len(&self) -> usize { self.window.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.window.is_empty() }

    /// Drop all samples.
    pub fn clear(&mut self) { self.window.clear(); }
}

/// Overlay text for `rate`, e.g. `"Frame Rate: 15.9fps"`.
pub fn frame_rate_label(rate: f32) -> String<32> {
    let mut label = String::new();
    let _ = write!(label, "Frame Rate: {rate:2.1}fps");
    label
}

/// Blank the debug column.
pub fn clear_frame_rate<D>(target: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    target.fill_solid(&DEBUG_COLUMN, BLACK).ok();
}

/// Repaint the debug column with the current rate.
pub fn draw_frame_rate<D>(
    rate: f32,
    target: &mut D,
) where
    D: DrawTarget<Color = Rgb565>,
{
    clear_frame_rate(target);
    stamp_text(target, &frame_rate_label(rate), DEBUG_TEXT_POS, Rotation::Deg90, OVERLAY_STYLE);
}

// =============================================================================
// Unit Tests
// =============================================================================
