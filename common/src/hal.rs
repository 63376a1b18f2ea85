//! Collaborator traits at the hardware boundary.
//!
//! The controller only talks to hardware through these traits. Board bring-up
//! (I2C for the sensor, SPI for the panel, GPIO for buttons and the LED)
//! happens outside this crate; the simulator implements them on the desktop.
//!
//! Loop pacing goes through [`embedded_hal::delay::DelayNs`] rather than a
//! trait of our own.

use core::time::Duration;

use thiserror_no_std::Error;

use crate::buttons::Button;
use crate::canvas::Screen;
use crate::grid::SensorFrame;

/// A sensor read that produced no usable frame.
///
/// Always transient: the controller drops the frame and tries again on the
/// next iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AcquisitionError {
    /// Bus transfer failed (NACK, arbitration loss, timeout).
    #[error("Sensor bus transfer failed")]
    Bus,

    /// The sensor had no new subpage ready.
    #[error("Sensor frame not ready")]
    NotReady,

    /// The frame decoded to a NaN or infinite reading.
    #[error("Non-finite reading at row {row}, col {col}")]
    NonFinite {
        /// Row of the first bad reading
        row: usize,
        /// Column of the first bad reading
        col: usize,
    },
}

/// Thermal sensor producing full frames.
pub trait ThermalSensor {
    /// Block until a frame is available, or fail.
    fn read_frame(&mut self) -> Result<SensorFrame, AcquisitionError>;
}

/// Display panel with a status LED.
pub trait Panel {
    /// Push the whole canvas to the panel. Blocking.
    fn flush(
        &mut self,
        canvas: &Screen,
    );

    /// Set the status LED.
    fn set_indicator(
        &mut self,
        color: IndicatorColor,
    );
}

/// Level-polled buttons.
pub trait ButtonPad {
    /// Whether `button` is held down right now.
    fn is_pressed(
        &mut self,
        button: Button,
    ) -> bool;
}

/// Monotonic time source.
pub trait Clock {
    /// Time since boot.
    fn now(&self) -> Duration;
}

/// Status LED color, each channel in `0.0..=1.0`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct IndicatorColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl IndicatorColor {
    /// Create a color, clamping each channel into `0.0..=1.0`.
    pub fn new(
        r: f32,
        g: f32,
        b: f32,
    ) -> Self {
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
        }
    }

    /// Channel levels scaled to 8-bit duty cycles.
    pub fn to_duty(self) -> (u8, u8, u8) {
        let duty = |v: f32| (v * 255.0 + 0.5) as u8;
        (duty(self.r), duty(self.g), duty(self.b))
    }
}

impl From<(f32, f32, f32)> for IndicatorColor {
    fn from((r, g, b): (f32, f32, f32)) -> Self { Self::new(r, g, b) }
}

/// NaN clamps to off.
#[inline]
fn unit(v: f32) -> f32 { if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) } }

// =============================================================================
// Unit Tests
// =============================================================================
