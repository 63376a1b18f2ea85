//! Sensor grid and block rasterization.
//!
//! The sensor resolution is far below the panel's, so each reading is painted
//! as a solid `cell_size x cell_size` block (nearest-neighbour replication, no
//! smoothing). Rows run along the horizontal screen axis and columns along the
//! vertical one, which mirrors the image for a sensor mounted facing away
//! from the viewer:
//!
//! ```text
//! block(row, col) = Rectangle((row * cell_size, col * cell_size), cell_size x cell_size)
//! ```
//!
//! With a 24x32 sensor and 10px blocks the grid spans 240px horizontally and
//! 320px vertically; the target clips what falls below the 240px panel.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::calibration::CalibrationRange;
use crate::color_map::map_temperature;
use crate::config::{SENSOR_COLS, SENSOR_ROWS};
use crate::hal::AcquisitionError;

/// One full frame from the sensor.
pub type SensorFrame = TemperatureGrid<SENSOR_ROWS, SENSOR_COLS>;

/// Fixed-size grid of temperature readings in degrees Celsius.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TemperatureGrid<const ROWS: usize, const COLS: usize> {
    cells: [[f32; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> TemperatureGrid<ROWS, COLS> {
    /// Wrap a row-major array of readings.
    pub const fn new(cells: [[f32; COLS]; ROWS]) -> Self { Self { cells } }

    /// Grid with every cell set to `degrees`.
    pub const fn filled(degrees: f32) -> Self { Self::new([[degrees; COLS]; ROWS]) }

    /// Build a grid from a flat row-major slice, as sensor drivers deliver it.
    ///
    /// Returns `None` when the slice length does not match `ROWS * COLS`.
    pub fn from_flat(readings: &[f32]) -> Option<Self> {
        if readings.len() != ROWS * COLS {
            return None;
        }
        let mut cells = [[0.0; COLS]; ROWS];
        for (row, chunk) in cells.iter_mut().zip(readings.chunks_exact(COLS)) {
            row.copy_from_slice(chunk);
        }
        Some(Self { cells })
    }

    #[inline]
    pub const fn rows(&self) -> usize { ROWS }

    #[inline]
    pub const fn cols(&self) -> usize { COLS }

    /// Reading at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(
        &self,
        row: usize,
        col: usize,
    ) -> Option<f32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterate `(row, col, degrees)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().map(move |(col, &t)| (row, col, t)))
    }

    /// Reject frames carrying NaN or infinite readings.
    ///
    /// A corrupt bus transfer can decode to non-finite values; such frames
    /// are treated like any other failed read.
    pub fn validate(&self) -> Result<(), AcquisitionError> {
        match self.iter().find(|(_, _, t)| !t.is_finite()) {
            Some((row, col, _)) => Err(AcquisitionError::NonFinite { row, col }),
            None => Ok(()),
        }
    }
}

/// Canvas area covered by the block for `(row, col)`.
#[inline]
pub fn block_area(
    row: usize,
    col: usize,
    cell_size: u32,
) -> Rectangle {
    let step = cell_size as i32;
    Rectangle::new(
        Point::new(row as i32 * step, col as i32 * step),
        Size::new(cell_size, cell_size),
    )
}

/// Paint every cell of `grid` as an upscaled block.
///
/// Covers the whole mapped region on every call, so no block from a previous
/// frame survives.
pub fn rasterize<D, const ROWS: usize, const COLS: usize>(
    grid: &TemperatureGrid<ROWS, COLS>,
    range: CalibrationRange,
    cell_size: u32,
    target: &mut D,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for (row, col, degrees) in grid.iter() {
        let color: Rgb888 = map_temperature(degrees, range);
        target.fill_solid(&block_area(row, col, cell_size), color.into()).ok();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
