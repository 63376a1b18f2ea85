//! Synthetic thermal sensor.
//!
//! Produces a room-temperature background with two drifting heat sources, one
//! warm and one hot enough to saturate the default range. Reads block until
//! the next sensor period like the real part does, and every
//! [`FAULT_INTERVAL`]th read fails so the dropped-frame path gets exercised.

use std::thread;
use std::time::{Duration, Instant};

use thermocam_common::config::{SENSOR_COLS, SENSOR_REFRESH_HZ, SENSOR_ROWS};
use thermocam_common::{AcquisitionError, SensorFrame, ThermalSensor};

/// Every Nth read reports a bus failure.
const FAULT_INTERVAL: u32 = 97;

/// Ambient temperature in °C.
const AMBIENT: f32 = 22.0;

/// A Gaussian heat blob moving on a Lissajous path.
struct HeatSource {
    peak: f32,
    sigma: f32,
    /// Angular speeds along rows and columns, rad/s
    speed: (f32, f32),
}

const SOURCES: [HeatSource; 2] = [
    HeatSource {
        peak: 14.0,
        sigma: 4.0,
        speed: (0.7, 0.5),
    },
    HeatSource {
        peak: 48.0,
        sigma: 2.0,
        speed: (0.23, 0.31),
    },
];

impl HeatSource {
    /// Blob center in (row, col) at time `t` seconds.
    fn center(
        &self,
        t: f32,
    ) -> (f32, f32) {
        let half_rows = (SENSOR_ROWS as f32 - 1.0) / 2.0;
        let half_cols = (SENSOR_COLS as f32 - 1.0) / 2.0;
        (
            half_rows + 0.8 * half_rows * (t * self.speed.0).sin(),
            half_cols + 0.8 * half_cols * (t * self.speed.1).cos(),
        )
    }

    fn heat_at(
        &self,
        t: f32,
        row: usize,
        col: usize,
    ) -> f32 {
        let (cr, cc) = self.center(t);
        let dr = row as f32 - cr;
        let dc = col as f32 - cc;
        let d2 = dr.mul_add(dr, dc * dc);
        self.peak * (-d2 / (2.0 * self.sigma * self.sigma)).exp()
    }
}

pub struct SyntheticSensor {
    started: Instant,
    next_frame: Instant,
    period: Duration,
    reads: u32,
}

impl SyntheticSensor {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            next_frame: now,
            period: Duration::from_secs(1) / SENSOR_REFRESH_HZ,
            reads: 0,
        }
    }

    /// Build the frame seen at `t` seconds.
    fn frame_at(t: f32) -> SensorFrame {
        let mut cells = [[AMBIENT; SENSOR_COLS]; SENSOR_ROWS];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell += SOURCES.iter().map(|s| s.heat_at(t, row, col)).sum::<f32>();
            }
        }
        SensorFrame::new(cells)
    }
}

impl ThermalSensor for SyntheticSensor {
    fn read_frame(&mut self) -> Result<SensorFrame, AcquisitionError> {
        let now = Instant::now();
        if now < self.next_frame {
            thread::sleep(self.next_frame - now);
        }
        self.next_frame = Instant::now().max(self.next_frame) + self.period;

        self.reads = self.reads.wrapping_add(1);
        if self.reads.is_multiple_of(FAULT_INTERVAL) {
            return Err(AcquisitionError::Bus);
        }

        Ok(Self::frame_at(self.started.elapsed().as_secs_f32()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_is_finite_and_warmer_than_ambient() {
        let frame = SyntheticSensor::frame_at(3.0);
        assert!(frame.validate().is_ok());
        assert!(frame.iter().all(|(_, _, t)| t >= AMBIENT));
        assert!(frame.iter().any(|(_, _, t)| t > 50.0));
    }

    #[test]
    fn test_sources_move() {
        assert_ne!(SyntheticSensor::frame_at(0.0), SyntheticSensor::frame_at(2.0));
    }
}
