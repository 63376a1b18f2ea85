//! Calibration range for the color scale.
//!
//! The range is the `(min, max)` pair the color mapper interpolates between.
//! `max > min` holds for every value of this type, so mapping never divides by
//! zero. Button handling only moves the max bound, in fixed steps, between
//! [`MAX_TEMP_FLOOR`] and [`MAX_TEMP_CEILING`].

use thiserror_no_std::Error;

use crate::config::{DEFAULT_MAX_TEMP, DEFAULT_MIN_TEMP, MAX_TEMP_CEILING, MAX_TEMP_FLOOR, MAX_TEMP_STEP};

/// Rejected calibration input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalibrationError {
    /// The max bound is not strictly above the min bound.
    #[error("Invalid calibration span (min: {min}, max: {max})")]
    InvalidSpan {
        /// Requested lower bound
        min: i32,
        /// Requested upper bound
        max: i32,
    },
}

/// Temperature bounds of the color scale, in whole degrees.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CalibrationRange {
    min: i32,
    max: i32,
}

impl CalibrationRange {
    /// Create a range, rejecting spans where `max <= min`.
    pub const fn new(
        min: i32,
        max: i32,
    ) -> Result<Self, CalibrationError> {
        if max <= min {
            return Err(CalibrationError::InvalidSpan { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub const fn min(self) -> i32 { self.min }

    #[inline]
    pub const fn max(self) -> i32 { self.max }

    /// Width of the range. Always positive.
    #[inline]
    pub const fn span(self) -> i32 { self.max - self.min }

    /// Raise the max bound by one step.
    ///
    /// Returns `false` and leaves the range untouched once max has reached the
    /// ceiling.
    pub fn raise_max(&mut self) -> bool {
        if self.max >= MAX_TEMP_CEILING {
            return false;
        }
        self.max += MAX_TEMP_STEP;
        true
    }

    /// Lower the max bound by one step.
    ///
    /// Returns `false` and leaves the range untouched once max has reached the
    /// floor, or if lowering would collapse the span.
    pub fn lower_max(&mut self) -> bool {
        if self.max <= MAX_TEMP_FLOOR || self.max - MAX_TEMP_STEP <= self.min {
            return false;
        }
        self.max -= MAX_TEMP_STEP;
        true
    }
}

impl Default for CalibrationRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_TEMP,
            max: DEFAULT_MAX_TEMP,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
