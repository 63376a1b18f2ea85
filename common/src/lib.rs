//! Core of the thermal camera display.
//!
//! Everything here is platform-agnostic and shared between the desktop
//! simulator and a board build:
//!
//! - [`config`]: Screen layout, sensor geometry and timing constants
//! - [`colors`]: RGB565 color constants
//! - [`calibration`]: The adjustable temperature range
//! - [`color_map`]: Temperature to red/blue color mapping
//! - [`grid`]: Sensor frames and block rasterization
//! - [`canvas`]: In-memory framebuffer implementing `DrawTarget`
//! - [`stamp`]: Rotated text stamping
//! - [`legend`]: Calibration legend
//! - [`frame_rate`]: Frame-rate window and debug overlay
//! - [`buttons`]: Debounced button polling with priority
//! - [`state`]: View state and button actions
//! - [`hal`]: Hardware collaborator traits
//! - [`controller`]: The render-and-interact loop
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests. It avoids `std::time`; time is a
//! [`core::time::Duration`] from a [`hal::Clock`].

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod buttons;
pub mod calibration;
pub mod canvas;
pub mod color_map;
pub mod colors;
pub mod config;
pub mod controller;
pub mod frame_rate;
pub mod grid;
pub mod hal;
pub mod legend;
pub mod stamp;
pub mod state;

// Re-export commonly used items
pub use buttons::Button;
pub use calibration::CalibrationRange;
pub use canvas::{Canvas, Screen};
pub use controller::{Controller, RunSummary, Step};
pub use grid::SensorFrame;
pub use hal::{AcquisitionError, ButtonPad, Clock, IndicatorColor, Panel, ThermalSensor};
