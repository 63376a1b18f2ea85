//! Thermal camera display simulator for desktop.
//!
//! Runs the shared controller against a synthetic sensor in an SDL window via
//! `embedded-graphics-simulator`. See [`hat`] for key bindings.
//!
//! Set `RUST_LOG=debug` to see dropped frames and button events.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod hat;
mod sensor;
mod timing;

use std::cell::Cell;
use std::rc::Rc;

use log::info;
use thermocam_common::Controller;
use thermocam_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::hat::{HeldKeys, KeyboardButtons, SimulatedHat};
use crate::sensor::SyntheticSensor;
use crate::timing::{StdClock, StdDelay};

/// Pixel scale factor for the simulator window.
const WINDOW_SCALE: u32 = 2;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Starting thermal camera simulator");
    info!("Display: {SCREEN_WIDTH}x{SCREEN_HEIGHT} (scale {WINDOW_SCALE}x)");
    info!("Keys: X/Esc=Exit  A=Max+  B=Max-  Y=Frame rate");

    let keys = Rc::new(Cell::new(HeldKeys::default()));
    let mut controller = Controller::new(
        SyntheticSensor::new(),
        SimulatedHat::new(WINDOW_SCALE, Rc::clone(&keys)),
        KeyboardButtons::new(keys),
        StdClock::new(),
        StdDelay,
    );

    let summary = controller.run();
    info!(
        "Simulator stopped after {} frames ({} dropped)",
        summary.frames_rendered, summary.frames_dropped
    );
}
