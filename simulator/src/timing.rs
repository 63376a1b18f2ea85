//! Host time sources.
//!
//! These use `std::time` and `std::thread`, which are not available to the
//! `no_std` core, so they live here.

use std::thread;
use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;
use thermocam_common::Clock;

/// Monotonic clock counting from construction.
pub struct StdClock {
    boot: Instant,
}

impl StdClock {
    pub fn new() -> Self { Self { boot: Instant::now() } }
}

impl Clock for StdClock {
    fn now(&self) -> Duration { self.boot.elapsed() }
}

/// Blocking delay backed by `thread::sleep`.
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(
        &mut self,
        ns: u32,
    ) {
        thread::sleep(Duration::from_nanos(u64::from(ns)));
    }
}
