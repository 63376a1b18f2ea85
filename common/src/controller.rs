//! The render-and-interact loop.
//!
//! One [`Controller::step`] is one loop iteration:
//!
//! 1. Note the start time.
//! 2. Read a frame. A failed or corrupt read skips straight to 6.
//! 3. Rasterize the grid.
//! 4. With the overlay on: record the frame time and repaint the rate text.
//! 5. With the legend dirty: repaint it and flash the status LED.
//! 6. Flush the canvas. This happens on every iteration, including dropped
//!    frames, so the panel keeps responding.
//! 7. Poll buttons; at most one action applies (see [`crate::buttons`]).
//! 8. Yield briefly.
//!
//! The loop is strictly sequential. The canvas is only written by the stages
//! above, in that order.

use embedded_hal::delay::DelayNs;
use log::{debug, info};

use crate::buttons::ButtonBank;
use crate::canvas::Screen;
use crate::config::{CELL_SIZE, INDICATOR_FLASH_FRAMES, INDICATOR_IDLE, INDICATOR_RANGE_CHANGED, LOOP_YIELD_US};
use crate::frame_rate::{FrameRateMonitor, clear_frame_rate, draw_frame_rate};
use crate::grid::{SensorFrame, rasterize};
use crate::hal::{ButtonPad, Clock, Panel, ThermalSensor};
use crate::legend::render_legend;
use crate::state::{Outcome, ViewState};

/// Result of one loop iteration.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    /// Keep looping.
    Continue,
    /// The exit button was pressed; stop without touching the canvas again.
    Exit,
}

/// Frame counters reported when the loop ends.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct RunSummary {
    pub frames_rendered: u32,
    pub frames_dropped: u32,
}

/// Owns the canvas, the view state and every hardware collaborator.
pub struct Controller<S, P, B, C, D> {
    sensor: S,
    panel: P,
    buttons: B,
    clock: C,
    delay: D,
    canvas: Screen,
    view: ViewState,
    frame_rate: FrameRateMonitor,
    inputs: ButtonBank,
    flash_frames: u8,
    summary: RunSummary,
}

impl<S, P, B, C, D> Controller<S, P, B, C, D>
where
    S: ThermalSensor,
    P: Panel,
    B: ButtonPad,
    C: Clock,
    D: DelayNs,
{
    pub fn new(
        sensor: S,
        panel: P,
        buttons: B,
        clock: C,
        delay: D,
    ) -> Self {
        Self {
            sensor,
            panel,
            buttons,
            clock,
            delay,
            canvas: Screen::new(),
            view: ViewState::new(),
            frame_rate: FrameRateMonitor::new(),
            inputs: ButtonBank::new(),
            flash_frames: 0,
            summary: RunSummary::default(),
        }
    }

    /// Loop until the exit button is pressed.
    pub fn run(&mut self) -> RunSummary {
        info!("Thermal display running (range {}..{})", self.view.range().min(), self.view.range().max());
        self.panel.set_indicator(INDICATOR_IDLE.into());

        while self.step() == Step::Continue {}

        info!(
            "Exit: {} frames rendered, {} dropped",
            self.summary.frames_rendered, self.summary.frames_dropped
        );
        self.summary
    }

    /// Run one loop iteration.
    pub fn step(&mut self) -> Step {
        let start = self.clock.now();

        match self.sensor.read_frame().and_then(|frame| frame.validate().map(|()| frame)) {
            Ok(frame) => self.render(&frame, start),
            Err(err) => {
                // Transient by definition: keep the last image and carry on
                self.summary.frames_dropped += 1;
                debug!("Frame dropped: {err}");
            }
        }

        self.tick_indicator();
        self.panel.flush(&self.canvas);

        if let Some(button) = self.inputs.poll(&mut self.buttons, self.clock.now()) {
            match self.view.apply(button) {
                Outcome::Exit => {
                    info!("Exit button pressed");
                    return Step::Exit;
                }
                Outcome::OverlayHidden => {
                    clear_frame_rate(&mut self.canvas);
                    self.frame_rate.clear();
                }
                Outcome::Unchanged | Outcome::RangeChanged | Outcome::OverlayShown => {}
            }
        }

        self.delay.delay_us(LOOP_YIELD_US);
        Step::Continue
    }

    fn render(
        &mut self,
        frame: &SensorFrame,
        start: core::time::Duration,
    ) {
        rasterize(frame, self.view.range(), CELL_SIZE, &mut self.canvas);
        self.summary.frames_rendered += 1;

        if self.view.debug_overlay() {
            self.frame_rate.record(self.clock.now().saturating_sub(start));
            draw_frame_rate(self.frame_rate.current_rate(), &mut self.canvas);
        }

        if self.view.legend_dirty() {
            render_legend(self.view.range(), &mut self.canvas);
            self.view.mark_legend_drawn();
            self.flash_frames = INDICATOR_FLASH_FRAMES;
            self.panel.set_indicator(INDICATOR_RANGE_CHANGED.into());
        }
    }

    /// Count down the range-changed flash and restore the idle LED after it.
    fn tick_indicator(&mut self) {
        if self.flash_frames == 0 {
            return;
        }
        self.flash_frames -= 1;
        if self.flash_frames == 0 {
            self.panel.set_indicator(INDICATOR_IDLE.into());
        }
    }

    #[inline]
    pub const fn canvas(&self) -> &Screen { &self.canvas }

    #[inline]
    pub const fn view(&self) -> &ViewState { &self.view }

    #[inline]
    pub const fn summary(&self) -> RunSummary { self.summary }

    #[inline]
    pub const fn panel(&self) -> &P { &self.panel }

    /// Current frame-rate readout, zero while the overlay is off.
    #[inline]
    pub fn frame_rate(&self) -> f32 { self.frame_rate.current_rate() }
}

// =============================================================================
// Unit Tests
// =============================================================================
