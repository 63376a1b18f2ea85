//! Desktop stand-in for the display HAT.
//!
//! [`SimulatedHat`] owns the SDL window: flushing the canvas blits it to the
//! window, draws the status LED as a strip under the panel and pumps window
//! events into the shared key state that [`KeyboardButtons`] reads.
//!
//! # Key bindings
//!
//! | Key | Button |
//! |-----|--------|
//! | X / Esc | Exit |
//! | A | Raise max temperature |
//! | B | Lower max temperature |
//! | Y | Toggle frame-rate overlay |
//!
//! Closing the window counts as holding Exit.

use std::cell::Cell;
use std::rc::Rc;

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::sdl2::Keycode;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use log::debug;
use thermocam_common::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use thermocam_common::{Button, ButtonPad, IndicatorColor, Panel, Screen};

/// Height of the LED strip drawn below the panel.
const LED_STRIP_HEIGHT: u32 = 12;

const PANEL_AREA: Rectangle = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
const LED_AREA: Rectangle = Rectangle::new(
    Point::new(0, SCREEN_HEIGHT as i32),
    Size::new(SCREEN_WIDTH, LED_STRIP_HEIGHT),
);

/// Which buttons are currently held, indexed like [`Button::PRIORITY`].
#[derive(Clone, Copy, Default, Debug)]
pub struct HeldKeys {
    held: [bool; 4],
}

impl HeldKeys {
    fn slot(button: Button) -> usize {
        Button::PRIORITY.iter().position(|b| *b == button).unwrap_or(0)
    }

    pub fn is_held(
        self,
        button: Button,
    ) -> bool {
        self.held[Self::slot(button)]
    }

    fn set(
        &mut self,
        button: Button,
        down: bool,
    ) {
        self.held[Self::slot(button)] = down;
    }
}

fn button_for(keycode: Keycode) -> Option<Button> {
    match keycode {
        Keycode::X | Keycode::Escape => Some(Button::Exit),
        Keycode::A => Some(Button::IncreaseMax),
        Keycode::B => Some(Button::DecreaseMax),
        Keycode::Y => Some(Button::ToggleDebug),
        _ => None,
    }
}

pub struct SimulatedHat {
    display: SimulatorDisplay<Rgb565>,
    window: Window,
    indicator: IndicatorColor,
    keys: Rc<Cell<HeldKeys>>,
    closed: bool,
}

impl SimulatedHat {
    pub fn new(
        scale: u32,
        keys: Rc<Cell<HeldKeys>>,
    ) -> Self {
        let output_settings = OutputSettingsBuilder::new().scale(scale).build();
        Self {
            display: SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT + LED_STRIP_HEIGHT)),
            window: Window::new("Thermal Camera Sim", &output_settings),
            indicator: IndicatorColor::new(0.0, 0.0, 0.0),
            keys,
            closed: false,
        }
    }

    fn draw_indicator(&mut self) {
        let (r, g, b) = self.indicator.to_duty();
        self.display.fill_solid(&LED_AREA, Rgb888::new(r, g, b).into()).ok();
    }

    fn pump_events(&mut self) {
        let mut keys = self.keys.get();
        for event in self.window.events() {
            match event {
                SimulatorEvent::Quit => {
                    debug!("Window closed");
                    self.closed = true;
                }
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if repeat {
                        continue;
                    }
                    if let Some(button) = button_for(keycode) {
                        debug!("Button {} down", button.label());
                        keys.set(button, true);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(button) = button_for(keycode) {
                        keys.set(button, false);
                    }
                }
                _ => {}
            }
        }
        // A closed window keeps Exit held until the loop notices
        if self.closed {
            keys.set(Button::Exit, true);
        }
        self.keys.set(keys);
    }
}

impl Panel for SimulatedHat {
    fn flush(
        &mut self,
        canvas: &Screen,
    ) {
        self.display.fill_contiguous(&PANEL_AREA, canvas.pixels()).ok();
        self.draw_indicator();
        self.window.update(&self.display);
        self.pump_events();
    }

    fn set_indicator(
        &mut self,
        color: IndicatorColor,
    ) {
        self.indicator = color;
    }
}

/// Buttons backed by the key state the hat collects.
pub struct KeyboardButtons {
    keys: Rc<Cell<HeldKeys>>,
}

impl KeyboardButtons {
    pub fn new(keys: Rc<Cell<HeldKeys>>) -> Self { Self { keys } }
}

impl ButtonPad for KeyboardButtons {
    fn is_pressed(
        &mut self,
        button: Button,
    ) -> bool {
        self.keys.get().is_held(button)
    }
}
