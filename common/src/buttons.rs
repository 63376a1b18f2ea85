//! Button handling for the display.
//!
//! Buttons are level-polled once per loop iteration. Each one goes through a
//! [`ButtonState`] that turns the level into a debounced press edge, so holding
//! a button performs a single action. [`ButtonBank::poll`] then picks at most
//! one action per iteration in fixed priority order:
//!
//! | Priority | Button | Action |
//! |----------|--------|--------|
//! | 1 | X | Exit |
//! | 2 | A | Raise max temperature |
//! | 3 | B | Lower max temperature |
//! | 4 | Y | Toggle frame-rate overlay |

use core::time::Duration;

use crate::config::DEBOUNCE;
use crate::hal::ButtonPad;

/// Logical buttons, in priority order.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Button {
    /// Quit the application.
    Exit,
    /// Raise the max bound of the color scale.
    IncreaseMax,
    /// Lower the max bound of the color scale.
    DecreaseMax,
    /// Show or hide the frame-rate overlay.
    ToggleDebug,
}

impl Button {
    /// All buttons, highest priority first.
    pub const PRIORITY: [Self; 4] = [Self::Exit, Self::IncreaseMax, Self::DecreaseMax, Self::ToggleDebug];

    #[inline]
    const fn index(self) -> usize {
        match self {
            Self::Exit => 0,
            Self::IncreaseMax => 1,
            Self::DecreaseMax => 2,
            Self::ToggleDebug => 3,
        }
    }

    /// Silkscreen label on the Display HAT Mini.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exit => "X",
            Self::IncreaseMax => "A",
            Self::DecreaseMax => "B",
            Self::ToggleDebug => "Y",
        }
    }
}

/// Debounce state with time-based edge detection.
#[derive(Clone, Copy, Default, Debug)]
pub struct ButtonState {
    was_pressed: bool,
    last_change: Option<Duration>,
}

impl ButtonState {
    /// Create a new button state (not pressed).
    pub const fn new() -> Self {
        Self {
            was_pressed: false,
            last_change: None,
        }
    }

    /// Returns true only on the press edge.
    ///
    /// A level change within [`DEBOUNCE`] of the previous accepted change is
    /// treated as contact bounce and ignored.
    pub fn just_pressed(
        &mut self,
        is_pressed: bool,
        now: Duration,
    ) -> bool {
        if is_pressed == self.was_pressed {
            return false;
        }

        if let Some(last) = self.last_change
            && now.saturating_sub(last) < DEBOUNCE
        {
            return false;
        }

        self.was_pressed = is_pressed;
        self.last_change = Some(now);
        is_pressed
    }
}

/// Debounce state for all four buttons.
#[derive(Clone, Copy, Default, Debug)]
pub struct ButtonBank {
    states: [ButtonState; 4],
}

impl ButtonBank {
    pub const fn new() -> Self { Self { states: [ButtonState::new(); 4] } }

    /// Poll every button and return the highest-priority fresh press.
    ///
    /// All buttons are sampled each call so their edge state stays current
    /// even when a higher-priority press wins.
    pub fn poll<B>(
        &mut self,
        pad: &mut B,
        now: Duration,
    ) -> Option<Button>
    where
        B: ButtonPad,
    {
        let mut winner = None;
        for button in Button::PRIORITY {
            let level = pad.is_pressed(button);
            let pressed = self.states[button.index()].just_pressed(level, now);
            if pressed && winner.is_none() {
                winner = Some(button);
            }
        }
        winner
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
