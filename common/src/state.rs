//! Controller-owned view state.
//!
//! Everything the loop mutates between frames lives here: the calibration
//! range, the frame-rate overlay flag and the dirty-legend flag. Button
//! actions are applied by [`ViewState::apply`], which is pure so each action
//! can be tested without hardware.

use log::info;

use crate::buttons::Button;
use crate::calibration::CalibrationRange;

/// What the controller must do after a button action.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// Nothing changed.
    Unchanged,
    /// Calibration changed; the legend is now dirty.
    RangeChanged,
    /// The frame-rate overlay was switched on.
    OverlayShown,
    /// The frame-rate overlay was switched off; its column must be blanked.
    OverlayHidden,
    /// Leave the loop.
    Exit,
}

/// Mutable display state carried across frames.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ViewState {
    range: CalibrationRange,
    debug_overlay: bool,
    legend_dirty: bool,
}

impl ViewState {
    /// Default range, overlay off, legend pending its first paint.
    pub fn new() -> Self { Self::with_range(CalibrationRange::default()) }

    pub const fn with_range(range: CalibrationRange) -> Self {
        Self {
            range,
            debug_overlay: false,
            legend_dirty: true,
        }
    }

    #[inline]
    pub const fn range(&self) -> CalibrationRange { self.range }

    #[inline]
    pub const fn debug_overlay(&self) -> bool { self.debug_overlay }

    #[inline]
    pub const fn legend_dirty(&self) -> bool { self.legend_dirty }

    /// Clear the dirty-legend flag once the legend has been painted.
    #[inline]
    pub fn mark_legend_drawn(&mut self) { self.legend_dirty = false; }

    /// Apply the action bound to `button`.
    pub fn apply(
        &mut self,
        button: Button,
    ) -> Outcome {
        match button {
            Button::Exit => Outcome::Exit,
            Button::IncreaseMax => {
                if self.range.raise_max() {
                    self.legend_dirty = true;
                    info!("Max temperature raised to {}", self.range.max());
                    Outcome::RangeChanged
                } else {
                    Outcome::Unchanged
                }
            }
            Button::DecreaseMax => {
                if self.range.lower_max() {
                    self.legend_dirty = true;
                    info!("Max temperature lowered to {}", self.range.max());
                    Outcome::RangeChanged
                } else {
                    Outcome::Unchanged
                }
            }
            Button::ToggleDebug => {
                self.debug_overlay = !self.debug_overlay;
                info!("Frame rate overlay {}", if self.debug_overlay { "on" } else { "off" });
                if self.debug_overlay {
                    Outcome::OverlayShown
                } else {
                    Outcome::OverlayHidden
                }
            }
        }
    }
}

impl Default for ViewState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ViewState::new();
        assert_eq!(state.range(), CalibrationRange::default());
        assert!(!state.debug_overlay());
        assert!(state.legend_dirty(), "legend must be painted on the first frame");
    }

    #[test]
    fn test_increase_max_sets_dirty() {
        let mut state = ViewState::new();
        state.mark_legend_drawn();

        assert_eq!(state.apply(Button::IncreaseMax), Outcome::RangeChanged);
        assert_eq!(state.range().max(), 60);
        assert!(state.legend_dirty());
    }

    #[test]
    fn test_increase_max_clamped_keeps_legend_clean() {
        let mut state = ViewState::new();
        for _ in 0..5 {
            state.apply(Button::IncreaseMax);
        }
        assert_eq!(state.range().max(), 100);
        state.mark_legend_drawn();

        assert_eq!(state.apply(Button::IncreaseMax), Outcome::Unchanged);
        assert_eq!(state.range().max(), 100);
        assert!(!state.legend_dirty());
    }

    #[test]
    fn test_decrease_max_clamped_at_twenty() {
        let mut state = ViewState::new();
        for _ in 0..3 {
            assert_eq!(state.apply(Button::DecreaseMax), Outcome::RangeChanged);
        }
        assert_eq!(state.range().max(), 20);
        assert_eq!(state.apply(Button::DecreaseMax), Outcome::Unchanged);
        assert_eq!(state.range().max(), 20);
    }

    /// Toggle-Debug is a plain flip: off -> on -> off.
    #[test]
    fn test_toggle_debug_flips_both_ways() {
        let mut state = ViewState::new();
        assert_eq!(state.apply(Button::ToggleDebug), Outcome::OverlayShown);
        assert!(state.debug_overlay());
        assert_eq!(state.apply(Button::ToggleDebug), Outcome::OverlayHidden);
        assert!(!state.debug_overlay());
    }

    #[test]
    fn test_toggle_debug_leaves_range_alone() {
        let mut state = ViewState::new();
        state.mark_legend_drawn();
        state.apply(Button::ToggleDebug);
        assert_eq!(state.range(), CalibrationRange::default());
        assert!(!state.legend_dirty());
    }

    #[test]
    fn test_exit_changes_nothing() {
        let mut state = ViewState::new();
        let before = state;
        assert_eq!(state.apply(Button::Exit), Outcome::Exit);
        assert_eq!(state, before);
    }
}
