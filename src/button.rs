//! Button mode toggle.
//!
//! One boolean, flipped on every loop iteration that observes the
//! button line low. There is no debounce and no edge latch: a press is
//! normally seen once because the 50 ms sampling window dominates the
//! loop period, but mechanical bounce can land multiple toggles.

use crate::audio::params::ToneParams;

/// Toggle state driven by the button line.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModeToggle {
    state: bool,
}

impl ModeToggle {
    pub const fn new() -> Self {
        Self { state: false }
    }

    /// Current toggle state (mirrored on the indicator line).
    #[inline]
    pub fn state(&self) -> bool {
        self.state
    }

    /// Feed one button line reading (`true` = pressed).
    ///
    /// On a pressed reading the state inverts and the tone amplitude is
    /// commanded to zero on both branches.
    ///
    /// TODO: confirm whether the off branch should restore
    /// `STARTUP_AMPLITUDE` instead of muting; as shipped, both branches
    /// mute, so the tone never comes back after the first press.
    pub fn poll(&mut self, pressed: bool, tone: &ToneParams) -> bool {
        if pressed {
            self.state = !self.state;
            if self.state {
                tone.set_amplitude(0.0);
            } else {
                tone.set_amplitude(0.0); // Mute the speaker
            }
        }
        self.state
    }
}
