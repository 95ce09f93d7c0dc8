//! Frequency ramp timer.
//!
//! Every full ramp interval the tone steps up one increment. The ramp
//! runs on wall-clock polling from the main loop and is independent of
//! the mute toggle: frequency keeps climbing while the tone is silent.

use crate::config::{BASE_FREQ_HZ, FREQ_STEP_HZ, RAMP_INTERVAL_MS};

/// Ramp state: completed interval count plus the interval start time.
#[derive(Clone, Copy, Debug)]
pub struct FrequencyRamp {
    /// Completed ramp intervals. Wraps at `u32::MAX` without special
    /// handling, as does the frequency product derived from it.
    count: u32,
    started_at_ms: u32,
}

impl FrequencyRamp {
    /// Start the ramp timer at `now_ms` with count zero.
    pub const fn new(now_ms: u32) -> Self {
        Self {
            count: 0,
            started_at_ms: now_ms,
        }
    }

    /// Poll the ramp.
    ///
    /// When strictly more than [`RAMP_INTERVAL_MS`] has elapsed since
    /// the last event, bumps the count, restarts the timer at `now_ms`
    /// and returns the new target frequency. Otherwise `None`.
    pub fn tick(&mut self, now_ms: u32) -> Option<u32> {
        if now_ms.wrapping_sub(self.started_at_ms) > RAMP_INTERVAL_MS {
            self.count = self.count.wrapping_add(1);
            self.started_at_ms = now_ms;
            Some(self.frequency_hz())
        } else {
            None
        }
    }

    /// Target frequency for the current count: base + count * step.
    #[inline]
    pub fn frequency_hz(&self) -> u32 {
        BASE_FREQ_HZ.wrapping_add(self.count.wrapping_mul(FREQ_STEP_HZ))
    }

    /// Completed interval count.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }
}
