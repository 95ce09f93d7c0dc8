//! Peak-to-peak amplitude estimator.
//!
//! Pure logic, no hardware dependencies. Tracks running max/min over a
//! busy-wait sampling window and reports `max - min`.
//!
//! The update rule is deliberately the classic either/or form: a sample
//! is tested against the minimum only when it failed the maximum test.
//! The very first valid sample therefore raises the maximum and can
//! never lower the minimum in the same pass, so a window whose true
//! minimum arrives first reports against a later, larger minimum. That
//! bias is part of the device's established output and is kept as-is.

use crate::board::Board;

/// Exclusive upper bound of a valid 10-bit ADC reading.
///
/// Doubles as the minimum tracker's sentinel: any in-range sample is
/// below it, so the first sample reaching the min test replaces it.
pub const ADC_CEILING: u32 = 1024;

/// Map a raw ADC driver result to a meter sample.
///
/// The C driver reports a failed conversion as a negative value; fold
/// it onto the spurious ceiling so the tracker drops it like any other
/// out-of-range read instead of taking it for a zero minimum.
#[inline]
pub fn adc_sample(raw: i32) -> u16 {
    if raw < 0 {
        ADC_CEILING as u16
    } else {
        raw as u16
    }
}

/// Running max/min tracker for one sampling window.
#[derive(Clone, Copy, Debug)]
pub struct PeakTracker {
    signal_max: u32,
    signal_min: u32,
}

impl PeakTracker {
    /// Fresh tracker: max at zero, min at the sentinel.
    pub const fn new() -> Self {
        Self {
            signal_max: 0,
            signal_min: ADC_CEILING,
        }
    }

    /// Feed one raw ADC reading.
    ///
    /// Readings at or above [`ADC_CEILING`] are spurious and dropped
    /// without trace. Valid readings take the either/or branch; see the
    /// module docs for the resulting first-sample bias.
    #[inline]
    pub fn update(&mut self, sample: u16) {
        let sample = sample as u32;
        if sample < ADC_CEILING {
            if sample > self.signal_max {
                self.signal_max = sample;
            } else if sample < self.signal_min {
                self.signal_min = sample;
            }
        }
    }

    /// Current running maximum.
    #[inline]
    pub fn signal_max(&self) -> u32 {
        self.signal_max
    }

    /// Current running minimum (sentinel until a sample lands below it).
    #[inline]
    pub fn signal_min(&self) -> u32 {
        self.signal_min
    }

    /// Peak-to-peak amplitude, `max - min` in wrapping arithmetic.
    ///
    /// When the window saw no valid sample at all, max stays 0 and min
    /// stays at the sentinel, so the result wraps to near `u32::MAX`.
    /// Not clamped.
    #[inline]
    pub fn peak_to_peak(&self) -> u32 {
        self.signal_max.wrapping_sub(self.signal_min)
    }
}

impl Default for PeakTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect microphone samples for `window_ms` and return the
/// peak-to-peak amplitude.
///
/// This is a spin loop against the wall clock: it reads the ADC as fast
/// as the loop turns for the whole window and yields to nothing. The
/// busy-wait is the device's loop pacing, not an oversight.
pub fn measure_window<B: Board>(board: &mut B, window_ms: u32) -> u32 {
    let start_ms = board.millis();
    let mut tracker = PeakTracker::new();

    while board.millis().wrapping_sub(start_ms) < window_ms {
        tracker.update(board.read_mic());
    }

    tracker.peak_to_peak()
}
