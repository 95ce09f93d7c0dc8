//! Tone command block.
//!
//! The control loop writes frequency and amplitude here; the render
//! task reads them at block rate. Plain atomics, no locks, and the loop
//! never reads the synthesis side back.

use core::sync::atomic::{AtomicU16, AtomicU32, Ordering};

/// Full-scale gain value (normalized amplitude 1.0).
pub const GAIN_MAX: u16 = u16::MAX;

/// Shared oscillator command state.
pub struct ToneParams {
    freq_hz: AtomicU32,
    gain: AtomicU16,
}

impl ToneParams {
    /// New command block at `freq_hz`, muted.
    pub const fn new(freq_hz: u32) -> Self {
        Self {
            freq_hz: AtomicU32::new(freq_hz),
            gain: AtomicU16::new(0),
        }
    }

    /// Command a new tone frequency in Hz.
    #[inline]
    pub fn set_frequency(&self, freq_hz: u32) {
        self.freq_hz.store(freq_hz, Ordering::Release);
    }

    /// Current commanded frequency in Hz.
    #[inline]
    pub fn frequency_hz(&self) -> u32 {
        self.freq_hz.load(Ordering::Acquire)
    }

    /// Command a normalized amplitude, clamped to 0..1.
    #[inline]
    pub fn set_amplitude(&self, amplitude: f32) {
        let amplitude = amplitude.clamp(0.0, 1.0);
        let gain = (amplitude * GAIN_MAX as f32) as u16;
        self.gain.store(gain, Ordering::Release);
    }

    /// Current gain (0 = silent, [`GAIN_MAX`] = full scale).
    #[inline]
    pub fn gain(&self) -> u16 {
        self.gain.load(Ordering::Acquire)
    }
}
