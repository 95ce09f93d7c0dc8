//! Sine oscillator.
//!
//! Lookup table plus 32-bit fixed-point phase accumulator; gain is an
//! integer Q16 multiply, so the sample path stays float-free.

use super::lut::{LUT_INDEX_BITS, SINE_LUT};
use super::params::ToneParams;

/// Sine wave generator with commandable frequency and gain.
pub struct SineOsc {
    /// Phase accumulator; the top [`LUT_INDEX_BITS`] bits index the LUT.
    phase: u32,
    /// Phase increment per sample.
    phase_inc: u32,
    /// Output gain, 0..=0xFFFF.
    gain: u16,
    sample_rate: u32,
}

impl SineOsc {
    pub fn new(freq_hz: u32, sample_rate: u32) -> Self {
        Self {
            phase: 0,
            phase_inc: Self::calc_phase_inc(freq_hz, sample_rate),
            gain: 0,
            sample_rate,
        }
    }

    /// phase_inc = (freq * 2^32) / sample_rate
    #[inline]
    fn calc_phase_inc(freq_hz: u32, sample_rate: u32) -> u32 {
        ((freq_hz as u64 * (1u64 << 32)) / sample_rate as u64) as u32
    }

    #[inline]
    pub fn set_frequency(&mut self, freq_hz: u32) {
        self.phase_inc = Self::calc_phase_inc(freq_hz, self.sample_rate);
    }

    #[inline]
    pub fn set_gain(&mut self, gain: u16) {
        self.gain = gain;
    }

    /// Latch the current commanded frequency and gain.
    #[inline]
    pub fn apply(&mut self, params: &ToneParams) {
        self.set_frequency(params.frequency_hz());
        self.gain = params.gain();
    }

    /// Generate the next sample. Phase advances even at zero gain so
    /// unmuting does not jump the waveform.
    #[inline]
    pub fn next_sample(&mut self) -> i16 {
        let idx = (self.phase >> (32 - LUT_INDEX_BITS)) as usize;
        self.phase = self.phase.wrapping_add(self.phase_inc);

        let sample = SINE_LUT[idx % SINE_LUT.len()];
        ((sample as i32 * self.gain as i32) >> 16) as i16
    }

    /// Fill one render block, latching commands once at block start.
    pub fn fill(&mut self, params: &ToneParams, block: &mut [i16]) {
        self.apply(params);
        for slot in block.iter_mut() {
            *slot = self.next_sample();
        }
    }

    /// Reset phase to zero.
    pub fn reset(&mut self) {
        self.phase = 0;
    }
}
