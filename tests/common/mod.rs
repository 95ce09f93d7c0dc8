//! Scripted board for host tests.
//!
//! The clock is virtual and advances only where the hardware would
//! spend time: a fixed cost per ADC conversion and the explicit
//! blocking delays. Everything the sketch drives is recorded.

// Not every test binary exercises every helper.
#![allow(dead_code)]

use std::collections::VecDeque;

use tone_sweep_meter::Board;

/// Spurious reading used once the ADC script runs out; the meter
/// discards it, so exhausted scripts contribute nothing but time.
pub const EXHAUSTED_ADC: u16 = 1024;

pub struct FakeBoard {
    pub now_ms: u32,
    /// Clock cost of one ADC conversion, milliseconds.
    pub ms_per_adc_read: u32,
    /// Scripted ADC readings, consumed front to back.
    pub adc_script: VecDeque<u16>,
    /// Scripted button levels (`true` = line low); exhausted = released.
    pub button_script: VecDeque<bool>,
    /// Indicator line writes, in order.
    pub indicator_history: Vec<bool>,
    /// Builtin LED writes as (timestamp, level).
    pub builtin_led_history: Vec<(u32, bool)>,
    /// Blocking delays requested.
    pub delays: Vec<u32>,
    /// Report lines emitted.
    pub reports: Vec<u32>,
}

impl FakeBoard {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            // 13 ms per conversion: a 50 ms window sees exactly 4 reads
            ms_per_adc_read: 13,
            adc_script: VecDeque::new(),
            button_script: VecDeque::new(),
            indicator_history: Vec::new(),
            builtin_led_history: Vec::new(),
            delays: Vec::new(),
            reports: Vec::new(),
        }
    }

    pub fn script_adc(&mut self, samples: &[u16]) {
        self.adc_script.extend(samples.iter().copied());
    }

    pub fn script_button(&mut self, levels: &[bool]) {
        self.button_script.extend(levels.iter().copied());
    }
}

impl Board for FakeBoard {
    fn millis(&self) -> u32 {
        self.now_ms
    }

    fn read_mic(&mut self) -> u16 {
        let sample = self.adc_script.pop_front().unwrap_or(EXHAUSTED_ADC);
        self.now_ms = self.now_ms.wrapping_add(self.ms_per_adc_read);
        sample
    }

    fn button_pressed(&mut self) -> bool {
        self.button_script.pop_front().unwrap_or(false)
    }

    fn set_indicator(&mut self, on: bool) {
        self.indicator_history.push(on);
    }

    fn set_builtin_led(&mut self, on: bool) {
        self.builtin_led_history.push((self.now_ms, on));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now_ms = self.now_ms.wrapping_add(ms);
        self.delays.push(ms);
    }

    fn report(&mut self, peak_to_peak: u32) {
        self.reports.push(peak_to_peak);
    }
}
