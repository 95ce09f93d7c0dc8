//! The control loop.
//!
//! One fixed-period iteration: mirror the toggle on the indicator,
//! poll the button, busy-wait a 50 ms microphone window, report the
//! peak-to-peak, poll the frequency ramp. Runs until power-off.

use crate::audio::params::ToneParams;
use crate::board::Board;
use crate::button::ModeToggle;
use crate::config::{BASE_FREQ_HZ, SAMPLE_WINDOW_MS, STARTUP_AMPLITUDE, STARTUP_BLINK_MS};
use crate::logging::LogQueue;
use crate::meter::measure_window;
use crate::sweep::FrequencyRamp;
use crate::{log_debug, log_info};

/// Loop state, initialized once at startup and never torn down.
///
/// The sketch is the queue's only producer; diagnostics are drained by
/// whoever owns the serial link, once per loop turn.
pub struct Sketch<'q> {
    toggle: ModeToggle,
    ramp: FrequencyRamp,
    log: &'q LogQueue,
}

impl<'q> Sketch<'q> {
    /// One-time startup sequence.
    ///
    /// Commands the oscillator to base frequency / muted, blinks the
    /// builtin LED for one blocking second as the readiness signal,
    /// starts the ramp timer, then commands the audible amplitude.
    /// Peripheral configuration happens before this on the device side
    /// and is assumed to have succeeded.
    pub fn setup<B: Board>(board: &mut B, tone: &ToneParams, log: &'q LogQueue) -> Self {
        tone.set_frequency(BASE_FREQ_HZ);
        tone.set_amplitude(0.0); // Start muted

        log_info!(
            log,
            board.millis(),
            "microphone ready, tone base {} Hz",
            BASE_FREQ_HZ
        );

        board.set_builtin_led(true);
        board.delay_ms(STARTUP_BLINK_MS);
        board.set_builtin_led(false);

        let ramp = FrequencyRamp::new(board.millis());
        tone.set_amplitude(STARTUP_AMPLITUDE);

        Self {
            toggle: ModeToggle::new(),
            ramp,
            log,
        }
    }

    /// One loop iteration.
    pub fn loop_iter<B: Board>(&mut self, board: &mut B, tone: &ToneParams) {
        let indicator = self.toggle.state();
        board.set_indicator(indicator);

        let pressed = board.button_pressed();
        let state = self.toggle.poll(pressed, tone);
        if pressed {
            log_debug!(self.log, board.millis(), "mode toggled to {}", state);
        }

        let peak_to_peak = measure_window(board, SAMPLE_WINDOW_MS);
        board.report(peak_to_peak);

        // The ramp ignores the mute toggle: frequency climbs either way.
        if let Some(freq_hz) = self.ramp.tick(board.millis()) {
            tone.set_frequency(freq_hz);
            log_debug!(
                self.log,
                board.millis(),
                "ramp {} -> {} Hz",
                self.ramp.count(),
                freq_hz
            );
        }
    }

    /// Current mode toggle state.
    pub fn mode(&self) -> bool {
        self.toggle.state()
    }

    /// Completed ramp intervals so far.
    pub fn ramp_count(&self) -> u32 {
        self.ramp.count()
    }
}
