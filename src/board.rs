//! Hardware seam for the control loop.
//!
//! The loop never touches a peripheral driver directly; everything it
//! needs from the device goes through [`Board`]. The firmware implements
//! it over ESP-IDF drivers, the test harness over a scripted fake.

/// Peripheral access required by one loop iteration.
///
/// The millisecond clock is monotonic and wraps at `u32::MAX`; callers
/// must use wrapping subtraction for elapsed-time checks.
pub trait Board {
    /// Milliseconds since boot.
    fn millis(&self) -> u32;

    /// One raw microphone ADC conversion (10-bit range expected).
    fn read_mic(&mut self) -> u16;

    /// Button line level: `true` while the line reads low (pressed,
    /// given pull-up wiring).
    fn button_pressed(&mut self) -> bool;

    /// Drive the mode indicator line.
    fn set_indicator(&mut self, on: bool);

    /// Drive the builtin LED (readiness blink).
    fn set_builtin_led(&mut self, on: bool);

    /// Blocking delay.
    fn delay_ms(&mut self, ms: u32);

    /// Emit one peak-to-peak report line on the serial console.
    fn report(&mut self, peak_to_peak: u32);
}
