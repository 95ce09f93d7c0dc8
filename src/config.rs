//! Compile-time parameters.
//!
//! There is no runtime configuration surface: no CLI, no file, no
//! environment. Everything tunable lives here as a `const`.

/// Sample window width in milliseconds (50 ms resolves down to 20 Hz).
pub const SAMPLE_WINDOW_MS: u32 = 50;

/// Interval between frequency ramp steps, milliseconds.
pub const RAMP_INTERVAL_MS: u32 = 2000;

/// Tone frequency at ramp count zero, Hz.
pub const BASE_FREQ_HZ: u32 = 100;

/// Frequency added per completed ramp interval, Hz.
pub const FREQ_STEP_HZ: u32 = 50;

/// Oscillator amplitude commanded at the end of setup (normalized 0..1).
pub const STARTUP_AMPLITUDE: f32 = 0.1;

/// Duration of the readiness blink on the builtin LED, milliseconds.
pub const STARTUP_BLINK_MS: u32 = 1000;

/// Serial console baud rate.
pub const SERIAL_BAUD: u32 = 115_200;

/// Synthesis sample rate for the tone render path, Hz.
pub const SAMPLE_RATE_HZ: u32 = 44_100;

/// Samples per render block handed to the DAC path.
pub const RENDER_BLOCK_SAMPLES: usize = 128;

/// Microphone ADC resolution in bits.
pub const ADC_BITS: u32 = 10;

/// ADC1 channel for the microphone (channel 0 = GPIO36 on classic ESP32).
pub const MIC_ADC1_CHANNEL: u32 = 0;

/// UART TX GPIO for the report/diagnostics link.
pub const SERIAL_TX_GPIO: i32 = 17;

/// Button input GPIO (internal pull-up, pressed = low).
pub const BUTTON_GPIO: i32 = 2;

/// Mode indicator LED GPIO (mirrors the toggle state).
pub const INDICATOR_GPIO: i32 = 3;

/// Builtin LED GPIO (readiness blink only).
pub const BUILTIN_LED_GPIO: i32 = 4;
