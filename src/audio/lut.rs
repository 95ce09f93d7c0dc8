//! Sine wave lookup table for tone synthesis.
//!
//! 512-entry table covering one full cycle at full i16 amplitude,
//! const-evaluated so it lives in flash.

/// Number of entries in the sine LUT.
pub const LUT_SIZE: usize = 512;

/// Bits of phase-accumulator index: `32 - LUT_INDEX_BITS` is the shift
/// that maps a 32-bit phase onto a table index.
pub const LUT_INDEX_BITS: u32 = 9;

/// One cycle of sine, -32767..=32767.
pub static SINE_LUT: [i16; LUT_SIZE] = build_lut();

const fn build_lut() -> [i16; LUT_SIZE] {
    let mut table = [0i16; LUT_SIZE];
    let mut i = 0;
    while i < LUT_SIZE {
        let angle = (i as f64) * core::f64::consts::PI * 2.0 / (LUT_SIZE as f64);
        table[i] = (const_sin(angle) * 32767.0) as i16;
        i += 1;
    }
    table
}

/// Const-compatible sine approximation (Taylor series, 9th order).
///
/// The argument is folded into [-π/2, π/2] before the expansion; the
/// raw series drifts visibly near ±π (hundreds of counts at full
/// scale), inside the folded range the error stays below one count.
const fn const_sin(x: f64) -> f64 {
    // Normalize to [-π, π]
    let mut x = x;
    while x > core::f64::consts::PI {
        x -= 2.0 * core::f64::consts::PI;
    }
    while x < -core::f64::consts::PI {
        x += 2.0 * core::f64::consts::PI;
    }

    // Fold into [-π/2, π/2]: sin(π - x) = sin(x)
    if x > core::f64::consts::FRAC_PI_2 {
        x = core::f64::consts::PI - x;
    } else if x < -core::f64::consts::FRAC_PI_2 {
        x = -core::f64::consts::PI - x;
    }

    let x2 = x * x;
    let x3 = x2 * x;
    let x5 = x3 * x2;
    let x7 = x5 * x2;
    let x9 = x7 * x2;

    x - x3 / 6.0 + x5 / 120.0 - x7 / 5040.0 + x9 / 362880.0
}
