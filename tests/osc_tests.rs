//! Oscillator and tone command tests.

use tone_sweep_meter::audio::params::{ToneParams, GAIN_MAX};
use tone_sweep_meter::SineOsc;

const SAMPLE_RATE: u32 = 44_100;

#[test]
fn silent_at_zero_gain() {
    let mut osc = SineOsc::new(440, SAMPLE_RATE);

    for _ in 0..200 {
        assert_eq!(osc.next_sample(), 0);
    }
}

#[test]
fn produces_audio_at_full_gain() {
    let mut osc = SineOsc::new(440, SAMPLE_RATE);
    osc.set_gain(GAIN_MAX);

    let nonzero = (0..200).filter(|_| osc.next_sample() != 0).count();
    assert!(nonzero > 150, "expected mostly nonzero samples");
}

#[test]
fn gain_scales_output() {
    let mut full = SineOsc::new(440, SAMPLE_RATE);
    full.set_gain(GAIN_MAX);
    let mut half = SineOsc::new(440, SAMPLE_RATE);
    half.set_gain(GAIN_MAX / 2);

    let full_peak = (0..500).map(|_| full.next_sample().abs() as i32).max().unwrap();
    let half_peak = (0..500).map(|_| half.next_sample().abs() as i32).max().unwrap();

    assert!(full_peak > 32_000);
    let ratio = full_peak as f64 / half_peak as f64;
    assert!((ratio - 2.0).abs() < 0.05, "ratio {}", ratio);
}

#[test]
fn completes_one_cycle_at_expected_rate() {
    // 4410 Hz at 44100 samples/s: one cycle every 10 samples.
    let mut osc = SineOsc::new(4410, SAMPLE_RATE);
    osc.set_gain(GAIN_MAX);

    let samples: Vec<i16> = (0..10).map(|_| osc.next_sample()).collect();
    assert!(samples.iter().any(|&s| s > 10_000));
    assert!(samples.iter().any(|&s| s < -10_000));
}

#[test]
fn phase_is_continuous() {
    let mut osc = SineOsc::new(700, SAMPLE_RATE);
    osc.set_gain(GAIN_MAX);

    let mut prev = osc.next_sample();
    for _ in 0..500 {
        let next = osc.next_sample();
        let diff = (next as i32 - prev as i32).abs();
        assert!(diff < 4000, "phase jump: {} -> {}", prev, next);
        prev = next;
    }
}

#[test]
fn phase_advances_while_muted() {
    // Muting must not freeze the waveform position.
    let mut muted = SineOsc::new(700, SAMPLE_RATE);
    let mut loud = SineOsc::new(700, SAMPLE_RATE);
    loud.set_gain(GAIN_MAX);

    for _ in 0..137 {
        muted.next_sample();
        loud.next_sample();
    }

    muted.set_gain(GAIN_MAX);
    assert_eq!(muted.next_sample(), loud.next_sample());
}

#[test]
fn fill_latches_commands_per_block() {
    let params = ToneParams::new(100);
    params.set_amplitude(1.0);

    let mut osc = SineOsc::new(440, SAMPLE_RATE);
    let mut block = [0i16; 64];

    osc.fill(&params, &mut block);
    assert!(block.iter().any(|&s| s != 0));

    params.set_amplitude(0.0);
    osc.fill(&params, &mut block);
    assert!(block.iter().all(|&s| s == 0));
}

#[test]
fn params_frequency_roundtrip() {
    let params = ToneParams::new(100);
    assert_eq!(params.frequency_hz(), 100);

    params.set_frequency(150);
    assert_eq!(params.frequency_hz(), 150);
}

#[test]
fn params_amplitude_mapping() {
    let params = ToneParams::new(100);

    params.set_amplitude(0.0);
    assert_eq!(params.gain(), 0);

    params.set_amplitude(1.0);
    assert_eq!(params.gain(), GAIN_MAX);

    // Startup amplitude 0.1 maps to 6553/65535
    params.set_amplitude(0.1);
    assert_eq!(params.gain(), 6553);
}

#[test]
fn params_amplitude_clamped() {
    let params = ToneParams::new(100);

    params.set_amplitude(2.5);
    assert_eq!(params.gain(), GAIN_MAX);

    params.set_amplitude(-1.0);
    assert_eq!(params.gain(), 0);
}
