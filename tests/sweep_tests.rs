//! Frequency ramp tests.

use tone_sweep_meter::FrequencyRamp;

#[test]
fn starts_at_base_frequency() {
    let ramp = FrequencyRamp::new(0);
    assert_eq!(ramp.count(), 0);
    assert_eq!(ramp.frequency_hz(), 100);
}

#[test]
fn does_not_fire_at_exactly_the_interval() {
    // Strictly-greater-than comparison: 2000 ms elapsed is not enough.
    let mut ramp = FrequencyRamp::new(0);
    assert_eq!(ramp.tick(1999), None);
    assert_eq!(ramp.tick(2000), None);
    assert_eq!(ramp.tick(2001), Some(150));
}

#[test]
fn steps_by_50_hz_per_interval() {
    let mut ramp = FrequencyRamp::new(0);

    assert_eq!(ramp.tick(2001), Some(150));
    assert_eq!(ramp.tick(4002), Some(200));
    assert_eq!(ramp.tick(6003), Some(250));
    assert_eq!(ramp.count(), 3);
}

#[test]
fn timer_resets_on_fire() {
    let mut ramp = FrequencyRamp::new(1000);

    // Fires late at 5000; the next interval is measured from 5000.
    assert_eq!(ramp.tick(5000), Some(150));
    assert_eq!(ramp.tick(7000), None);
    assert_eq!(ramp.tick(7001), Some(200));
}

#[test]
fn polling_between_intervals_is_free() {
    let mut ramp = FrequencyRamp::new(0);

    for now in (0..=2000).step_by(50) {
        assert_eq!(ramp.tick(now), None);
    }
    assert_eq!(ramp.count(), 0);
    assert_eq!(ramp.tick(2050), Some(150));
}

#[test]
fn survives_clock_wraparound() {
    let start = u32::MAX - 500;
    let mut ramp = FrequencyRamp::new(start);

    assert_eq!(ramp.tick(start.wrapping_add(2000)), None);
    assert_eq!(ramp.tick(start.wrapping_add(2001)), Some(150));
}
