use cgmon::core::monitor::{Classification, ThresholdPolicy};

#[test]
fn test_default_bands() {
    let policy = ThresholdPolicy::default();
    assert_eq!(policy.low, 4.0);
    assert_eq!(policy.high, 8.0);
    assert_eq!(policy.urgent_high, 15.0);
    assert!(policy.is_consistent());
}

#[test]
fn test_band_edges() {
    let policy = ThresholdPolicy::default();
    // Low is exclusive of its bound, the high bands are inclusive.
    assert_eq!(policy.classify(3.999), Classification::Low);
    assert_eq!(policy.classify(4.0), Classification::InRange);
    assert_eq!(policy.classify(7.999), Classification::InRange);
    assert_eq!(policy.classify(8.0), Classification::High);
    assert_eq!(policy.classify(14.999), Classification::High);
    assert_eq!(policy.classify(15.0), Classification::UrgentHigh);
}

#[test]
fn test_custom_bands() {
    let policy = ThresholdPolicy::new(13.5, 9.0, 4.5);
    assert!(policy.is_consistent());
    assert_eq!(policy.classify(4.4), Classification::Low);
    assert_eq!(policy.classify(4.5), Classification::InRange);
    assert_eq!(policy.classify(8.5), Classification::InRange);
    assert_eq!(policy.classify(9.0), Classification::High);
    assert_eq!(policy.classify(13.5), Classification::UrgentHigh);
}

#[test]
fn test_high_equal_to_urgent_high_skips_high_band() {
    // Collapsing the bands is allowed: everything at or above the
    // shared bound is urgent.
    let policy = ThresholdPolicy::new(10.0, 10.0, 4.0);
    assert!(policy.is_consistent());
    assert_eq!(policy.classify(9.9), Classification::InRange);
    assert_eq!(policy.classify(10.0), Classification::UrgentHigh);
    assert_eq!(policy.classify(11.0), Classification::UrgentHigh);
}

#[test]
fn test_extreme_sensor_values() {
    let policy = ThresholdPolicy::default();
    // The Dexcom clamp range is roughly 2.2 to 22.2 mmol/L.
    assert_eq!(policy.classify(2.2), Classification::Low);
    assert_eq!(policy.classify(22.2), Classification::UrgentHigh);
    assert_eq!(policy.classify(0.0), Classification::Low);
}
