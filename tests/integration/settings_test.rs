use tempfile::TempDir;

use cgmon::core::monitor::AlertCategory;
use cgmon::core::settings::Settings;

#[test]
fn test_fresh_store_enables_everything() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::open(dir.path().join("settings.db")).unwrap();

    let toggles = settings.alert_toggles().unwrap();
    for category in AlertCategory::ALL {
        assert!(toggles.enabled(category), "{} should default on", category.slug());
    }
    assert!(settings.show_value().unwrap());
}

#[test]
fn test_toggles_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.db");

    {
        let settings = Settings::open(&path).unwrap();
        settings
            .set_alert_enabled(AlertCategory::PredictedLow, false)
            .unwrap();
        settings
            .set_alert_enabled(AlertCategory::RisingFast, false)
            .unwrap();
        settings.set_show_value(false).unwrap();
    }

    let settings = Settings::open(&path).unwrap();
    let toggles = settings.alert_toggles().unwrap();
    assert!(!toggles.enabled(AlertCategory::PredictedLow));
    assert!(!toggles.enabled(AlertCategory::RisingFast));
    assert!(toggles.enabled(AlertCategory::Low));
    assert!(toggles.enabled(AlertCategory::FallingFast));
    assert!(toggles.enabled(AlertCategory::UrgentHigh));
    assert!(!settings.show_value().unwrap());
}

#[test]
fn test_re_enabling_overwrites() {
    let dir = TempDir::new().unwrap();
    let settings = Settings::open(dir.path().join("settings.db")).unwrap();

    settings
        .set_alert_enabled(AlertCategory::Low, false)
        .unwrap();
    settings
        .set_alert_enabled(AlertCategory::Low, true)
        .unwrap();
    assert!(settings.alert_enabled(AlertCategory::Low).unwrap());
}

#[test]
fn test_slugs_match_cli_names() {
    // The slugs double as CLI argument values and storage keys.
    assert_eq!(AlertCategory::from_slug("predicted-low"), Some(AlertCategory::PredictedLow));
    assert_eq!(AlertCategory::from_slug("low"), Some(AlertCategory::Low));
    assert_eq!(AlertCategory::from_slug("falling-fast"), Some(AlertCategory::FallingFast));
    assert_eq!(AlertCategory::from_slug("urgent-high"), Some(AlertCategory::UrgentHigh));
    assert_eq!(AlertCategory::from_slug("rising-fast"), Some(AlertCategory::RisingFast));
    assert_eq!(AlertCategory::from_slug("bogus"), None);
}
