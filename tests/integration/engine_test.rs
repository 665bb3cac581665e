use chrono::{DateTime, Duration, Local, TimeZone, Utc};

use cgmon::core::monitor::{
    AlertToggles, IconCategory, IngestOutcome, ReadingEngine, Sample, ThresholdPolicy,
};

const T0: i64 = 1_700_000_000_000;
const STEP_MS: i64 = 300_000; // five-minute CGM cadence

fn now() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_600, 0).unwrap()
}

fn tick(engine: &mut ReadingEngine, step: i64, value: f64, symbol: &str) -> IngestOutcome {
    engine.ingest(
        Sample::new(T0 + step * STEP_MS, value),
        symbol,
        &AlertToggles::default(),
        now(),
    )
}

fn predicted(seconds_ahead: i64) -> String {
    let at = now() + Duration::seconds(seconds_ahead);
    format!(
        "Predicted Low at {}!",
        at.with_timezone(&Local).format("%H:%M")
    )
}

// A full excursion fed through one engine: stable, climbing past urgent
// high, falling back through the bands into a low, then recovering.
// Exercises latch carry-over between phases, which the unit tests
// can't see.
#[test]
fn test_glucose_excursion_end_to_end() {
    let mut engine = ReadingEngine::new(ThresholdPolicy::default());

    // Stable and in range.
    let out = tick(&mut engine, 0, 6.2, "Flat");
    assert_eq!(out.display, "6.2 →");
    assert_eq!(out.icon, IconCategory::Green);
    assert!(out.alerts.is_empty());
    assert_eq!(out.previous_display, None);

    // A gentle rise is not alert-worthy.
    let out = tick(&mut engine, 1, 7.0, "FortyFiveUp");
    assert!(out.alerts.is_empty());
    assert_eq!(out.icon, IconCategory::Green);
    assert_eq!(out.previous_display.as_deref(), Some("6.2 →"));

    // The rise steepens into the high band.
    let out = tick(&mut engine, 2, 8.5, "SingleUp");
    assert_eq!(out.alerts, vec!["Rising fast! 8.5 ↑"]);
    assert_eq!(out.icon, IconCategory::Orange);
    assert_eq!(out.previous_display.as_deref(), Some("7.0 ↗"));

    // Still climbing: the rising latch holds through a steeper symbol.
    let out = tick(&mut engine, 3, 12.0, "DoubleUp");
    assert!(out.alerts.is_empty());
    assert_eq!(out.icon, IconCategory::Orange);

    // Crosses the urgent-high bound.
    let out = tick(&mut engine, 4, 16.0, "DoubleUp");
    assert_eq!(out.alerts, vec!["Urgent high! 16.0 ⇈"]);
    assert_eq!(out.icon, IconCategory::Red);

    // Plateau: same value, still urgent high, everything stays quiet.
    let out = tick(&mut engine, 5, 16.0, "Flat");
    assert!(out.alerts.is_empty());
    assert_eq!(out.icon, IconCategory::Red);
    assert_eq!(out.previous_display.as_deref(), Some("16.0 ⇈"));

    // The fall begins. 1.5 mmol/L per five minutes from 14.5 puts the
    // low crossing 2100 s out and the high bound 1300 s out.
    let out = tick(&mut engine, 6, 14.5, "SingleDown");
    assert_eq!(
        out.alerts,
        vec!["Falling fast! 14.5 ↓".to_string(), predicted(2100)]
    );
    assert_eq!(out.icon, IconCategory::Orange);
    assert_eq!(out.low_at, Some(now() + Duration::seconds(2100)));
    assert_eq!(out.in_range_at, Some(now() + Duration::seconds(1300)));
    assert_eq!(out.previous_display.as_deref(), Some("16.0 →"));

    // Faster fall: the falling latch holds but the prediction repeats
    // with a nearer ETA.
    let out = tick(&mut engine, 7, 11.5, "SingleDown");
    assert_eq!(out.alerts, vec![predicted(750)]);
    assert_eq!(out.low_at, Some(now() + Duration::seconds(750)));
    assert_eq!(out.in_range_at, Some(now() + Duration::seconds(350)));

    // Back in range. The range latch re-arms here and the in-range
    // projection clears, but the low prediction keeps tracking.
    let out = tick(&mut engine, 8, 7.5, "SingleDown");
    assert_eq!(out.alerts, vec![predicted(262)]);
    assert_eq!(out.icon, IconCategory::Green);
    assert_eq!(out.in_range_at, None);

    // The predicted low arrives. A value already below the bound
    // projects behind now, so the prediction stops.
    let out = tick(&mut engine, 9, 3.7, "DoubleDown");
    assert_eq!(out.alerts, vec!["Low! 3.7 ⇊"]);
    assert_eq!(out.icon, IconCategory::Red);
    assert_eq!(out.low_at, None);

    // Still low, still falling: both latches hold.
    let out = tick(&mut engine, 10, 3.5, "SingleDown");
    assert!(out.alerts.is_empty());
    assert_eq!(out.icon, IconCategory::Red);

    // Turning around. 0.25 mmol/L per five minutes from 3.75 reaches
    // the low bound in 300 s.
    let out = tick(&mut engine, 11, 3.75, "FortyFiveUp");
    assert!(out.alerts.is_empty());
    assert_eq!(out.in_range_at, Some(now() + Duration::seconds(300)));

    // Recovery crosses into range; the rebound is steep enough to
    // count as rising fast because the gentle tick above re-armed the
    // trend latch.
    let out = tick(&mut engine, 12, 4.25, "SingleUp");
    assert_eq!(out.alerts, vec!["Rising fast! 4.2 ↑"]);
    assert_eq!(out.icon, IconCategory::Green);
    assert_eq!(out.in_range_at, None);

    // Settled.
    let out = tick(&mut engine, 13, 5.5, "FortyFiveUp");
    assert!(out.alerts.is_empty());
    assert_eq!(out.icon, IconCategory::Green);
    assert_eq!(out.previous_display.as_deref(), Some("4.2 ↑"));
}

// A sensor outage mid-stream: the failure alert fires once, stays
// quiet over stuck duplicate polls, and re-arms after recovery.
#[test]
fn test_sensor_outage_and_recovery() {
    let mut engine = ReadingEngine::new(ThresholdPolicy::default());

    let out = tick(&mut engine, 0, 5.5, "Flat");
    assert!(out.alerts.is_empty());

    let out = tick(&mut engine, 1, 5.5, "");
    assert_eq!(out.alerts, vec!["Failed to get BG direction. 5.5"]);
    assert_eq!(out.display, "5.5 -");

    // The source is stuck: same entry returned again.
    let out = tick(&mut engine, 1, 5.5, "");
    assert!(out.alerts.is_empty());

    let out = tick(&mut engine, 2, 5.6, "Flat");
    assert!(out.alerts.is_empty());
    assert_eq!(out.display, "5.6 →");

    let out = tick(&mut engine, 3, 5.4, "NOT COMPUTABLE");
    assert_eq!(out.alerts, vec!["Failed to get BG direction. 5.4"]);
}

// The outcome is what `watch --json` prints, so its shape is a small
// contract.
#[test]
fn test_outcome_serializes_for_json_output() {
    let mut engine = ReadingEngine::new(ThresholdPolicy::default());
    tick(&mut engine, 0, 10.0, "SingleDown");
    let out = tick(&mut engine, 1, 8.5, "SingleDown");

    let value = serde_json::to_value(&out).unwrap();
    assert_eq!(value["display"], "8.5 ↓");
    assert_eq!(value["icon"], "orange");
    assert_eq!(value["trend"], "Falling");
    assert!(value["alerts"].is_array());
    assert!(value["low_at"].is_string());
    assert_eq!(value["previous_display"], "10.0 ↓");
}
