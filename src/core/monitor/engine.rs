//! The reading state machine.
//!
//! One engine instance owns the current and previous sample, the
//! resolved trend, the two crossing projections, and the alert latches.
//! Feeding it one sample at a time through [`ReadingEngine::ingest`]
//! yields everything a frontend needs for that cycle: display strings,
//! an icon category, indicator instants, and the alerts to deliver.

use chrono::{DateTime, Duration, Local, Utc};
use serde::Serialize;

use super::alerts::{AlertCategory, AlertToggles};
use super::projection;
use super::sample::Sample;
use super::thresholds::{Classification, ThresholdPolicy};
use super::trend::Trend;

/// A projected low crossing only alerts (and shows) while it lies less
/// than this far ahead of now.
const PREDICTED_LOW_WINDOW_SECS: i64 = 3600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RangeAlertKind {
    None,
    Low,
    UrgentHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrendAlertKind {
    None,
    Rising,
    Falling,
    Failed,
}

/// Traffic-light category for the current reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Red,
    Orange,
    Green,
}

/// Everything one ingest produces for rendering and notification.
#[derive(Debug, Clone, Serialize)]
pub struct IngestOutcome {
    pub display: String,
    pub previous_display: Option<String>,
    pub trend: Trend,
    pub icon: IconCategory,
    pub alerts: Vec<String>,
    pub low_at: Option<DateTime<Utc>>,
    pub in_range_at: Option<DateTime<Utc>>,
}

/// Single-series reading engine. Exclusively owned by its poll loop;
/// every mutation goes through `ingest`.
pub struct ReadingEngine {
    thresholds: ThresholdPolicy,
    current: Sample,
    previous: Sample,
    trend: Trend,
    last_range_alert: RangeAlertKind,
    last_trend_alert: TrendAlertKind,
    projected_low: Option<DateTime<Utc>>,
    projected_in_range: Option<DateTime<Utc>>,
    previous_display: Option<String>,
}

impl ReadingEngine {
    pub fn new(thresholds: ThresholdPolicy) -> Self {
        Self {
            thresholds,
            current: Sample::default(),
            previous: Sample::default(),
            trend: Trend::Unknown,
            last_range_alert: RangeAlertKind::None,
            last_trend_alert: TrendAlertKind::None,
            projected_low: None,
            projected_in_range: None,
            previous_display: None,
        }
    }

    /// Consume one raw reading and produce this cycle's outputs.
    ///
    /// Alert dedup state lives entirely in the engine; callers only
    /// decide what to do with the returned alert strings. `now` is
    /// injected so projections and windows are testable.
    pub fn ingest(
        &mut self,
        sample: Sample,
        symbol: &str,
        toggles: &AlertToggles,
        now: DateTime<Utc>,
    ) -> IngestOutcome {
        // The previous-reading line keeps the glyph the old reading was
        // displayed with, so capture it before the trend updates.
        if self.current.timestamp_ms > 0 && self.current.timestamp_ms != sample.timestamp_ms {
            self.previous_display = Some(format_reading(self.current.value, self.trend.glyph()));
        }
        self.trend = Trend::resolve(symbol);

        self.previous = self.current;
        self.current = sample;

        // A duplicate poll keeps the prior projection instead of
        // clearing it; only a genuinely newer sample recomputes.
        if self.current.timestamp_ms != self.previous.timestamp_ms {
            self.projected_low =
                projection::low_crossing(self.previous, self.current, self.thresholds.low, now);
        }

        let classification = self.thresholds.classify(self.current.value);
        let alerts = self.collect_alerts(classification, toggles, now);

        if self.current.timestamp_ms != self.previous.timestamp_ms {
            self.projected_in_range =
                projection::in_range_crossing(self.previous, self.current, &self.thresholds, now);
        }

        IngestOutcome {
            display: format_reading(self.current.value, self.trend.glyph()),
            previous_display: self.previous_display.clone(),
            trend: self.trend,
            icon: match classification {
                Classification::Low | Classification::UrgentHigh => IconCategory::Red,
                Classification::High => IconCategory::Orange,
                Classification::InRange => IconCategory::Green,
            },
            alerts,
            low_at: self.predicted_low_within_window(now),
            in_range_at: self.projected_in_range.filter(|at| *at > now),
        }
    }

    /// Evaluation order: direction failure, rising/falling fast,
    /// low/urgent high, predicted low. Several categories can co-fire
    /// in one cycle.
    fn collect_alerts(
        &mut self,
        classification: Classification,
        toggles: &AlertToggles,
        now: DateTime<Utc>,
    ) -> Vec<String> {
        let mut alerts = Vec::new();
        let value = self.current.value;
        let glyph = self.trend.glyph();

        if self.trend.is_unknown() {
            // Not toggleable: a source that stops reporting direction
            // should always be heard about, once.
            if self.last_trend_alert != TrendAlertKind::Failed {
                alerts.push(format!("Failed to get BG direction. {:.1}", value));
                self.last_trend_alert = TrendAlertKind::Failed;
            }
        } else {
            if self.last_trend_alert == TrendAlertKind::Failed {
                self.last_trend_alert = TrendAlertKind::None;
            }
            if value != self.previous.value {
                if self.trend.is_rising() {
                    if self.last_trend_alert != TrendAlertKind::Rising
                        && toggles.enabled(AlertCategory::RisingFast)
                    {
                        alerts.push(format!("Rising fast! {:.1} {}", value, glyph));
                        self.last_trend_alert = TrendAlertKind::Rising;
                    }
                } else if self.trend.is_falling() {
                    if self.last_trend_alert != TrendAlertKind::Falling
                        && toggles.enabled(AlertCategory::FallingFast)
                    {
                        alerts.push(format!("Falling fast! {:.1} {}", value, glyph));
                        self.last_trend_alert = TrendAlertKind::Falling;
                    }
                } else {
                    self.last_trend_alert = TrendAlertKind::None;
                }
            }
        }

        match classification {
            Classification::Low => {
                if self.last_range_alert != RangeAlertKind::Low
                    && toggles.enabled(AlertCategory::Low)
                {
                    alerts.push(format!("Low! {:.1} {}", value, glyph));
                    self.last_range_alert = RangeAlertKind::Low;
                }
            }
            Classification::UrgentHigh => {
                if self.last_range_alert != RangeAlertKind::UrgentHigh
                    && toggles.enabled(AlertCategory::UrgentHigh)
                {
                    alerts.push(format!("Urgent high! {:.1} {}", value, glyph));
                    self.last_range_alert = RangeAlertKind::UrgentHigh;
                }
            }
            Classification::InRange => {
                self.last_range_alert = RangeAlertKind::None;
            }
            // High is worth an orange icon but not an alert, and it
            // does not re-arm the range latch either.
            Classification::High => {}
        }

        // Refreshed every cycle while the crossing stays inside the
        // window: the ETA moves, so repeats are wanted here.
        if toggles.enabled(AlertCategory::PredictedLow) {
            if let Some(at) = self.predicted_low_within_window(now) {
                alerts.push(format!(
                    "Predicted Low at {}!",
                    at.with_timezone(&Local).format("%H:%M")
                ));
            }
        }

        alerts
    }

    fn predicted_low_within_window(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.projected_low
            .filter(|at| *at > now && *at < now + Duration::seconds(PREDICTED_LOW_WINDOW_SECS))
    }
}

/// One decimal place plus the trend glyph, e.g. `5.6 →`.
pub fn format_reading(value: f64, glyph: &str) -> String {
    format!("{:.1} {}", value, glyph)
}
