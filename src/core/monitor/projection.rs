//! Linear extrapolation of threshold crossings from two samples.
//!
//! Both projections truncate to whole seconds and never produce NaN or
//! infinity: any degenerate input (duplicate timestamps, sub-second
//! gaps, flat values, no real previous sample yet) yields `None`, as
//! does a crossing too far out for the clock to represent.

use chrono::{DateTime, Duration, Utc};

use super::sample::Sample;
use super::thresholds::{Classification, ThresholdPolicy};

/// Projects when a falling series will cross the low bound.
///
/// The elapsed time keeps its sign, so a sample pair with reversed
/// timestamps projects into the past and falls outside any display
/// window. Returns `None` for a non-falling value (the indicator is
/// cleared, not retained).
pub fn low_crossing(
    previous: Sample,
    current: Sample,
    low: f64,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if previous.timestamp_ms <= 0 || current.timestamp_ms == previous.timestamp_ms {
        return None;
    }
    if current.value >= previous.value {
        return None;
    }
    let elapsed = (current.timestamp_ms - previous.timestamp_ms) / 1000;
    if elapsed == 0 {
        return None;
    }
    let rate = (previous.value - current.value) / elapsed as f64;
    if rate == 0.0 {
        return None;
    }
    let seconds = ((current.value - low) / rate) as i64;
    Duration::try_seconds(seconds).and_then(|delta| now.checked_add_signed(delta))
}

/// Projects when an out-of-range series will come back into range: the
/// high bound for a falling high reading, the low bound for a rising
/// low reading, no projection otherwise.
///
/// Unlike [`low_crossing`] this uses the unsigned magnitude of both the
/// elapsed time and the rate.
pub fn in_range_crossing(
    previous: Sample,
    current: Sample,
    policy: &ThresholdPolicy,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    if previous.timestamp_ms <= 0 || current.timestamp_ms == previous.timestamp_ms {
        return None;
    }
    let elapsed = ((current.timestamp_ms - previous.timestamp_ms) / 1000).abs();
    if elapsed == 0 {
        return None;
    }
    let rate = ((previous.value - current.value) / elapsed as f64).abs();
    if rate == 0.0 {
        return None;
    }
    let seconds = match policy.classify(current.value) {
        Classification::High | Classification::UrgentHigh if current.value < previous.value => {
            ((current.value - policy.high) / rate) as i64
        }
        Classification::Low if current.value > previous.value => {
            ((policy.low - current.value) / rate) as i64
        }
        _ => return None,
    };
    Duration::try_seconds(seconds).and_then(|delta| now.checked_add_signed(delta))
}
