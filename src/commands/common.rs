use anyhow::{Context, Result};
use clap::ArgMatches;
use log::warn;

use crate::core::monitor::ThresholdPolicy;
use crate::core::Config;

/// Effective thresholds for this invocation: flag, then config file,
/// then built-in default. Flags are never persisted.
pub(crate) fn resolve_thresholds(matches: &ArgMatches, config: &Config) -> ThresholdPolicy {
    ThresholdPolicy::new(
        matches
            .get_one::<f64>("urgent-high")
            .copied()
            .unwrap_or(config.urgent_high),
        matches
            .get_one::<f64>("high")
            .copied()
            .unwrap_or(config.high),
        matches.get_one::<f64>("low").copied().unwrap_or(config.low),
    )
}

/// Effective URL: flag, then config file. Having neither is the one
/// fatal startup error.
pub(crate) fn resolve_url(matches: &ArgMatches, config: &Config) -> Result<String> {
    matches
        .get_one::<String>("url")
        .cloned()
        .or_else(|| config.url.clone())
        .context("No Nightscout URL configured. Pass --url or run 'cgmon config set url <URL>'")
}

pub(crate) fn warn_inconsistent_thresholds(thresholds: &ThresholdPolicy) {
    if !thresholds.is_consistent() {
        warn!(
            "Threshold bounds look inconsistent (low {} high {} urgent-high {}); low takes precedence",
            thresholds.low, thresholds.high, thresholds.urgent_high
        );
    }
}
