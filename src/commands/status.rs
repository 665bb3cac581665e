use anyhow::Result;
use chrono::Utc;
use clap::ArgMatches;
use colored::Colorize;
use log::warn;

use super::common::{resolve_thresholds, resolve_url, warn_inconsistent_thresholds};
use crate::core::monitor::{AlertToggles, ReadingEngine};
use crate::core::{Config, NightscoutClient, Settings};
use crate::ui::formatters::{format_clock, format_clock_ms, paint_reading};

/// Fetch the latest reading once, run it through a fresh engine, and
/// print the result. Never sends notifications.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let url = resolve_url(matches, &config)?;
    let thresholds = resolve_thresholds(matches, &config);
    warn_inconsistent_thresholds(&thresholds);

    let client = NightscoutClient::new(&url)?;
    let entry = client.latest_entry()?;

    let toggles = match Settings::open_default() {
        Ok(settings) => settings.alert_toggles().unwrap_or_else(|e| {
            warn!("Falling back to default alert settings: {}", e);
            AlertToggles::default()
        }),
        Err(e) => {
            warn!("Settings store unavailable, alerts default to enabled: {}", e);
            AlertToggles::default()
        }
    };

    let mut engine = ReadingEngine::new(thresholds);
    let outcome = engine.ingest(entry.to_sample(), &entry.direction, &toggles, Utc::now());

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    println!(
        "{} {}",
        paint_reading(&outcome.display, outcome.icon),
        format!("as of {}", format_clock_ms(entry.timestamp_ms)).dimmed()
    );
    if let Some(at) = outcome.low_at {
        println!("{}", format!("Predicted low at {}", format_clock(at)).red());
    }
    if let Some(at) = outcome.in_range_at {
        println!(
            "{}",
            format!("Back in range at {}", format_clock(at)).cyan()
        );
    }
    for alert in &outcome.alerts {
        println!("{} {}", "!".red().bold(), alert);
    }

    Ok(())
}
