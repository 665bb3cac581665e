use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::ArgMatches;
use colored::Colorize;
use log::{info, warn};

use super::common::{resolve_thresholds, resolve_url, warn_inconsistent_thresholds};
use crate::core::monitor::{IngestOutcome, ReadingEngine};
use crate::core::notify::{AlertSink, DesktopNotifier, LogNotifier};
use crate::core::{Config, NightscoutClient, Settings};
use crate::ui::formatters::{format_clock, format_clock_ms, paint_reading};

/// Poll the Nightscout site until Ctrl-C, rendering one line per tick
/// and dispatching whatever alerts each ingest produces.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let url = resolve_url(matches, &config)?;
    let thresholds = resolve_thresholds(matches, &config);
    warn_inconsistent_thresholds(&thresholds);

    let interval = matches.get_one::<u64>("interval").copied().unwrap_or(60);
    let json_output = matches.get_flag("json");
    let client = NightscoutClient::new(&url)?;
    let settings = match Settings::open_default() {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!("Settings store unavailable, alerts default to enabled: {}", e);
            None
        }
    };
    let sink = pick_sink(matches.get_flag("no-notify"));
    let mut engine = ReadingEngine::new(thresholds);

    let running = Arc::new(AtomicBool::new(true));
    let handler_flag = running.clone();
    ctrlc::set_handler(move || {
        handler_flag.store(false, Ordering::SeqCst);
    })
    .context("Failed to set Ctrl-C handler")?;

    if !json_output {
        println!(
            "{} {} {}",
            "Watching".white().bold(),
            url.cyan(),
            format!("every {}s (Ctrl-C to stop)", interval).dimmed()
        );
    }

    while running.load(Ordering::SeqCst) {
        tick(&client, settings.as_ref(), &mut engine, sink.as_ref(), json_output);
        sleep_interruptibly(interval, &running);
    }

    if !json_output {
        println!("{}", "Stopped.".dimmed());
    }
    Ok(())
}

/// One poll cycle. Fetch problems are logged and skipped; the engine
/// keeps its prior state for the next tick.
fn tick(
    client: &NightscoutClient,
    settings: Option<&Settings>,
    engine: &mut ReadingEngine,
    sink: &dyn AlertSink,
    json_output: bool,
) {
    let entry = match client.latest_entry() {
        Ok(entry) => entry,
        Err(e) => {
            warn!("Skipping reading: {}", e);
            return;
        }
    };

    // Re-read per tick so toggle changes apply without a restart.
    let toggles = settings
        .and_then(|s| match s.alert_toggles() {
            Ok(toggles) => Some(toggles),
            Err(e) => {
                warn!("Falling back to default alert settings: {}", e);
                None
            }
        })
        .unwrap_or_default();
    let show_value = settings.and_then(|s| s.show_value().ok()).unwrap_or(true);

    let outcome = engine.ingest(entry.to_sample(), &entry.direction, &toggles, Utc::now());

    if json_output {
        match serde_json::to_string(&outcome) {
            Ok(line) => println!("{}", line),
            Err(e) => warn!("Failed to serialize outcome: {}", e),
        }
    } else {
        render_tick(entry.timestamp_ms, &outcome, show_value);
    }

    for alert in &outcome.alerts {
        if let Err(e) = sink.deliver(alert) {
            warn!("Failed to deliver alert: {}", e);
        }
    }
}

fn render_tick(entry_timestamp_ms: i64, outcome: &IngestOutcome, show_value: bool) {
    let clock = format_clock_ms(entry_timestamp_ms);
    let reading = if show_value {
        outcome.display.clone()
    } else {
        outcome.trend.glyph().to_string()
    };

    let mut line = format!("{}  {}", clock.dimmed(), paint_reading(&reading, outcome.icon));
    if let Some(previous) = &outcome.previous_display {
        line.push_str(&format!("  {}", format!("(prev {})", previous).dimmed()));
    }
    if let Some(at) = outcome.low_at {
        line.push_str(&format!(
            "  {}",
            format!("low at {}", format_clock(at)).red()
        ));
    }
    if let Some(at) = outcome.in_range_at {
        line.push_str(&format!(
            "  {}",
            format!("in range at {}", format_clock(at)).cyan()
        ));
    }
    println!("{}", line);

    for alert in &outcome.alerts {
        println!("{}  {}", clock.dimmed(), alert.red().bold());
    }
}

fn pick_sink(no_notify: bool) -> Box<dyn AlertSink> {
    if no_notify {
        return Box::new(LogNotifier);
    }
    match DesktopNotifier::detect() {
        Some(notifier) => Box::new(notifier),
        None => {
            info!("notify-send not found; alerts will go to the log");
            Box::new(LogNotifier)
        }
    }
}

/// Sleep in short slices so Ctrl-C is honored promptly.
fn sleep_interruptibly(seconds: u64, running: &AtomicBool) {
    let deadline = Duration::from_secs(seconds);
    let mut slept = Duration::ZERO;
    while slept < deadline && running.load(Ordering::SeqCst) {
        let step = Duration::from_millis(250).min(deadline - slept);
        thread::sleep(step);
        slept += step;
    }
}
