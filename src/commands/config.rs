use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use url::Url;

use crate::core::{Config, Settings};

/// Threshold selector for DRY set logic
enum Threshold {
    Low,
    High,
    UrgentHigh,
}

impl Threshold {
    fn name(&self) -> &'static str {
        match self {
            Threshold::Low => "low",
            Threshold::High => "high",
            Threshold::UrgentHigh => "urgent-high",
        }
    }

    fn set(&self, config: &mut Config, value: f64) {
        match self {
            Threshold::Low => config.low = value,
            Threshold::High => config.high = value,
            Threshold::UrgentHigh => config.urgent_high = value,
        }
    }
}

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("set", sub_matches)) => handle_set(sub_matches),
        _ => show(),
    }
}

fn handle_set(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("url", sub_matches)) => set_url(sub_matches),
        Some(("low", sub_matches)) => set_threshold(sub_matches, Threshold::Low),
        Some(("high", sub_matches)) => set_threshold(sub_matches, Threshold::High),
        Some(("urgent-high", sub_matches)) => set_threshold(sub_matches, Threshold::UrgentHigh),
        Some(("show-value", sub_matches)) => set_show_value(sub_matches),
        _ => {
            println!("Use 'cgmon config set --help' for more information.");
            Ok(())
        }
    }
}

fn set_url(matches: &ArgMatches) -> Result<()> {
    let url = matches
        .get_one::<String>("value")
        .context("URL argument is required")?;

    Url::parse(url).map_err(|e| anyhow!("Invalid URL '{}': {}", url, e))?;

    let mut config = Config::load()?;
    config.set_url(url.clone());
    config.save()?;

    println!("{} {}", "✓ Nightscout URL set to:".green(), url.cyan());
    Ok(())
}

/// Shared logic for setting one of the three threshold bounds
fn set_threshold(matches: &ArgMatches, threshold: Threshold) -> Result<()> {
    let value = matches
        .get_one::<f64>("value")
        .copied()
        .context("Value argument is required")?;

    if !value.is_finite() || value <= 0.0 {
        return Err(anyhow!(
            "Threshold must be a positive number, got {}",
            value
        ));
    }

    let mut config = Config::load()?;
    threshold.set(&mut config, value);
    config.save()?;

    println!(
        "{}",
        format!(
            "✓ {} threshold set to {:.1} mmol/L",
            threshold.name(),
            value
        )
        .green()
    );

    let policy = config.threshold_policy();
    if !policy.is_consistent() {
        println!(
            "{}",
            format!(
                "⚠️  Bounds look inconsistent (low {} high {} urgent-high {})",
                policy.low, policy.high, policy.urgent_high
            )
            .yellow()
        );
    }
    Ok(())
}

fn set_show_value(matches: &ArgMatches) -> Result<()> {
    let value = matches
        .get_one::<String>("value")
        .context("Value argument is required")?;

    let enabled = match value.to_lowercase().as_str() {
        "on" | "true" | "yes" => true,
        "off" | "false" | "no" => false,
        other => return Err(anyhow!("Expected on or off, got '{}'", other)),
    };

    let settings = Settings::open_default()?;
    settings.set_show_value(enabled)?;

    let state = if enabled { "shown" } else { "hidden" };
    println!(
        "{}",
        format!("✓ Reading value will be {} in watch output", state).green()
    );
    Ok(())
}

fn show() -> Result<()> {
    let config = Config::load()?;
    let config_path = Config::get_config_path()?;

    println!("{}", "Configuration:".white().bold());
    println!("  {}", config_path.display().to_string().dimmed());
    match &config.url {
        Some(url) => println!("  {:<13} {}", "url", url.cyan().bold()),
        None => println!("  {:<13} {}", "url", "(not set)".yellow()),
    }
    println!("  {:<13} {:.1} mmol/L", "low", config.low);
    println!("  {:<13} {:.1} mmol/L", "high", config.high);
    println!("  {:<13} {:.1} mmol/L", "urgent-high", config.urgent_high);

    let settings = Settings::open_default()?;
    let show_value = if settings.show_value()? { "on" } else { "off" };
    println!("  {:<13} {}", "show-value", show_value);

    if config.url.is_none() {
        println!();
        println!("{}", "To set the Nightscout URL, run:".white());
        println!("  {}", "cgmon config set url <URL>".cyan().bold());
        println!();
        println!("{}", "Example:".dimmed());
        println!(
            "  {}",
            "cgmon config set url https://mysite.example.com".dimmed()
        );
    }
    Ok(())
}
