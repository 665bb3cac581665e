use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::monitor::AlertCategory;
use crate::core::Settings;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let settings = Settings::open_default()?;
    match matches.subcommand() {
        Some(("enable", sub_matches)) => set_toggle(&settings, sub_matches, true),
        Some(("disable", sub_matches)) => set_toggle(&settings, sub_matches, false),
        _ => list(&settings),
    }
}

fn set_toggle(settings: &Settings, matches: &ArgMatches, enabled: bool) -> Result<()> {
    let name = matches
        .get_one::<String>("alert")
        .context("Alert name is required")?;
    let category = AlertCategory::from_slug(name).ok_or_else(|| {
        anyhow!(
            "Unknown alert '{}'. Valid alerts: {}",
            name,
            AlertCategory::ALL
                .iter()
                .map(|c| c.slug())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    settings.set_alert_enabled(category, enabled)?;

    let state = if enabled { "enabled" } else { "disabled" };
    println!(
        "{}",
        format!("✓ {} alerts {}", category.display_name(), state).green()
    );
    Ok(())
}

fn list(settings: &Settings) -> Result<()> {
    println!("{}", "Alerts:".white().bold());
    for category in AlertCategory::ALL {
        let state = if settings.alert_enabled(category)? {
            "enabled".green()
        } else {
            "disabled".yellow()
        };
        println!(
            "  {:<14} {:<14} {}",
            category.slug(),
            category.display_name(),
            state
        );
    }
    println!();
    println!("{}", "Toggle with:".white());
    println!("  {}", "cgmon alerts enable <ALERT>".cyan().bold());
    println!("  {}", "cgmon alerts disable <ALERT>".cyan().bold());
    Ok(())
}
