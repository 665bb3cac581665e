use std::process::Command;

use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use super::common::resolve_url;
use crate::core::Config;

/// Open the Nightscout site in the default browser.
pub fn execute(matches: &ArgMatches) -> Result<()> {
    let config = Config::load()?;
    let url = resolve_url(matches, &config)?;

    println!("{} {}", "Opening".white(), url.cyan());
    open_in_browser(&url)
}

#[cfg(target_os = "windows")]
fn open_in_browser(url: &str) -> Result<()> {
    let status = Command::new("cmd")
        .args(["/C", "start", "", url])
        .status()
        .context("Failed to launch browser")?;
    ensure_success(status)
}

#[cfg(target_os = "macos")]
fn open_in_browser(url: &str) -> Result<()> {
    let status = Command::new("open")
        .arg(url)
        .status()
        .context("Failed to launch browser")?;
    ensure_success(status)
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_in_browser(url: &str) -> Result<()> {
    let status = Command::new("xdg-open")
        .arg(url)
        .status()
        .context("Failed to launch browser")?;
    ensure_success(status)
}

fn ensure_success(status: std::process::ExitStatus) -> Result<()> {
    if !status.success() {
        return Err(anyhow!("Browser launcher exited with {}", status));
    }
    Ok(())
}
