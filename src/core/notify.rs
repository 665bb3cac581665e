//! Alert delivery sinks.

use std::path::PathBuf;
use std::process::Command;

use log::warn;
use which::which;

use crate::error::{CgmonError, Result};

/// Anything that can deliver one alert string to the user. Delivery is
/// fire-and-forget: callers log failures and move on.
pub trait AlertSink {
    fn deliver(&self, alert: &str) -> Result<()>;
}

/// Desktop notifications through notify-send.
pub struct DesktopNotifier {
    program: PathBuf,
}

impl DesktopNotifier {
    /// Returns None when notify-send is not on PATH.
    pub fn detect() -> Option<Self> {
        which("notify-send").ok().map(|program| Self { program })
    }
}

impl AlertSink for DesktopNotifier {
    fn deliver(&self, alert: &str) -> Result<()> {
        let status = Command::new(&self.program)
            .arg("-u")
            .arg("critical")
            .arg("CGM")
            .arg(alert)
            .status()?;
        if !status.success() {
            return Err(CgmonError::notification(format!(
                "notify-send exited with {}",
                status
            )));
        }
        Ok(())
    }
}

/// Fallback sink that writes alerts to the log.
pub struct LogNotifier;

impl AlertSink for LogNotifier {
    fn deliver(&self, alert: &str) -> Result<()> {
        warn!("{}", alert);
        Ok(())
    }
}
