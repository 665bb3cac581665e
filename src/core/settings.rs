//! Persisted user settings: the five alert toggles and the show-value
//! display flag.
//!
//! A single-table SQLite key-value store. Absent keys read as their
//! defaults (everything enabled), so a fresh database needs no seeding.

use std::fs;
use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::core::monitor::{AlertCategory, AlertToggles};
use crate::error::{CgmonError, Result};

const SHOW_VALUE_KEY: &str = "show-value";

pub struct Settings {
    conn: Connection,
}

impl Settings {
    /// Open (creating if needed) the settings database under the user
    /// config directory.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| CgmonError::config("Could not determine config directory"))?
            .join("cgmon");
        fs::create_dir_all(&dir)?;
        Self::open(dir.join("settings.db"))
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS settings (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )?;
        Ok(Self { conn })
    }

    pub fn alert_enabled(&self, category: AlertCategory) -> Result<bool> {
        self.get_bool(&alert_key(category), true)
    }

    pub fn set_alert_enabled(&self, category: AlertCategory, enabled: bool) -> Result<()> {
        self.set(&alert_key(category), bool_str(enabled))
    }

    /// Snapshot of all five toggles, taken once per ingest.
    pub fn alert_toggles(&self) -> Result<AlertToggles> {
        let mut toggles = AlertToggles::default();
        for category in AlertCategory::ALL {
            toggles.set(category, self.alert_enabled(category)?);
        }
        Ok(toggles)
    }

    pub fn show_value(&self) -> Result<bool> {
        self.get_bool(SHOW_VALUE_KEY, true)
    }

    pub fn set_show_value(&self, enabled: bool) -> Result<()> {
        self.set(SHOW_VALUE_KEY, bool_str(enabled))
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self.get(key)?.map(|v| v == "true").unwrap_or(default))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO settings (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

fn alert_key(category: AlertCategory) -> String {
    format!("alert.{}", category.slug())
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
