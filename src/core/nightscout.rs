//! Nightscout entries endpoint client.

use log::debug;
use url::Url;

use crate::core::monitor::Sample;
use crate::error::{CgmonError, Result};

/// Divisor converting an mg/dL integer reading to mmol/L.
pub const MGDL_PER_MMOL: f64 = 18.018018018;

/// One raw record from the entries endpoint, before unit conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub timestamp_ms: i64,
    pub sgv_mgdl: i64,
    pub direction: String,
}

impl Entry {
    pub fn to_sample(&self) -> Sample {
        Sample::new(self.timestamp_ms, self.sgv_mgdl as f64 / MGDL_PER_MMOL)
    }
}

pub struct NightscoutClient {
    base: Url,
    client: reqwest::blocking::Client,
}

impl NightscoutClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| {
            CgmonError::config(format!("Invalid Nightscout URL '{}': {}", base_url, e))
        })?;
        Ok(Self {
            base,
            client: reqwest::blocking::Client::new(),
        })
    }

    /// Fetch the most recent entry. Every failure here is recoverable:
    /// the poll loop logs it and skips the tick, keeping prior state.
    pub fn latest_entry(&self) -> Result<Entry> {
        let url = format!(
            "{}/api/v1/entries?count=1",
            self.base.as_str().trim_end_matches('/')
        );
        debug!("GET {}", url);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", "cgmon")
            .send()?;
        if !response.status().is_success() {
            return Err(CgmonError::fetch(format!(
                "Nightscout returned status {}",
                response.status()
            )));
        }
        let body = response.text()?;
        parse_entry(&body)
    }
}

/// Parse one tab-separated entries line: field 1 is the timestamp in
/// milliseconds, field 2 the glucose value in mg/dL, field 3 the quoted
/// direction symbol.
pub fn parse_entry(body: &str) -> Result<Entry> {
    let line = body.lines().next().unwrap_or("");
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 4 {
        return Err(CgmonError::entry(format!(
            "expected at least 4 tab-separated fields, got {}",
            fields.len()
        )));
    }
    let timestamp_ms = fields[1]
        .trim()
        .parse::<i64>()
        .map_err(|e| CgmonError::entry(format!("bad timestamp '{}': {}", fields[1], e)))?;
    let sgv_mgdl = fields[2]
        .trim()
        .parse::<i64>()
        .map_err(|e| CgmonError::entry(format!("bad glucose value '{}': {}", fields[2], e)))?;
    let direction = fields[3].trim().trim_matches('"').to_string();
    Ok(Entry {
        timestamp_ms,
        sgv_mgdl,
        direction,
    })
}
