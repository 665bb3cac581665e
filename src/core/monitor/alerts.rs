//! The closed set of user-facing alert categories and their toggles.

/// The five toggleable alert categories. The direction-failure alert is
/// deliberately not one of them: it cannot be switched off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertCategory {
    PredictedLow,
    Low,
    FallingFast,
    UrgentHigh,
    RisingFast,
}

impl AlertCategory {
    pub const ALL: [AlertCategory; 5] = [
        AlertCategory::PredictedLow,
        AlertCategory::Low,
        AlertCategory::FallingFast,
        AlertCategory::UrgentHigh,
        AlertCategory::RisingFast,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            AlertCategory::PredictedLow => "Predicted low",
            AlertCategory::Low => "Low",
            AlertCategory::FallingFast => "Falling fast",
            AlertCategory::UrgentHigh => "Urgent high",
            AlertCategory::RisingFast => "Rising fast",
        }
    }

    /// Stable identifier used on the CLI and as the settings key suffix.
    pub fn slug(&self) -> &'static str {
        match self {
            AlertCategory::PredictedLow => "predicted-low",
            AlertCategory::Low => "low",
            AlertCategory::FallingFast => "falling-fast",
            AlertCategory::UrgentHigh => "urgent-high",
            AlertCategory::RisingFast => "rising-fast",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        AlertCategory::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Snapshot of the per-category enable flags. The watch loop re-reads
/// this from the settings store on every tick, so changes apply to the
/// next ingest without a restart.
#[derive(Debug, Clone, Copy)]
pub struct AlertToggles {
    pub predicted_low: bool,
    pub low: bool,
    pub falling_fast: bool,
    pub urgent_high: bool,
    pub rising_fast: bool,
}

impl Default for AlertToggles {
    fn default() -> Self {
        Self {
            predicted_low: true,
            low: true,
            falling_fast: true,
            urgent_high: true,
            rising_fast: true,
        }
    }
}

impl AlertToggles {
    pub fn enabled(&self, category: AlertCategory) -> bool {
        match category {
            AlertCategory::PredictedLow => self.predicted_low,
            AlertCategory::Low => self.low,
            AlertCategory::FallingFast => self.falling_fast,
            AlertCategory::UrgentHigh => self.urgent_high,
            AlertCategory::RisingFast => self.rising_fast,
        }
    }

    pub fn set(&mut self, category: AlertCategory, enabled: bool) {
        match category {
            AlertCategory::PredictedLow => self.predicted_low = enabled,
            AlertCategory::Low => self.low = enabled,
            AlertCategory::FallingFast => self.falling_fast = enabled,
            AlertCategory::UrgentHigh => self.urgent_high = enabled,
            AlertCategory::RisingFast => self.rising_fast = enabled,
        }
    }
}
