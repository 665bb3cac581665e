pub const DEFAULT_URGENT_HIGH: f64 = 15.0;
pub const DEFAULT_HIGH: f64 = 8.0;
pub const DEFAULT_LOW: f64 = 4.0;

/// Configured glucose bands in mmol/L.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPolicy {
    pub urgent_high: f64,
    pub high: f64,
    pub low: f64,
}

/// Where a reading sits relative to the configured bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Low,
    High,
    UrgentHigh,
    InRange,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self {
            urgent_high: DEFAULT_URGENT_HIGH,
            high: DEFAULT_HIGH,
            low: DEFAULT_LOW,
        }
    }
}

impl ThresholdPolicy {
    pub fn new(urgent_high: f64, high: f64, low: f64) -> Self {
        Self {
            urgent_high,
            high,
            low,
        }
    }

    /// Classify a reading. Low wins over the high bands when the
    /// configured bounds overlap.
    pub fn classify(&self, value: f64) -> Classification {
        if value < self.low {
            Classification::Low
        } else if value >= self.urgent_high {
            Classification::UrgentHigh
        } else if value >= self.high {
            Classification::High
        } else {
            Classification::InRange
        }
    }

    /// Bounds are expected to satisfy low < high <= urgent_high.
    pub fn is_consistent(&self) -> bool {
        self.low < self.high && self.high <= self.urgent_high
    }
}
