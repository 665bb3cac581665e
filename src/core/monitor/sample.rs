/// One timestamped glucose reading, already converted to mmol/L.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample {
    pub timestamp_ms: i64, // Unix timestamp in milliseconds
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp_ms: i64, value: f64) -> Self {
        Self {
            timestamp_ms,
            value,
        }
    }
}
