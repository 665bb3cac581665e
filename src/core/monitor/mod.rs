//! Blood glucose monitoring core.
//!
//! Ingests timestamped readings one at a time, derives trend and
//! threshold state, projects threshold crossings, and decides which
//! alerts fire. Everything here is pure computation plus the engine's
//! own latch state; fetching, persistence, and delivery live elsewhere.

pub mod alerts;
mod engine;
mod projection;
mod sample;
mod thresholds;
mod trend;

// Re-export main types
pub use alerts::{AlertCategory, AlertToggles};
pub use engine::{format_reading, IconCategory, IngestOutcome, ReadingEngine};
pub use projection::{in_range_crossing, low_crossing};
pub use sample::Sample;
pub use thresholds::{
    Classification, ThresholdPolicy, DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_URGENT_HIGH,
};
pub use trend::Trend;
